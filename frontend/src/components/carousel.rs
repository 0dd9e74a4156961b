use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct Slide {
    pub title: &'static str,
    pub body: &'static str,
    pub image: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub slides: Vec<Slide>,
    pub active: usize,
    /// Whether the section currently owns the viewport.
    pub pinned: bool,
}

/// A pinned carousel covers the viewport above the page sections and below
/// the navigation chrome.
const CAROUSEL_CSS: &str = r#"
    .carousel {
        position: relative;
        width: 100%;
        height: 100%;
        overflow: hidden;
    }
    .carousel.pinned {
        position: fixed;
        inset: 0;
        height: 100vh;
        z-index: 10;
        background: #10160f;
    }
    .carousel-slide {
        position: absolute;
        inset: 0;
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 4rem;
        padding: 0 8vw;
        opacity: 0;
        transform: translateY(40px);
        transition: opacity 0.6s ease, transform 0.6s ease;
        pointer-events: none;
    }
    .carousel-slide.active {
        opacity: 1;
        transform: translateY(0);
        pointer-events: auto;
    }
    .carousel-slide.before {
        transform: translateY(-40px);
    }
    .carousel-slide img {
        width: min(420px, 40vw);
        height: auto;
    }
    .carousel-progress {
        position: absolute;
        bottom: 2.5rem;
        left: 50%;
        transform: translateX(-50%);
        display: flex;
        gap: 8px;
    }
    .carousel-progress span {
        width: 32px;
        height: 3px;
        background: rgba(255, 255, 255, 0.25);
        transition: background 0.4s ease;
    }
    .carousel-progress span.done {
        background: #8BC34A;
    }
    @media (max-width: 768px) {
        .carousel-slide {
            flex-direction: column;
            gap: 1.5rem;
            text-align: center;
        }
        .carousel-slide img { width: 70vw; }
    }
"#;

fn carousel_classes(pinned: bool) -> Classes {
    classes!("carousel", pinned.then(|| "pinned"))
}

#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let count = props.slides.len();

    html! {
        <div class={carousel_classes(props.pinned)}>
            <style>{CAROUSEL_CSS}</style>
            { for props.slides.iter().enumerate().map(|(index, slide)| {
                let position = if index == props.active {
                    "active"
                } else if index < props.active {
                    "before"
                } else {
                    "after"
                };
                html! {
                    <div class={classes!("carousel-slide", position)} aria-hidden={(index != props.active).to_string()}>
                        <img src={slide.image} alt={slide.title} />
                        <div class="carousel-text">
                            <span class="carousel-count">{format!("{:02} / {:02}", index + 1, count)}</span>
                            <h3>{slide.title}</h3>
                            <p>{slide.body}</p>
                        </div>
                    </div>
                }
            }) }
            <div class="carousel-progress">
                { for (0..count).map(|index| html! {
                    <span class={classes!((index <= props.active).then(|| "done"))}></span>
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_state_toggles_the_overlay_class() {
        assert!(carousel_classes(true).contains("pinned"));
        assert!(!carousel_classes(false).contains("pinned"));
        assert!(carousel_classes(false).contains("carousel"));
    }

    #[test]
    fn pinned_carousel_is_a_fixed_full_viewport_overlay() {
        let rule_start = CAROUSEL_CSS.find(".carousel.pinned {").expect("pinned rule");
        let rule = &CAROUSEL_CSS[rule_start..];
        let rule = &rule[..rule.find('}').expect("rule closes")];
        assert!(rule.contains("position: fixed;"));
        assert!(rule.contains("inset: 0;"));
        assert!(rule.contains("z-index: 10;"));
    }
}
