use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::asset_gate::AssetGate;
use crate::components::carousel::{Carousel, Slide};
use crate::components::contact_modal::ContactModal;
use crate::components::intro_overlay::IntroOverlay;
use crate::components::nav_dots::NavDots;
use crate::config::NavigatorConfig;
use crate::forms::flow::FormKind;
use crate::hooks::section_navigator::use_section_navigator;
use crate::pages::site_css::SITE_CSS;
use crate::scroll::sections::{Section, SectionKind, SectionTable};
use crate::Route;

const SECTIONS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("problem", "The problem"),
    ("how", "How it works"),
    ("work", "Our work"),
    ("impact", "Impact"),
    ("contact", "Contact"),
];

const ANIMATIONS: &[&str] = &["/assets/animations/scale.json", "/assets/animations/leaf.json"];

fn index_of(id: &str) -> usize {
    SECTIONS.iter().position(|(s, _)| *s == id).unwrap_or(0)
}

fn home_sections() -> Vec<Section> {
    let ids: Vec<&str> = SECTIONS.iter().map(|(id, _)| *id).collect();
    SectionTable::new()
        .kind("how", SectionKind::Carousel { steps: how_slides().len() })
        .snap_on_touch("home")
        .snap_on_touch("how")
        .internal_scroll("contact")
        .build(&ids)
}

fn how_slides() -> Vec<Slide> {
    vec![
        Slide {
            title: "Weigh",
            body: "A smart scale next to the bin weighs every tray of food that gets thrown out.",
            image: "/assets/how/weigh.png",
        },
        Slide {
            title: "Log",
            body: "Staff tap what it was and why it went to waste. It takes three seconds.",
            image: "/assets/how/log.png",
        },
        Slide {
            title: "Analyze",
            body: "The dashboard turns every entry into cost, CO₂ and trends per dish and shift.",
            image: "/assets/how/analyze.png",
        },
        Slide {
            title: "Act",
            body: "Weekly suggestions adjust prep quantities before the waste ever happens.",
            image: "/assets/how/act.png",
        },
    ]
}

#[function_component(Home)]
pub fn home() -> Html {
    let config = use_context::<Rc<NavigatorConfig>>().unwrap_or_default();
    let nav = use_section_navigator(home_sections, config.clone());
    let modal = use_state(|| None::<FormKind>);
    let intro_done = use_state(|| false);

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let open = |kind: FormKind| {
        let modal = modal.clone();
        Callback::from(move |_: MouseEvent| modal.set(Some(kind)))
    };
    let close_modal = {
        let modal = modal.clone();
        Callback::from(move |_: ()| modal.set(None))
    };
    let finish_intro = {
        let intro_done = intro_done.clone();
        Callback::from(move |_: ()| intro_done.set(true))
    };

    let how_index = index_of("how");
    let section_class = |id: &str| classes!("page-section", (index_of(id) == nav.snapshot.active).then(|| "in-view"));

    html! {
        <AssetGate paths={ANIMATIONS.to_vec()}>
            <style>{SITE_CSS}</style>
            if !*intro_done {
                <IntroOverlay duration_ms={config.intro_duration_ms} on_done={finish_intro} />
            }
            <NavDots
                labels={SECTIONS.iter().map(|(_, label)| *label).collect::<Vec<_>>()}
                active={nav.snapshot.active}
                on_select={nav.navigate.clone()}
            />
            <main class="site">
                <section id="home" class={section_class("home")}>
                    <div class="hero-background"></div>
                    <div class="hero-content">
                        <h1>{"Stop paying for food you throw away"}</h1>
                        <p>{"WasteWise measures kitchen waste where it happens and tells you what to cook less of."}</p>
                        <button class="hero-cta" onclick={open(FormKind::Restaurant)}>{"Book a demo"}</button>
                    </div>
                    <div class="scroll-hint">{"Scroll"}</div>
                </section>

                <section id="problem" class={section_class("problem")}>
                    <div class="section-inner">
                        <h2>{"A third of all food is never eaten"}</h2>
                        <div class="stat-grid">
                            <div class="stat"><span class="stat-value">{"4–10%"}</span><span>{"of purchased food leaves a restaurant as waste"}</span></div>
                            <div class="stat"><span class="stat-value">{"€1 in 20"}</span><span>{"of food cost ends up in the bin"}</span></div>
                            <div class="stat"><span class="stat-value">{"8%"}</span><span>{"of global emissions come from wasted food"}</span></div>
                        </div>
                    </div>
                </section>

                <section id="how" class={section_class("how")}>
                    <Carousel
                        slides={how_slides()}
                        active={nav.snapshot.step_of(how_index)}
                        pinned={nav.snapshot.is_pinned(how_index)}
                    />
                </section>

                <section id="work" class={section_class("work")}>
                    <div class="section-inner">
                        <h2>{"Kitchens already on board"}</h2>
                        <div class="work-grid">
                            <div class="work-card"><h3>{"Hotel breakfasts"}</h3><p>{"Buffet waste down 38% in the first quarter."}</p></div>
                            <div class="work-card"><h3>{"School canteens"}</h3><p>{"Portioning tuned per weekday and menu."}</p></div>
                            <div class="work-card"><h3>{"Restaurant groups"}</h3><p>{"One dashboard across every location."}</p></div>
                        </div>
                    </div>
                </section>

                <section id="impact" class={section_class("impact")}>
                    <div class="section-inner">
                        <h2>{"What our customers saved last year"}</h2>
                        <div class="stat-grid">
                            <div class="stat"><span class="stat-value">{"412 t"}</span><span>{"of food kept out of the bin"}</span></div>
                            <div class="stat"><span class="stat-value">{"1 030 t"}</span><span>{"CO₂e avoided"}</span></div>
                            <div class="stat"><span class="stat-value">{"€1.6M"}</span><span>{"in food costs"}</span></div>
                        </div>
                    </div>
                </section>

                <section id="contact" class={classes!("page-section", "page-section--free")}>
                    <div class="section-inner">
                        <h2>{"Let's talk"}</h2>
                        <p>{"Questions, partnerships or press, we read everything."}</p>
                        <div class="contact-buttons">
                            <button class="hero-cta" onclick={open(FormKind::Restaurant)}>{"Book a demo"}</button>
                            <button class="ghost-cta" onclick={open(FormKind::Contact)}>{"Send a message"}</button>
                        </div>
                        <footer class="site-footer">
                            <span>{"© WasteWise"}</span>
                            <Link<Route> to={Route::Company}>{"Company"}</Link<Route>>
                        </footer>
                    </div>
                </section>
            </main>
            if let Some(kind) = *modal {
                <ContactModal {kind} on_close={close_modal} />
            }
        </AssetGate>
    }
}
