use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::hooks::scroll_lock::use_scroll_lock;

#[derive(Properties, PartialEq)]
pub struct IntroOverlayProps {
    pub duration_ms: u32,
    pub on_done: Callback<()>,
}

/// Full-screen intro that keeps the page from scrolling until it finishes.
#[function_component(IntroOverlay)]
pub fn intro_overlay(props: &IntroOverlayProps) -> Html {
    use_scroll_lock(true);

    {
        let on_done = props.on_done.clone();
        use_effect_with_deps(
            move |duration_ms| {
                let timeout = Timeout::new(*duration_ms, move || on_done.emit(()));
                // Unmounting early (skip button) cancels the pending timeout.
                move || drop(timeout)
            },
            props.duration_ms,
        );
    }

    let skip = {
        let on_done = props.on_done.clone();
        Callback::from(move |_: MouseEvent| on_done.emit(()))
    };

    html! {
        <div class="intro-overlay">
            <style>
                {format!(r#"
                    .intro-overlay {{
                        position: fixed;
                        inset: 0;
                        background: #10160f;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        z-index: 200;
                        animation: introFade {}ms ease-in-out forwards;
                    }}
                    .intro-mark {{
                        font-size: clamp(2.5rem, 8vw, 6rem);
                        font-weight: 700;
                        color: #8BC34A;
                        letter-spacing: -0.03em;
                    }}
                    .intro-skip {{
                        margin-top: 2rem;
                        background: none;
                        border: 1px solid rgba(255, 255, 255, 0.3);
                        border-radius: 20px;
                        padding: 0.4rem 1.2rem;
                        color: #ccc;
                        cursor: pointer;
                    }}
                    @keyframes introFade {{
                        0% {{ opacity: 1; }}
                        80% {{ opacity: 1; }}
                        100% {{ opacity: 0; }}
                    }}
                "#, props.duration_ms)}
            </style>
            <div class="intro-mark">{"wastewise"}</div>
            <button class="intro-skip" onclick={skip}>{"Skip"}</button>
        </div>
    }
}
