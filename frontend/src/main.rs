use std::rc::Rc;

use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod scroll {
    pub mod clock;
    pub mod gesture;
    pub mod locator;
    pub mod navigator;
    pub mod scroll_lock;
    pub mod sections;
    pub mod transition_lock;
}
mod hooks {
    pub mod scroll_lock;
    pub mod section_navigator;
    pub mod timer_slot;
}
mod forms {
    pub mod flow;
    pub mod submit;
    pub mod validation;
}
mod components {
    pub mod asset_gate;
    pub mod carousel;
    pub mod contact_modal;
    pub mod intro_overlay;
    pub mod nav_dots;
}
mod pages {
    pub mod company;
    pub mod home;
    pub mod site_css;
}

use config::{load_navigator_config, NavigatorConfig};
use hooks::scroll_lock::ScrollLockContext;
use pages::{company::Company, home::Home};
use scroll::scroll_lock::ScrollLock;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/company")]
    Company,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering restaurant site");
            html! { <Home /> }
        },
        Route::Company => {
            info!("Rendering company site");
            html! { <Company /> }
        },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = {
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    let scroll_y = window.as_ref().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
                    is_scrolled.set(scroll_y > 80.0);
                }) as Box<dyn FnMut()>)
            };

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = &window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        transition: background 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(16, 22, 15, 0.85);
                        backdrop-filter: blur(10px);
                    }
                    .nav-content {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 1rem 2rem;
                    }
                    .nav-logo {
                        color: #8BC34A;
                        font-weight: 700;
                        font-size: 1.3rem;
                        text-decoration: none;
                    }
                    .nav-right {
                        display: flex;
                        gap: 1.5rem;
                    }
                    .nav-link {
                        color: #fff;
                        text-decoration: none;
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        flex-direction: column;
                        gap: 4px;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        width: 22px;
                        height: 2px;
                        background: #fff;
                    }
                    @media (max-width: 768px) {
                        .burger-menu { display: flex; }
                        .nav-right { display: none; }
                        .nav-right.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            position: absolute;
                            top: 100%;
                            right: 1rem;
                            background: #10160f;
                            padding: 1rem 1.5rem;
                            border-radius: 12px;
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"wastewise"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Home} classes="nav-link">
                            {"For restaurants"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Company} classes="nav-link">
                            {"Company"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let scroll_lock = use_memo(|_| ScrollLockContext(Rc::new(ScrollLock::browser())), ());
    let config = use_memo(|_| load_navigator_config(), ());

    html! {
        <ContextProvider<ScrollLockContext> context={(*scroll_lock).clone()}>
            <ContextProvider<Rc<NavigatorConfig>> context={config}>
                <BrowserRouter>
                    <Nav />
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ContextProvider<Rc<NavigatorConfig>>>
        </ContextProvider<ScrollLockContext>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { Level::Debug } else { Level::Info };
    if console_log::init_with_level(level).is_err() {
        gloo_console::warn!("logger already initialized");
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
