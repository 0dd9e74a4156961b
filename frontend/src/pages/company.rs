use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::carousel::{Carousel, Slide};
use crate::components::contact_modal::ContactModal;
use crate::components::nav_dots::NavDots;
use crate::config::NavigatorConfig;
use crate::forms::flow::FormKind;
use crate::hooks::section_navigator::use_section_navigator;
use crate::pages::site_css::SITE_CSS;
use crate::scroll::sections::{Section, SectionKind, SectionTable};
use crate::Route;

const SECTIONS: &[(&str, &str)] = &[
    ("hero", "WasteWise"),
    ("mission", "Mission"),
    ("milestones", "Milestones"),
    ("team", "Team"),
    ("join", "Join us"),
];

fn index_of(id: &str) -> usize {
    SECTIONS.iter().position(|(s, _)| *s == id).unwrap_or(0)
}

fn milestones() -> Vec<Slide> {
    vec![
        Slide {
            title: "2022 · First scale",
            body: "A prototype scale in one Helsinki lunch restaurant cut its waste by a quarter in six weeks.",
            image: "/assets/milestones/prototype.png",
        },
        Slide {
            title: "2023 · 100 kitchens",
            body: "Hotels, schools and restaurant groups across the Nordics measure their waste with us.",
            image: "/assets/milestones/kitchens.png",
        },
        Slide {
            title: "2024 · Forecasting",
            body: "Prep forecasts built on two years of waste data now prevent waste before it happens.",
            image: "/assets/milestones/forecast.png",
        },
    ]
}

fn company_sections() -> Vec<Section> {
    let ids: Vec<&str> = SECTIONS.iter().map(|(id, _)| *id).collect();
    SectionTable::new()
        .kind("milestones", SectionKind::Carousel { steps: milestones().len() })
        .snap_on_touch("hero")
        .snap_on_touch("milestones")
        .internal_scroll("join")
        .build(&ids)
}

#[function_component(Company)]
pub fn company() -> Html {
    let config = use_context::<Rc<NavigatorConfig>>().unwrap_or_default();
    let nav = use_section_navigator(company_sections, config);
    let modal = use_state(|| None::<FormKind>);

    let open = |kind: FormKind| {
        let modal = modal.clone();
        Callback::from(move |_: MouseEvent| modal.set(Some(kind)))
    };
    let close_modal = {
        let modal = modal.clone();
        Callback::from(move |_: ()| modal.set(None))
    };

    let milestones_index = index_of("milestones");
    let section_class = |id: &str| classes!("page-section", (index_of(id) == nav.snapshot.active).then(|| "in-view"));

    html! {
        <>
            <style>{SITE_CSS}</style>
            <NavDots
                labels={SECTIONS.iter().map(|(_, label)| *label).collect::<Vec<_>>()}
                active={nav.snapshot.active}
                on_select={nav.navigate.clone()}
            />
            <main class="site">
                <section id="hero" class={section_class("hero")}>
                    <div class="hero-background"></div>
                    <div class="hero-content">
                        <h1>{"Making every kitchen measure its waste"}</h1>
                        <p>{"We build the tools that turn food waste from a cost nobody sees into a number everyone acts on."}</p>
                    </div>
                    <div class="scroll-hint">{"Scroll"}</div>
                </section>

                <section id="mission" class={section_class("mission")}>
                    <div class="section-inner">
                        <h2>{"Our mission"}</h2>
                        <p>{"Food waste is a measurement problem. Kitchens that can see what they throw away waste less, so we make seeing it effortless."}</p>
                    </div>
                </section>

                <section id="milestones" class={section_class("milestones")}>
                    <Carousel
                        slides={milestones()}
                        active={nav.snapshot.step_of(milestones_index)}
                        pinned={nav.snapshot.is_pinned(milestones_index)}
                    />
                </section>

                <section id="team" class={section_class("team")}>
                    <div class="section-inner">
                        <h2>{"A small team with dirty hands"}</h2>
                        <div class="work-grid">
                            <div class="work-card"><h3>{"Chefs"}</h3><p>{"Former head chefs who lived the problem."}</p></div>
                            <div class="work-card"><h3>{"Engineers"}</h3><p>{"Hardware, firmware and the cloud behind it."}</p></div>
                            <div class="work-card"><h3>{"Data people"}</h3><p>{"Forecasts kitchens can actually trust."}</p></div>
                        </div>
                    </div>
                </section>

                <section id="join" class={classes!("page-section", "page-section--free")}>
                    <div class="section-inner">
                        <h2>{"Join us"}</h2>
                        <p>{"We are raising our next round and hiring engineers."}</p>
                        <div class="contact-buttons">
                            <button class="hero-cta" onclick={open(FormKind::Investor)}>{"Investor relations"}</button>
                            <button class="ghost-cta" onclick={open(FormKind::Engineer)}>{"Engineering roles"}</button>
                            <button class="ghost-cta" onclick={open(FormKind::Contact)}>{"Say hello"}</button>
                        </div>
                        <footer class="site-footer">
                            <span>{"© WasteWise"}</span>
                            <Link<Route> to={Route::Home}>{"For restaurants"}</Link<Route>>
                        </footer>
                    </div>
                </section>
            </main>
            if let Some(kind) = *modal {
                <ContactModal {kind} on_close={close_modal} />
            }
        </>
    }
}
