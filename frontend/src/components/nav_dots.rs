use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavDotsProps {
    pub labels: Vec<&'static str>,
    pub active: usize,
    pub on_select: Callback<usize>,
}

#[function_component(NavDots)]
pub fn nav_dots(props: &NavDotsProps) -> Html {
    html! {
        <nav class="nav-dots" aria-label="Sections">
            <style>
                {r#"
                    .nav-dots {
                        position: fixed;
                        right: 2rem;
                        top: 50%;
                        transform: translateY(-50%);
                        display: flex;
                        flex-direction: column;
                        gap: 14px;
                        z-index: 20;
                    }
                    .nav-dot {
                        width: 12px;
                        height: 12px;
                        border-radius: 50%;
                        border: 2px solid rgba(255, 255, 255, 0.6);
                        background: transparent;
                        padding: 0;
                        cursor: pointer;
                        transition: transform 0.3s ease, background 0.3s ease;
                    }
                    .nav-dot.active {
                        background: #8BC34A;
                        border-color: #8BC34A;
                        transform: scale(1.3);
                    }
                    @media (max-width: 768px) {
                        .nav-dots { display: none; }
                    }
                "#}
            </style>
            { for props.labels.iter().enumerate().map(|(index, label)| {
                let on_select = props.on_select.clone();
                let onclick = Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    on_select.emit(index);
                });
                html! {
                    <button
                        class={classes!("nav-dot", (index == props.active).then(|| "active"))}
                        title={*label}
                        aria-label={*label}
                        aria-current={(index == props.active).then(|| "true")}
                        {onclick}
                    />
                }
            }) }
        </nav>
    }
}
