use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, KeyboardEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::forms::flow::{FieldSpec, FlowStatus, FormFlow, FormKind, InputKind};
use crate::forms::submit::submit;
use crate::hooks::scroll_lock::use_scroll_lock;

#[derive(Properties, PartialEq)]
pub struct ContactModalProps {
    pub kind: FormKind,
    pub on_close: Callback<()>,
}

fn input_type(input: InputKind) -> &'static str {
    match input {
        InputKind::Email => "email",
        InputKind::Phone => "tel",
        InputKind::Url => "url",
        InputKind::Count => "number",
        InputKind::Text | InputKind::TextArea => "text",
    }
}

#[function_component(ContactModal)]
pub fn contact_modal(props: &ContactModalProps) -> Html {
    let flow = use_state(|| FormFlow::new(props.kind));

    use_scroll_lock(true);

    {
        let on_close = props.on_close.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                on_close.emit(());
            }
        });
    }

    let set_field = {
        let flow = flow.clone();
        Callback::from(move |(key, value): (&'static str, String)| {
            let mut next = (*flow).clone();
            next.set(key, value);
            flow.set(next);
        })
    };

    let on_back = {
        let flow = flow.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let mut next = (*flow).clone();
            if next.back() {
                flow.set(next);
            }
        })
    };

    let on_submit = {
        let flow = flow.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*flow).clone();
            if !next.is_last_step() {
                next.next();
                flow.set(next);
                return;
            }
            let Some(request) = next.request() else {
                flow.set(next);
                return;
            };
            next.status = FlowStatus::Submitting;
            flow.set(next.clone());

            let flow = flow.clone();
            spawn_local(async move {
                let mut done = next;
                done.status = match submit(done.kind(), &request).await {
                    Ok(()) => FlowStatus::Submitted,
                    Err(e) => FlowStatus::Failed(e.to_string()),
                };
                flow.set(done);
            });
        })
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    let render_field = |spec: &FieldSpec| {
        let key = spec.key;
        let value = flow.value(key).to_string();
        let error = flow.error(key).map(|e| e.to_string());
        let disabled = flow.status == FlowStatus::Submitting;
        let control = if spec.input == InputKind::TextArea {
            let set_field = set_field.clone();
            let oninput = Callback::from(move |e: InputEvent| {
                let area: HtmlTextAreaElement = e.target_unchecked_into();
                set_field.emit((key, area.value()));
            });
            html! { <textarea id={key} rows="5" {value} {oninput} {disabled} /> }
        } else {
            let set_field = set_field.clone();
            let oninput = Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                set_field.emit((key, input.value()));
            });
            html! { <input id={key} type={input_type(spec.input)} {value} {oninput} {disabled} /> }
        };
        html! {
            <div class={classes!("form-field", error.is_some().then(|| "invalid"))}>
                <label for={key}>
                    {spec.label}
                    if !spec.required { <span class="optional">{" (optional)"}</span> }
                </label>
                {control}
                if let Some(message) = error {
                    <div class="field-error">{message}</div>
                }
            </div>
        }
    };

    let step = flow.current_step();
    let body = match &flow.status {
        FlowStatus::Submitted => html! {
            <div class="form-done">
                <h3>{"Thank you!"}</h3>
                <p>{"We got your message and will get back to you soon."}</p>
                <button class="form-button primary" onclick={close.clone()}>{"Close"}</button>
            </div>
        },
        status => html! {
            <form onsubmit={on_submit}>
                <div class="form-progress">
                    {format!("Step {} of {} · {}", flow.step_index() + 1, flow.step_count(), step.title)}
                </div>
                { for step.fields.iter().map(|spec| render_field(spec)) }
                if let FlowStatus::Failed(message) = status {
                    <div class="form-error">{message.clone()}</div>
                }
                <div class="form-buttons">
                    if flow.step_index() > 0 {
                        <button type="button" class="form-button" onclick={on_back} disabled={*status == FlowStatus::Submitting}>{"Back"}</button>
                    }
                    <button type="submit" class="form-button primary" disabled={*status == FlowStatus::Submitting}>
                        {
                            if *status == FlowStatus::Submitting {
                                "Sending..."
                            } else if flow.is_last_step() {
                                "Send"
                            } else {
                                "Next"
                            }
                        }
                    </button>
                </div>
            </form>
        },
    };

    html! {
        <div class="modal-overlay" onclick={close.clone()}>
            <style>
                {r#"
                    .modal-overlay {
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.7);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        z-index: 100;
                    }
                    .modal-content {
                        background: #1e2a1e;
                        border: 1px solid rgba(139, 195, 74, 0.2);
                        border-radius: 16px;
                        padding: 2.5rem;
                        width: min(520px, 92vw);
                        max-height: 90vh;
                        overflow-y: auto;
                        color: #fff;
                        position: relative;
                    }
                    .modal-close {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        background: none;
                        border: none;
                        color: #aaa;
                        font-size: 1.5rem;
                        cursor: pointer;
                    }
                    .form-progress {
                        color: #8BC34A;
                        font-size: 0.85rem;
                        margin-bottom: 1.5rem;
                    }
                    .form-field {
                        display: flex;
                        flex-direction: column;
                        gap: 6px;
                        margin-bottom: 1.2rem;
                    }
                    .form-field input, .form-field textarea {
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.15);
                        border-radius: 8px;
                        padding: 0.75rem;
                        color: #fff;
                        font-size: 1rem;
                    }
                    .form-field.invalid input, .form-field.invalid textarea {
                        border-color: #e57373;
                    }
                    .optional { color: #888; font-size: 0.85rem; }
                    .field-error, .form-error { color: #e57373; font-size: 0.85rem; }
                    .form-error { margin-bottom: 1rem; }
                    .form-buttons { display: flex; justify-content: flex-end; gap: 1rem; }
                    .form-button {
                        padding: 0.75rem 1.5rem;
                        border-radius: 8px;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        background: transparent;
                        color: #fff;
                        cursor: pointer;
                    }
                    .form-button.primary {
                        background: #8BC34A;
                        border-color: #8BC34A;
                        color: #10160f;
                    }
                    .form-button:disabled { opacity: 0.6; cursor: default; }
                "#}
            </style>
            <div class="modal-content" onclick={stop}>
                <button type="button" class="modal-close" aria-label="Close" onclick={close}>{"×"}</button>
                <h2>{props.kind.title()}</h2>
                {body}
            </div>
        </div>
    }
}
