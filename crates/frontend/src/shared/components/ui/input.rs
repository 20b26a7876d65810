use leptos::html;
use leptos::prelude::*;

/// Text input bound to a signal, with focus tracking hooks
#[component]
pub fn Input(
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// Highlighted focus style
    #[prop(into)]
    focused: Signal<bool>,
    #[prop(optional)]
    on_focus: Option<Callback<()>>,
    #[prop(optional)]
    on_blur: Option<Callback<()>>,
    /// Reference to the underlying element (for programmatic focus)
    #[prop(optional)]
    node_ref: Option<NodeRef<html::Input>>,
) -> impl IntoView {
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let focus_class = move || if focused.get() { "form__input--focused" } else { "" };
    let node_ref = node_ref.unwrap_or_else(NodeRef::new);

    view! {
        <input
            node_ref=node_ref
            class=move || format!("form__input {}", focus_class())
            type="text"
            prop:value=move || value.get()
            placeholder=input_placeholder
            required=required
            on:input=move |ev| {
                if let Some(handler) = on_input {
                    handler.run(event_target_value(&ev));
                }
            }
            on:focus=move |_| {
                if let Some(handler) = on_focus {
                    handler.run(());
                }
            }
            on:blur=move |_| {
                if let Some(handler) = on_blur {
                    handler.run(());
                }
            }
        />
    }
}
