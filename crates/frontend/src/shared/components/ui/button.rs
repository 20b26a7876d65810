use leptos::prelude::*;

/// Primary action button; hover styling lives in the stylesheet
#[component]
pub fn Button(
    /// Button type attribute: "button" (default) or "submit"
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button type=btn_type class="button button--primary">
            {children()}
        </button>
    }
}
