use crate::domain::a001_parameter::ui::editor::ParamEditor;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="app-container">
            <h1 class="heading">"Parameter Editor"</h1>
            <ParamEditor />
        </div>
    }
}
