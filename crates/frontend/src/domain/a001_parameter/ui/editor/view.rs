use super::view_model::ParamEditorViewModel;
use crate::domain::a001_parameter::ui::form::ParamForm;
use crate::domain::a001_parameter::ui::list::{EmptyState, ParamList};
use contracts::domain::a001_parameter::{ParamModel, Parameter};
use leptos::prelude::*;

/// Parameter editor: add form on top, editable list (or empty placeholder) below.
///
/// `params` seeds the list; `on_change` receives a snapshot after every add and
/// after every finished inline edit.
#[component]
pub fn ParamEditor(
    /// Initial parameters
    #[prop(optional)]
    params: Vec<Parameter>,
    /// Called with the current model after each committed change
    #[prop(optional)]
    on_change: Option<Callback<ParamModel>>,
) -> impl IntoView {
    let vm = ParamEditorViewModel::new(params, on_change);
    log::debug!("ParamEditor инициализирован");

    view! {
        <div class="param-editor">
            <div class="param-editor__section">
                <ParamForm vm=vm />
            </div>

            <Show
                when=move || !vm.is_empty()
                fallback=|| view! { <EmptyState /> }
            >
                <ParamList vm=vm />
                <div class="param-editor__tip">
                    "Tip: Click on parameter values to edit them"
                </div>
            </Show>
        </div>
    }
}
