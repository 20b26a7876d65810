use crate::domain::a001_parameter::ui::editor::view_model::ParamEditorViewModel;
use contracts::domain::a001_parameter::{ParamId, Parameter};
use leptos::html;
use leptos::prelude::*;

#[component]
pub fn ParamList(vm: ParamEditorViewModel) -> impl IntoView {
    view! {
        <div class="param-list">
            <h2 class="param-list__title">"Параметры"</h2>
            <For
                each=move || vm.params()
                key=|param: &Parameter| param.id
                children=move |param: Parameter| view! {
                    <ParamRow vm=vm id=param.id name=param.name />
                }
            />
        </div>
    }
}

/// One list row. Display ↔ Editing: click on the value to edit, blur to go back.
#[component]
pub fn ParamRow(vm: ParamEditorViewModel, id: ParamId, name: String) -> impl IntoView {
    // Memo so that keystrokes don't rebuild the inline input
    let editing = Memo::new(move |_| vm.is_editing(id));
    let edit_ref = NodeRef::<html::Input>::new();

    Effect::new(move |_| {
        if let Some(input) = edit_ref.get() {
            let _ = input.focus();
        }
    });

    view! {
        <div class="param-list__item">
            <div class="param">
                <div class="param__row">
                    <span class="param__name">{name}</span>
                    {move || if editing.get() {
                        view! {
                            <input
                                node_ref=edit_ref
                                type="text"
                                class="form__input param__edit-input"
                                prop:value=move || vm.value_of(id)
                                on:input=move |ev| vm.update_value(id, event_target_value(&ev))
                                on:blur=move |_| vm.finish_editing()
                            />
                        }.into_any()
                    } else {
                        view! {
                            <span
                                class="param__value param__value--editable"
                                title="Click to edit"
                                on:click=move |_| vm.start_editing(id)
                            >
                                {move || vm.value_of(id)}
                                <span class="param__edit-icon">"✎"</span>
                            </span>
                        }.into_any()
                    }}
                </div>
                <span class="param__id">"ID: " {id.to_string()}</span>
            </div>
        </div>
    }
}

#[component]
pub fn EmptyState() -> impl IntoView {
    view! {
        <div class="param-list">
            <div class="param-list__empty">
                <p>"Параметров нет. Добавьте свой первый параметр выше."</p>
            </div>
        </div>
    }
}
