use crate::domain::a001_parameter::ui::editor::state::FormField;
use crate::domain::a001_parameter::ui::editor::view_model::ParamEditorViewModel;
use crate::shared::components::ui::{Button, Input};
use leptos::prelude::*;

/// Add form: name, value and a submit button on one line
#[component]
pub fn ParamForm(vm: ParamEditorViewModel) -> impl IntoView {
    view! {
        <form
            class="param-form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                vm.submit();
            }
        >
            <Input
                value=vm.draft_name
                on_input=Callback::new(move |v: String| vm.draft_name.set(v))
                placeholder="Имя параметра"
                required=true
                node_ref=vm.name_ref
                focused=Signal::derive(move || vm.is_focused(FormField::Name))
                on_focus=Callback::new(move |_| vm.focus(FormField::Name))
                on_blur=Callback::new(move |_| vm.blur())
            />
            <Input
                value=vm.draft_value
                on_input=Callback::new(move |v: String| vm.draft_value.set(v))
                placeholder="Значение параметра"
                required=true
                focused=Signal::derive(move || vm.is_focused(FormField::Value))
                on_focus=Callback::new(move |_| vm.focus(FormField::Value))
                on_blur=Callback::new(move |_| vm.blur())
            />
            <Button button_type="submit">
                "Добавить"
            </Button>
        </form>
    }
}
