use super::state::{FormField, ParamEditorState};
use contracts::domain::a001_parameter::{NewParameter, ParamId, ParamModel, Parameter};
use leptos::html;
use leptos::prelude::*;

/// ViewModel for the parameter editor
#[derive(Clone, Copy)]
pub struct ParamEditorViewModel {
    pub state: RwSignal<ParamEditorState>,
    pub draft_name: RwSignal<String>,
    pub draft_value: RwSignal<String>,
    pub name_ref: NodeRef<html::Input>,
    on_change: Option<Callback<ParamModel>>,
}

impl ParamEditorViewModel {
    pub fn new(params: Vec<Parameter>, on_change: Option<Callback<ParamModel>>) -> Self {
        Self {
            state: RwSignal::new(ParamEditorState::new(params)),
            draft_name: RwSignal::new(String::new()),
            draft_value: RwSignal::new(String::new()),
            name_ref: NodeRef::new(),
            on_change,
        }
    }

    pub fn params(&self) -> Vec<Parameter> {
        self.state.with(|s| s.params.clone())
    }

    pub fn is_empty(&self) -> bool {
        self.state.with(|s| s.is_empty())
    }

    pub fn is_editing(&self, id: ParamId) -> bool {
        self.state.with(|s| s.is_editing(id))
    }

    pub fn is_focused(&self, field: FormField) -> bool {
        self.state.with(|s| s.is_focused(field))
    }

    pub fn value_of(&self, id: ParamId) -> String {
        self.state.with(|s| s.value_of(id).unwrap_or_default())
    }

    pub fn model(&self) -> ParamModel {
        self.state.with_untracked(|s| s.model())
    }

    /// Add-form submit: append the draft, clear both inputs and refocus the name field.
    /// Blank drafts are dropped without any feedback.
    pub fn submit(&self) {
        let draft = NewParameter::new(
            self.draft_name.get_untracked(),
            self.draft_value.get_untracked(),
        );
        let id = match self.state.try_update(|s| s.add(draft)) {
            Some(Ok(id)) => id,
            Some(Err(e)) => {
                log::trace!("Параметр не добавлен: {}", e);
                return;
            }
            None => return,
        };

        self.draft_name.set(String::new());
        self.draft_value.set(String::new());
        if let Some(input) = self.name_ref.get_untracked() {
            let _ = input.focus();
        }

        let model = self.model();
        log::debug!("Добавлен параметр {}. Текущие параметры: {}", id, model.to_json());
        self.notify(model);
    }

    pub fn start_editing(&self, id: ParamId) {
        self.state.update(|s| {
            s.start_editing(id);
        });
    }

    pub fn update_value(&self, id: ParamId, value: String) {
        self.state.update(|s| {
            s.update_value(id, value);
        });
    }

    pub fn finish_editing(&self) {
        self.state.update(|s| s.finish_editing());
        let model = self.model();
        log::debug!("Updated parameters: {}", model.to_json());
        self.notify(model);
    }

    pub fn focus(&self, field: FormField) {
        self.state.update(|s| s.focus(field));
    }

    pub fn blur(&self) {
        self.state.update(|s| s.blur());
    }

    fn notify(&self, model: ParamModel) {
        if let Some(handler) = self.on_change {
            handler.run(model);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recording_vm() -> (ParamEditorViewModel, Arc<Mutex<Vec<ParamModel>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let on_change = Callback::new(move |model: ParamModel| {
            sink.lock().unwrap().push(model);
        });
        (ParamEditorViewModel::new(Vec::new(), Some(on_change)), seen)
    }

    #[test]
    fn test_blank_submit_keeps_drafts() {
        let owner = Owner::new();
        owner.set();
        let (vm, seen) = recording_vm();

        vm.draft_name.set("  ".to_string());
        vm.draft_value.set("1".to_string());
        vm.submit();

        assert!(vm.state.get_untracked().params.is_empty());
        assert_eq!(vm.draft_name.get_untracked(), "  ");
        assert_eq!(vm.draft_value.get_untracked(), "1");
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_submit_then_edit_flow() {
        let owner = Owner::new();
        owner.set();
        let (vm, seen) = recording_vm();

        vm.draft_name.set("timeout".to_string());
        vm.draft_value.set("30".to_string());
        vm.submit();

        assert_eq!(
            vm.state.get_untracked().params,
            vec![Parameter::new(ParamId(1), "timeout", "30")]
        );
        assert_eq!(vm.draft_name.get_untracked(), "");
        assert_eq!(vm.draft_value.get_untracked(), "");
        assert_eq!(seen.lock().unwrap().len(), 1);

        vm.start_editing(ParamId(1));
        vm.update_value(ParamId(1), "6".to_string());
        assert_eq!(vm.state.with_untracked(|s| s.value_of(ParamId(1))).as_deref(), Some("6"));
        vm.update_value(ParamId(1), "60".to_string());
        assert_eq!(vm.state.with_untracked(|s| s.value_of(ParamId(1))).as_deref(), Some("60"));
        assert_eq!(seen.lock().unwrap().len(), 1);

        vm.finish_editing();
        assert_eq!(vm.state.with_untracked(|s| s.editing), None);

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].params[0].value, "30");
        assert_eq!(seen[1].params, vec![Parameter::new(ParamId(1), "timeout", "60")]);
    }
}
