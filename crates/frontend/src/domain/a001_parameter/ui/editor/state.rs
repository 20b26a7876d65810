use contracts::domain::a001_parameter::{next_free_id, NewParameter, ParamId, ParamModel, Parameter};
use contracts::shared::validation::ParamValidationError;

/// Input of the add form that currently holds focus
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Value,
}

/// Editor state: the ordered parameters, the id counter and the transient UI flags.
///
/// `editing` is the single edit slot, so at most one row can be in edit mode.
#[derive(Clone, Debug, PartialEq)]
pub struct ParamEditorState {
    pub params: Vec<Parameter>,
    pub next_id: ParamId,
    pub focused_input: Option<FormField>,
    pub editing: Option<ParamId>,
}

impl Default for ParamEditorState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl ParamEditorState {
    pub fn new(params: Vec<Parameter>) -> Self {
        let next_id = next_free_id(&params);
        Self {
            params,
            next_id,
            focused_input: None,
            editing: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Appends the draft under the next id. Blank drafts leave the state untouched.
    pub fn add(&mut self, draft: NewParameter) -> Result<ParamId, ParamValidationError> {
        draft.validate()?;
        let id = self.next_id;
        self.params.push(draft.into_parameter(id));
        self.next_id = id.next();
        Ok(id)
    }

    pub fn get(&self, id: ParamId) -> Option<&Parameter> {
        self.params.iter().find(|p| p.id == id)
    }

    pub fn value_of(&self, id: ParamId) -> Option<String> {
        self.get(id).map(|p| p.value.clone())
    }

    pub fn is_editing(&self, id: ParamId) -> bool {
        self.editing == Some(id)
    }

    /// Puts `id` into edit mode. Any row that was being edited drops back to display.
    pub fn start_editing(&mut self, id: ParamId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.editing = Some(id);
        true
    }

    /// Live update while typing; unknown ids are ignored.
    pub fn update_value(&mut self, id: ParamId, value: impl Into<String>) -> bool {
        match self.params.iter_mut().find(|p| p.id == id) {
            Some(param) => {
                param.value = value.into();
                true
            }
            None => false,
        }
    }

    pub fn finish_editing(&mut self) {
        self.editing = None;
    }

    pub fn focus(&mut self, field: FormField) {
        self.focused_input = Some(field);
    }

    pub fn blur(&mut self) {
        self.focused_input = None;
    }

    pub fn is_focused(&self, field: FormField) -> bool {
        self.focused_input == Some(field)
    }

    pub fn model(&self) -> ParamModel {
        ParamModel::new(self.params.clone())
    }
}
