pub mod editor;
pub mod form;
pub mod list;
