pub mod aggregate;

pub use aggregate::{next_free_id, NewParameter, ParamId, ParamModel, Parameter};
