pub mod form;
pub mod queries;
pub mod types;

pub use form::{CoordinatorForm, LecturerForm};
pub use queries::*;
pub use types::*;
