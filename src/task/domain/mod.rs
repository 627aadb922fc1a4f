//! Domain types for the task creation flow.

mod context;
mod draft;
mod error;
mod label;
mod priority;
mod status;
pub(crate) mod validation;

pub use context::ProjectContext;
pub use draft::TaskDraft;
pub use error::{ParsePriorityError, ParseStatusError};
pub use label::Label;
pub use priority::Priority;
pub use status::Status;
