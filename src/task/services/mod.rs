//! Service layer for the task creation flow.

mod form;
mod payload;

pub use form::TaskDraftForm;
pub use payload::TaskPayload;
