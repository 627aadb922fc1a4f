//! Service layer for the project creation flow.

mod form;
mod payload;

pub use form::ProjectDraftForm;
pub use payload::ProjectPayload;
