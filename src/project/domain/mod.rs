//! Domain types for the project creation flow.

mod draft;
pub(crate) mod validation;

pub use draft::ProjectDraft;
