//! Task creation flow.
//!
//! Collects a task draft (title, description, status, priority, label,
//! assignee, dates) through independent field setters, validates the title at
//! submit time, and runs the shared submission protocol. On success the draft
//! resets, a confirmation toast fires, and the view navigates to the owning
//! project's task list.
//!
//! - Domain types in [`domain`]
//! - Orchestration in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
