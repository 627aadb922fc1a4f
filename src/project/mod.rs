//! Project creation flow.
//!
//! Collects a title and description, validates both as required (violations
//! are collected, not short-circuited), and runs the shared submission
//! protocol. Field edits are gated while a submission is in flight; success
//! resets the form silently.
//!
//! - Domain types in [`domain`]
//! - Orchestration in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
