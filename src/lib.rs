//! Linnet: client-side creation core for a project/issue tracker.
//!
//! This crate implements the draft state models and submission protocol
//! behind the tracker's "create project" and "create task" views: field-level
//! draft editing, submit-time validation, bearer-token acquisition, payload
//! shaping, and success/failure handling.
//!
//! # Architecture
//!
//! Linnet follows hexagonal architecture principles:
//!
//! - **Domain**: Pure draft state, wire enums, and validation rules with no
//!   infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the external collaborators
//!   (token issuance, the submit gateway, navigation, notifications)
//! - **Adapters**: In-memory implementations of ports for tests and demos
//!
//! # Modules
//!
//! - [`submission`]: Shared submission machinery (phases, errors, ports)
//! - [`project`]: Project creation flow
//! - [`task`]: Task creation flow

pub mod project;
pub mod submission;
pub mod task;
