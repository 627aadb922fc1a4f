//! Shared submission machinery for the creation flows.
//!
//! Both creation flows follow the same protocol: validate the draft, acquire
//! a bearer token, POST a payload built from a draft snapshot, then reset on
//! success or preserve the draft on failure. This module holds everything the
//! flows share:
//!
//! - Phase tracking and route builders in [`domain`]
//! - Port contracts for the external collaborators in [`ports`]
//! - In-memory adapter implementations in [`adapters`]
//! - The error taxonomy in [`error`]

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;

#[cfg(test)]
mod tests;
