//! Domain types shared by the creation flows.

mod phase;
pub mod routes;

pub use phase::{FlightGuard, FlightLock, SubmissionPhase};
