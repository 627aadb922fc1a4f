//! Unit tests for the shared submission machinery.

mod memory_tests;
mod routes_tests;
