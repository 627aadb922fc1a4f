//! Unit tests for the project creation flow.

mod form_tests;
mod validation_tests;
