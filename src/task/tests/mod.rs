//! Unit tests for the task creation flow.
