//! Workspace-level end-to-end tests for the Latitude bytecode tools.
//!
//! The tests live under `tests/`; this crate exports nothing.
