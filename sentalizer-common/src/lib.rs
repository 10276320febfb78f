//! Shared utilities for the Sentalizer workspace.
//!
//! Currently this is just the observability layer: every binary and
//! integration test initialises `tracing` through [`observability::init_logging`]
//! so logs land in one rolling file sink regardless of entry point.

pub mod observability;
