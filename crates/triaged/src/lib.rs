//! Triage daemon library - exposes modules for testing.

pub mod config;
pub mod intake;
pub mod routes;
pub mod server;
pub mod store;
