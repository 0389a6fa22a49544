//! Tripdesk API server library.
//!
//! Exposes the package validator over JSON. Config, state, error handling and
//! routes live here so integration tests and the binary entrypoint share them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
