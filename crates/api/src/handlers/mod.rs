//! Request handlers.
//!
//! Handlers parse the route and body, delegate to `tripdesk_core`, and map
//! failures via [`crate::error::AppError`].

pub mod packages;
