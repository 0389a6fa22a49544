//! Route definitions for the `/packages` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::packages;
use crate::state::AppState;

/// Routes mounted at `/packages`.
///
/// ```text
/// POST   /slug               -> generate_slug
/// GET    /{kind}/options     -> options
/// POST   /{kind}/validate    -> validate   (?phase=schema)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/slug", post(packages::generate_slug))
        .route("/{kind}/options", get(packages::options))
        .route("/{kind}/validate", post(packages::validate))
}
