pub mod health;
pub mod packages;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /packages/slug                     generate a slug from a title (POST)
/// /packages/{kind}/options           form options for a kind (GET)
/// /packages/{kind}/validate          validate a draft (POST, ?phase=schema)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/packages", packages::router())
}
