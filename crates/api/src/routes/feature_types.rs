//! Route definitions for the `/feature-types` resource.

use axum::routing::patch;
use axum::Router;

use crate::handlers::feature_types;
use crate::state::AppState;

/// Routes mounted at `/feature-types`.
///
/// ```text
/// PATCH  /{id}        -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", patch(feature_types::update))
}
