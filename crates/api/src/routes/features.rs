//! Route definitions for the `/features` resource.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::features;
use crate::state::AppState;

/// Routes mounted at `/features`.
///
/// ```text
/// GET    /            -> list
/// POST   /reorder     -> reorder
/// PATCH  /{id}        -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(features::list))
        .route("/reorder", post(features::reorder))
        .route("/{id}", patch(features::update))
}
