pub mod actors;
pub mod categories;
pub mod feature_types;
pub mod features;
pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories                  list, create
///
/// /actors                      list, create
/// /actors/{id}                 get, delete
///
/// /movies                      list, create
/// /movies/{id}                 get, delete
///
/// /features                    list
/// /features/reorder            reorder (POST)
/// /features/{id}               update (PATCH)
///
/// /feature-types/{id}          update (PATCH)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", categories::router())
        .nest("/actors", actors::router())
        .nest("/movies", movies::router())
        .nest("/features", features::router())
        .nest("/feature-types", feature_types::router())
}
