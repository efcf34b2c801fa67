//! Handlers for the `/movies` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cinetag_core::error::CoreError;
use cinetag_core::types::DbId;
use cinetag_db::models::movie::{CreateMovie, MovieWithAssociations};
use cinetag_db::repositories::MovieRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::MessageResponse;
use crate::state::AppState;

/// GET /api/movies
///
/// Newest first, with actors and feature types resolved.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<MovieWithAssociations>>> {
    let movies = MovieRepo::list(&state.pool).await?;
    Ok(Json(movies))
}

/// POST /api/movies
///
/// Rejects a code that already exists with `DUPLICATE_KEY`. A concurrent
/// create that slips past the check is caught by the unique index and
/// reported the same way. Association ids that match no row are dropped.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMovie>,
) -> AppResult<(StatusCode, Json<MovieWithAssociations>)> {
    input.validate()?;

    if MovieRepo::find_by_code(&state.pool, &input.code)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::DuplicateKey(format!(
            "Movie with code {} already exists",
            input.code
        ))));
    }

    let movie = MovieRepo::create(&state.pool, &input).await?;

    tracing::info!(
        movie_id = movie.movie.id,
        code = %movie.movie.code,
        actors = movie.actors.len(),
        feature_types = movie.feature_types.len(),
        "Movie created",
    );

    Ok((StatusCode::CREATED, Json(movie)))
}

/// GET /api/movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MovieWithAssociations>> {
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id,
        }))?;
    Ok(Json(movie))
}

/// DELETE /api/movies/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !MovieRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id,
        }));
    }

    tracing::info!(movie_id = id, "Movie deleted");

    Ok(Json(MessageResponse::new("Movie deleted")))
}
