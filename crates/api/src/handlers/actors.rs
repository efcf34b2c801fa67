//! Handlers for the `/actors` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cinetag_core::error::CoreError;
use cinetag_core::types::DbId;
use cinetag_db::models::actor::{ActorWithAssociations, CreateActor};
use cinetag_db::repositories::ActorRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::MessageResponse;
use crate::state::AppState;

/// GET /api/actors
///
/// Newest first, with feature types and categories resolved.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ActorWithAssociations>>> {
    let actors = ActorRepo::list(&state.pool).await?;
    Ok(Json(actors))
}

/// POST /api/actors
///
/// Association ids that match no row are dropped rather than rejected.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateActor>,
) -> AppResult<(StatusCode, Json<ActorWithAssociations>)> {
    input.validate()?;

    let actor = ActorRepo::create(&state.pool, &input).await?;

    tracing::info!(
        actor_id = actor.actor.id,
        feature_types = actor.feature_types.len(),
        categories = actor.categories.len(),
        "Actor created",
    );

    Ok((StatusCode::CREATED, Json(actor)))
}

/// GET /api/actors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ActorWithAssociations>> {
    let actor = ActorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Actor",
            id,
        }))?;
    Ok(Json(actor))
}

/// DELETE /api/actors/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !ActorRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Actor",
            id,
        }));
    }

    tracing::info!(actor_id = id, "Actor deleted");

    Ok(Json(MessageResponse::new("Actor deleted")))
}
