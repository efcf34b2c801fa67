//! Handlers for the `/features` resource.
//!
//! Features are seeded at startup and can only be renamed or reordered here.

use axum::extract::{Path, State};
use axum::Json;
use cinetag_core::error::CoreError;
use cinetag_core::types::DbId;
use cinetag_db::models::feature::{FeatureWithTypes, ReorderFeatures, UpdateFeature};
use cinetag_db::repositories::FeatureRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/features
///
/// All features by display order, each with its types in light, middle, dark order.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<FeatureWithTypes>>> {
    let features = FeatureRepo::list_with_types(&state.pool).await?;
    Ok(Json(features))
}

/// PATCH /api/features/{id}
///
/// Patch name and/or order. Other features keep their order values; use
/// `POST /api/features/reorder` to renumber the whole set.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFeature>,
) -> AppResult<Json<FeatureWithTypes>> {
    input.validate()?;

    let feature = FeatureRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Feature",
            id,
        }))?;

    tracing::info!(feature_id = id, "Feature updated");

    Ok(Json(feature))
}

/// POST /api/features/reorder
///
/// Give each listed feature its 1-based position as its order. Unknown ids
/// are skipped. Returns the resulting feature list.
pub async fn reorder(
    State(state): State<AppState>,
    Json(input): Json<ReorderFeatures>,
) -> AppResult<Json<Vec<FeatureWithTypes>>> {
    let updated = FeatureRepo::reorder(&state.pool, &input.feature_ids).await?;

    tracing::info!(
        requested = input.feature_ids.len(),
        updated,
        "Features reordered",
    );

    let features = FeatureRepo::list_with_types(&state.pool).await?;
    Ok(Json(features))
}
