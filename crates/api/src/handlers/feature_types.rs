//! Handlers for the `/feature-types` resource.

use axum::extract::{Path, State};
use axum::Json;
use cinetag_core::error::CoreError;
use cinetag_core::types::DbId;
use cinetag_db::models::feature_type::{FeatureType, UpdateFeatureType};
use cinetag_db::repositories::FeatureTypeRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// PATCH /api/feature-types/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFeatureType>,
) -> AppResult<Json<FeatureType>> {
    input.validate()?;

    let feature_type = FeatureTypeRepo::update_name(&state.pool, id, &input.name)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FeatureType",
            id,
        }))?;

    tracing::info!(feature_type_id = id, "Feature type renamed");

    Ok(Json(feature_type))
}
