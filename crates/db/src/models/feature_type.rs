//! Feature type (shade variant) model and DTOs.

use cinetag_core::shade::Shade;
use cinetag_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `feature_types` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct FeatureType {
    pub id: DbId,
    pub feature_id: DbId,
    pub name: String,
    #[sqlx(try_from = "String")]
    pub shade: Shade,
}

/// DTO for renaming a feature type.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateFeatureType {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
}
