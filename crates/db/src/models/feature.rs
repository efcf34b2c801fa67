//! Feature entity model and DTOs.

use cinetag_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::feature_type::FeatureType;

/// A row from the `features` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Feature {
    pub id: DbId,
    pub name: String,
    /// Hex color string, e.g. `#ef4444`.
    pub color: String,
    #[serde(rename = "order")]
    pub sort_order: i64,
}

/// A feature with its three shade types in light, middle, dark order.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureWithTypes {
    #[serde(flatten)]
    pub feature: Feature,
    pub types: Vec<FeatureType>,
}

/// DTO for patching a feature. Only supplied fields change.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateFeature {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[validate(range(min = 1, message = "order must be at least 1"))]
    pub order: Option<i64>,
}

/// DTO for `POST /features/reorder`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReorderFeatures {
    /// Feature ids in their new display order.
    pub feature_ids: Vec<DbId>,
}
