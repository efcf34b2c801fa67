//! Movie entity model and DTOs.

use cinetag_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::actor::ActorSummary;
use super::feature_type::FeatureType;

/// A row from the `movies` table. `code` is unique.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub code: String,
    pub name: String,
    pub created_at: Timestamp,
}

/// A movie with its actors and feature types resolved.
#[derive(Debug, Clone, Serialize)]
pub struct MovieWithAssociations {
    #[serde(flatten)]
    pub movie: Movie,
    pub actors: Vec<ActorSummary>,
    pub feature_types: Vec<FeatureType>,
}

/// DTO for creating a movie.
///
/// Association ids that do not match an existing row are dropped.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMovie {
    #[validate(length(min = 1, message = "code must not be empty"))]
    pub code: String,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(default)]
    pub actor_ids: Vec<DbId>,
    #[serde(default)]
    pub feature_type_ids: Vec<DbId>,
}
