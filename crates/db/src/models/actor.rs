//! Actor entity model and DTOs.

use cinetag_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::category::Category;
use super::feature_type::FeatureType;

/// A row from the `actors` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Actor {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}

/// Minimal actor reference embedded in movie views.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct ActorSummary {
    pub id: DbId,
    pub name: String,
}

/// An actor with its feature types and categories resolved.
#[derive(Debug, Clone, Serialize)]
pub struct ActorWithAssociations {
    #[serde(flatten)]
    pub actor: Actor,
    pub feature_types: Vec<FeatureType>,
    pub categories: Vec<Category>,
}

/// DTO for creating an actor.
///
/// Association ids that do not match an existing row are dropped.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateActor {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(default)]
    pub feature_type_ids: Vec<DbId>,
    #[serde(default)]
    pub category_ids: Vec<DbId>,
}
