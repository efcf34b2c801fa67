//! Repository for the `feature_types` table.

use cinetag_core::types::DbId;
use sqlx::SqliteConnection;

use crate::associations::Association;
use crate::models::feature_type::FeatureType;
use crate::DbPool;

/// Column list for `feature_types` queries, aliased as `ft`.
const COLUMNS: &str = "ft.id, ft.feature_id, ft.name, ft.shade";

/// Provides lookups and renames for feature types.
pub struct FeatureTypeRepo;

impl FeatureTypeRepo {
    /// Find a feature type by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<FeatureType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM feature_types ft WHERE ft.id = ?");
        sqlx::query_as::<_, FeatureType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Rename a feature type.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_name(
        pool: &DbPool,
        id: DbId,
        name: &str,
    ) -> Result<Option<FeatureType>, sqlx::Error> {
        sqlx::query_as::<_, FeatureType>(
            "UPDATE feature_types SET name = ? WHERE id = ? \
             RETURNING id, feature_id, name, shade",
        )
        .bind(name)
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// All feature types, grouped by feature and ordered light, middle, dark within each.
    pub async fn list_all(conn: &mut SqliteConnection) -> Result<Vec<FeatureType>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM feature_types ft \
             JOIN shades s ON s.name = ft.shade \
             ORDER BY ft.feature_id, s.display_rank, ft.id"
        );
        sqlx::query_as::<_, FeatureType>(&query)
            .fetch_all(&mut *conn)
            .await
    }

    /// Types of one feature, ordered light, middle, dark.
    pub async fn list_for_feature(
        conn: &mut SqliteConnection,
        feature_id: DbId,
    ) -> Result<Vec<FeatureType>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM feature_types ft \
             JOIN shades s ON s.name = ft.shade \
             WHERE ft.feature_id = ? \
             ORDER BY s.display_rank, ft.id"
        );
        sqlx::query_as::<_, FeatureType>(&query)
            .bind(feature_id)
            .fetch_all(&mut *conn)
            .await
    }

    /// Feature types linked from `owner_id` through `association`.
    ///
    /// Ordered by feature display order, then light, middle, dark.
    pub async fn linked_to(
        conn: &mut SqliteConnection,
        association: &Association,
        owner_id: DbId,
    ) -> Result<Vec<FeatureType>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM feature_types ft \
             JOIN {table} l ON l.{target} = ft.id \
             JOIN features f ON f.id = ft.feature_id \
             JOIN shades s ON s.name = ft.shade \
             WHERE l.{owner} = ? \
             ORDER BY f.sort_order, f.id, s.display_rank, ft.id",
            table = association.table,
            target = association.target.column,
            owner = association.owner.column,
        );
        sqlx::query_as::<_, FeatureType>(&query)
            .bind(owner_id)
            .fetch_all(&mut *conn)
            .await
    }
}
