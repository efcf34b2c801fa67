//! Repository for the `features` table.
//!
//! Features are created only by the seeder (see [`crate::seed`]); callers
//! only rename and reorder them. Deleting one cascades to
//! its feature types and every association that references those types.

use std::collections::HashMap;

use cinetag_core::types::DbId;
use sqlx::SqliteConnection;

use crate::associations::{self, Entity};
use crate::models::feature::{Feature, FeatureWithTypes, UpdateFeature};
use crate::models::feature_type::FeatureType;
use crate::repositories::FeatureTypeRepo;
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, color, sort_order";

/// Provides read, patch, reorder and cascade-delete operations for features.
pub struct FeatureRepo;

impl FeatureRepo {
    /// Find a feature by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Feature>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM features WHERE id = ?");
        sqlx::query_as::<_, Feature>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all features by display order, each with its types in light, middle, dark order.
    ///
    /// Features sharing an `order` value are listed by id.
    pub async fn list_with_types(pool: &DbPool) -> Result<Vec<FeatureWithTypes>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let result = Self::list_with_types_inner(&mut tx).await?;
        tx.commit().await?;
        Ok(result)
    }

    /// Number of features in the table.
    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM features")
            .fetch_one(pool)
            .await
    }

    /// Patch a feature's name and/or order. Other features are not renumbered.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateFeature,
    ) -> Result<Option<FeatureWithTypes>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE features SET \
                name = COALESCE(?, name), \
                sort_order = COALESCE(?, sort_order) \
             WHERE id = ? \
             RETURNING {COLUMNS}"
        );
        let feature = sqlx::query_as::<_, Feature>(&query)
            .bind(&input.name)
            .bind(input.order)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        let result = match feature {
            Some(feature) => {
                let types = FeatureTypeRepo::list_for_feature(&mut tx, feature.id).await?;
                Some(FeatureWithTypes { feature, types })
            }
            None => None,
        };

        tx.commit().await?;
        Ok(result)
    }

    /// Assign each id its 1-based position in `feature_ids` as its order.
    ///
    /// Ids that match no feature are skipped but still occupy their position.
    /// Features not listed keep their current order. If an id repeats, its
    /// last position wins. Returns the number of rows updated.
    pub async fn reorder(pool: &DbPool, feature_ids: &[DbId]) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let mut updated = 0;
        for (position, &id) in (1_i64..).zip(feature_ids) {
            let result = sqlx::query("UPDATE features SET sort_order = ? WHERE id = ?")
                .bind(position)
                .bind(id)
                .execute(&mut *tx)
                .await?;
            updated += result.rows_affected();
        }

        tx.commit().await?;
        Ok(updated)
    }

    /// Delete a feature, its types, and every association referencing those types.
    ///
    /// Returns `true` if the feature existed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let type_ids =
            sqlx::query_scalar::<_, DbId>("SELECT id FROM feature_types WHERE feature_id = ?")
                .bind(id)
                .fetch_all(&mut *tx)
                .await?;

        let mut detached = 0;
        for &type_id in &type_ids {
            detached += associations::detach(&mut tx, Entity::FeatureType, type_id).await?;
        }

        sqlx::query("DELETE FROM feature_types WHERE feature_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM features WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            // Nothing to delete; dropping the transaction rolls back.
            return Ok(false);
        }

        tx.commit().await?;

        tracing::info!(
            feature_id = id,
            feature_types = type_ids.len(),
            detached,
            "Feature deleted",
        );

        Ok(true)
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    async fn list_with_types_inner(
        conn: &mut SqliteConnection,
    ) -> Result<Vec<FeatureWithTypes>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM features ORDER BY sort_order, id");
        let features = sqlx::query_as::<_, Feature>(&query)
            .fetch_all(&mut *conn)
            .await?;

        let mut types_by_feature: HashMap<DbId, Vec<FeatureType>> = HashMap::new();
        for feature_type in FeatureTypeRepo::list_all(conn).await? {
            types_by_feature
                .entry(feature_type.feature_id)
                .or_default()
                .push(feature_type);
        }

        Ok(features
            .into_iter()
            .map(|feature| {
                let types = types_by_feature.remove(&feature.id).unwrap_or_default();
                FeatureWithTypes { feature, types }
            })
            .collect())
    }
}
