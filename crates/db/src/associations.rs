//! Many-to-many junction tables and their cascade rules.
//!
//! Every junction table is described by an [`Association`] naming the owner
//! side (the row whose link set is replaced wholesale on write) and the
//! target side. Deleting any row goes through [`detach`], which walks
//! [`ALL`] and clears every junction row that references it on either side.
//! The schema also declares `ON DELETE CASCADE` on both foreign keys.

use cinetag_core::types::DbId;
use sqlx::SqliteConnection;

/// Tables that can appear on either side of a junction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Actor,
    Movie,
    FeatureType,
    Category,
}

impl Entity {
    /// Backing table name.
    pub const fn table(self) -> &'static str {
        match self {
            Entity::Actor => "actors",
            Entity::Movie => "movies",
            Entity::FeatureType => "feature_types",
            Entity::Category => "categories",
        }
    }
}

/// One side of a junction table: the entity it points at and the column holding its id.
#[derive(Debug, Clone, Copy)]
pub struct Side {
    pub entity: Entity,
    pub column: &'static str,
}

/// A junction table linking owner rows to target rows.
#[derive(Debug, Clone, Copy)]
pub struct Association {
    pub table: &'static str,
    pub owner: Side,
    pub target: Side,
}

pub const ACTOR_FEATURE_TYPES: Association = Association {
    table: "actor_feature_types",
    owner: Side {
        entity: Entity::Actor,
        column: "actor_id",
    },
    target: Side {
        entity: Entity::FeatureType,
        column: "feature_type_id",
    },
};

pub const ACTOR_CATEGORIES: Association = Association {
    table: "actor_categories",
    owner: Side {
        entity: Entity::Actor,
        column: "actor_id",
    },
    target: Side {
        entity: Entity::Category,
        column: "category_id",
    },
};

pub const MOVIE_ACTORS: Association = Association {
    table: "movie_actors",
    owner: Side {
        entity: Entity::Movie,
        column: "movie_id",
    },
    target: Side {
        entity: Entity::Actor,
        column: "actor_id",
    },
};

pub const MOVIE_FEATURE_TYPES: Association = Association {
    table: "movie_feature_types",
    owner: Side {
        entity: Entity::Movie,
        column: "movie_id",
    },
    target: Side {
        entity: Entity::FeatureType,
        column: "feature_type_id",
    },
};

/// Every junction table in the schema.
pub const ALL: [Association; 4] = [
    ACTOR_FEATURE_TYPES,
    ACTOR_CATEGORIES,
    MOVIE_ACTORS,
    MOVIE_FEATURE_TYPES,
];

impl Association {
    /// Replace the owner's link set with `target_ids`.
    ///
    /// Ids that do not resolve to an existing target row are skipped, as are
    /// repeats. Returns the number of links written.
    pub async fn replace(
        &self,
        conn: &mut SqliteConnection,
        owner_id: DbId,
        target_ids: &[DbId],
    ) -> Result<u64, sqlx::Error> {
        let clear = format!("DELETE FROM {} WHERE {} = ?", self.table, self.owner.column);
        sqlx::query(&clear).bind(owner_id).execute(&mut *conn).await?;

        let insert = format!(
            "INSERT OR IGNORE INTO {table} ({owner}, {target}) \
             SELECT ?, id FROM {target_table} WHERE id = ?",
            table = self.table,
            owner = self.owner.column,
            target = self.target.column,
            target_table = self.target.entity.table(),
        );

        let mut linked = 0;
        for &target_id in target_ids {
            let result = sqlx::query(&insert)
                .bind(owner_id)
                .bind(target_id)
                .execute(&mut *conn)
                .await?;
            linked += result.rows_affected();
        }

        tracing::debug!(
            table = self.table,
            owner_id,
            requested = target_ids.len(),
            linked,
            "Association set replaced",
        );

        Ok(linked)
    }

    /// Target ids currently linked from `owner_id`, ascending.
    pub async fn target_ids(
        &self,
        conn: &mut SqliteConnection,
        owner_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        let query = format!(
            "SELECT {target} FROM {table} WHERE {owner} = ? ORDER BY {target}",
            target = self.target.column,
            table = self.table,
            owner = self.owner.column,
        );
        sqlx::query_scalar::<_, DbId>(&query)
            .bind(owner_id)
            .fetch_all(&mut *conn)
            .await
    }
}

/// Remove every junction row that references the `entity` row `id`.
///
/// Returns the number of links removed.
pub async fn detach(
    conn: &mut SqliteConnection,
    entity: Entity,
    id: DbId,
) -> Result<u64, sqlx::Error> {
    let mut removed = 0;
    for association in &ALL {
        for side in [association.owner, association.target] {
            if side.entity != entity {
                continue;
            }
            let query = format!("DELETE FROM {} WHERE {} = ?", association.table, side.column);
            let result = sqlx::query(&query).bind(id).execute(&mut *conn).await?;
            removed += result.rows_affected();
        }
    }
    Ok(removed)
}
