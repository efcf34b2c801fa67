//! Repository for the `actors` table and its association sets.

use chrono::Utc;
use cinetag_core::types::DbId;
use sqlx::SqliteConnection;

use crate::associations::{self, Association, Entity, ACTOR_CATEGORIES, ACTOR_FEATURE_TYPES};
use crate::models::actor::{Actor, ActorSummary, ActorWithAssociations, CreateActor};
use crate::repositories::{CategoryRepo, FeatureTypeRepo};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at";

/// Provides CRUD operations for actors.
pub struct ActorRepo;

impl ActorRepo {
    /// Insert a new actor together with its feature type and category links.
    ///
    /// Ids in `feature_type_ids` / `category_ids` that match no row are dropped.
    pub async fn create(
        pool: &DbPool,
        input: &CreateActor,
    ) -> Result<ActorWithAssociations, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query =
            format!("INSERT INTO actors (name, created_at) VALUES (?, ?) RETURNING {COLUMNS}");
        let actor = sqlx::query_as::<_, Actor>(&query)
            .bind(&input.name)
            .bind(Utc::now())
            .fetch_one(&mut *tx)
            .await?;

        ACTOR_FEATURE_TYPES
            .replace(&mut tx, actor.id, &input.feature_type_ids)
            .await?;
        ACTOR_CATEGORIES
            .replace(&mut tx, actor.id, &input.category_ids)
            .await?;

        let view = Self::with_associations(&mut tx, actor).await?;
        tx.commit().await?;
        Ok(view)
    }

    /// Find an actor by ID with its associations resolved.
    pub async fn find_by_id(
        pool: &DbPool,
        id: DbId,
    ) -> Result<Option<ActorWithAssociations>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM actors WHERE id = ?");
        let actor = sqlx::query_as::<_, Actor>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        let result = match actor {
            Some(actor) => Some(Self::with_associations(&mut tx, actor).await?),
            None => None,
        };
        tx.commit().await?;
        Ok(result)
    }

    /// List all actors, most recently created first, with associations resolved.
    pub async fn list(pool: &DbPool) -> Result<Vec<ActorWithAssociations>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM actors ORDER BY created_at DESC, id DESC");
        let actors = sqlx::query_as::<_, Actor>(&query)
            .fetch_all(&mut *tx)
            .await?;

        let mut result = Vec::with_capacity(actors.len());
        for actor in actors {
            result.push(Self::with_associations(&mut tx, actor).await?);
        }

        tx.commit().await?;
        Ok(result)
    }

    /// Delete an actor and remove it from every association set.
    ///
    /// Linked feature types, categories and movies are left untouched.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let detached = associations::detach(&mut tx, Entity::Actor, id).await?;
        let result = sqlx::query("DELETE FROM actors WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(false);
        }

        tx.commit().await?;
        tracing::debug!(actor_id = id, detached, "Actor associations detached");
        Ok(true)
    }

    /// Actors linked from `owner_id` through `association`, ordered by name.
    pub async fn summaries_linked_to(
        conn: &mut SqliteConnection,
        association: &Association,
        owner_id: DbId,
    ) -> Result<Vec<ActorSummary>, sqlx::Error> {
        let query = format!(
            "SELECT a.id, a.name FROM actors a \
             JOIN {table} l ON l.{target} = a.id \
             WHERE l.{owner} = ? \
             ORDER BY a.name, a.id",
            table = association.table,
            target = association.target.column,
            owner = association.owner.column,
        );
        sqlx::query_as::<_, ActorSummary>(&query)
            .bind(owner_id)
            .fetch_all(&mut *conn)
            .await
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    async fn with_associations(
        conn: &mut SqliteConnection,
        actor: Actor,
    ) -> Result<ActorWithAssociations, sqlx::Error> {
        let feature_types =
            FeatureTypeRepo::linked_to(&mut *conn, &ACTOR_FEATURE_TYPES, actor.id).await?;
        let categories = CategoryRepo::linked_to(&mut *conn, &ACTOR_CATEGORIES, actor.id).await?;
        Ok(ActorWithAssociations {
            actor,
            feature_types,
            categories,
        })
    }
}
