//! Repository for the `movies` table and its association sets.

use chrono::Utc;
use cinetag_core::types::DbId;
use sqlx::SqliteConnection;

use crate::associations::{self, Entity, MOVIE_ACTORS, MOVIE_FEATURE_TYPES};
use crate::models::movie::{CreateMovie, Movie, MovieWithAssociations};
use crate::repositories::{ActorRepo, FeatureTypeRepo};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, code, name, created_at";

/// Provides CRUD operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie together with its actor and feature type links.
    ///
    /// Fails with a unique violation (`uq_movies_code`) if the code is taken;
    /// nothing is written in that case. Association ids that match no row
    /// are dropped.
    pub async fn create(
        pool: &DbPool,
        input: &CreateMovie,
    ) -> Result<MovieWithAssociations, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO movies (code, name, created_at) VALUES (?, ?, ?) RETURNING {COLUMNS}"
        );
        let movie = sqlx::query_as::<_, Movie>(&query)
            .bind(&input.code)
            .bind(&input.name)
            .bind(Utc::now())
            .fetch_one(&mut *tx)
            .await?;

        MOVIE_ACTORS.replace(&mut tx, movie.id, &input.actor_ids).await?;
        MOVIE_FEATURE_TYPES
            .replace(&mut tx, movie.id, &input.feature_type_ids)
            .await?;

        let view = Self::with_associations(&mut tx, movie).await?;
        tx.commit().await?;
        Ok(view)
    }

    /// Find a movie by its unique code.
    pub async fn find_by_code(pool: &DbPool, code: &str) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE code = ?");
        sqlx::query_as::<_, Movie>(&query)
            .bind(code)
            .fetch_optional(pool)
            .await
    }

    /// Find a movie by ID with its associations resolved.
    pub async fn find_by_id(
        pool: &DbPool,
        id: DbId,
    ) -> Result<Option<MovieWithAssociations>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = ?");
        let movie = sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        let result = match movie {
            Some(movie) => Some(Self::with_associations(&mut tx, movie).await?),
            None => None,
        };
        tx.commit().await?;
        Ok(result)
    }

    /// List all movies, most recently created first, with associations resolved.
    pub async fn list(pool: &DbPool) -> Result<Vec<MovieWithAssociations>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY created_at DESC, id DESC");
        let movies = sqlx::query_as::<_, Movie>(&query)
            .fetch_all(&mut *tx)
            .await?;

        let mut result = Vec::with_capacity(movies.len());
        for movie in movies {
            result.push(Self::with_associations(&mut tx, movie).await?);
        }

        tx.commit().await?;
        Ok(result)
    }

    /// Delete a movie and remove it from every association set.
    ///
    /// Linked actors and feature types are left untouched.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let detached = associations::detach(&mut tx, Entity::Movie, id).await?;
        let result = sqlx::query("DELETE FROM movies WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(false);
        }

        tx.commit().await?;
        tracing::debug!(movie_id = id, detached, "Movie associations detached");
        Ok(true)
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    async fn with_associations(
        conn: &mut SqliteConnection,
        movie: Movie,
    ) -> Result<MovieWithAssociations, sqlx::Error> {
        let actors = ActorRepo::summaries_linked_to(&mut *conn, &MOVIE_ACTORS, movie.id).await?;
        let feature_types =
            FeatureTypeRepo::linked_to(&mut *conn, &MOVIE_FEATURE_TYPES, movie.id).await?;
        Ok(MovieWithAssociations {
            movie,
            actors,
            feature_types,
        })
    }
}
