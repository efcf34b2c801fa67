//! Repository for the `categories` table.

use cinetag_core::types::DbId;
use sqlx::SqliteConnection;

use crate::associations::Association;
use crate::models::category::{Category, CreateCategory};
use crate::DbPool;

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category.
    ///
    /// Fails with a unique violation (`uq_categories_name`) if the name is taken.
    pub async fn create(pool: &DbPool, input: &CreateCategory) -> Result<Category, sqlx::Error> {
        sqlx::query_as::<_, Category>("INSERT INTO categories (name) VALUES (?) RETURNING id, name")
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a category by exact name.
    pub async fn find_by_name(pool: &DbPool, name: &str) -> Result<Option<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE name = ?")
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List all categories ordered by name.
    pub async fn list(pool: &DbPool) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY name, id")
            .fetch_all(pool)
            .await
    }

    /// Categories linked from `owner_id` through `association`, ordered by name.
    pub async fn linked_to(
        conn: &mut SqliteConnection,
        association: &Association,
        owner_id: DbId,
    ) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!(
            "SELECT c.id, c.name FROM categories c \
             JOIN {table} l ON l.{target} = c.id \
             WHERE l.{owner} = ? \
             ORDER BY c.name, c.id",
            table = association.table,
            target = association.target.column,
            owner = association.owner.column,
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(owner_id)
            .fetch_all(&mut *conn)
            .await
    }
}
