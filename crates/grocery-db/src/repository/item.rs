//! # Item Repository
//!
//! Row-level SQL for the `items` table.
//!
//! ## Ordering
//! ```text
//! ┌───────────┬──────────────────────────────────────┬──────────┬─────────┐
//! │ position  │ id                                   │ title    │ done    │
//! ├───────────┼──────────────────────────────────────┼──────────┼─────────┤
//! │ 1         │ 3f0c...                              │ Milk     │ 0       │  ← deleted
//! │ 2         │ 9a41...                              │ Eggs     │ 1       │
//! │ 3         │ c77e...                              │ Bread    │ 0       │
//! └───────────┴──────────────────────────────────────┴──────────┴─────────┘
//!   AUTOINCREMENT: the next insert gets 4, never 1 again.
//! ```
//!
//! Every statement here is a single autocommitted write, so a mutation is
//! either fully applied or not at all.

use chrono::Utc;
use grocery_core::{Item, NewItem};
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbError, DbResult};

const ENTITY: &str = "Item";

const ITEM_COLUMNS: &str = "position, id, title, is_completed, created_at, updated_at";

/// Repository for item database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.items();
///
/// let milk = repo.insert(&NewItem::pending("Milk")).await?;
/// let milk = repo.toggle_completed(&milk.id).await?;
/// let all = repo.list_all().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ItemRepository {
    pool: SqlitePool,
}

impl ItemRepository {
    /// Creates a new ItemRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ItemRepository { pool }
    }

    /// Inserts a new item at the end of the list.
    ///
    /// ## Returns
    /// The stored item, including its freshly assigned id and position.
    pub async fn insert(&self, new_item: &NewItem) -> DbResult<Item> {
        let id = generate_item_id();
        let now = Utc::now();

        debug!(id = %id, title = %new_item.title, "Inserting item");

        let item = sqlx::query_as::<_, Item>(&format!(
            r#"
            INSERT INTO items (id, title, is_completed, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?4)
            RETURNING {ITEM_COLUMNS}
            "#
        ))
        .bind(&id)
        .bind(&new_item.title)
        .bind(new_item.is_completed)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(item)
    }

    /// Gets an item by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Item))` - Item found
    /// * `Ok(None)` - Item not found
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Item>> {
        let item = sqlx::query_as::<_, Item>(&format!(
            "SELECT {ITEM_COLUMNS} FROM items WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    /// Lists every item in insertion order.
    pub async fn list_all(&self) -> DbResult<Vec<Item>> {
        let items = sqlx::query_as::<_, Item>(&format!(
            "SELECT {ITEM_COLUMNS} FROM items ORDER BY position ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        debug!(count = items.len(), "Listed items");
        Ok(items)
    }

    /// Flips the completion flag in a single statement.
    ///
    /// ## Returns
    /// * `Ok(Item)` - The item after the flip
    /// * `Err(DbError::NotFound)` - No item with that id
    pub async fn toggle_completed(&self, id: &str) -> DbResult<Item> {
        debug!(id = %id, "Toggling item");

        sqlx::query_as::<_, Item>(&format!(
            r#"
            UPDATE items
            SET is_completed = 1 - is_completed,
                updated_at = ?2
            WHERE id = ?1
            RETURNING {ITEM_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DbError::not_found(ENTITY, id))
    }

    /// Permanently deletes an item.
    ///
    /// ## Returns
    /// * `Ok(())` - Row removed
    /// * `Err(DbError::NotFound)` - No item with that id (including one
    ///   that was already deleted)
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting item");

        let result = sqlx::query("DELETE FROM items WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(ENTITY, id));
        }

        Ok(())
    }

    /// Counts items.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Helper to generate a new item ID.
pub fn generate_item_id() -> String {
    Uuid::new_v4().to_string()
}
