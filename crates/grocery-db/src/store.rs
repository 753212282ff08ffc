//! # Item Store
//!
//! The authoritative, durable collection of grocery items and the only
//! mutation surface a presentation shell needs.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Shell ── list_all() ─────────────────────────────► render              │
//! │    │                                                  ▲                 │
//! │    │ add / toggle_completed / delete / seed_essentials │                 │
//! │    ▼                                                  │                 │
//! │  ItemStore ── ItemRepository ── SQLite (fsync)        │                 │
//! │    │                                                  │                 │
//! │    └── broadcast StoreEvent ──► subscribe() ──────────┘                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An event is published only after the write has committed, so a
//! subscriber that re-reads `list_all()` on receipt always sees the
//! post-mutation state. Failed mutations publish nothing, with one
//! exception: a seed that fails part-way publishes `Seeded` for the
//! essentials that did commit.

use grocery_core::essentials::draw_essentials;
use grocery_core::validation::validate_item_title;
use grocery_core::{Item, NewItem};
use rand::Rng;
use serde::Serialize;
use tokio::sync::broadcast;
use tracing::{info, warn};

use crate::error::{StoreError, StoreResult};
use crate::pool::{Database, DbConfig};

// =============================================================================
// Configuration
// =============================================================================

/// Policy knobs for [`ItemStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Reject empty or whitespace-only titles in `add`.
    ///
    /// `false` accepts any string, matching a store that trusts its shell
    /// to guard input.
    pub enforce_non_empty_titles: bool,

    /// Buffered events per subscriber before it starts lagging.
    pub event_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            enforce_non_empty_titles: true,
            event_capacity: 64,
        }
    }
}

impl StoreConfig {
    /// Accepts any title, including the empty string.
    pub fn permissive() -> Self {
        StoreConfig {
            enforce_non_empty_titles: false,
            ..StoreConfig::default()
        }
    }
}

// =============================================================================
// Events
// =============================================================================

/// A committed change to the item collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StoreEvent {
    Added { item: Item },
    Toggled { item: Item },
    Deleted { id: String },
    /// Essentials inserted, in catalog order. After a failed seed this
    /// carries whatever made it to disk before the failure.
    Seeded { items: Vec<Item> },
}

// =============================================================================
// Item Store
// =============================================================================

/// The Item Store.
///
/// ## Usage
/// ```rust,ignore
/// let store = ItemStore::open(DbConfig::new("grocery.db"), StoreConfig::default()).await?;
///
/// if store.is_empty().await? {
///     store.seed_essentials().await?;
/// }
///
/// let milk = store.add("Milk").await?;
/// store.toggle_completed(&milk.id).await?;
/// store.delete(&milk.id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ItemStore {
    db: Database,
    config: StoreConfig,
    events: broadcast::Sender<StoreEvent>,
}

impl ItemStore {
    /// Wraps an already-open database.
    pub fn new(db: Database, config: StoreConfig) -> Self {
        let (events, _) = broadcast::channel(config.event_capacity.max(1));
        ItemStore { db, config, events }
    }

    /// Opens (creating and migrating if needed) the database and wraps it.
    pub async fn open(db_config: DbConfig, config: StoreConfig) -> StoreResult<Self> {
        let db = Database::new(db_config).await?;
        Ok(ItemStore::new(db, config))
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn config(&self) -> StoreConfig {
        self.config
    }

    /// Subscribes to committed changes.
    ///
    /// A receiver only sees events published after it was created.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    fn publish(&self, event: StoreEvent) {
        // No subscribers is the normal case for one-shot shells.
        let _ = self.events.send(event);
    }

    /// Appends a new pending item.
    ///
    /// ## Errors
    /// * `StoreError::InvalidTitle` - Empty or whitespace-only title
    ///   (only when titles are enforced)
    /// * `StoreError::Storage` - The write did not commit
    pub async fn add(&self, title: &str) -> StoreResult<Item> {
        if self.config.enforce_non_empty_titles {
            validate_item_title(title)?;
        }

        let item = self.db.items().insert(&NewItem::pending(title)).await?;
        info!(id = %item.id, position = item.position, "Item added");

        self.publish(StoreEvent::Added { item: item.clone() });
        Ok(item)
    }

    /// Flips an item between pending and completed.
    ///
    /// Calling it twice restores the original flag.
    ///
    /// ## Errors
    /// * `StoreError::NotFound` - No live item with that id
    pub async fn toggle_completed(&self, id: &str) -> StoreResult<Item> {
        let item = self.db.items().toggle_completed(id).await?;
        info!(id = %item.id, is_completed = item.is_completed, "Item toggled");

        self.publish(StoreEvent::Toggled { item: item.clone() });
        Ok(item)
    }

    /// Permanently removes an item.
    ///
    /// ## Errors
    /// * `StoreError::NotFound` - No live item with that id; a second
    ///   delete of the same id lands here too
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        self.db.items().delete(id).await?;
        info!(id = %id, "Item deleted");

        self.publish(StoreEvent::Deleted { id: id.to_string() });
        Ok(())
    }

    /// Inserts the five essentials with freshly drawn random flags.
    ///
    /// Does not check that the list is empty; offering this only on an
    /// empty list is the shell's job.
    pub async fn seed_essentials(&self) -> StoreResult<Vec<Item>> {
        let batch = draw_essentials(&mut rand::thread_rng());
        self.insert_essentials(batch).await
    }

    /// Same as [`ItemStore::seed_essentials`] with a caller-supplied
    /// random source.
    pub async fn seed_essentials_with<R: Rng + ?Sized>(&self, rng: &mut R) -> StoreResult<Vec<Item>> {
        let batch = draw_essentials(rng);
        self.insert_essentials(batch).await
    }

    /// Five independent inserts: a failure part-way keeps what committed
    /// and announces it before returning the error.
    async fn insert_essentials(&self, batch: Vec<NewItem>) -> StoreResult<Vec<Item>> {
        let repo = self.db.items();
        let mut inserted = Vec::with_capacity(batch.len());

        for new_item in &batch {
            match repo.insert(new_item).await {
                Ok(item) => inserted.push(item),
                Err(err) => {
                    warn!(
                        inserted = inserted.len(),
                        title = %new_item.title,
                        error = %err,
                        "Seeding essentials stopped early"
                    );
                    if !inserted.is_empty() {
                        self.publish(StoreEvent::Seeded { items: inserted });
                    }
                    return Err(StoreError::from(err));
                }
            }
        }

        info!(count = inserted.len(), "Essentials seeded");
        self.publish(StoreEvent::Seeded {
            items: inserted.clone(),
        });
        Ok(inserted)
    }

    /// All items in insertion order. Empty is a valid state.
    pub async fn list_all(&self) -> StoreResult<Vec<Item>> {
        Ok(self.db.items().list_all().await?)
    }

    /// Looks up a single item.
    pub async fn get(&self, id: &str) -> StoreResult<Item> {
        self.db
            .items()
            .get_by_id(id)
            .await?
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })
    }

    pub async fn count(&self) -> StoreResult<usize> {
        let count = self.db.items().count().await?;
        Ok(usize::try_from(count).unwrap_or_default())
    }

    /// The empty-state trigger: `count == 0`.
    pub async fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.count().await? == 0)
    }

    pub async fn close(&self) {
        self.db.close().await;
    }
}
