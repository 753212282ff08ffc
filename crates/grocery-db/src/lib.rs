//! # grocery-db: Item Store for the Grocery List
//!
//! This crate owns the persisted item collection. It uses SQLite for local
//! storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Grocery List Data Flow                           │
//! │                                                                         │
//! │  Presentation shell (`grocery toggle 2`)                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    grocery-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐   │   │
//! │  │   │  ItemStore    │    │ ItemRepository│    │  Migrations  │   │   │
//! │  │   │  (store.rs)   │───►│   (item.rs)   │    │  (embedded)  │   │   │
//! │  │   │ policy+events │    │   SQL only    │    │ 001_items    │   │   │
//! │  │   └───────────────┘    └───────┬───────┘    └──────────────┘   │   │
//! │  │                                │                                │   │
//! │  │                        ┌───────▼───────┐                        │   │
//! │  │                        │   Database    │                        │   │
//! │  │                        │   (pool.rs)   │                        │   │
//! │  │                        └───────────────┘                        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite file (WAL, synchronous = FULL)                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database and store error types
//! - [`repository`] - Row-level SQL
//! - [`store`] - The Item Store operations and change notifications
//!
//! ## Usage
//!
//! ```rust,ignore
//! use grocery_db::{DbConfig, ItemStore, StoreConfig};
//!
//! let store = ItemStore::open(DbConfig::new("grocery.db"), StoreConfig::default()).await?;
//! let milk = store.add("Milk").await?;
//! store.toggle_completed(&milk.id).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult, StoreError, StoreResult};
pub use pool::{Database, DbConfig};
pub use repository::item::ItemRepository;
pub use store::{ItemStore, StoreConfig, StoreEvent};
