//! # Repository Module
//!
//! Database repository implementations for the Item Store.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ItemStore (store.rs)                                                  │
//! │       │                                                                 │
//! │       │  db.items().toggle_completed(id)                               │
//! │       ▼                                                                 │
//! │  ItemRepository                                                        │
//! │  ├── insert(&self, new_item)                                           │
//! │  ├── get_by_id(&self, id)                                              │
//! │  ├── list_all(&self)                                                   │
//! │  ├── toggle_completed(&self, id)                                       │
//! │  └── delete(&self, id)                                                 │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store adds policy (title rules, notifications) on top; the
//! repository is SQL and nothing else.

pub mod item;
