//! # Domain Types
//!
//! The grocery list has exactly one entity: [`Item`].
//!
//! ## Item Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   add(title) ──────────┐                                               │
//! │                        ▼                                                │
//! │                 ┌─────────────┐  toggle   ┌─────────────┐              │
//! │  essentials ──► │   Pending   │ ◄───────► │  Completed  │ ◄── essentials│
//! │                 └──────┬──────┘           └──────┬──────┘              │
//! │                        │ delete                  │ delete              │
//! │                        ▼                         ▼                      │
//! │                    (gone for good, id never reused)                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Titles are set once; there is no rename and no soft delete.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Item Status
// =============================================================================

/// The two states an item can be in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    /// Still on the list (`is_completed = false`).
    #[default]
    Pending,
    /// Picked up / checked off (`is_completed = true`).
    Completed,
}

impl ItemStatus {
    /// Maps the persisted completion flag to a status.
    #[inline]
    pub const fn from_completed(is_completed: bool) -> Self {
        if is_completed {
            ItemStatus::Completed
        } else {
            ItemStatus::Pending
        }
    }

    /// The single transition: Pending ⇄ Completed.
    #[inline]
    pub const fn toggled(self) -> Self {
        match self {
            ItemStatus::Pending => ItemStatus::Completed,
            ItemStatus::Completed => ItemStatus::Pending,
        }
    }

    #[inline]
    pub const fn is_completed(self) -> bool {
        matches!(self, ItemStatus::Completed)
    }
}

// =============================================================================
// Item
// =============================================================================

/// A single grocery-list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier (UUID v4), immutable.
    pub id: String,

    /// Display text, set once at creation.
    pub title: String,

    /// Whether the item has been checked off.
    pub is_completed: bool,

    /// Insertion sequence number. Strictly increasing, never reused;
    /// this is the display order.
    pub position: i64,

    /// When the item was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the completion flag last changed.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Returns the item's current state.
    #[inline]
    pub fn status(&self) -> ItemStatus {
        ItemStatus::from_completed(self.is_completed)
    }
}

// =============================================================================
// New Item
// =============================================================================

/// A creation request. The store assigns id, position and timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub title: String,
    pub is_completed: bool,
}

impl NewItem {
    /// A pending item, as created by the "add" path.
    pub fn pending(title: impl Into<String>) -> Self {
        NewItem {
            title: title.into(),
            is_completed: false,
        }
    }

    pub fn with_completed(title: impl Into<String>, is_completed: bool) -> Self {
        NewItem {
            title: title.into(),
            is_completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item(is_completed: bool) -> Item {
        let now = Utc::now();
        Item {
            id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            title: "Milk".to_string(),
            is_completed,
            position: 1,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_status_toggle_is_involution() {
        for status in [ItemStatus::Pending, ItemStatus::Completed] {
            assert_ne!(status.toggled(), status);
            assert_eq!(status.toggled().toggled(), status);
        }
    }

    #[test]
    fn test_status_default_is_pending() {
        assert_eq!(ItemStatus::default(), ItemStatus::Pending);
    }

    #[test]
    fn test_item_status_follows_flag() {
        assert_eq!(sample_item(false).status(), ItemStatus::Pending);
        assert_eq!(sample_item(true).status(), ItemStatus::Completed);
        assert!(sample_item(true).status().is_completed());
    }

    #[test]
    fn test_new_item_pending() {
        let item = NewItem::pending("Eggs");
        assert_eq!(item.title, "Eggs");
        assert!(!item.is_completed);
    }

    #[test]
    fn test_item_serializes_camel_case() {
        let json = serde_json::to_value(sample_item(true)).unwrap();
        assert_eq!(json["isCompleted"], serde_json::Value::Bool(true));
        assert_eq!(json["title"], "Milk");
        assert!(json.get("is_completed").is_none());
    }
}
