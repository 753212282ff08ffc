//! # Rendering
//!
//! Turns store state into terminal output.
//!
//! ```text
//! Grocery List
//!   1. [ ] Bakery & Bread
//!   2. [x] Meat & Seafood
//!
//! -- or, when list_all() is empty --
//!
//! Empty Cart
//! Add some items to the shopping list.
//! Run `grocery essentials` to start with the basics.
//! ```

use grocery_core::{Item, ItemStatus};
use grocery_db::StoreEvent;
use serde::Serialize;
use std::io::{self, Write};

pub const LIST_TITLE: &str = "Grocery List";
pub const EMPTY_TITLE: &str = "Empty Cart";
pub const EMPTY_DESCRIPTION: &str = "Add some items to the shopping list.";
pub const ESSENTIALS_HINT: &str = "Run `grocery essentials` to start with the basics.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn marker(item: &Item) -> &'static str {
    match item.status() {
        ItemStatus::Pending => "[ ]",
        ItemStatus::Completed => "[x]",
    }
}

/// Renders the whole list, or the empty state when there is nothing.
pub fn render_list<W: Write>(out: &mut W, items: &[Item], format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Json => render_json(out, items),
        OutputFormat::Text if items.is_empty() => {
            writeln!(out, "{EMPTY_TITLE}")?;
            writeln!(out, "{EMPTY_DESCRIPTION}")?;
            writeln!(out, "{ESSENTIALS_HINT}")
        }
        OutputFormat::Text => {
            writeln!(out, "{LIST_TITLE}")?;
            let width = items.len().to_string().len();
            for (index, item) in items.iter().enumerate() {
                writeln!(
                    out,
                    "  {:>width$}. {} {}",
                    index + 1,
                    marker(item),
                    item.title,
                    width = width
                )?;
            }
            Ok(())
        }
    }
}

/// One line describing a committed change.
pub fn describe_event(event: &StoreEvent) -> String {
    match event {
        StoreEvent::Added { item } => format!("Added: {}", item.title),
        StoreEvent::Toggled { item } if item.is_completed => format!("Done: {}", item.title),
        StoreEvent::Toggled { item } => format!("Not done: {}", item.title),
        StoreEvent::Deleted { id } => format!("Deleted: {}", id),
        StoreEvent::Seeded { items } => format!("Added {} essentials", items.len()),
    }
}

pub fn render_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn item(position: i64, title: &str, is_completed: bool) -> Item {
        let now = Utc::now();
        Item {
            id: format!("id-{position}"),
            title: title.to_string(),
            is_completed,
            position,
            created_at: now,
            updated_at: now,
        }
    }

    fn text(items: &[Item]) -> String {
        let mut out = Vec::new();
        render_list(&mut out, items, OutputFormat::Text).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_empty_state() {
        let out = text(&[]);
        assert!(out.starts_with(EMPTY_TITLE));
        assert!(out.contains(EMPTY_DESCRIPTION));
        assert!(out.contains("grocery essentials"));
    }

    #[test]
    fn test_list_numbers_and_markers() {
        let out = text(&[item(1, "Milk", false), item(4, "Eggs", true)]);
        assert_eq!(out, "Grocery List\n  1. [ ] Milk\n  2. [x] Eggs\n");
    }

    #[test]
    fn test_numbers_are_right_aligned() {
        let items: Vec<Item> = (1..=10).map(|n| item(n, "X", false)).collect();
        let out = text(&items);
        assert!(out.contains("\n   1. [ ] X\n"));
        assert!(out.contains("\n  10. [ ] X\n"));
    }

    #[test]
    fn test_json_list() {
        let mut out = Vec::new();
        render_list(&mut out, &[item(1, "Milk", true)], OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["title"], "Milk");
        assert_eq!(value[0]["isCompleted"], true);
    }

    #[test]
    fn test_describe_event() {
        let milk = item(1, "Milk", true);
        assert_eq!(
            describe_event(&StoreEvent::Toggled { item: milk.clone() }),
            "Done: Milk"
        );
        assert_eq!(
            describe_event(&StoreEvent::Seeded {
                items: vec![milk.clone(), milk]
            }),
            "Added 2 essentials"
        );
    }
}
