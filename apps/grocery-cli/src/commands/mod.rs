//! # Commands
//!
//! One function per subcommand. Each performs at most one store mutation,
//! then renders the post-mutation list, mirroring a UI that re-reads the
//! store after every change.
//!
//! ## Item Selectors
//! `toggle` and `delete` accept either the 1-based number printed by
//! `list` or a full item id:
//!
//! ```text
//! grocery toggle 2
//! grocery delete 9a41c2de-55a3-4c43-8d3f-2f6a3c1f0b7e
//! ```

pub mod item;
pub mod session;

use grocery_core::validation::validate_uuid;
use grocery_core::{CoreError, Item};
use grocery_db::ItemStore;

use crate::error::CliError;

/// Resolves a selector to a live item.
pub async fn resolve_item(store: &ItemStore, selector: &str) -> Result<Item, CliError> {
    let selector = selector.trim();

    if let Ok(number) = selector.parse::<usize>() {
        let items = store.list_all().await?;
        return number
            .checked_sub(1)
            .and_then(|index| items.into_iter().nth(index))
            .ok_or_else(|| CoreError::ItemNotFound(format!("#{}", number)).into());
    }

    validate_uuid(selector).map_err(CoreError::from)?;
    Ok(store.get(selector).await?)
}
