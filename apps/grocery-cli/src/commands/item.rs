//! # Item Commands
//!
//! `list`, `add`, `toggle`, `delete`, `essentials`.
//!
//! Text mode prints a one-line summary followed by the refreshed list.
//! JSON mode prints only the result of the operation.

use grocery_db::ItemStore;
use serde_json::json;
use std::io::Write;
use tracing::debug;

use super::resolve_item;
use crate::error::CliError;
use crate::render::{render_json, render_list, OutputFormat};

async fn refresh<W: Write>(store: &ItemStore, out: &mut W) -> Result<(), CliError> {
    let items = store.list_all().await?;
    render_list(out, &items, OutputFormat::Text)?;
    Ok(())
}

/// Prints every item in insertion order, or the empty state.
pub async fn list<W: Write>(store: &ItemStore, out: &mut W, format: OutputFormat) -> Result<(), CliError> {
    let items = store.list_all().await?;
    debug!(count = items.len(), "Rendering list");
    render_list(out, &items, format)?;
    Ok(())
}

/// Adds one item. An empty string never reaches the store; whitespace is
/// left to the store's title policy.
pub async fn add<W: Write>(
    store: &ItemStore,
    out: &mut W,
    format: OutputFormat,
    title: &str,
) -> Result<(), CliError> {
    if title.is_empty() {
        return Err(CliError::validation("Nothing to add: the title is empty"));
    }

    let item = store.add(title).await?;

    match format {
        OutputFormat::Json => render_json(out, &item)?,
        OutputFormat::Text => {
            writeln!(out, "Added: {}", item.title)?;
            refresh(store, out).await?;
        }
    }
    Ok(())
}

/// Checks or unchecks an item.
pub async fn toggle<W: Write>(
    store: &ItemStore,
    out: &mut W,
    format: OutputFormat,
    selector: &str,
) -> Result<(), CliError> {
    let target = resolve_item(store, selector).await?;
    let item = store.toggle_completed(&target.id).await?;

    match format {
        OutputFormat::Json => render_json(out, &item)?,
        OutputFormat::Text => {
            let verb = if item.is_completed { "Done" } else { "Not done" };
            writeln!(out, "{}: {}", verb, item.title)?;
            refresh(store, out).await?;
        }
    }
    Ok(())
}

/// Deletes an item permanently.
pub async fn delete<W: Write>(
    store: &ItemStore,
    out: &mut W,
    format: OutputFormat,
    selector: &str,
) -> Result<(), CliError> {
    let target = resolve_item(store, selector).await?;
    store.delete(&target.id).await?;

    match format {
        OutputFormat::Json => render_json(out, &json!({ "deleted": target.id }))?,
        OutputFormat::Text => {
            writeln!(out, "Deleted: {}", target.title)?;
            refresh(store, out).await?;
        }
    }
    Ok(())
}

/// Seeds the essentials. Only offered on an empty list unless forced.
pub async fn essentials<W: Write>(
    store: &ItemStore,
    out: &mut W,
    format: OutputFormat,
    force: bool,
) -> Result<(), CliError> {
    let count = store.count().await?;
    if count > 0 && !force {
        return Err(CliError::validation(format!(
            "The list already has {} item(s); use --force to add the essentials anyway",
            count
        )));
    }

    let items = store.seed_essentials().await?;

    match format {
        OutputFormat::Json => render_json(out, &items)?,
        OutputFormat::Text => {
            writeln!(out, "Added {} essentials", items.len())?;
            refresh(store, out).await?;
        }
    }
    Ok(())
}
