//! # Interactive Session
//!
//! Reads one command per line and keeps the list on screen up to date.
//! The store's change events drive the output: after every command the
//! pending events are described and the list is re-read.
//!
//! ```text
//! add <title>      toggle <item>      delete <item>
//! essentials       list               help       quit
//! ```

use grocery_db::{ItemStore, StoreEvent};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing::{debug, warn};

use super::resolve_item;
use crate::error::CliError;
use crate::render::{describe_event, render_list, OutputFormat};

const HELP: &str = "Commands: add <title>, toggle <item>, delete <item>, essentials, list, help, quit";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Add(String),
    Toggle(String),
    Delete(String),
    Essentials,
    List,
    Help,
    Quit,
}

impl SessionCommand {
    /// Parses a line. `Ok(None)` for blank lines.
    pub fn parse(line: &str) -> Result<Option<Self>, CliError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "add" | "a" => SessionCommand::Add(rest.to_string()),
            "toggle" | "t" => SessionCommand::Toggle(required(verb, rest)?),
            "delete" | "d" | "rm" => SessionCommand::Delete(required(verb, rest)?),
            "essentials" => SessionCommand::Essentials,
            "list" | "ls" => SessionCommand::List,
            "help" | "?" => SessionCommand::Help,
            "quit" | "exit" | "q" => SessionCommand::Quit,
            other => {
                return Err(CliError::validation(format!("Unknown command: {}", other)));
            }
        };
        Ok(Some(command))
    }
}

fn required(verb: &str, rest: &str) -> Result<String, CliError> {
    if rest.is_empty() {
        Err(CliError::validation(format!("{} needs an item number or id", verb)))
    } else {
        Ok(rest.to_string())
    }
}

/// Runs the session until `quit` or end of input.
pub async fn run<R, W>(store: &ItemStore, input: R, out: &mut W) -> Result<(), CliError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut events = store.subscribe();
    let mut lines = input.lines();

    render_list(out, &store.list_all().await?, OutputFormat::Text)?;
    out.flush()?;

    while let Some(line) = lines.next_line().await? {
        let command = match SessionCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(out, "error: {}", err)?;
                out.flush()?;
                continue;
            }
        };

        debug!(?command, "Session command");
        match command {
            SessionCommand::Quit => break,
            SessionCommand::Help => {
                writeln!(out, "{}", HELP)?;
                out.flush()?;
                continue;
            }
            SessionCommand::List => {}
            command => {
                if let Err(err) = apply(store, command).await {
                    writeln!(out, "error: {}", err)?;
                    // A failed seed can still have committed some items.
                    if drain(&mut events, out)? > 0 {
                        render_list(out, &store.list_all().await?, OutputFormat::Text)?;
                    }
                    out.flush()?;
                    continue;
                }
            }
        }

        drain(&mut events, out)?;
        render_list(out, &store.list_all().await?, OutputFormat::Text)?;
        out.flush()?;
    }

    Ok(())
}

async fn apply(store: &ItemStore, command: SessionCommand) -> Result<(), CliError> {
    match command {
        SessionCommand::Add(title) => {
            if title.is_empty() {
                return Err(CliError::validation("Nothing to add: the title is empty"));
            }
            store.add(&title).await?;
        }
        SessionCommand::Toggle(selector) => {
            let item = resolve_item(store, &selector).await?;
            store.toggle_completed(&item.id).await?;
        }
        SessionCommand::Delete(selector) => {
            let item = resolve_item(store, &selector).await?;
            store.delete(&item.id).await?;
        }
        SessionCommand::Essentials => {
            if !store.is_empty().await? {
                return Err(CliError::validation(
                    "Essentials are only offered for an empty list",
                ));
            }
            store.seed_essentials().await?;
        }
        SessionCommand::List | SessionCommand::Help | SessionCommand::Quit => {}
    }
    Ok(())
}

/// Describes every pending event and returns how many there were.
fn drain<W: Write>(events: &mut broadcast::Receiver<StoreEvent>, out: &mut W) -> Result<usize, CliError> {
    let mut seen = 0;
    loop {
        match events.try_recv() {
            Ok(event) => {
                writeln!(out, "{}", describe_event(&event))?;
                seen += 1;
            }
            Err(TryRecvError::Lagged(skipped)) => {
                warn!(skipped, "Session fell behind on store events");
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return Ok(seen),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grocery_db::{DbConfig, StoreConfig};

    async fn store() -> ItemStore {
        ItemStore::open(DbConfig::in_memory(), StoreConfig::default())
            .await
            .unwrap()
    }

    async fn session(store: &ItemStore, script: &'static [u8]) -> String {
        let mut out = Vec::new();
        run(store, script, &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            SessionCommand::parse("add  Whole Milk ").unwrap(),
            Some(SessionCommand::Add("Whole Milk".to_string()))
        );
        assert_eq!(
            SessionCommand::parse("T 2").unwrap(),
            Some(SessionCommand::Toggle("2".to_string()))
        );
        assert_eq!(SessionCommand::parse("   ").unwrap(), None);
        assert_eq!(SessionCommand::parse("quit").unwrap(), Some(SessionCommand::Quit));
        assert!(SessionCommand::parse("delete").is_err());
        assert!(SessionCommand::parse("buy milk").is_err());
    }

    #[tokio::test]
    async fn test_session_reflects_each_change() {
        let store = store().await;
        let out = session(&store, b"add Milk\ntoggle 1\nquit\nadd Ignored\n").await;

        assert!(out.starts_with("Empty Cart\n"));
        assert!(out.contains("Added: Milk\nGrocery List\n  1. [ ] Milk\n"));
        assert!(out.contains("Done: Milk\nGrocery List\n  1. [x] Milk\n"));
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_session_survives_errors() {
        let store = store().await;
        let out = session(&store, b"add   \ndelete 3\nfly\nadd Eggs\n").await;

        assert!(out.contains("error: Nothing to add"));
        assert!(out.contains("error: Unknown command: fly"));
        assert!(out.contains("  1. [ ] Eggs\n"));
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_session_essentials_only_when_empty() {
        let store = store().await;
        let out = session(&store, b"essentials\nessentials\n").await;

        assert!(out.contains("Added 5 essentials"));
        assert!(out.contains("error: Essentials are only offered for an empty list"));
        assert_eq!(store.count().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_session_shows_partial_seed_right_away() {
        let store = store().await;
        sqlx::query(
            r#"
            CREATE TRIGGER reject_cereals BEFORE INSERT ON items
            WHEN NEW.title = 'Cereals'
            BEGIN
                SELECT RAISE(ABORT, 'disk full');
            END
            "#,
        )
        .execute(store.database().pool())
        .await
        .unwrap();

        let out = session(&store, b"essentials
").await;

        let after_error = out.split("error: ").nth(1).unwrap();
        assert!(after_error.contains("Added 2 essentials
Grocery List
"));
        assert!(after_error.contains("  2. [x] Meat & Seafood
"));
        assert_eq!(store.count().await.unwrap(), 2);
    }
}
