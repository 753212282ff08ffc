//! # CLI Error Type
//!
//! Unified error type for commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the CLI                                │
//! │                                                                         │
//! │  Command Function → Result<T, CliError>                                │
//! │         │                                                               │
//! │         ├── StoreError::NotFound ──────────► NOT_FOUND        (exit 2) │
//! │         ├── StoreError::InvalidTitle ──────► VALIDATION_ERROR (exit 3) │
//! │         ├── StoreError::Storage(DbError) ──► DATABASE_ERROR   (exit 4) │
//! │         ├── ConfigError ───────────────────► CONFIG_ERROR     (exit 5) │
//! │         └── io / json failures ────────────► INTERNAL         (exit 1) │
//! │                                                                         │
//! │  Text mode:  "error: Item not found: #7" on stderr                     │
//! │  JSON mode:  {"code":"NOT_FOUND","message":"..."} on stderr            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use grocery_core::CoreError;
use grocery_db::{DbError, StoreError};
use serde::Serialize;

use crate::config::ConfigError;

/// Error returned from commands.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CliError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes, one per exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Referenced item doesn't exist
    NotFound,

    /// Input rejected (empty title, malformed id, bad session command)
    ValidationError,

    /// Storage failed; the list is unchanged
    DatabaseError,

    /// Environment or flags could not be turned into a config
    ConfigError,

    /// Anything else (terminal I/O, serialization)
    Internal,
}

impl ErrorCode {
    /// Process exit status for this error class.
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorCode::Internal => 1,
            ErrorCode::NotFound => 2,
            ErrorCode::ValidationError => 3,
            ErrorCode::DatabaseError => 4,
            ErrorCode::ConfigError => 5,
        }
    }
}

impl CliError {
    /// Creates a new CLI error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CliError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        CliError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        CliError::new(ErrorCode::Internal, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.code.exit_code()
    }
}

/// Converts database errors to CLI errors.
///
/// Infrastructure details go to the log; the user gets a short message.
impl From<DbError> for CliError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => {
                CliError::new(ErrorCode::NotFound, format!("{} not found: {}", entity, id))
            }
            DbError::ConnectionFailed(e) => {
                tracing::error!("Database connection failed: {}", e);
                CliError::new(
                    ErrorCode::DatabaseError,
                    format!("Could not open the grocery list: {}", e),
                )
            }
            DbError::MigrationFailed(e) => {
                tracing::error!("Migration failed: {}", e);
                CliError::new(ErrorCode::DatabaseError, "Database migration failed")
            }
            other => {
                tracing::error!("Database operation failed: {}", other);
                CliError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
        }
    }
}

/// Converts store errors to CLI errors.
impl From<StoreError> for CliError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id } => {
                CliError::new(ErrorCode::NotFound, format!("Item not found: {}", id))
            }
            StoreError::InvalidTitle(e) => CliError::validation(e.to_string()),
            StoreError::Storage(e) => CliError::from(e),
        }
    }
}

/// Converts core errors to CLI errors.
impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ItemNotFound(id) => {
                CliError::new(ErrorCode::NotFound, format!("Item not found: {}", id))
            }
            CoreError::Validation(e) => CliError::validation(e.to_string()),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::internal(format!("I/O error: {}", err))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::internal(format!("JSON error: {}", err))
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}
