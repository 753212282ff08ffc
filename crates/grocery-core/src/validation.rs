//! # Validation Module
//!
//! Input validation for grocery items.
//!
//! ## Validation Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Layer 1: Presentation shell                                           │
//! │  └── Refuses to submit empty input                                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Item Store                                                   │
//! │  └── THIS MODULE (unless the store runs in permissive mode)            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: SQLite                                                       │
//! │  └── NOT NULL / UNIQUE constraints                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates an item title.
///
/// A title must not be empty or whitespace-only. There is no upper bound
/// on length. The title is stored as given; trimming is only used for the
/// check.
///
/// ## Example
/// ```rust
/// use grocery_core::validation::validate_item_title;
///
/// assert!(validate_item_title("Milk").is_ok());
/// assert!(validate_item_title("   ").is_err());
/// ```
pub fn validate_item_title(title: &str) -> ValidationResult<()> {
    if title.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }

    Ok(())
}

/// Validates a UUID string format.
///
/// ## Example
/// ```rust
/// use grocery_core::validation::validate_uuid;
///
/// assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_uuid("not-a-uuid").is_err());
/// ```
pub fn validate_uuid(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_title() {
        assert!(validate_item_title("Milk").is_ok());
        assert!(validate_item_title("Cheese & Eggs").is_ok());
        assert!(validate_item_title("  Bread  ").is_ok());

        assert_eq!(
            validate_item_title(""),
            Err(ValidationError::Required {
                field: "title".to_string()
            })
        );
        assert!(validate_item_title(" \t\n").is_err());
    }

    #[test]
    fn test_validate_item_title_has_no_length_limit() {
        assert!(validate_item_title(&"a".repeat(201)).is_ok());
        assert!(validate_item_title(&"é".repeat(10_000)).is_ok());
    }

    #[test]
    fn test_validate_uuid() {
        assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(validate_uuid("").is_err());
        assert!(validate_uuid("123").is_err());
    }
}
