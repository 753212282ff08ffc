//! # grocery-core: Pure Domain Logic for the Grocery List
//!
//! This crate holds the domain model of the grocery checklist with zero I/O
//! dependencies. Persistence lives in `grocery-db`; rendering lives in the
//! `grocery` binary.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Grocery List Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Presentation Shell (`grocery` CLI)                 │   │
//! │  │     list ──► add ──► toggle ──► delete ──► essentials           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               grocery-db (Item Store, SQLite)                   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ grocery-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐   ┌─────────────┐   ┌────────────┐             │   │
//! │  │   │   types   │   │ essentials  │   │ validation │             │   │
//! │  │   │   Item    │   │  catalog    │   │   titles   │             │   │
//! │  │   │  Status   │   │  draw(rng)  │   │   ids      │             │   │
//! │  │   └───────────┘   └─────────────┘   └────────────┘             │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO AMBIENT RANDOMNESS                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Item, ItemStatus, NewItem)
//! - [`essentials`] - The built-in starter set offered on an empty list
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use grocery_core::essentials::draw_essentials;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let batch = draw_essentials(&mut rng);
//!
//! assert_eq!(batch.len(), 5);
//! assert_eq!(batch[0].title, "Bakery & Bread");
//! assert!(!batch[0].is_completed);
//! assert!(batch[1].is_completed);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod essentials;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, ValidationError};
pub use essentials::{draw_essentials, Essential, EssentialFlag, ESSENTIALS};
pub use types::*;
