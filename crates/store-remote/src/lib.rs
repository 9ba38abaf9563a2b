//! Remote row-store implementation for ClubDesk.
//!
//! This crate implements the repository traits defined in `clubdesk-core`
//! against a hosted row store with a PostgREST-style REST API. It contains:
//! - The shared HTTP client (auth headers, row selection, upsert semantics)
//! - Repository implementations for all domain entities
//! - Wire model types (snake_case row shapes)
//! - The polling watcher that feeds the settings change subscription
//!
//! # Architecture
//!
//! This crate is the only place in the application that knows about the
//! remote transport. All other crates work with the core traits.
//!
//! ```text
//!          core (domain)
//!                │
//!                ▼
//!       store-remote (this crate)
//!                │
//!                ▼
//!         hosted row store
//! ```

pub mod client;
pub mod error;

// Repository implementations
pub mod matches;
pub mod players;
pub mod settings;

// Re-export the shared client and storage errors
pub use client::RowStoreClient;
pub use error::StoreError;

// Re-export from clubdesk-core for convenience
pub use clubdesk_core::errors::{Error, RemoteError, Result};
