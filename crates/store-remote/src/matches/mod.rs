//! Remote store implementation for match records.

mod model;
mod repository;

pub use model::{MatchRow, NewMatchRow, UpdateMatchRow};
pub use repository::RemoteMatchRepository;

// Re-export trait from core for convenience
pub use clubdesk_core::matches::MatchRepositoryTrait;
