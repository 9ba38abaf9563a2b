//! Remote store implementation for the player roster.

mod model;
mod repository;

pub use model::{NewPlayerRow, PlayerRow, UpdatePlayerRow};
pub use repository::RemotePlayerRepository;

// Re-export trait from core for convenience
pub use clubdesk_core::players::PlayerRepositoryTrait;
