//! Player repository and service traits.
//!
//! These traits define the contract for roster operations without any
//! store-specific types, allowing for different storage implementations.

use async_trait::async_trait;

use super::players_model::{NewPlayer, Player, PlayerUpdate};
use crate::errors::Result;

/// Trait defining the contract for Player repository operations.
#[async_trait]
pub trait PlayerRepositoryTrait: Send + Sync {
    /// Creates a new player.
    async fn create(&self, new_player: NewPlayer) -> Result<Player>;

    /// Updates an existing player.
    async fn update(&self, player_update: PlayerUpdate) -> Result<Player>;

    /// Deletes a player by id. Returns the number of deleted records.
    async fn delete(&self, player_id: &str) -> Result<usize>;

    /// Retrieves a player by id.
    async fn get_by_id(&self, player_id: &str) -> Result<Player>;

    /// Lists players, optionally filtered by active status.
    async fn list(&self, is_active_filter: Option<bool>) -> Result<Vec<Player>>;
}

/// Trait defining the contract for Player service operations.
///
/// The service layer handles business validation and event emission on top
/// of the repository.
#[async_trait]
pub trait PlayerServiceTrait: Send + Sync {
    /// Creates a new player with business validation.
    async fn create_player(&self, new_player: NewPlayer) -> Result<Player>;

    /// Updates an existing player with business validation.
    async fn update_player(&self, player_update: PlayerUpdate) -> Result<Player>;

    /// Deletes a player by id.
    async fn delete_player(&self, player_id: &str) -> Result<()>;

    /// Retrieves a player by id.
    async fn get_player(&self, player_id: &str) -> Result<Player>;

    /// Lists players with an optional active-status filter.
    async fn list_players(&self, is_active_filter: Option<bool>) -> Result<Vec<Player>>;

    /// Lists only active players.
    async fn get_active_players(&self) -> Result<Vec<Player>>;
}
