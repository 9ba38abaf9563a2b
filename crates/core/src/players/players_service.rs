use log::debug;
use std::sync::Arc;

use super::players_model::{NewPlayer, Player, PlayerUpdate};
use super::players_traits::{PlayerRepositoryTrait, PlayerServiceTrait};
use crate::errors::Result;
use crate::events::{DomainEvent, DomainEventSink};

/// Service for managing the player roster.
pub struct PlayerService {
    repository: Arc<dyn PlayerRepositoryTrait>,
    events: Arc<dyn DomainEventSink>,
}

impl PlayerService {
    /// Creates a new PlayerService instance
    pub fn new(
        repository: Arc<dyn PlayerRepositoryTrait>,
        events: Arc<dyn DomainEventSink>,
    ) -> Self {
        Self { repository, events }
    }
}

#[async_trait::async_trait]
impl PlayerServiceTrait for PlayerService {
    async fn create_player(&self, new_player: NewPlayer) -> Result<Player> {
        new_player.validate()?;
        debug!("Creating player {}", new_player.name);

        let mut new_player = new_player;
        if new_player.id.is_none() {
            new_player.id = Some(uuid::Uuid::new_v4().to_string());
        }

        let player = self.repository.create(new_player).await?;
        self.events
            .emit(DomainEvent::players_changed(vec![player.id.clone()]));
        Ok(player)
    }

    async fn update_player(&self, player_update: PlayerUpdate) -> Result<Player> {
        player_update.validate()?;

        let player = self.repository.update(player_update).await?;
        self.events
            .emit(DomainEvent::players_changed(vec![player.id.clone()]));
        Ok(player)
    }

    async fn delete_player(&self, player_id: &str) -> Result<()> {
        self.repository.delete(player_id).await?;
        self.events
            .emit(DomainEvent::players_changed(vec![player_id.to_string()]));
        Ok(())
    }

    async fn get_player(&self, player_id: &str) -> Result<Player> {
        self.repository.get_by_id(player_id).await
    }

    async fn list_players(&self, is_active_filter: Option<bool>) -> Result<Vec<Player>> {
        self.repository.list(is_active_filter).await
    }

    async fn get_active_players(&self) -> Result<Vec<Player>> {
        self.list_players(Some(true)).await
    }
}
