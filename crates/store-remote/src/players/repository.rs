use async_trait::async_trait;

use clubdesk_core::constants::PLAYERS_TABLE;
use clubdesk_core::errors::{Error, RemoteError, Result, ValidationError};
use clubdesk_core::players::{NewPlayer, Player, PlayerRepositoryTrait, PlayerUpdate};

use super::model::{NewPlayerRow, PlayerRow, UpdatePlayerRow};
use crate::client::RowStoreClient;
use crate::error::StoreError;

pub struct RemotePlayerRepository {
    client: RowStoreClient,
}

impl RemotePlayerRepository {
    pub fn new(client: RowStoreClient) -> Self {
        RemotePlayerRepository { client }
    }
}

#[async_trait]
impl PlayerRepositoryTrait for RemotePlayerRepository {
    async fn create(&self, new_player: NewPlayer) -> Result<Player> {
        let row: PlayerRow = self
            .client
            .insert(PLAYERS_TABLE, &NewPlayerRow::from(new_player))
            .await
            .map_err(StoreError::into_write)?;
        Ok(row.into())
    }

    async fn update(&self, player_update: PlayerUpdate) -> Result<Player> {
        let id = player_update
            .id
            .clone()
            .ok_or_else(|| Error::Validation(ValidationError::MissingField("id".to_string())))?;

        let row: PlayerRow = self
            .client
            .update_by_id(PLAYERS_TABLE, &id, &UpdatePlayerRow::from(player_update))
            .await
            .map_err(StoreError::into_write)?;
        Ok(row.into())
    }

    async fn delete(&self, player_id: &str) -> Result<usize> {
        self.client
            .delete_by_id(PLAYERS_TABLE, player_id)
            .await
            .map_err(StoreError::into_write)
    }

    async fn get_by_id(&self, player_id: &str) -> Result<Player> {
        let row: Option<PlayerRow> = self
            .client
            .select_by_id(PLAYERS_TABLE, player_id)
            .await
            .map_err(Error::from)?;

        row.map(Into::into).ok_or_else(|| {
            Error::Remote(RemoteError::NotFound(format!("Player {}", player_id)))
        })
    }

    async fn list(&self, is_active_filter: Option<bool>) -> Result<Vec<Player>> {
        let mut query: Vec<(&str, &str)> = vec![("order", "name.asc")];
        match is_active_filter {
            Some(true) => query.push(("is_active", "eq.true")),
            Some(false) => query.push(("is_active", "eq.false")),
            None => {}
        }

        let rows: Vec<PlayerRow> = self
            .client
            .list(PLAYERS_TABLE, &query)
            .await
            .map_err(Error::from)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
