use async_trait::async_trait;

use clubdesk_core::constants::MATCHES_TABLE;
use clubdesk_core::errors::{Error, RemoteError, Result, ValidationError};
use clubdesk_core::matches::{MatchRecord, MatchRepositoryTrait, MatchUpdate, NewMatch};

use super::model::{MatchRow, NewMatchRow, UpdateMatchRow};
use crate::client::RowStoreClient;
use crate::error::StoreError;

pub struct RemoteMatchRepository {
    client: RowStoreClient,
}

impl RemoteMatchRepository {
    pub fn new(client: RowStoreClient) -> Self {
        RemoteMatchRepository { client }
    }
}

#[async_trait]
impl MatchRepositoryTrait for RemoteMatchRepository {
    async fn create(&self, new_match: NewMatch) -> Result<MatchRecord> {
        let row: MatchRow = self
            .client
            .insert(MATCHES_TABLE, &NewMatchRow::from(new_match))
            .await
            .map_err(StoreError::into_write)?;
        Ok(row.into())
    }

    async fn update(&self, match_update: MatchUpdate) -> Result<MatchRecord> {
        let id = match_update
            .id
            .clone()
            .ok_or_else(|| Error::Validation(ValidationError::MissingField("id".to_string())))?;

        let row: MatchRow = self
            .client
            .update_by_id(MATCHES_TABLE, &id, &UpdateMatchRow::from(match_update))
            .await
            .map_err(StoreError::into_write)?;
        Ok(row.into())
    }

    async fn delete(&self, match_id: &str) -> Result<usize> {
        self.client
            .delete_by_id(MATCHES_TABLE, match_id)
            .await
            .map_err(StoreError::into_write)
    }

    async fn get_by_id(&self, match_id: &str) -> Result<MatchRecord> {
        let row: Option<MatchRow> = self
            .client
            .select_by_id(MATCHES_TABLE, match_id)
            .await
            .map_err(Error::from)?;

        row.map(Into::into)
            .ok_or_else(|| Error::Remote(RemoteError::NotFound(format!("Match {}", match_id))))
    }

    async fn list(&self) -> Result<Vec<MatchRecord>> {
        let rows: Vec<MatchRow> = self
            .client
            .list(MATCHES_TABLE, &[("order", "match_date.desc")])
            .await
            .map_err(Error::from)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
