//! Match repository and service traits.

use async_trait::async_trait;

use super::matches_model::{MatchRecord, MatchUpdate, NewMatch};
use crate::errors::Result;

/// Trait defining the contract for match record repository operations.
#[async_trait]
pub trait MatchRepositoryTrait: Send + Sync {
    /// Records a new match.
    async fn create(&self, new_match: NewMatch) -> Result<MatchRecord>;

    /// Updates an existing match record.
    async fn update(&self, match_update: MatchUpdate) -> Result<MatchRecord>;

    /// Deletes a match record by id. Returns the number of deleted records.
    async fn delete(&self, match_id: &str) -> Result<usize>;

    /// Retrieves a match record by id.
    async fn get_by_id(&self, match_id: &str) -> Result<MatchRecord>;

    /// Lists match records, most recent first.
    async fn list(&self) -> Result<Vec<MatchRecord>>;
}

/// Trait defining the contract for match record service operations.
#[async_trait]
pub trait MatchServiceTrait: Send + Sync {
    /// Records a new match with business validation.
    async fn create_match(&self, new_match: NewMatch) -> Result<MatchRecord>;

    /// Updates an existing match record with business validation.
    async fn update_match(&self, match_update: MatchUpdate) -> Result<MatchRecord>;

    /// Deletes a match record by id.
    async fn delete_match(&self, match_id: &str) -> Result<()>;

    /// Retrieves a match record by id.
    async fn get_match(&self, match_id: &str) -> Result<MatchRecord>;

    /// Lists all match records.
    async fn list_matches(&self) -> Result<Vec<MatchRecord>>;
}
