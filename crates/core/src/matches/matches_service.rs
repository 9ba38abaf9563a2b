use log::debug;
use std::sync::Arc;

use super::matches_model::{MatchRecord, MatchUpdate, NewMatch};
use super::matches_traits::{MatchRepositoryTrait, MatchServiceTrait};
use crate::errors::Result;
use crate::events::{DomainEvent, DomainEventSink};

/// Service for managing match records.
pub struct MatchService {
    repository: Arc<dyn MatchRepositoryTrait>,
    events: Arc<dyn DomainEventSink>,
}

impl MatchService {
    /// Creates a new MatchService instance
    pub fn new(
        repository: Arc<dyn MatchRepositoryTrait>,
        events: Arc<dyn DomainEventSink>,
    ) -> Self {
        Self { repository, events }
    }
}

#[async_trait::async_trait]
impl MatchServiceTrait for MatchService {
    async fn create_match(&self, new_match: NewMatch) -> Result<MatchRecord> {
        new_match.validate()?;
        debug!(
            "Recording match vs {} on {}",
            new_match.opponent, new_match.match_date
        );

        let mut new_match = new_match;
        if new_match.id.is_none() {
            new_match.id = Some(uuid::Uuid::new_v4().to_string());
        }

        let record = self.repository.create(new_match).await?;
        self.events
            .emit(DomainEvent::matches_changed(vec![record.id.clone()]));
        Ok(record)
    }

    async fn update_match(&self, match_update: MatchUpdate) -> Result<MatchRecord> {
        match_update.validate()?;

        let record = self.repository.update(match_update).await?;
        self.events
            .emit(DomainEvent::matches_changed(vec![record.id.clone()]));
        Ok(record)
    }

    async fn delete_match(&self, match_id: &str) -> Result<()> {
        self.repository.delete(match_id).await?;
        self.events
            .emit(DomainEvent::matches_changed(vec![match_id.to_string()]));
        Ok(())
    }

    async fn get_match(&self, match_id: &str) -> Result<MatchRecord> {
        self.repository.get_by_id(match_id).await
    }

    async fn list_matches(&self) -> Result<Vec<MatchRecord>> {
        self.repository.list().await
    }
}
