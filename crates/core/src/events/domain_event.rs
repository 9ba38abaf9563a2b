//! Domain event types.

use serde::{Deserialize, Serialize};

use crate::settings::ClubSettings;

/// Domain events emitted by core services after successful mutations.
///
/// These events represent facts about domain data changes. Runtime adapters
/// translate them into platform-specific actions.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// The club settings cache changed, locally or via a remote notification.
    /// Carries the full post-change settings value.
    SettingsChanged { settings: ClubSettings },

    /// Players were created, updated, or deleted.
    PlayersChanged { player_ids: Vec<String> },

    /// Match records were created, updated, or deleted.
    MatchesChanged { match_ids: Vec<String> },
}

impl DomainEvent {
    /// Creates a SettingsChanged event.
    pub fn settings_changed(settings: ClubSettings) -> Self {
        Self::SettingsChanged { settings }
    }

    /// Creates a PlayersChanged event.
    pub fn players_changed(player_ids: Vec<String>) -> Self {
        Self::PlayersChanged { player_ids }
    }

    /// Creates a MatchesChanged event.
    pub fn matches_changed(match_ids: Vec<String>) -> Self {
        Self::MatchesChanged { match_ids }
    }
}
