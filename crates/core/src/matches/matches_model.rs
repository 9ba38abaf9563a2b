//! Match record domain models.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Where a match was played, from the club's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Venue {
    #[default]
    Home,
    Away,
}

/// Result of a match, derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchOutcome {
    Win,
    Draw,
    Loss,
}

/// Domain model representing a recorded match.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub id: String,
    pub opponent: String,
    pub match_date: NaiveDate,
    pub venue: Venue,
    pub goals_for: u32,
    pub goals_against: u32,
    pub competition: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl MatchRecord {
    /// Derives the outcome from the recorded score.
    pub fn outcome(&self) -> MatchOutcome {
        match self.goals_for.cmp(&self.goals_against) {
            std::cmp::Ordering::Greater => MatchOutcome::Win,
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
            std::cmp::Ordering::Less => MatchOutcome::Loss,
        }
    }
}

/// Input model for recording a new match.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub opponent: String,
    pub match_date: NaiveDate,
    pub venue: Venue,
    pub goals_for: u32,
    pub goals_against: u32,
    pub competition: Option<String>,
    pub notes: Option<String>,
}

impl NewMatch {
    /// Validates the new match data.
    pub fn validate(&self) -> Result<()> {
        if self.opponent.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Opponent cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for updating an existing match record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchUpdate {
    pub id: Option<String>,
    pub opponent: String,
    pub match_date: NaiveDate,
    pub venue: Venue,
    pub goals_for: u32,
    pub goals_against: u32,
    pub competition: Option<String>,
    pub notes: Option<String>,
}

impl MatchUpdate {
    /// Validates the match update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::Validation(ValidationError::MissingField(
                "id".to_string(),
            )));
        }
        if self.opponent.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Opponent cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}
