//! Wire models for match rows.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use clubdesk_core::matches::{MatchRecord, MatchUpdate, NewMatch, Venue};

/// Remote row for the matches table (snake_case column names).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRow {
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

impl From<MatchRow> for MatchRecord {
    fn from(row: MatchRow) -> Self {
        MatchRecord {
            id: row.id,
            opponent: row.opponent,
            match_date: row.match_date,
            venue: row.venue,
            goals_for: row.goals_for,
            goals_against: row.goals_against,
            competition: row.competition,
            notes: row.notes,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Insert payload for a new match record. Timestamps are set by the store.
#[derive(Debug, Clone, Serialize)]
pub struct NewMatchRow {
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

impl From<NewMatch> for NewMatchRow {
    fn from(new_match: NewMatch) -> Self {
        NewMatchRow {
            id: new_match.id,
            opponent: new_match.opponent,
            match_date: new_match.match_date,
            venue: new_match.venue,
            goals_for: new_match.goals_for,
            goals_against: new_match.goals_against,
            competition: new_match.competition,
            notes: new_match.notes,
        }
    }
}

/// Update payload for an existing match record.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateMatchRow {
    pub opponent: String,
    pub match_date: NaiveDate,
    pub venue: Venue,
    pub goals_for: u32,
    pub goals_against: u32,
    pub competition: Option<String>,
    pub notes: Option<String>,
}

impl From<MatchUpdate> for UpdateMatchRow {
    fn from(update: MatchUpdate) -> Self {
        UpdateMatchRow {
            opponent: update.opponent,
            match_date: update.match_date,
            venue: update.venue,
            goals_for: update.goals_for,
            goals_against: update.goals_against,
            competition: update.competition,
            notes: update.notes,
        }
    }
}
