//! Player domain models.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Field position a player lines up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Position {
    Goalkeeper,
    Defender,
    #[default]
    Midfielder,
    Forward,
}

/// Domain model representing a squad member.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub name: String,
    pub position: Position,
    pub squad_number: Option<i32>,
    pub date_of_birth: Option<NaiveDate>,
    /// Image cache key or URL for the player photo
    pub photo: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for adding a player to the roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlayer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub position: Position,
    pub squad_number: Option<i32>,
    pub date_of_birth: Option<NaiveDate>,
    pub photo: Option<String>,
    pub is_active: bool,
}

impl NewPlayer {
    /// Validates the new player data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Player name cannot be empty".to_string(),
            )));
        }
        if let Some(number) = self.squad_number {
            if !(1..=99).contains(&number) {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Squad number must be between 1 and 99".to_string(),
                )));
            }
        }
        Ok(())
    }
}

/// Input model for updating an existing player.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerUpdate {
    pub id: Option<String>,
    pub name: String,
    pub position: Position,
    pub squad_number: Option<i32>,
    pub date_of_birth: Option<NaiveDate>,
    pub photo: Option<String>,
    pub is_active: bool,
}

impl PlayerUpdate {
    /// Validates the player update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::Validation(ValidationError::MissingField(
                "id".to_string(),
            )));
        }
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Player name cannot be empty".to_string(),
            )));
        }
        if let Some(number) = self.squad_number {
            if !(1..=99).contains(&number) {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Squad number must be between 1 and 99".to_string(),
                )));
            }
        }
        Ok(())
    }
}
