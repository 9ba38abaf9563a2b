//! Wire models for player rows.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use clubdesk_core::players::{NewPlayer, Player, PlayerUpdate, Position};

/// Remote row for the players table (snake_case column names).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRow {
    pub id: String,
    pub name: String,
    pub position: Position,
    pub squad_number: Option<i32>,
    pub date_of_birth: Option<NaiveDate>,
    pub photo: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<PlayerRow> for Player {
    fn from(row: PlayerRow) -> Self {
        Player {
            id: row.id,
            name: row.name,
            position: row.position,
            squad_number: row.squad_number,
            date_of_birth: row.date_of_birth,
            photo: row.photo,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Insert payload for a new player. Timestamps are set by the store.
#[derive(Debug, Clone, Serialize)]
pub struct NewPlayerRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub position: Position,
    pub squad_number: Option<i32>,
    pub date_of_birth: Option<NaiveDate>,
    pub photo: Option<String>,
    pub is_active: bool,
}

impl From<NewPlayer> for NewPlayerRow {
    fn from(new_player: NewPlayer) -> Self {
        NewPlayerRow {
            id: new_player.id,
            name: new_player.name,
            position: new_player.position,
            squad_number: new_player.squad_number,
            date_of_birth: new_player.date_of_birth,
            photo: new_player.photo,
            is_active: new_player.is_active,
        }
    }
}

/// Update payload for an existing player. The id travels in the query
/// filter, not the body; `updated_at` is maintained by the store.
#[derive(Debug, Clone, Serialize)]
pub struct UpdatePlayerRow {
    pub name: String,
    pub position: Position,
    pub squad_number: Option<i32>,
    pub date_of_birth: Option<NaiveDate>,
    pub photo: Option<String>,
    pub is_active: bool,
}

impl From<PlayerUpdate> for UpdatePlayerRow {
    fn from(update: PlayerUpdate) -> Self {
        UpdatePlayerRow {
            name: update.name,
            position: update.position,
            squad_number: update.squad_number,
            date_of_birth: update.date_of_birth,
            photo: update.photo,
            is_active: update.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_row_wire_shape_is_snake_case() {
        let new_player = NewPlayer {
            id: Some("p-1".to_string()),
            name: "Dele Archer".to_string(),
            position: Position::Forward,
            squad_number: Some(9),
            date_of_birth: None,
            photo: None,
            is_active: true,
        };

        let json = serde_json::to_value(NewPlayerRow::from(new_player)).unwrap();

        assert_eq!(json.get("squad_number").unwrap(), 9);
        assert_eq!(json.get("position").unwrap(), "FORWARD");
        assert!(json.get("squadNumber").is_none());
    }
}
