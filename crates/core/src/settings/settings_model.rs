//! Club settings domain models and the remote row mapping.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CLUB_NAME, DEFAULT_LOGO_PATH, DEFAULT_PRIMARY_COLOR, SETTINGS_ROW_ID,
};
use crate::errors::{Error, Result, ValidationError};

/// Domain model for the club settings singleton.
///
/// Always a total value: every field carries either the remote value or its
/// fixed fallback. `finance_starting_balance` is not persisted remotely yet
/// and stays at its local default across syncs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubSettings {
    pub name: String,
    pub logo: String,
    pub primary_color: String,
    pub finance_starting_balance: Decimal,
}

impl Default for ClubSettings {
    fn default() -> Self {
        Self {
            name: DEFAULT_CLUB_NAME.to_string(),
            logo: DEFAULT_LOGO_PATH.to_string(),
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            finance_starting_balance: Decimal::ZERO,
        }
    }
}

impl ClubSettings {
    /// Builds settings from a remote row, falling back to the defaults for
    /// any field the row does not carry. Used on the initial load.
    pub fn from_row(row: ClubSettingsRow) -> Self {
        let defaults = Self::default();
        Self {
            name: row
                .name
                .filter(|n| !n.trim().is_empty())
                .unwrap_or(defaults.name),
            logo: row.logo.unwrap_or(defaults.logo),
            primary_color: row.primary_color.unwrap_or(defaults.primary_color),
            finance_starting_balance: defaults.finance_starting_balance,
        }
    }

    /// Applies a change-notification row, overwriting only the mapped fields
    /// the row actually carries. Fields outside the remote mapping
    /// (the finance starting balance) are never touched.
    pub fn apply_row(&mut self, row: ClubSettingsRow) {
        if let Some(name) = row.name.filter(|n| !n.trim().is_empty()) {
            self.name = name;
        }
        if let Some(logo) = row.logo {
            self.logo = logo;
        }
        if let Some(color) = row.primary_color {
            self.primary_color = color;
        }
    }

    /// Merges a partial update into this value. Absent fields are unchanged;
    /// overlapping fields are last-writer-wins.
    pub fn merge(&mut self, update: ClubSettingsUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(logo) = update.logo {
            self.logo = logo;
        }
        if let Some(color) = update.primary_color {
            self.primary_color = color;
        }
        if let Some(balance) = update.finance_starting_balance {
            self.finance_starting_balance = balance;
        }
    }
}

/// Partial update for the club settings. Every field is independently
/// optional, so the merge contract is explicit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubSettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finance_starting_balance: Option<Decimal>,
}

impl ClubSettingsUpdate {
    /// Validates the update data.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref name) = self.name {
            if name.trim().is_empty() {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Club name cannot be empty".to_string(),
                )));
            }
        }
        Ok(())
    }
}

/// Remote row shape for the settings singleton.
///
/// The remote store uses snake_case column names (`primary_color` vs the
/// domain's `primaryColor` serde surface); the mapping is identity on values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClubSettingsRow {
    pub id: i64,
    pub name: Option<String>,
    pub logo: Option<String>,
    pub primary_color: Option<String>,
}

impl ClubSettingsRow {
    /// Builds the remote row for the singleton from a full settings value.
    pub fn from_settings(settings: &ClubSettings) -> Self {
        Self {
            id: SETTINGS_ROW_ID,
            name: Some(settings.name.clone()),
            logo: Some(settings.logo.clone()),
            primary_color: Some(settings.primary_color.clone()),
        }
    }
}
