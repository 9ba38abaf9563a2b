/// Fixed id of the one and only club settings row in the remote store.
pub const SETTINGS_ROW_ID: i64 = 1;

/// Fallback club name when none has been saved yet.
pub const DEFAULT_CLUB_NAME: &str = "The CAM-DEN";

/// Fallback logo path when the remote row carries no logo.
pub const DEFAULT_LOGO_PATH: &str = "/logo-2.jpeg";

/// Fallback primary color (hex).
pub const DEFAULT_PRIMARY_COLOR: &str = "#ef4444";

/// Remote table names.
pub const SETTINGS_TABLE: &str = "club_settings";
pub const PLAYERS_TABLE: &str = "players";
pub const MATCHES_TABLE: &str = "matches";
