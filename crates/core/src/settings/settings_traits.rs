//! Repository and service traits for club settings.
//!
//! These traits define the contract for the settings singleton without any
//! transport-specific types, allowing for different store implementations.

use async_trait::async_trait;
use tokio::sync::broadcast;

use super::settings_model::{ClubSettings, ClubSettingsRow, ClubSettingsUpdate};
use crate::errors::Result;

/// Repository trait for the remote settings singleton row.
///
/// The remote row is shared across all sessions; upsert is the only
/// concurrency control (last write wins at the row level).
#[async_trait]
pub trait SettingsRepositoryTrait: Send + Sync {
    /// Fetches the singleton settings row, if one exists.
    async fn fetch(&self) -> Result<Option<ClubSettingsRow>>;

    /// Writes the full settings row, keyed by the singleton id.
    ///
    /// Idempotent: replaying the same row is harmless.
    async fn upsert(&self, row: &ClubSettingsRow) -> Result<()>;

    /// Opens a subscription to remote-origin row changes. Each event carries
    /// the new full row state. Dropping the receiver ends the subscription.
    fn subscribe(&self) -> broadcast::Receiver<ClubSettingsRow>;
}

/// Service trait for the settings synchronization mechanism.
#[async_trait]
pub trait SettingsServiceTrait: Send + Sync {
    /// First load: populates the cache from the remote row (or the defaults
    /// when there is none or the fetch fails) and starts listening for
    /// remote changes. Always completes; failures are logged, not returned.
    async fn initialize(&self);

    /// Whether the first load has completed, successfully or not.
    fn is_ready(&self) -> bool;

    /// Returns the cached settings. Errors until `initialize` has completed;
    /// afterwards the value is always total and valid.
    fn get_settings(&self) -> Result<ClubSettings>;

    /// Optimistically merges `update` into the cache, then pushes the merged
    /// row to the remote store. Returns the merged value. Write failures are
    /// logged and the optimistic value is not rolled back.
    async fn update_settings(&self, update: ClubSettingsUpdate) -> Result<ClubSettings>;

    /// Cancels the change-notification subscription. Safe to call even if
    /// `initialize` never ran.
    fn teardown(&self);
}
