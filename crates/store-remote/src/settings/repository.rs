use async_trait::async_trait;
use log::{debug, warn};
use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use clubdesk_core::constants::{SETTINGS_ROW_ID, SETTINGS_TABLE};
use clubdesk_core::errors::Result;
use clubdesk_core::settings::{ClubSettingsRow, SettingsRepositoryTrait};

use crate::client::RowStoreClient;
use crate::error::StoreError;

/// Buffered change events before slow subscribers start lagging.
const CHANGE_FEED_CAPACITY: usize = 16;

/// Remote repository for the settings singleton row.
///
/// Change notifications are produced by a polling watcher: the singleton row
/// is re-selected on an interval and broadcast whenever it differs from the
/// last observed state. Subscribers receive the new full row state.
pub struct RemoteSettingsRepository {
    client: RowStoreClient,
    tx: broadcast::Sender<ClubSettingsRow>,
    watcher: Mutex<Option<JoinHandle<()>>>,
}

impl RemoteSettingsRepository {
    pub fn new(client: RowStoreClient) -> Self {
        let (tx, _) = broadcast::channel(CHANGE_FEED_CAPACITY);
        Self {
            client,
            tx,
            watcher: Mutex::new(None),
        }
    }

    /// Starts the polling watcher that feeds the change subscription.
    /// Replaces any previously running watcher.
    pub fn start_watcher(&self, poll_interval: Duration) {
        let client = self.client.clone();
        let tx = self.tx.clone();

        let handle = tokio::spawn(async move {
            let mut last: Option<ClubSettingsRow> = None;
            let mut ticker = tokio::time::interval(poll_interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                match client
                    .select_by_id::<ClubSettingsRow>(SETTINGS_TABLE, &SETTINGS_ROW_ID.to_string())
                    .await
                {
                    Ok(Some(row)) => {
                        if last.as_ref() != Some(&row) {
                            debug!("Observed settings row change");
                            last = Some(row.clone());
                            let _ = tx.send(row);
                        }
                    }
                    Ok(None) => {}
                    Err(e) => {
                        // Silent absence of updates; the next tick retries.
                        warn!("Settings poll failed: {}", e);
                    }
                }
            }
        });

        if let Some(previous) = self.watcher.lock().unwrap().replace(handle) {
            previous.abort();
        }
    }

    /// Stops the polling watcher. Safe to call when none is running.
    pub fn stop_watcher(&self) {
        if let Some(handle) = self.watcher.lock().unwrap().take() {
            handle.abort();
        }
    }
}

impl Drop for RemoteSettingsRepository {
    fn drop(&mut self) {
        self.stop_watcher();
    }
}

#[async_trait]
impl SettingsRepositoryTrait for RemoteSettingsRepository {
    async fn fetch(&self) -> Result<Option<ClubSettingsRow>> {
        let row = self
            .client
            .select_by_id(SETTINGS_TABLE, &SETTINGS_ROW_ID.to_string())
            .await
            .map_err(clubdesk_core::Error::from)?;
        Ok(row)
    }

    async fn upsert(&self, row: &ClubSettingsRow) -> Result<()> {
        self.client
            .upsert::<_, ClubSettingsRow>(SETTINGS_TABLE, row)
            .await
            .map_err(StoreError::into_write)?;
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<ClubSettingsRow> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repository() -> RemoteSettingsRepository {
        RemoteSettingsRepository::new(RowStoreClient::new("http://localhost:54321", "test-key"))
    }

    #[tokio::test]
    async fn test_subscribe_receives_broadcast_rows() {
        let repo = repository();
        let mut rx = repo.subscribe();

        let row = ClubSettingsRow {
            id: SETTINGS_ROW_ID,
            name: Some("Camden FC".to_string()),
            logo: None,
            primary_color: None,
        };
        repo.tx.send(row.clone()).unwrap();

        assert_eq!(rx.recv().await.unwrap(), row);
    }

    #[test]
    fn test_stop_watcher_without_start_is_safe() {
        let repo = repository();
        repo.stop_watcher();
        repo.stop_watcher();
    }
}
