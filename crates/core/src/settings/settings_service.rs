use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use async_trait::async_trait;
use log::{debug, error, warn};
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;

use super::settings_model::{ClubSettings, ClubSettingsRow, ClubSettingsUpdate};
use super::settings_traits::{SettingsRepositoryTrait, SettingsServiceTrait};
use crate::errors::{Error, Result};
use crate::events::{DomainEvent, DomainEventSink};

/// Keeps the in-process settings cache consistent with the remote singleton
/// row: local edits are merged optimistically and pushed via upsert,
/// remote-origin changes arrive over the repository's change feed.
///
/// A local write's own change notification will re-apply the just-written
/// values. That replay is idempotent, so no origin tagging is done.
pub struct SettingsService {
    repository: Arc<dyn SettingsRepositoryTrait>,
    events: Arc<dyn DomainEventSink>,
    cache: Arc<RwLock<ClubSettings>>,
    ready: AtomicBool,
    listener: Mutex<Option<JoinHandle<()>>>,
}

impl SettingsService {
    pub fn new(
        repository: Arc<dyn SettingsRepositoryTrait>,
        events: Arc<dyn DomainEventSink>,
    ) -> Self {
        Self {
            repository,
            events,
            cache: Arc::new(RwLock::new(ClubSettings::default())),
            ready: AtomicBool::new(false),
            listener: Mutex::new(None),
        }
    }

    /// Spawns the standing listener that applies remote change notifications
    /// to the cache. Lock scopes never span an await.
    fn spawn_listener(&self) {
        let mut rx = self.repository.subscribe();
        let cache = Arc::clone(&self.cache);
        let events = Arc::clone(&self.events);

        let handle = tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(row) => {
                        let updated = {
                            let mut cache = cache.write().unwrap();
                            cache.apply_row(row);
                            cache.clone()
                        };
                        debug!("Applied remote settings change to cache");
                        events.emit(DomainEvent::settings_changed(updated));
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        warn!("Settings change feed lagged, {} events skipped", skipped);
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        });

        if let Some(previous) = self.listener.lock().unwrap().replace(handle) {
            previous.abort();
        }
    }
}

#[async_trait]
impl SettingsServiceTrait for SettingsService {
    async fn initialize(&self) {
        match self.repository.fetch().await {
            Ok(Some(row)) => {
                *self.cache.write().unwrap() = ClubSettings::from_row(row);
                debug!("Loaded club settings from remote store");
            }
            Ok(None) => {
                debug!("No club settings row yet, keeping defaults");
            }
            Err(e) => {
                error!("Failed to load club settings, keeping defaults: {}", e);
            }
        }

        self.spawn_listener();
        self.ready.store(true, Ordering::SeqCst);
    }

    fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    fn get_settings(&self) -> Result<ClubSettings> {
        if !self.is_ready() {
            return Err(Error::NotInitialized(
                "club settings have not been loaded yet".to_string(),
            ));
        }
        Ok(self.cache.read().unwrap().clone())
    }

    async fn update_settings(&self, update: ClubSettingsUpdate) -> Result<ClubSettings> {
        update.validate()?;

        // Optimistic: readers see the merged value before the remote write
        // resolves.
        let merged = {
            let mut cache = self.cache.write().unwrap();
            cache.merge(update);
            cache.clone()
        };
        self.events
            .emit(DomainEvent::settings_changed(merged.clone()));

        let row = ClubSettingsRow::from_settings(&merged);
        if let Err(e) = self.repository.upsert(&row).await {
            // Accepted inconsistency window: keep the optimistic value,
            // report through the side channel only.
            error!("Failed to push club settings to remote store: {}", e);
        }

        Ok(merged)
    }

    fn teardown(&self) {
        if let Some(handle) = self.listener.lock().unwrap().take() {
            handle.abort();
            debug!("Cancelled settings change subscription");
        }
    }
}

impl Drop for SettingsService {
    fn drop(&mut self) {
        self.teardown();
    }
}
