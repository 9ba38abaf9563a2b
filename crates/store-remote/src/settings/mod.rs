//! Remote store implementation for the settings singleton.

mod repository;

pub use repository::RemoteSettingsRepository;

// Re-export trait from core for convenience
pub use clubdesk_core::settings::SettingsRepositoryTrait;
