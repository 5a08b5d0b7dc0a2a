//! Error types
//!
//! Spawn failures are never fatal: the spawner keeps its countdown expired
//! and retries on the next tick.

use thiserror::Error;

/// Why a fired spawn event did not produce an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpawnError {
    #[error("no entity template configured")]
    NoEntityTemplate,

    #[error("no spawn points configured")]
    NoSpawnPoints,

    #[error("entity factory rejected the spawn")]
    FactoryRejected,
}

/// Failure to load spawner settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown selection mode: {0}")]
    UnknownSelectionMode(String),
}
