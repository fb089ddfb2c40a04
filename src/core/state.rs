//! Server state - shared handles for all request handlers
//!
//! [`ServerState`] is cloned into every handler; all fields are cheap
//! shared references (`Arc`).

use std::sync::Arc;

use crate::auth::PasswordManager;
use crate::core::{Config, StorageBackend};
use crate::db::{MemoryStorage, Storage, SurrealStorage};
use crate::utils::AppError;

/// Shared server state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration (immutable after startup)
    pub config: Config,
    /// Document storage backend, selected at startup
    pub storage: Arc<dyn Storage>,
    /// Admin password verification/update
    pub auth: Arc<PasswordManager>,
}

impl ServerState {
    /// Initialize all services.
    ///
    /// Connects the storage backend chosen by configuration. A failed
    /// connection is fatal and surfaces as [`AppError::StorageUnavailable`].
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let storage: Arc<dyn Storage> = match config.storage_backend {
            StorageBackend::Persistent => {
                let db = SurrealStorage::connect(&config.data_dir).await?;
                tracing::info!(data_dir = %config.data_dir, "Connected to document store");
                Arc::new(db)
            }
            StorageBackend::Memory => {
                tracing::warn!("Using ephemeral in-memory storage; state is lost on restart");
                Arc::new(MemoryStorage::new())
            }
        };

        let auth = Arc::new(PasswordManager::new(
            config.admin_password.clone(),
            config.admin_password_hash.clone(),
        ));

        Ok(Self {
            config: config.clone(),
            storage,
            auth,
        })
    }

    /// Build state around an existing storage backend (tests).
    pub fn with_storage(config: Config, storage: Arc<dyn Storage>) -> Self {
        let auth = Arc::new(PasswordManager::new(
            config.admin_password.clone(),
            config.admin_password_hash.clone(),
        ));
        Self {
            config,
            storage,
            auth,
        }
    }
}
