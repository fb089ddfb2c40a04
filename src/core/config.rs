//! Server configuration
//!
//! All settings come from environment variables with sensible defaults:
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | HTTP_PORT | 3000 | HTTP service port |
//! | STORAGE_BACKEND | persistent | `persistent` or `memory` |
//! | DATA_DIR | ./data | Document store directory (persistent backend) |
//! | ADMIN_PASSWORD | admin123 | Plain-text admin fallback secret |
//! | ADMIN_PASSWORD_HASH | (unset) | Precomputed argon2 digest of the admin secret |
//! | LOG_LEVEL | info | Log verbosity |

/// Storage backend selection, fixed at process startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// Embedded document database under `DATA_DIR`
    Persistent,
    /// Process-local maps; state is lost on restart (dev/test only)
    Memory,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API service port
    pub http_port: u16,
    /// Which storage backend to use (never mixed within one run)
    pub storage_backend: StorageBackend,
    /// Directory holding the embedded database files
    pub data_dir: String,
    /// Plain-text fallback admin secret
    pub admin_password: String,
    /// Optional precomputed admin-password digest
    pub admin_password_hash: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset variables fall back to defaults.
    pub fn from_env() -> Self {
        let storage_backend = match std::env::var("STORAGE_BACKEND").as_deref() {
            Ok("memory") => StorageBackend::Memory,
            _ => StorageBackend::Persistent,
        };

        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            storage_backend,
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| "./data".into()),
            admin_password: std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".into()),
            admin_password_hash: std::env::var("ADMIN_PASSWORD_HASH")
                .ok()
                .filter(|h| !h.is_empty()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_port: 3000,
            storage_backend: StorageBackend::Memory,
            data_dir: "./data".into(),
            admin_password: "admin123".into(),
            admin_password_hash: None,
        }
    }
}
