//! Catering Back Office Server
//!
//! REST API for a catering business: food-item catalog, event bookings
//! with payment tracking, staff rosters, customer reviews, admin
//! notifications, booking-access codes and audit history.
//!
//! # Module structure
//!
//! ```text
//! src/
//! ├── core/          # Config, server state, HTTP server
//! ├── auth/          # Admin password verification
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # Storage backends and document normalization
//! ├── schema/        # Validated request payloads
//! └── utils/         # Errors, logging, validation helpers
//! ```
//!
//! Documents are stored schemaless (JSON maps) in either an embedded
//! SurrealDB instance or an in-memory map, selected at startup via
//! `STORAGE_BACKEND`. Both backends expose the same [`db::Storage`]
//! trait and produce identical, normalized record shapes.

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod schema;
pub mod utils;

// Re-export public types
pub use auth::PasswordManager;
pub use core::{Config, Server, ServerState, StorageBackend};
pub use db::{Collection, Document, Storage};
pub use utils::{ApiResponse, AppError, AppResult};

// Re-export logger init
pub use utils::logger::init_logger;

pub fn print_banner() {
    println!(
        r#"
   ______      __           _
  / ____/___ _/ /____  _____(_)___  ____ _
 / /   / __ `/ __/ _ \/ ___/ / __ \/ __ `/
/ /___/ /_/ / /_/  __/ /  / / / / / /_/ /
\____/\__,_/\__/\___/_/  /_/_/ /_/\__, /
                                 /____/
    "#
    );
}
