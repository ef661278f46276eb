//! Admin Server - food-ordering platform administrative backend
//!
//! # Architecture
//!
//! REST handlers accept JSON, delegate to domain services applying the
//! business rules (status defaults, audit stamping, referential-integrity
//! checks), and persist through a thin SQL layer over embedded SQLite.
//!
//! # Module structure
//!
//! ```text
//! admin-server/src/
//! ├── core/          # configuration, state, HTTP server
//! ├── auth/          # JWT session tokens, middleware, extractor
//! ├── api/           # axum routes and handlers, one module per vertical
//! ├── services/      # domain services (business rules)
//! ├── db/            # SQLite pool, migrations, repositories
//! └── utils/         # logging setup
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export public types
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
pub use utils::setup_environment;

// Security logging macro - structured tracing for auth events
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}
