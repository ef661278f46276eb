use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::services;
use shared::error::{AppError, AppResult};

/// Server state — shared handles for every request
///
/// Cloning is cheap: the pool and JWT service are reference-counted.
///
/// | Field | Type | Meaning |
/// |-------|------|---------|
/// | config | Config | Immutable configuration |
/// | pool | SqlitePool | SQLite connection pool |
/// | jwt_service | Arc<JwtService> | Session token service |
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// JWT session token service
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    pub fn new(config: Config, pool: SqlitePool, jwt_service: Arc<JwtService>) -> Self {
        Self {
            config,
            pool,
            jwt_service,
        }
    }

    /// Initialize the server state
    ///
    /// Order:
    /// 1. Ensure the database directory exists
    /// 2. Open the pool and apply migrations
    /// 3. Seed the initial admin account on a fresh database
    /// 4. Build the JWT service from config
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        config
            .ensure_database_dir()
            .map_err(|e| AppError::internal(format!("Failed to create database dir: {e}")))?;

        let db = DbService::new(&config.database_path).await?;

        services::employee::seed_default_admin(&db.pool, &config.default_password).await?;

        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        Ok(Self::new(config.clone(), db.pool, jwt_service))
    }

    /// The connection pool
    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// The JWT service
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }
}
