//! User Admission API
//!
//! Registers users over HTTP:
//! - Shape validation of the submitted fields
//! - Tier classification from a free-text type label
//! - Duplicate detection on normalized name, email and address
//! - Tier-based revaluation of the submitted balance with exact decimals
//! - In-memory or PostgreSQL user storage

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::AppConfig;

use std::sync::Arc;

use api::state::{AppState, UserServiceTrait};
use config::StorageBackend;
use infrastructure::user::{InMemoryUserRepository, PostgresUserRepository, UserService};
use tracing::info;

/// Create the application state with default configuration
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    info!("Storage backend: {:?}", config.storage.backend);

    let user_service: Arc<dyn UserServiceTrait> = match config.storage.backend {
        StorageBackend::Memory => {
            let repository = Arc::new(InMemoryUserRepository::new());
            Arc::new(UserService::new(repository))
        }
        StorageBackend::Postgres => {
            let database_url = config.storage.database_url().ok_or_else(|| {
                anyhow::anyhow!("storage.database_url or DATABASE_URL is required for postgres")
            })?;

            info!("Connecting to PostgreSQL...");
            let pool = sqlx::PgPool::connect(&database_url)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to connect to PostgreSQL: {}", e))?;
            info!("PostgreSQL connection established");

            let repository = PostgresUserRepository::new(pool);
            repository.ensure_schema().await?;

            Arc::new(UserService::new(Arc::new(repository)))
        }
    };

    Ok(AppState::new(user_service))
}
