//! Layered application configuration

mod app_config;

pub use self::app_config::{
    AppConfig, LogFormat, LoggingConfig, ServerConfig, StorageBackend, StorageConfig,
};
