//! User infrastructure module
//!
//! This module provides the admission service and the user store
//! implementations: in-memory and PostgreSQL.

mod postgres_repository;
mod repository;
mod service;

pub use postgres_repository::PostgresUserRepository;
pub use repository::InMemoryUserRepository;
pub use service::UserService;
