//! Infrastructure layer - store implementations, services, logging and metrics

pub mod logging;
pub mod observability;
pub mod user;
