//! API middleware components

pub mod logging;
pub mod metrics;

pub use self::logging::{logging_middleware, REQUEST_ID_HEADER};
pub use self::metrics::{metrics_middleware, UNMATCHED_PATH};
