//! Configuration module for netavail.
//!
//! Provides the monitor settings and their validation:
//! - Target host and probe timeout
//! - High-latency threshold (optional)
//! - Normal and error polling intervals
//! - Log file location
//!
//! There is no configuration file; the binary fills [`MonitorConfig`] from
//! command-line flags and environment variables.

mod monitor;
mod validation;

pub use monitor::MonitorConfig;
pub use validation::{ConfigError, parse_duration};

// Re-export constants
pub use monitor::{
    DEFAULT_ERROR_INTERVAL, DEFAULT_HOST, DEFAULT_INTERVAL, DEFAULT_THRESHOLD_MS,
};
