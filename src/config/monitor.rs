//! Monitor configuration.

use std::path::PathBuf;
use std::time::Duration;

use super::validation::ConfigError;
use crate::journal::DEFAULT_LOG_FILE;
use crate::probe::ping::DEFAULT_TIMEOUT;

// =============================================================================
// Constants
// =============================================================================

/// Default probe target.
pub const DEFAULT_HOST: &str = "google.com";

/// Default high-latency threshold (400 ms).
pub const DEFAULT_THRESHOLD_MS: f64 = 400.0;

/// Default delay after a successful probe (10 seconds).
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(10);

/// Default delay after a failed probe (2 seconds).
pub const DEFAULT_ERROR_INTERVAL: Duration = Duration::from_secs(2);

// =============================================================================
// Monitor Configuration
// =============================================================================

/// Settings for the polling loop. Fixed for the lifetime of a monitor.
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorConfig {
    /// Target host (hostname or IP address).
    pub host: String,
    /// Latencies strictly above this raise an anomaly. `None` disables the check.
    pub threshold_ms: Option<f64>,
    /// Delay after a successful probe (default: 10s).
    pub interval: Duration,
    /// Delay after a failed probe (default: 2s). Must be shorter than `interval`.
    pub error_interval: Duration,
    /// Probe reply timeout (default: 3s).
    pub timeout: Duration,
    /// Append-only log file (default: `netavail.log`).
    pub log_file: PathBuf,
}

impl MonitorConfig {
    /// Create a configuration for `host` with default threshold and intervals.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            threshold_ms: Some(DEFAULT_THRESHOLD_MS),
            interval: DEFAULT_INTERVAL,
            error_interval: DEFAULT_ERROR_INTERVAL,
            timeout: DEFAULT_TIMEOUT,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }

    /// Validate the configuration.
    ///
    /// # Errors
    /// Returns `ConfigError::ValidationError` if any field is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "host must not be empty".to_string(),
            ));
        }

        if let Some(threshold) = self.threshold_ms {
            if !(threshold.is_finite() && threshold > 0.0) {
                return Err(ConfigError::ValidationError(format!(
                    "threshold_ms must be a positive number, got {threshold}"
                )));
            }
        }

        if self.interval.is_zero() || self.error_interval.is_zero() {
            return Err(ConfigError::ValidationError(
                "intervals must be non-zero".to_string(),
            ));
        }

        if self.error_interval >= self.interval {
            return Err(ConfigError::ValidationError(format!(
                "error_interval ({:?}) must be shorter than interval ({:?})",
                self.error_interval, self.interval
            )));
        }

        if self.timeout.is_zero() {
            return Err(ConfigError::ValidationError(
                "timeout must be non-zero".to_string(),
            ));
        }

        if self.log_file.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "log_file must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Whether `latency_ms` counts as an anomaly.
    pub fn is_high_latency(&self, latency_ms: f64) -> bool {
        self.threshold_ms.is_some_and(|t| latency_ms > t)
    }

    /// Set the high-latency threshold.
    pub fn with_threshold_ms(mut self, threshold_ms: Option<f64>) -> Self {
        self.threshold_ms = threshold_ms;
        self
    }

    /// Set the delay after a successful probe.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Set the delay after a failed probe.
    pub fn with_error_interval(mut self, error_interval: Duration) -> Self {
        self.error_interval = error_interval;
        self
    }

    /// Set the probe timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the log file path.
    pub fn with_log_file(mut self, log_file: impl Into<PathBuf>) -> Self {
        self.log_file = log_file.into();
        self
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOST)
    }
}
