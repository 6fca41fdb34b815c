//! Core probe trait and result types.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while probing a host.
///
/// The display text of every variant is the underlying description only; it
/// becomes the failure reason shown to the observer verbatim.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The probe could not be set up (bad host, DNS failure, missing raw socket privilege).
    #[error("{0}")]
    Construction(String),

    /// The echo request or its reply failed on the wire.
    #[error("{0}")]
    Execution(String),

    /// No reply arrived before the probe timeout.
    #[error("timeout after {0:?}")]
    Timeout(Duration),
}

/// Classified result of a single probe.
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeOutcome {
    /// Reply received; round-trip time in fractional milliseconds.
    Success { latency_ms: f64 },
    /// No usable reply.
    Failure { reason: String },
}

impl ProbeOutcome {
    /// Build an outcome from a raw echo result.
    pub fn from_echo(result: Result<Duration, ProbeError>) -> Self {
        match result {
            Ok(rtt) => Self::Success {
                latency_ms: rtt.as_secs_f64() * 1000.0,
            },
            Err(e) => Self::Failure {
                reason: e.to_string(),
            },
        }
    }

    /// Whether the probe got a reply.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success { latency_ms } => write!(f, "{latency_ms:.2} ms"),
            Self::Failure { reason } => write!(f, "Error: {reason}"),
        }
    }
}

/// Core probe trait.
///
/// Implementations issue exactly one echo request per call and never retry;
/// the polling loop's next tick is the only retry mechanism.
#[async_trait::async_trait]
pub trait Probe: Send + Sync + 'static {
    /// Short identifier used in diagnostics (e.g., "icmp").
    fn kind(&self) -> &str;

    /// Send one echo request to `host` and measure the round-trip time.
    async fn echo(&self, host: &str) -> Result<Duration, ProbeError>;

    /// Probe `host` and classify the result.
    async fn probe(&self, host: &str) -> ProbeOutcome {
        let result = self.echo(host).await;
        if let Err(e) = &result {
            tracing::debug!(kind = self.kind(), host = %host, error = %e, "Probe failed");
        }
        ProbeOutcome::from_echo(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedProbe(Result<Duration, &'static str>);

    #[async_trait::async_trait]
    impl Probe for FixedProbe {
        fn kind(&self) -> &str {
            "fixed"
        }

        async fn echo(&self, _host: &str) -> Result<Duration, ProbeError> {
            self.0.map_err(|e| ProbeError::Execution(e.to_string()))
        }
    }

    #[test]
    fn test_outcome_converts_rtt_to_millis() {
        let outcome = ProbeOutcome::from_echo(Ok(Duration::from_micros(35_270)));
        match outcome {
            ProbeOutcome::Success { latency_ms } => assert!((latency_ms - 35.27).abs() < 1e-9),
            other => panic!("expected Success, got {other:?}"),
        }
    }

    #[test]
    fn test_outcome_keeps_reason_verbatim() {
        let outcome =
            ProbeOutcome::from_echo(Err(ProbeError::Construction("unknown host".to_string())));
        assert_eq!(
            outcome,
            ProbeOutcome::Failure {
                reason: "unknown host".to_string()
            }
        );
    }

    #[test]
    fn test_outcome_display() {
        let ok = ProbeOutcome::Success { latency_ms: 35.271 };
        assert_eq!(ok.to_string(), "35.27 ms");

        let err = ProbeOutcome::Failure {
            reason: "network unreachable".to_string(),
        };
        assert_eq!(err.to_string(), "Error: network unreachable");
    }

    #[test]
    fn test_timeout_display() {
        let err = ProbeError::Timeout(Duration::from_secs(3));
        assert_eq!(err.to_string(), "timeout after 3s");
    }

    #[tokio::test]
    async fn test_probe_classifies_echo() {
        let up = FixedProbe(Ok(Duration::from_millis(12)));
        assert!(up.probe("example.com").await.is_success());

        let down = FixedProbe(Err("host unreachable"));
        assert_eq!(
            down.probe("example.com").await,
            ProbeOutcome::Failure {
                reason: "host unreachable".to_string()
            }
        );
    }
}
