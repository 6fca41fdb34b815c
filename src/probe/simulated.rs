//! Simulated probe producing random latencies.
//!
//! Useful for driving the monitor and its status consumers without raw socket
//! privileges or network access.

use std::time::Duration;

use rand::Rng;

use crate::probe::{Probe, ProbeError};

/// Default upper bound for simulated latencies (100 ms).
pub const DEFAULT_MAX_LATENCY: Duration = Duration::from_millis(100);

/// Probe that never touches the network and always "succeeds".
#[derive(Debug, Clone)]
pub struct SimulatedProbe {
    max_latency: Duration,
}

impl SimulatedProbe {
    /// Create a simulated probe with latencies drawn from `[0, max_latency)`.
    pub fn new(max_latency: Duration) -> Self {
        Self { max_latency }
    }

    pub fn max_latency(&self) -> Duration {
        self.max_latency
    }
}

impl Default for SimulatedProbe {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LATENCY)
    }
}

#[async_trait::async_trait]
impl Probe for SimulatedProbe {
    fn kind(&self) -> &str {
        "simulated"
    }

    async fn echo(&self, _host: &str) -> Result<Duration, ProbeError> {
        if self.max_latency.is_zero() {
            return Ok(Duration::ZERO);
        }
        let secs = rand::thread_rng().gen_range(0.0..self.max_latency.as_secs_f64());
        Ok(Duration::from_secs_f64(secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::ProbeOutcome;

    #[tokio::test]
    async fn test_latency_within_bounds() {
        let probe = SimulatedProbe::default();
        for _ in 0..50 {
            match probe.probe("anything").await {
                ProbeOutcome::Success { latency_ms } => {
                    assert!((0.0..=100.0).contains(&latency_ms), "got {latency_ms}");
                }
                other => panic!("expected Success, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn test_zero_bound_yields_zero_latency() {
        let probe = SimulatedProbe::new(Duration::ZERO);
        assert_eq!(
            probe.probe("anything").await,
            ProbeOutcome::Success { latency_ms: 0.0 }
        );
    }
}
