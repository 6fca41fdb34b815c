//! ICMP echo probe.
//!
//! Measures the round-trip time of a single ICMP echo to a target host.

use std::net::IpAddr;
use std::time::{Duration, Instant};

use surge_ping::{Client, Config, ICMP, PingIdentifier, PingSequence};
use tokio::time::timeout;

use crate::probe::{Probe, ProbeError};

/// Default probe timeout (3 seconds).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Echo payload size, matching the common `ping` default.
const PAYLOAD_SIZE: usize = 56;

/// ICMP ping probe.
///
/// Sends one echo per call; the ICMP client is created per probe.
#[derive(Debug, Clone)]
pub struct PingProbe {
    timeout: Duration,
}

impl PingProbe {
    /// Create a probe with the given reply timeout.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Reply timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for PingProbe {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

/// Resolve hostname to IP address.
async fn resolve_host(host: &str) -> Result<IpAddr, std::io::Error> {
    // First, try to parse as an IP address directly
    if let Ok(ip) = host.parse::<IpAddr>() {
        return Ok(ip);
    }

    let addrs = tokio::net::lookup_host(format!("{host}:0")).await?;
    addrs
        .into_iter()
        .next()
        .map(|addr| addr.ip())
        .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::NotFound, "no addresses found"))
}

#[async_trait::async_trait]
impl Probe for PingProbe {
    fn kind(&self) -> &str {
        "icmp"
    }

    async fn echo(&self, host: &str) -> Result<Duration, ProbeError> {
        let host = host.trim();
        if host.is_empty() {
            return Err(ProbeError::Construction("empty host".to_string()));
        }

        let ip_addr = resolve_host(host).await.map_err(|e| {
            tracing::warn!(host = %host, error = %e, "Failed to resolve hostname");
            ProbeError::Construction(format!("lookup {host}: {e}"))
        })?;

        // ICMP client per address family
        let client = match ip_addr {
            IpAddr::V4(_) => Client::new(&Config::default()),
            IpAddr::V6(_) => Client::new(&Config::builder().kind(ICMP::V6).build()),
        }
        .map_err(|e| {
            tracing::warn!(host = %host, error = %e, "Failed to create ICMP client");
            ProbeError::Construction(e.to_string())
        })?;

        let mut pinger = client.pinger(ip_addr, PingIdentifier(rand::random())).await;
        pinger.timeout(self.timeout);

        let payload = [0u8; PAYLOAD_SIZE];
        let start = Instant::now();
        let result = timeout(self.timeout, pinger.ping(PingSequence(0), &payload)).await;

        match result {
            Ok(Ok((_, rtt))) => {
                tracing::debug!(
                    host = %host,
                    ip = %ip_addr,
                    latency_ms = rtt.as_secs_f64() * 1000.0,
                    "Ping probe successful"
                );
                Ok(rtt)
            }
            Ok(Err(e)) => {
                tracing::warn!(host = %host, error = %e, "Ping probe failed");
                Err(ProbeError::Execution(e.to_string()))
            }
            Err(_) => {
                tracing::warn!(
                    host = %host,
                    timeout_ms = self.timeout.as_millis(),
                    elapsed_ms = start.elapsed().as_millis(),
                    "Ping probe timed out"
                );
                Err(ProbeError::Timeout(self.timeout))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ping_probe_defaults() {
        let probe = PingProbe::default();
        assert_eq!(probe.timeout(), DEFAULT_TIMEOUT);
        assert_eq!(probe.kind(), "icmp");
    }

    #[tokio::test]
    async fn test_resolve_host_ipv4() {
        let ip = resolve_host("127.0.0.1").await.unwrap();
        assert_eq!(ip, IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)));
    }

    #[tokio::test]
    async fn test_resolve_host_ipv6() {
        let ip = resolve_host("::1").await.unwrap();
        assert_eq!(ip, IpAddr::V6(std::net::Ipv6Addr::LOCALHOST));
    }

    #[tokio::test]
    async fn test_empty_host_is_construction_error() {
        let probe = PingProbe::default();
        let err = probe.echo("   ").await.unwrap_err();
        assert!(matches!(err, ProbeError::Construction(_)));
        assert_eq!(err.to_string(), "empty host");
    }

    #[tokio::test]
    async fn test_unresolvable_host_fails_without_panicking() {
        let probe = PingProbe::new(Duration::from_millis(500));
        let outcome = probe.probe("host.invalid").await;
        assert!(!outcome.is_success());
    }
}
