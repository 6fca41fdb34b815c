//! netavail Binary Entry Point
//!
//! Runs the polling loop in a background task while the foreground task
//! follows the live status until Ctrl+C or SIGTERM.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use netavail::{
    Monitor, MonitorConfig, PingProbe, SimulatedProbe, StatusReceiver,
    config::{DEFAULT_HOST, DEFAULT_THRESHOLD_MS, parse_duration},
    journal::DEFAULT_LOG_FILE,
    status,
};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// netavail - Network Availability Monitor
#[derive(Parser, Debug)]
#[command(name = "netavail", version, about, long_about = None)]
struct Cli {
    /// Host to ping (hostname or IP address)
    #[arg(long, default_value = DEFAULT_HOST, env = "NETAVAIL_HOST")]
    host: String,

    /// Latency above which a high ping time is reported, in milliseconds
    #[arg(long, default_value_t = DEFAULT_THRESHOLD_MS, env = "NETAVAIL_THRESHOLD_MS")]
    threshold_ms: f64,

    /// Disable the high ping time check
    #[arg(long, env = "NETAVAIL_NO_THRESHOLD")]
    no_threshold: bool,

    /// Delay after a successful probe (e.g. 10s, 1m)
    #[arg(long, default_value = "10s", value_parser = parse_duration, env = "NETAVAIL_INTERVAL")]
    interval: Duration,

    /// Delay after a failed probe (e.g. 2s)
    #[arg(long, default_value = "2s", value_parser = parse_duration, env = "NETAVAIL_ERROR_INTERVAL")]
    error_interval: Duration,

    /// Probe reply timeout (e.g. 3s)
    #[arg(long, default_value = "3s", value_parser = parse_duration, env = "NETAVAIL_TIMEOUT")]
    timeout: Duration,

    /// Append-only log file
    #[arg(long, default_value = DEFAULT_LOG_FILE, env = "NETAVAIL_LOG_FILE")]
    log_file: PathBuf,

    /// Use random latencies instead of ICMP (no raw socket privileges needed)
    #[arg(long, env = "NETAVAIL_SIMULATE")]
    simulate: bool,
}

impl Cli {
    fn monitor_config(&self) -> MonitorConfig {
        let threshold_ms = (!self.no_threshold).then_some(self.threshold_ms);
        MonitorConfig::new(self.host.clone())
            .with_threshold_ms(threshold_ms)
            .with_interval(self.interval)
            .with_error_interval(self.error_interval)
            .with_timeout(self.timeout)
            .with_log_file(self.log_file.clone())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,netavail=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = cli.monitor_config();
    config.validate()?;

    tracing::info!(
        "Target: {}, interval: {:?}, error interval: {:?}, log: {}",
        config.host,
        config.interval,
        config.error_interval,
        config.log_file.display(),
    );

    let (publisher, receiver) = status::channel();
    let monitor = if cli.simulate {
        tracing::info!("Using simulated probe");
        Monitor::new(config.clone(), SimulatedProbe::default(), publisher)
    } else {
        Monitor::new(config.clone(), PingProbe::new(config.timeout), publisher)
    };

    monitor.announce_startup();

    let cancel = CancellationToken::new();
    let poller = {
        let cancel = cancel.clone();
        tokio::spawn(async move { monitor.run(cancel).await })
    };

    tracing::info!("Press Ctrl+C to shutdown");
    tokio::select! {
        _ = follow_status(receiver) => {}
        _ = shutdown_signal() => {}
    }

    cancel.cancel();
    match poller.await {
        Ok(cycles) => tracing::info!("Shutdown complete after {} cycles", cycles),
        Err(e) => tracing::error!("Monitor task failed: {}", e),
    }
    Ok(())
}

/// Foreground observer of the live status.
async fn follow_status(mut receiver: StatusReceiver) {
    let mut last_alert = None;
    while let Some(live) = receiver.changed().await {
        tracing::info!(status = %live.status, "Status updated");
        if live.alert != last_alert {
            if let Some(alert) = &live.alert {
                tracing::warn!(alert = %alert, "Alert raised");
            }
            last_alert = live.alert;
        }
    }
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["netavail"]).unwrap();
        let config = cli.monitor_config();

        assert_eq!(config, MonitorConfig::default());
        assert!(!cli.simulate);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::try_parse_from([
            "netavail",
            "--host",
            "1.1.1.1",
            "--no-threshold",
            "--interval",
            "5s",
            "--error-interval",
            "1s",
            "--log-file",
            "/tmp/other.log",
            "--simulate",
        ])
        .unwrap();
        let config = cli.monitor_config();

        assert_eq!(config.host, "1.1.1.1");
        assert_eq!(config.threshold_ms, None);
        assert_eq!(config.interval, Duration::from_secs(5));
        assert_eq!(config.error_interval, Duration::from_secs(1));
        assert_eq!(config.log_file, PathBuf::from("/tmp/other.log"));
        assert!(cli.simulate);
    }

    #[test]
    fn test_cli_rejects_bad_duration() {
        assert!(Cli::try_parse_from(["netavail", "--interval", "soon"]).is_err());
    }
}
