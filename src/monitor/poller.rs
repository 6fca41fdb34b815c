//! Polling loop driving a probe on a fixed cadence.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::config::MonitorConfig;
use crate::console::{Console, Stdout};
use crate::journal::{Journal, timestamp};
use crate::probe::{Probe, ProbeOutcome};
use crate::status::{StatusPublisher, StatusReceiver};

/// Prefix marking failed cycles in the journal.
const ERROR_RECORD_PREFIX: &str = "!! Error: ";

/// Result of a single poll cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleReport {
    /// Classified probe result.
    pub outcome: ProbeOutcome,
    /// Status line published for this cycle.
    pub status: String,
    /// Anomaly raised by this cycle, if any.
    pub alert: Option<String>,
    /// Delay before the next cycle.
    pub next_delay: Duration,
}

/// Network availability monitor.
///
/// Runs as a single task: cycles execute strictly one after another, so the
/// journal and the status channel each have exactly one writer.
pub struct Monitor {
    config: MonitorConfig,
    probe: Arc<dyn Probe>,
    journal: Journal,
    status: StatusPublisher,
    console: Arc<dyn Console>,
}

impl std::fmt::Debug for Monitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Monitor")
            .field("config", &self.config)
            .field("probe", &self.probe.kind())
            .field("journal", &self.journal)
            .finish_non_exhaustive()
    }
}

impl Monitor {
    /// Create a monitor writing console lines to standard output.
    pub fn new(config: MonitorConfig, probe: impl Probe, status: StatusPublisher) -> Self {
        let journal = Journal::new(config.log_file.clone());
        Self {
            config,
            probe: Arc::new(probe),
            journal,
            status,
            console: Arc::new(Stdout),
        }
    }

    /// Replace the console sink.
    pub fn with_console(mut self, console: impl Console) -> Self {
        self.console = Arc::new(console);
        self
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Create a status observer.
    pub fn subscribe(&self) -> StatusReceiver {
        self.status.subscribe()
    }

    /// Record the startup line, including the local hostname.
    pub fn announce_startup(&self) {
        let host = hostname::get()
            .map(|h| h.to_string_lossy().into_owned())
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Failed to read local hostname");
                "unknown".to_string()
            });

        tracing::info!(
            hostname = %host,
            target = %self.config.host,
            probe = self.probe.kind(),
            log_file = %self.journal.path().display(),
            "netavail starting"
        );
        self.record(&format!("netavail starting on {host}"));
    }

    /// Run one poll cycle: probe, publish, record, flag.
    ///
    /// Never fails; probe and journal errors are reported and absorbed.
    pub async fn run_cycle(&self) -> CycleReport {
        let outcome = self.probe.probe(&self.config.host).await;
        let now = timestamp();

        match &outcome {
            ProbeOutcome::Failure { reason } => {
                let line = format!("{now} Error: {reason}");
                self.console.line(&line);
                self.record(&format!("{ERROR_RECORD_PREFIX}{reason}"));
                self.status.set_status(line.clone());
                self.status.set_alert(line.clone());

                CycleReport {
                    outcome,
                    status: line.clone(),
                    alert: Some(line),
                    next_delay: self.config.error_interval,
                }
            }
            ProbeOutcome::Success { latency_ms } => {
                let latency = format!("{latency_ms:.2} ms");
                let line = format!("{now} {latency}");
                self.status.set_status(line.clone());
                self.record(&latency);

                let alert = if self.config.is_high_latency(*latency_ms) {
                    let alert = format!("{now} High ping time: {latency}");
                    tracing::warn!(
                        host = %self.config.host,
                        latency_ms = *latency_ms,
                        threshold_ms = self.config.threshold_ms,
                        "High ping time"
                    );
                    self.console.line(&alert);
                    self.status.set_alert(alert.clone());
                    Some(alert)
                } else {
                    None
                };

                CycleReport {
                    outcome,
                    status: line,
                    alert,
                    next_delay: self.config.interval,
                }
            }
        }
    }

    /// Poll until `cancel` fires. Returns the number of completed cycles.
    ///
    /// Cancellation is honoured while probing and while sleeping; a cycle
    /// interrupted mid-probe leaves no trace in the status or the journal.
    pub async fn run(&self, cancel: CancellationToken) -> u64 {
        tracing::info!(
            host = %self.config.host,
            interval = ?self.config.interval,
            error_interval = ?self.config.error_interval,
            threshold_ms = self.config.threshold_ms,
            "Monitor loop started"
        );

        let mut cycles: u64 = 0;
        loop {
            let report = tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                report = self.run_cycle() => report,
            };
            cycles += 1;

            tracing::debug!(
                cycle = cycles,
                outcome = %report.outcome,
                next_delay = ?report.next_delay,
                "Cycle complete"
            );

            tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                _ = tokio::time::sleep(report.next_delay) => {}
            }
        }

        tracing::info!(cycles, "Monitor loop stopped");
        cycles
    }

    fn record(&self, payload: &str) {
        if let Err(e) = self.journal.append(payload) {
            tracing::warn!(error = %e, "Failed to append log record");
            self.console.line(&e.to_string());
        }
    }
}
