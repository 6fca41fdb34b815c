//! Monitor Layer
//!
//! The polling loop: probe the target on a fixed cadence, classify the
//! result, publish the live status, append to the journal and flag latency
//! anomalies.
//!
//! # Architecture
//!
//! - [`Monitor`]: Owns the probe, journal, console and the status publisher
//! - [`CycleReport`]: What a single cycle observed and how long to wait next
//!
//! # Example
//!
//! ```rust,no_run
//! use netavail::{Monitor, MonitorConfig, PingProbe, status};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn demo() {
//! let config = MonitorConfig::new("1.1.1.1");
//! let (publisher, _receiver) = status::channel();
//! let monitor = Monitor::new(config.clone(), PingProbe::new(config.timeout), publisher);
//!
//! monitor.announce_startup();
//! monitor.run(CancellationToken::new()).await;
//! # }
//! ```

mod poller;

pub use poller::{CycleReport, Monitor};
