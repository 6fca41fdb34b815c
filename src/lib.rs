//! netavail - Network Availability Monitor
//!
//! Periodically pings a remote host, surfaces the latest result as a live
//! status value and keeps a durable, append-only history in a log file.
//!
//! # Architecture
//!
//! - **Probe**: One ICMP echo per call, classified as latency or failure reason
//! - **Monitor**: Single polling loop with separate success and error cadences
//! - **Journal**: Append-only `netavail.log`, opened and closed per record
//! - **Status**: Watch channel carrying the live status line and anomaly indicator
//!
//! # Example
//!
//! ```rust,no_run
//! use netavail::{Monitor, MonitorConfig, PingProbe, status};
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = MonitorConfig::new("google.com");
//!     config.validate()?;
//!
//!     let (publisher, mut receiver) = status::channel();
//!     let monitor = Monitor::new(config.clone(), PingProbe::new(config.timeout), publisher);
//!     monitor.announce_startup();
//!
//!     let cancel = CancellationToken::new();
//!     tokio::spawn(async move { monitor.run(cancel).await });
//!
//!     while let Some(live) = receiver.changed().await {
//!         println!("{}", live.status);
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod console;
pub mod journal;
pub mod monitor;
pub mod probe;
pub mod status;

pub use config::{ConfigError, MonitorConfig};
pub use console::{Console, MemoryConsole, Stdout};
pub use journal::{Journal, JournalError};
pub use monitor::{CycleReport, Monitor};
pub use probe::{PingProbe, Probe, ProbeError, ProbeOutcome, SimulatedProbe};
pub use status::{LiveStatus, StatusPublisher, StatusReceiver};
