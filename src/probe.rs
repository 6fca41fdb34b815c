//! Probe Layer
//!
//! A probe performs a single network echo exchange against a target host and
//! reports either the round-trip time or the reason it could not.
//!
//! # Architecture
//!
//! - [`Probe`]: Core trait for implementing probes
//! - [`ProbeOutcome`]: Classified result of one probe (latency or failure reason)
//! - [`PingProbe`]: ICMP echo probe backed by `surge-ping`
//! - [`SimulatedProbe`]: Random latency source, no network access required
//!
//! # Example
//!
//! ```rust,no_run
//! use netavail::{PingProbe, Probe, ProbeOutcome};
//!
//! # async fn demo() {
//! let probe = PingProbe::default();
//! match probe.probe("1.1.1.1").await {
//!     ProbeOutcome::Success { latency_ms } => println!("{latency_ms:.2} ms"),
//!     ProbeOutcome::Failure { reason } => println!("Error: {reason}"),
//! }
//! # }
//! ```

pub mod ping;
pub mod simulated;
mod traits;

pub use ping::PingProbe;
pub use simulated::SimulatedProbe;
pub use traits::{Probe, ProbeError, ProbeOutcome};
