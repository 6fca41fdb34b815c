//! Live status handoff between the polling loop and its observers.
//!
//! Backed by a `tokio::sync::watch` channel: the monitor owns the single
//! [`StatusPublisher`], observers hold [`StatusReceiver`]s and always see a
//! complete [`LiveStatus`] value, never a partially written one.

use tokio::sync::watch;

/// Latest observable state of the monitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiveStatus {
    /// Latest status line: `"<timestamp> <latency> ms"` or `"<timestamp> Error: <reason>"`.
    pub status: String,
    /// Latest anomaly indicator (probe error or high ping time), if any was raised.
    pub alert: Option<String>,
}

/// Create a publisher/receiver pair starting from an empty status.
pub fn channel() -> (StatusPublisher, StatusReceiver) {
    let (tx, rx) = watch::channel(LiveStatus::default());
    (StatusPublisher { tx }, StatusReceiver { rx })
}

/// Write side of the status channel. Not cloneable: there is one producer.
#[derive(Debug)]
pub struct StatusPublisher {
    tx: watch::Sender<LiveStatus>,
}

impl StatusPublisher {
    /// Replace the status line, keeping the current alert.
    pub fn set_status(&self, status: impl Into<String>) {
        let status = status.into();
        self.tx.send_modify(|live| live.status = status);
    }

    /// Raise the anomaly indicator.
    pub fn set_alert(&self, alert: impl Into<String>) {
        let alert = alert.into();
        self.tx.send_modify(|live| live.alert = Some(alert));
    }

    /// Create another observer.
    pub fn subscribe(&self) -> StatusReceiver {
        StatusReceiver {
            rx: self.tx.subscribe(),
        }
    }

    /// Snapshot of the current value.
    pub fn current(&self) -> LiveStatus {
        self.tx.borrow().clone()
    }
}

/// Read side of the status channel.
#[derive(Debug, Clone)]
pub struct StatusReceiver {
    rx: watch::Receiver<LiveStatus>,
}

impl StatusReceiver {
    /// Snapshot of the current value.
    pub fn current(&self) -> LiveStatus {
        self.rx.borrow().clone()
    }

    /// Wait for the next update and return it.
    ///
    /// Returns `None` once the publisher has been dropped.
    pub async fn changed(&mut self) -> Option<LiveStatus> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_status_is_empty() {
        let (publisher, receiver) = channel();
        assert_eq!(publisher.current(), LiveStatus::default());
        assert_eq!(receiver.current().status, "");
        assert!(receiver.current().alert.is_none());
    }

    #[test]
    fn test_status_update_keeps_alert() {
        let (publisher, receiver) = channel();
        publisher.set_alert("2024-05-08 10:00:00 High ping time: 512.00 ms");
        publisher.set_status("2024-05-08 10:00:10 35.27 ms");

        let live = receiver.current();
        assert_eq!(live.status, "2024-05-08 10:00:10 35.27 ms");
        assert_eq!(
            live.alert.as_deref(),
            Some("2024-05-08 10:00:00 High ping time: 512.00 ms")
        );
    }

    #[tokio::test]
    async fn test_changed_sees_latest_value() {
        let (publisher, mut receiver) = channel();
        publisher.set_status("first");
        publisher.set_status("second");

        let live = receiver.changed().await.unwrap();
        assert_eq!(live.status, "second");
    }

    #[tokio::test]
    async fn test_changed_ends_when_publisher_dropped() {
        let (publisher, mut receiver) = channel();
        let mut other = publisher.subscribe();
        drop(publisher);

        assert!(receiver.changed().await.is_none());
        assert!(other.changed().await.is_none());
    }
}
