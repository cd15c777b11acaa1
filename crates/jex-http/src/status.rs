//! Network reachability observer

use std::future::Future;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// How long a TCP probe may take before counting as offline
const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Last observed reachability state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    Online,
    Offline,
    /// No probe has completed yet
    Unknown,
}

/// Periodic reachability monitor
///
/// Runs a caller-supplied async probe on an interval and publishes the
/// latest result through a watch channel. The monitor is a pure observer:
/// exchange errors never feed into it and it never influences an exchange
/// outcome. Dropping it aborts the background task.
pub struct ConnectivityMonitor {
    receiver: watch::Receiver<Connectivity>,
    task: JoinHandle<()>,
}

impl ConnectivityMonitor {
    /// Spawn a monitor driven by `probe`
    ///
    /// The probe returns `true` when the network is reachable. The first
    /// probe runs immediately; until it completes, [`status`] reports
    /// [`Connectivity::Unknown`].
    ///
    /// [`status`]: ConnectivityMonitor::status
    pub fn spawn<P, F>(interval: Duration, probe: P) -> Self
    where
        P: Fn() -> F + Send + 'static,
        F: Future<Output = bool> + Send,
    {
        let (sender, receiver) = watch::channel(Connectivity::Unknown);
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let status = if probe().await {
                    Connectivity::Online
                } else {
                    Connectivity::Offline
                };
                if sender.send(status).is_err() {
                    break;
                }
            }
        });
        ConnectivityMonitor { receiver, task }
    }

    /// Monitor reachability of a TCP endpoint (`host:port`)
    pub fn tcp(addr: impl Into<String>, interval: Duration) -> Self {
        let addr = addr.into();
        Self::spawn(interval, move || {
            let addr = addr.clone();
            async move {
                matches!(
                    tokio::time::timeout(PROBE_TIMEOUT, tokio::net::TcpStream::connect(&addr))
                        .await,
                    Ok(Ok(_))
                )
            }
        })
    }

    /// Latest observed state
    pub fn status(&self) -> Connectivity {
        *self.receiver.borrow()
    }

    /// A receiver for awaiting state changes
    pub fn subscribe(&self) -> watch::Receiver<Connectivity> {
        self.receiver.clone()
    }
}

impl Drop for ConnectivityMonitor {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_initial_status_is_unknown() {
        let monitor = ConnectivityMonitor::spawn(Duration::from_secs(3600), || {
            std::future::pending::<bool>()
        });
        assert_eq!(monitor.status(), Connectivity::Unknown);
    }

    #[tokio::test]
    async fn test_probe_drives_status() {
        let reachable = Arc::new(AtomicBool::new(true));
        let flag = reachable.clone();
        let monitor = ConnectivityMonitor::spawn(Duration::from_millis(5), move || {
            let flag = flag.clone();
            async move { flag.load(Ordering::SeqCst) }
        });

        let mut receiver = monitor.subscribe();
        receiver.changed().await.unwrap();
        assert_eq!(*receiver.borrow_and_update(), Connectivity::Online);

        reachable.store(false, Ordering::SeqCst);
        while *receiver.borrow_and_update() != Connectivity::Offline {
            receiver.changed().await.unwrap();
        }
        assert_eq!(monitor.status(), Connectivity::Offline);
    }

    #[tokio::test]
    async fn test_tcp_probe_unreachable_endpoint() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let monitor = ConnectivityMonitor::tcp(addr.to_string(), Duration::from_millis(5));
        let mut receiver = monitor.subscribe();
        receiver.changed().await.unwrap();
        assert_eq!(*receiver.borrow(), Connectivity::Offline);
    }
}
