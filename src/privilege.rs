//! Background sudo keep-alive.
//!
//! Provisioning runs can take long enough for cached sudo credentials to
//! expire mid-step. The keeper validates sudo once up front, then
//! re-asserts the cached credentials from a background thread until the
//! pipeline finishes. Teardown happens on every exit path: stopping is
//! wired into `Drop`, so a mandatory-failure abort or a fault inside a
//! step action releases the thread just like a normal completion.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::error::{Result, RigupError};
use crate::shell;

/// How often the cached credentials are re-asserted.
const REFRESH_INTERVAL: Duration = Duration::from_secs(60);

/// Keeps elevated privileges alive for the duration of a pipeline run.
pub struct PrivilegeKeeper {
    stop_tx: mpsc::Sender<()>,
    handle: Option<JoinHandle<()>>,
}

impl PrivilegeKeeper {
    /// Validate sudo (prompting the operator for their password) and start
    /// the refresh thread.
    ///
    /// When already running as root there is nothing to keep alive; the
    /// refresh is a no-op but the keeper lifecycle stays uniform.
    pub fn start() -> Result<Self> {
        if is_root() {
            return Ok(Self::with_refresh(REFRESH_INTERVAL, || true));
        }

        shell::run("sudo", &["-v"]).map_err(|_| RigupError::PrivilegeDenied)?;
        tracing::debug!("sudo validated, starting keep-alive");

        Ok(Self::with_refresh(REFRESH_INTERVAL, || {
            shell::run_quiet("sudo", &["-n", "-v"])
        }))
    }

    /// Start a keeper with an injectable refresh operation.
    ///
    /// The thread re-runs `refresh` every `interval` until it is told to
    /// stop or `refresh` reports failure. A failing refresh (credentials
    /// revoked mid-run) ends the thread silently; in-flight steps are not
    /// interrupted, and the next step that needs privilege will surface
    /// the problem itself.
    pub fn with_refresh(
        interval: Duration,
        mut refresh: impl FnMut() -> bool + Send + 'static,
    ) -> Self {
        let (stop_tx, stop_rx) = mpsc::channel();

        let handle = thread::spawn(move || loop {
            match stop_rx.recv_timeout(interval) {
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                Err(RecvTimeoutError::Timeout) => {
                    if !refresh() {
                        tracing::debug!("privilege refresh failed, keeper stopping");
                        break;
                    }
                }
            }
        });

        Self {
            stop_tx,
            handle: Some(handle),
        }
    }

    /// Stop the refresh thread and wait for it to exit.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = self.stop_tx.send(());
            let _ = handle.join();
        }
    }
}

impl Drop for PrivilegeKeeper {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(unix)]
fn is_root() -> bool {
    // Safety: geteuid has no preconditions and cannot fail.
    unsafe { libc::geteuid() == 0 }
}

#[cfg(not(unix))]
fn is_root() -> bool {
    false
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    /// Increments a counter when dropped; moving it into the refresh
    /// closure makes thread termination observable.
    struct TerminationProbe(Arc<AtomicUsize>);

    impl Drop for TerminationProbe {
        fn drop(&mut self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn refresh_runs_periodically() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let keeper = PrivilegeKeeper::with_refresh(Duration::from_millis(5), move || {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        });

        std::thread::sleep(Duration::from_millis(60));
        keeper.stop();

        assert!(count.load(Ordering::SeqCst) >= 2);
    }

    #[test]
    fn stop_terminates_the_thread_exactly_once() {
        let terminations = Arc::new(AtomicUsize::new(0));
        let probe = TerminationProbe(Arc::clone(&terminations));
        let keeper = PrivilegeKeeper::with_refresh(Duration::from_secs(60), move || {
            let _ = &probe;
            true
        });

        keeper.stop();

        assert_eq!(terminations.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn drop_terminates_the_thread() {
        let terminations = Arc::new(AtomicUsize::new(0));
        let probe = TerminationProbe(Arc::clone(&terminations));
        {
            let _keeper = PrivilegeKeeper::with_refresh(Duration::from_secs(60), move || {
                let _ = &probe;
                true
            });
        }

        assert_eq!(terminations.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn failing_refresh_stops_silently() {
        let terminations = Arc::new(AtomicUsize::new(0));
        let probe = TerminationProbe(Arc::clone(&terminations));
        let keeper = PrivilegeKeeper::with_refresh(Duration::from_millis(5), move || {
            let _ = &probe;
            false
        });

        std::thread::sleep(Duration::from_millis(50));
        assert_eq!(terminations.load(Ordering::SeqCst), 1);

        // Stopping after the thread already exited is a no-op.
        keeper.stop();
        assert_eq!(terminations.load(Ordering::SeqCst), 1);
    }
}
