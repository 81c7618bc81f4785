use std::future::Future;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::signal;
use tokio::sync::Notify;

/// Resolves the server's graceful-shutdown future on Ctrl-C, SIGTERM or an
/// explicit [`signal_shutdown`](ShutdownManager::signal_shutdown).
#[derive(Default)]
pub struct ShutdownManager {
    requested: AtomicBool,
    notify: Notify,
}

impl ShutdownManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for the first shutdown trigger.
    ///
    /// A signal handler that cannot be installed is logged and ignored;
    /// the explicit trigger keeps working.
    pub async fn wait_for_shutdown(&self) {
        self.wait_with(signal::ctrl_c(), terminate()).await
    }

    async fn wait_with(
        &self,
        interrupt: impl Future<Output = io::Result<()>>,
        terminate: impl Future<Output = io::Result<()>>,
    ) {
        if self.is_shutting_down() {
            return;
        }

        let trigger = tokio::select! {
            _ = signal_or_pending("ctrl-c", interrupt) => "ctrl-c",
            _ = signal_or_pending("sigterm", terminate) => "sigterm",
            _ = self.notify.notified() => "handle",
        };

        self.requested.store(true, Ordering::SeqCst);
        tracing::info!(trigger, "Catalog proxy shutting down");
    }

    pub fn signal_shutdown(&self) {
        self.requested.store(true, Ordering::SeqCst);
        // notify_one keeps a permit for a waiter that has not started yet.
        self.notify.notify_one();
    }

    pub fn is_shutting_down(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }
}

/// Completes when the signal arrives; never completes if its handler failed.
async fn signal_or_pending(name: &'static str, signal: impl Future<Output = io::Result<()>>) {
    if let Err(e) = signal.await {
        tracing::warn!(signal = name, error = %e, "Signal handler unavailable");
        std::future::pending::<()>().await;
    }
}

#[cfg(unix)]
async fn terminate() -> io::Result<()> {
    let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())?;
    sigterm.recv().await;
    Ok(())
}

#[cfg(not(unix))]
async fn terminate() -> io::Result<()> {
    std::future::pending().await
}
