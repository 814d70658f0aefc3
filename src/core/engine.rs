use crate::core::reconciler::Reconciler;
use crate::core::{Registry, SyncReport};
use crate::utils::error::Result;
use std::future::Future;
use std::time::Duration;

/// Drives the reconciler: a single logged pass, or the daemon loop.
pub struct SyncEngine<R: Registry> {
    reconciler: Reconciler<R>,
}

impl<R: Registry> SyncEngine<R> {
    pub fn new(reconciler: Reconciler<R>) -> Self {
        Self { reconciler }
    }

    pub async fn run_once(&self) -> Result<SyncReport> {
        tracing::info!("🔄 Starting reconciliation pass");
        let report = self.reconciler.reconcile().await?;
        tracing::info!(
            "✅ Pass complete: {} pushed ({} desired / {} actual)",
            report.pushed.len(),
            report.desired,
            report.actual
        );
        Ok(report)
    }

    /// Repeats passes forever, sleeping `interval` between them, until
    /// `shutdown` resolves. The sleep is raced against `shutdown`, so a stop
    /// signal never waits out the interval. A pass error is fatal and
    /// propagates to the caller.
    pub async fn run_daemon<F>(&self, interval: Duration, mut shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Unpin,
    {
        loop {
            self.run_once().await?;

            tracing::info!("⏳ Waiting {} seconds until the next pass", interval.as_secs());
            tokio::select! {
                _ = tokio::time::sleep(interval) => {}
                _ = &mut shutdown => {
                    tracing::info!("🛑 Shutdown requested, stopping daemon loop");
                    return Ok(());
                }
            }
        }
    }
}
