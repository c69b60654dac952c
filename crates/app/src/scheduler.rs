//! Fixed-interval scheduler that owns the reconciliation driver.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::{Notify, RwLock};
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

use stocksync_core::RunReport;
use stocksync_reconcile::{BalanceSource, Reconciler, StorefrontGateway};

/// Scheduler state exposed by the status endpoint.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SchedulerStatus {
    pub scheduler_running: bool,
    pub runs_completed: u64,
    pub runs_aborted: u64,
    pub last_report: Option<RunReport>,
    pub last_error: Option<String>,
}

/// Owns the ticker and invokes the driver on a fixed interval.
///
/// Runs are serialized by construction: the single scheduler task awaits
/// each run to completion, and a tick that fires while a run is still
/// executing is dropped (`MissedTickBehavior::Skip`), never queued. The
/// first run starts immediately; a failed run is logged and the next
/// tick fires normally.
pub struct Scheduler<S, G> {
    reconciler: Reconciler<S, G>,
    interval: Duration,
    status: Arc<RwLock<SchedulerStatus>>,
    shutdown: Arc<Notify>,
}

impl<S, G> Scheduler<S, G>
where
    S: BalanceSource + 'static,
    G: StorefrontGateway + 'static,
{
    pub fn new(reconciler: Reconciler<S, G>, interval: Duration) -> Self {
        Self {
            reconciler,
            interval,
            status: Arc::new(RwLock::new(SchedulerStatus::default())),
            shutdown: Arc::new(Notify::new()),
        }
    }

    /// Shared status handle for the web surface.
    pub fn status(&self) -> Arc<RwLock<SchedulerStatus>> {
        self.status.clone()
    }

    /// Handle for requesting graceful shutdown.
    pub fn shutdown_handle(&self) -> Arc<Notify> {
        self.shutdown.clone()
    }

    /// Spawn the scheduling loop onto the runtime.
    pub fn start(self) -> tokio::task::JoinHandle<()> {
        let Self {
            reconciler,
            interval,
            status,
            shutdown,
        } = self;

        tokio::spawn(async move {
            info!(interval_secs = interval.as_secs(), "scheduler started");
            status.write().await.scheduler_running = true;

            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = shutdown.notified() => {
                        info!("scheduler received shutdown signal");
                        break;
                    }
                    _ = ticker.tick() => {
                        match reconciler.run().await {
                            Ok(report) => {
                                let mut state = status.write().await;
                                state.runs_completed += 1;
                                state.last_error = None;
                                state.last_report = Some(report);
                            }
                            Err(run_error) => {
                                warn!(error = %run_error, "reconciliation run aborted");
                                let mut state = status.write().await;
                                state.runs_aborted += 1;
                                state.last_error = Some(run_error.to_string());
                            }
                        }
                    }
                }
            }

            status.write().await.scheduler_running = false;
            info!("scheduler stopped");
        })
    }
}
