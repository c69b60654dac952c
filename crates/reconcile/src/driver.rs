//! The per-line reconciliation loop.

use tracing::{debug, error, info, warn};

use stocksync_core::{
    BalanceLine, InventoryUpdate, LineOutcome, LocationId, RunId, RunReport, adjusted_count,
};

use crate::error::RunError;
use crate::traits::{BalanceSource, StorefrontGateway};

/// Drives one reconciliation run: fetch the snapshot, then for each line
/// resolve SKU → variant → inventory item and push the adjusted count.
///
/// Lines are processed sequentially, in the order received. A line's
/// failure is recorded and the run continues; only a failed snapshot
/// fetch aborts the run.
pub struct Reconciler<S, G> {
    source: S,
    gateway: G,
    location_id: LocationId,
}

impl<S, G> Reconciler<S, G>
where
    S: BalanceSource,
    G: StorefrontGateway,
{
    pub fn new(source: S, gateway: G, location_id: LocationId) -> Self {
        Self {
            source,
            gateway,
            location_id,
        }
    }

    /// Execute one complete pass over the current balance snapshot.
    pub async fn run(&self) -> Result<RunReport, RunError> {
        let run_id = RunId::new();
        let mut report = RunReport::started(run_id);
        info!(%run_id, "reconciliation run starting");

        let lines = match self.source.fetch_balance().await {
            Ok(lines) => lines,
            Err(source_error) => {
                error!(%run_id, error = %source_error, "balance snapshot unavailable, aborting run");
                return Err(RunError::Snapshot(source_error));
            }
        };

        for line in &lines {
            let outcome = self.process_line(line).await;
            log_outcome(run_id, &outcome);
            report.record(&outcome);
        }

        report.finish();
        info!(
            %run_id,
            processed = report.processed,
            succeeded = report.succeeded,
            failed = report.failed,
            skipped = report.skipped,
            "reconciliation run finished"
        );
        Ok(report)
    }

    async fn process_line(&self, line: &BalanceLine) -> LineOutcome {
        let (Some(sku), Some(count)) = (line.sku(), line.count) else {
            return LineOutcome::SkippedMissingFields;
        };

        let variant_id = match self.gateway.resolve_variant(&sku).await {
            Ok(Some(id)) => id,
            Ok(None) => return LineOutcome::SkippedSkuNotFound { sku },
            Err(gateway_error) => {
                return LineOutcome::Failed {
                    sku: Some(sku),
                    reason: gateway_error.to_string(),
                };
            }
        };

        let inventory_item_id = match self.gateway.locate_inventory_item(variant_id).await {
            Ok(Some(id)) => id,
            Ok(None) => return LineOutcome::SkippedInventoryItemNotFound { sku },
            Err(gateway_error) => {
                return LineOutcome::Failed {
                    sku: Some(sku),
                    reason: gateway_error.to_string(),
                };
            }
        };

        let update = InventoryUpdate::new(self.location_id, inventory_item_id, adjusted_count(count));
        match self.gateway.set_inventory_level(&update).await {
            Ok(()) => LineOutcome::Updated {
                sku,
                available: update.available,
            },
            Err(gateway_error) => LineOutcome::Failed {
                sku: Some(sku),
                reason: gateway_error.to_string(),
            },
        }
    }
}

fn log_outcome(run_id: RunId, outcome: &LineOutcome) {
    match outcome {
        LineOutcome::Updated { sku, available } => {
            info!(%run_id, %sku, available, "inventory updated");
        }
        LineOutcome::SkippedMissingFields => {
            debug!(%run_id, "line missing vendor code or count, skipped");
        }
        LineOutcome::SkippedSkuNotFound { sku } => {
            warn!(%run_id, %sku, "SKU not found in storefront catalog");
        }
        LineOutcome::SkippedInventoryItemNotFound { sku } => {
            warn!(%run_id, %sku, "no inventory item behind variant");
        }
        LineOutcome::Failed { sku, reason } => {
            warn!(%run_id, sku = sku.as_ref().map(|s| s.as_str()), reason, "line failed");
        }
    }
}
