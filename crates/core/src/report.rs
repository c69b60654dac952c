//! Reconciliation run accounting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{RunId, Sku};

/// Outcome of a single balance line within a run.
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    /// Update pushed to the storefront.
    Updated { sku: Sku, available: u64 },
    /// Vendor code or count absent; nothing to do.
    SkippedMissingFields,
    /// No storefront variant carries this SKU.
    SkippedSkuNotFound { sku: Sku },
    /// Variant found but its inventory item could not be located.
    SkippedInventoryItemNotFound { sku: Sku },
    /// The line errored (update call failed, or an unexpected error
    /// during resolution). The run continues with the next line.
    Failed { sku: Option<Sku>, reason: String },
}

/// Summary of one complete pass over a balance snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub run_id: RunId,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    /// Every line in the snapshot, in order received.
    pub processed: u64,
    /// Lines whose storefront update succeeded.
    pub succeeded: u64,
    /// Lines that errored (the run continued regardless).
    pub failed: u64,
    /// Lines that never reached the update call.
    pub skipped: u64,
}

impl RunReport {
    pub fn started(run_id: RunId) -> Self {
        Self {
            run_id,
            started_at: Utc::now(),
            finished_at: None,
            processed: 0,
            succeeded: 0,
            failed: 0,
            skipped: 0,
        }
    }

    /// Fold one line outcome into the counters.
    pub fn record(&mut self, outcome: &LineOutcome) {
        self.processed += 1;
        match outcome {
            LineOutcome::Updated { .. } => self.succeeded += 1,
            LineOutcome::SkippedMissingFields
            | LineOutcome::SkippedSkuNotFound { .. }
            | LineOutcome::SkippedInventoryItemNotFound { .. } => self.skipped += 1,
            LineOutcome::Failed { .. } => self.failed += 1,
        }
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }
}
