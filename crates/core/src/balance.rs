//! Balance snapshot lines reported by the supply system.

use serde::{Deserialize, Serialize};

use crate::id::Sku;

/// One entry from the supply system's product balance report.
///
/// Both fields are optional on the wire: the report includes products with
/// no vendor mapping (`vendorCode` empty or absent) and products with no
/// count. Such lines are skipped entirely, never partially processed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceLine {
    #[serde(default, rename = "vendorCode")]
    pub vendor_code: Option<String>,
    #[serde(default)]
    pub count: Option<f64>,
}

impl BalanceLine {
    pub fn new(vendor_code: impl Into<String>, count: f64) -> Self {
        Self {
            vendor_code: Some(vendor_code.into()),
            count: Some(count),
        }
    }

    /// The SKU for this line, if the vendor code is present and non-empty.
    pub fn sku(&self) -> Option<Sku> {
        self.vendor_code
            .as_deref()
            .and_then(|code| Sku::new(code).ok())
    }

    /// Whether the line carries everything needed to push an update.
    pub fn is_processable(&self) -> bool {
        self.sku().is_some() && self.count.is_some()
    }
}
