//! `stocksync-reconcile` — the reconciliation driver.
//!
//! Orchestrates one pass over a balance snapshot: per line, resolve the
//! SKU to a variant, locate its inventory item, and push the adjusted
//! count. The driver talks to the outside world only through the
//! [`BalanceSource`] and [`StorefrontGateway`] seams, so it is testable
//! with in-memory fakes — no timer, no network.

pub mod adapters;
pub mod driver;
pub mod error;
pub mod traits;

pub use driver::Reconciler;
pub use error::{GatewayError, RunError, SourceError};
pub use traits::{BalanceSource, StorefrontGateway};
