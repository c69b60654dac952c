//! `stocksync-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives for the reconciliation
//! pipeline (no IO, no HTTP, no storage).

pub mod balance;
pub mod error;
pub mod id;
pub mod quantity;
pub mod report;
pub mod update;

pub use balance::BalanceLine;
pub use error::{DomainError, DomainResult};
pub use id::{InventoryItemId, LocationId, RunId, Sku, VariantId};
pub use quantity::adjusted_count;
pub use report::{LineOutcome, RunReport};
pub use update::InventoryUpdate;
