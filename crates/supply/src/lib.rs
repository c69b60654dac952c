//! `stocksync-supply` — client for the warehouse reporting API.
//!
//! One read-only operation: fetch the current product balance snapshot.

pub mod client;
pub mod error;

pub use client::{SupplyClient, SupplyConfig};
pub use error::SupplyError;
