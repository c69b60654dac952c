//! Seams between the driver and the external systems.
//!
//! Methods return named `impl Future + Send` so the driver can be spawned
//! onto the runtime when used behind generic bounds; implementations use
//! plain `async fn`.

use std::future::Future;

use stocksync_core::{BalanceLine, InventoryItemId, InventoryUpdate, Sku, VariantId};

use crate::error::{GatewayError, SourceError};

/// Provider of balance snapshots (the supply system).
pub trait BalanceSource: Send + Sync {
    fn fetch_balance(&self)
    -> impl Future<Output = Result<Vec<BalanceLine>, SourceError>> + Send;
}

/// The storefront operations the driver needs, all read-only except the
/// final update.
pub trait StorefrontGateway: Send + Sync {
    /// Resolve a vendor SKU to a variant id; `None` is a legitimate miss.
    fn resolve_variant(
        &self,
        sku: &Sku,
    ) -> impl Future<Output = Result<Option<VariantId>, GatewayError>> + Send;

    /// Look up the inventory item behind a variant; `None` is a miss.
    fn locate_inventory_item(
        &self,
        variant_id: VariantId,
    ) -> impl Future<Output = Result<Option<InventoryItemId>, GatewayError>> + Send;

    /// Push an absolute inventory level.
    fn set_inventory_level(
        &self,
        update: &InventoryUpdate,
    ) -> impl Future<Output = Result<(), GatewayError>> + Send;
}
