//! Trait implementations for the real supply and storefront clients.

use stocksync_core::{BalanceLine, InventoryItemId, InventoryUpdate, Sku, VariantId};
use stocksync_storefront::{StorefrontClient, StorefrontError};
use stocksync_supply::{SupplyClient, SupplyError};

use crate::error::{GatewayError, SourceError};
use crate::traits::{BalanceSource, StorefrontGateway};

impl From<SupplyError> for SourceError {
    fn from(error: SupplyError) -> Self {
        match error {
            SupplyError::Parse(message) => SourceError::Malformed(message),
            other => SourceError::Unavailable(other.to_string()),
        }
    }
}

impl From<StorefrontError> for GatewayError {
    fn from(error: StorefrontError) -> Self {
        GatewayError::Call(error.to_string())
    }
}

impl BalanceSource for SupplyClient {
    async fn fetch_balance(&self) -> Result<Vec<BalanceLine>, SourceError> {
        Ok(SupplyClient::fetch_balance(self).await?)
    }
}

impl StorefrontGateway for StorefrontClient {
    async fn resolve_variant(&self, sku: &Sku) -> Result<Option<VariantId>, GatewayError> {
        Ok(StorefrontClient::resolve_variant(self, sku).await?)
    }

    async fn locate_inventory_item(
        &self,
        variant_id: VariantId,
    ) -> Result<Option<InventoryItemId>, GatewayError> {
        Ok(StorefrontClient::locate_inventory_item(self, variant_id).await?)
    }

    async fn set_inventory_level(&self, update: &InventoryUpdate) -> Result<(), GatewayError> {
        Ok(StorefrontClient::set_inventory_level(self, update).await?)
    }
}
