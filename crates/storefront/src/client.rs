//! Storefront API client: SKU resolution, inventory-item lookup, and the
//! inventory-level update call.

use tracing::{debug, warn};

use stocksync_core::{InventoryItemId, InventoryUpdate, Sku, VariantId};
use stocksync_http::{RequestSpec, RobustClient};

use crate::error::StorefrontError;
use crate::link::next_page_url;
use crate::types::{ProductsPage, VariantEnvelope};

const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Connection settings for the storefront platform.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Admin API base URL, e.g. `https://shop.example/admin/api/2024-01`.
    pub base_url: String,
    pub access_token: String,
}

/// Client for the storefront's product, variant, and inventory endpoints.
#[derive(Debug, Clone)]
pub struct StorefrontClient {
    http: RobustClient,
    config: StorefrontConfig,
}

impl StorefrontClient {
    pub fn new(http: RobustClient, config: StorefrontConfig) -> Self {
        Self { http, config }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn get(&self, url: &str) -> RequestSpec {
        RequestSpec::get(url).header(ACCESS_TOKEN_HEADER, &self.config.access_token)
    }

    /// Find the variant carrying `sku`, scanning the product catalog page
    /// by page in catalog order. Matching is exact and case-sensitive.
    ///
    /// Pagination follows the `Link` header's `rel="next"` entry and
    /// terminates when no next page exists, when a page request does not
    /// succeed, or when the cursor stops advancing (a self-referential
    /// next link would otherwise loop forever).
    pub async fn resolve_variant(&self, sku: &Sku) -> Result<Option<VariantId>, StorefrontError> {
        let mut url = self.endpoint("products.json");

        loop {
            let response = match self.http.request(&self.get(&url)).await {
                Ok(response) => response,
                Err(error) => {
                    warn!(%sku, %error, "catalog page request failed, treating SKU as not found");
                    return Ok(None);
                }
            };
            if !response.status().is_success() {
                warn!(
                    %sku,
                    status = response.status().as_u16(),
                    "catalog page returned non-success, treating SKU as not found"
                );
                return Ok(None);
            }

            // The Link header must be read before the body consumes the
            // response.
            let next = response
                .headers()
                .get(reqwest::header::LINK)
                .and_then(|value| value.to_str().ok())
                .and_then(next_page_url);

            let page: ProductsPage = response
                .json()
                .await
                .map_err(|e| StorefrontError::Parse(e.to_string()))?;

            for product in &page.products {
                for variant in &product.variants {
                    if variant.sku.as_deref() == Some(sku.as_str()) {
                        debug!(%sku, variant_id = variant.id, "resolved SKU to variant");
                        return Ok(Some(VariantId::new(variant.id)));
                    }
                }
            }

            match next {
                None => return Ok(None),
                Some(next) if next == url => {
                    warn!(%sku, url = %next, "self-referential pagination cursor, stopping");
                    return Ok(None);
                }
                Some(next) => url = next,
            }
        }
    }

    /// Fetch the inventory-item identifier behind a variant.
    ///
    /// Any failure — non-success status, exhausted retries, missing field,
    /// unparsable body — yields `None`; the caller records the line as
    /// skipped.
    pub async fn locate_inventory_item(
        &self,
        variant_id: VariantId,
    ) -> Result<Option<InventoryItemId>, StorefrontError> {
        let url = self.endpoint(&format!("variants/{variant_id}.json"));

        let response = match self.http.request(&self.get(&url)).await {
            Ok(response) => response,
            Err(error) => {
                warn!(%variant_id, %error, "variant lookup failed");
                return Ok(None);
            }
        };
        if !response.status().is_success() {
            warn!(
                %variant_id,
                status = response.status().as_u16(),
                "variant lookup returned non-success"
            );
            return Ok(None);
        }

        match response.json::<VariantEnvelope>().await {
            Ok(envelope) => Ok(envelope.variant.inventory_item_id.map(InventoryItemId::new)),
            Err(error) => {
                warn!(%variant_id, %error, "unparsable variant body");
                Ok(None)
            }
        }
    }

    /// Push an absolute inventory level to the storefront.
    pub async fn set_inventory_level(&self, update: &InventoryUpdate) -> Result<(), StorefrontError> {
        let body =
            serde_json::to_value(update).map_err(|e| StorefrontError::Parse(e.to_string()))?;
        let spec = RequestSpec::post(self.endpoint("inventory_levels/set.json"))
            .header(ACCESS_TOKEN_HEADER, &self.config.access_token)
            .json_body(body);

        let response = self.http.request(&spec).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StorefrontError::Api {
                status: status.as_u16(),
            });
        }

        debug!(
            inventory_item_id = %update.inventory_item_id,
            available = update.available,
            "inventory level set"
        );
        Ok(())
    }
}
