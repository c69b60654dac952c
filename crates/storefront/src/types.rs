//! Wire DTOs for the storefront REST API (unknown fields ignored).

use serde::Deserialize;

/// One page of `GET /products.json`.
#[derive(Debug, Deserialize)]
pub struct ProductsPage {
    #[serde(default)]
    pub products: Vec<Product>,
}

#[derive(Debug, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
}

/// Variant as listed inside a product.
#[derive(Debug, Deserialize)]
pub struct ProductVariant {
    pub id: u64,
    #[serde(default)]
    pub sku: Option<String>,
}

/// Envelope of `GET /variants/{id}.json`.
#[derive(Debug, Deserialize)]
pub struct VariantEnvelope {
    pub variant: VariantDetail,
}

#[derive(Debug, Deserialize)]
pub struct VariantDetail {
    #[serde(default)]
    pub inventory_item_id: Option<u64>,
}
