//! `stocksync-storefront` — client for the storefront platform.
//!
//! Read side: paginated SKU resolution over the product catalog and the
//! variant → inventory-item lookup. Write side: the inventory-level set
//! call. No storefront mutation happens anywhere else.

pub mod client;
pub mod error;
pub mod link;
pub mod types;

pub use client::{StorefrontClient, StorefrontConfig};
pub use error::StorefrontError;
pub use link::next_page_url;
