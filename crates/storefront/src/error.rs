use thiserror::Error;

use stocksync_http::HttpClientError;

/// Storefront API failure.
///
/// Resolution misses (unknown SKU, missing inventory item) are not errors;
/// they surface as `Ok(None)` from the client.
#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error(transparent)]
    Http(#[from] HttpClientError),

    #[error("storefront API call failed with status {status}")]
    Api { status: u16 },

    #[error("malformed storefront response: {0}")]
    Parse(String),
}
