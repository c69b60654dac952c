//! Balance fetcher against the supply system's reporting endpoint.

use chrono::Utc;
use tracing::info;

use stocksync_core::BalanceLine;
use stocksync_http::{RequestSpec, RobustClient};

use crate::error::SupplyError;

/// Connection settings for the supply system.
#[derive(Debug, Clone)]
pub struct SupplyConfig {
    /// Base URL, e.g. `https://api.ultra-company.com`.
    pub base_url: String,
    /// Bearer token for the reporting API.
    pub auth_token: String,
    /// Tenant identifier sent as `X-TenantID`.
    pub tenant_id: String,
    /// Fixed warehouse the report is scoped to.
    pub warehouse_id: String,
    /// Fixed product group the report is scoped to.
    pub product_group_id: String,
}

/// Client for the supply system's product balance report.
#[derive(Debug, Clone)]
pub struct SupplyClient {
    http: RobustClient,
    config: SupplyConfig,
}

impl SupplyClient {
    pub fn new(http: RobustClient, config: SupplyConfig) -> Self {
        Self { http, config }
    }

    /// Fetch the current product balance snapshot.
    ///
    /// The report is requested for the current UTC instant, grouped by
    /// product group, covering all balance types.
    pub async fn fetch_balance(&self) -> Result<Vec<BalanceLine>, SupplyError> {
        let url = format!(
            "{}/tenant/report/productBalance",
            self.config.base_url.trim_end_matches('/')
        );
        let spec = RequestSpec::get(url)
            .header(
                "Authorization",
                format!("Bearer {}", self.config.auth_token),
            )
            .header("X-TenantID", &self.config.tenant_id)
            .query("groupBy", "PRODUCT_GROUP")
            .query("date", Utc::now().to_rfc3339())
            .query("warehouseId", &self.config.warehouse_id)
            .query("productGroupId", &self.config.product_group_id)
            .query("balanceType", "ALL");

        let response = self.http.request(&spec).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SupplyError::Api {
                status: status.as_u16(),
            });
        }

        let lines: Vec<BalanceLine> = response
            .json()
            .await
            .map_err(|e| SupplyError::Parse(e.to_string()))?;

        info!(lines = lines.len(), "fetched product balance snapshot");
        Ok(lines)
    }
}
