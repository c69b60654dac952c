//! Environment-sourced configuration, built once at startup.
//!
//! All components receive their settings from this struct; nothing reads
//! the environment after startup. Missing required variables and
//! malformed values fail fast, before any request is made.

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, anyhow};

use stocksync_core::LocationId;
use stocksync_http::RetryPolicy;
use stocksync_storefront::StorefrontConfig;
use stocksync_supply::SupplyConfig;

#[derive(Debug, Clone)]
pub struct Config {
    pub supply: SupplyConfig,
    pub storefront: StorefrontConfig,
    /// The single storefront location all updates target.
    pub location_id: LocationId,
    pub retry: RetryPolicy,
    /// Pause between reconciliation runs.
    pub interval: Duration,
    /// Bind address of the health/status endpoint.
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Build the configuration from process environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    /// (injectable for tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let storefront = StorefrontConfig {
            base_url: required(&lookup, "STOREFRONT_BASE_URL")?,
            access_token: required(&lookup, "STOREFRONT_ACCESS_TOKEN")?,
        };
        let supply = SupplyConfig {
            base_url: or_default(&lookup, "SUPPLY_BASE_URL", "https://api.ultra-company.com"),
            auth_token: required(&lookup, "SUPPLY_AUTH_TOKEN")?,
            tenant_id: required(&lookup, "SUPPLY_TENANT_ID")?,
            warehouse_id: or_default(&lookup, "SUPPLY_WAREHOUSE_ID", "2"),
            product_group_id: or_default(&lookup, "SUPPLY_PRODUCT_GROUP_ID", "23"),
        };

        let location_id: LocationId = parsed(&lookup, "STOREFRONT_LOCATION_ID", "89053102423")?;
        let interval_minutes: u64 = parsed(&lookup, "SYNC_INTERVAL_MINUTES", "120")?;
        if interval_minutes == 0 {
            return Err(anyhow!("SYNC_INTERVAL_MINUTES must be at least 1"));
        }
        let max_attempts: u32 = parsed(&lookup, "HTTP_MAX_ATTEMPTS", "5")?;
        let backoff_ms: u64 = parsed(&lookup, "HTTP_BACKOFF_MS", "300")?;
        let bind_addr: SocketAddr = parsed(&lookup, "BIND_ADDR", "0.0.0.0:8080")?;

        Ok(Self {
            supply,
            storefront,
            location_id,
            retry: RetryPolicy::new(max_attempts, Duration::from_millis(backoff_ms)),
            interval: Duration::from_secs(interval_minutes.saturating_mul(60)),
            bind_addr,
        })
    }
}

fn required(lookup: impl Fn(&str) -> Option<String>, name: &str) -> anyhow::Result<String> {
    lookup(name)
        .filter(|value| !value.is_empty())
        .with_context(|| format!("{name} must be set"))
}

fn or_default(lookup: impl Fn(&str) -> Option<String>, name: &str, default: &str) -> String {
    lookup(name).unwrap_or_else(|| default.to_string())
}

fn parsed<T>(lookup: impl Fn(&str) -> Option<String>, name: &str, default: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = lookup(name).unwrap_or_else(|| default.to_string());
    raw.parse::<T>()
        .map_err(|e| anyhow!("invalid {name} value {raw:?}: {e}"))
}
