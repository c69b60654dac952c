use anyhow::Context;

use stocksync_app::{Config, Scheduler, web};
use stocksync_http::RobustClient;
use stocksync_reconcile::Reconciler;
use stocksync_storefront::StorefrontClient;
use stocksync_supply::SupplyClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stocksync_observability::init();

    let config = Config::from_env().context("configuration error")?;

    let http = RobustClient::new(config.retry);
    let supply = SupplyClient::new(http.clone(), config.supply.clone());
    let storefront = StorefrontClient::new(http, config.storefront.clone());
    let reconciler = Reconciler::new(supply, storefront, config.location_id);

    let scheduler = Scheduler::new(reconciler, config.interval);
    let status = scheduler.status();
    let shutdown = scheduler.shutdown_handle();
    let worker = scheduler.start();

    let app = web::build_app(status);
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    // The web server is down; stop the scheduler before exiting.
    shutdown.notify_one();
    let _ = worker.await;

    Ok(())
}
