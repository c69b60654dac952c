//! Balance fetcher tests against a mock supply API.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use stocksync_http::{RetryPolicy, RobustClient};
use stocksync_supply::{SupplyClient, SupplyConfig, SupplyError};

fn client_for(server: &MockServer) -> SupplyClient {
    SupplyClient::new(
        RobustClient::new(RetryPolicy::new(2, Duration::from_millis(1))),
        SupplyConfig {
            base_url: server.uri(),
            auth_token: "token-123".into(),
            tenant_id: "tenant-9".into(),
            warehouse_id: "2".into(),
            product_group_id: "23".into(),
        },
    )
}

#[tokio::test]
async fn fetches_and_parses_snapshot() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tenant/report/productBalance"))
        .and(header("Authorization", "Bearer token-123"))
        .and(header("X-TenantID", "tenant-9"))
        .and(query_param("groupBy", "PRODUCT_GROUP"))
        .and(query_param("warehouseId", "2"))
        .and(query_param("productGroupId", "23"))
        .and(query_param("balanceType", "ALL"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"vendorCode": "SKU1", "count": 7.8},
            {"vendorCode": null, "count": 3.0},
            {"vendorCode": "SKU2"},
        ])))
        .mount(&server)
        .await;

    let lines = client_for(&server).fetch_balance().await.unwrap();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].vendor_code.as_deref(), Some("SKU1"));
    assert_eq!(lines[0].count, Some(7.8));
    assert!(lines[0].is_processable());
    assert!(!lines[1].is_processable());
    assert!(!lines[2].is_processable());

    // The `date` query param is dynamic; assert it was sent at all.
    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].url.query().unwrap_or("").contains("date="));
}

#[tokio::test]
async fn non_success_status_is_an_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tenant/report/productBalance"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .mount(&server)
        .await;

    match client_for(&server).fetch_balance().await {
        Err(SupplyError::Api { status }) => assert_eq!(status, 403),
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_json_is_a_parse_error_not_empty_data() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tenant/report/productBalance"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    match client_for(&server).fetch_balance().await {
        Err(SupplyError::Parse(_)) => {}
        other => panic!("expected Parse error, got {other:?}"),
    }
}
