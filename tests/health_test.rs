mod common;

use approvals_gateway::config::Config;
use axum::http::StatusCode;

use common::{get, send};

#[tokio::test]
async fn reports_upstream_configuration() {
    let config = Config {
        customer_service_api_url: Some("http://fcubs.local/customers".to_string()),
        ..Config::default()
    };

    let (status, body) = send(config, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["customerService"], "configured");
    assert_eq!(body["accountQuery"], "missing");
    assert!(body["timestamp"].is_string());
}
