/// Tests for the REST adapter against a local mock server
use dashboard_sync::prelude::*;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn api(server: &MockServer) -> HttpDashboardApi {
    HttpDashboardApi::new(&format!("{}/api", server.uri()), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_fetch_unwraps_envelope_with_range() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/analytics/sales"))
        .and(query_param("range", "7d"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"series": [1, 2, 3]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = View::Analytics
        .requests(TimeRange::Week)
        .into_iter()
        .find(|r| r.name.as_str() == "sales")
        .unwrap();
    let data = api(&server).await.fetch(&request).await.unwrap();

    assert_eq!(data, json!({"series": [1, 2, 3]}));
}

#[tokio::test]
async fn test_fetch_unsuccessful_envelope_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/analytics/dashboard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "error": "analytics warehouse unavailable"
        })))
        .mount(&server)
        .await;

    let request = FetchRequest::new(MetricGroup::dashboard(), Endpoint::DashboardTotals);
    let err = api(&server).await.fetch(&request).await.unwrap_err();

    assert!(format!("{:#}", err).contains("analytics warehouse unavailable"));
}

#[tokio::test]
async fn test_http_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/shipping-partners"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let err = api(&server).await.list_shipping_partners().await.unwrap_err();
    assert!(err.to_string().contains("status 502"));
}

#[tokio::test]
async fn test_error_status_with_envelope_is_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/payment-gateways"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "success": false,
            "message": "provider already configured"
        })))
        .mount(&server)
        .await;

    let gateway = NewPaymentGateway::new("Stripe", "stripe", true, None).unwrap();
    let err = api(&server)
        .await
        .create_payment_gateway(&gateway)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("provider already configured"));
}

#[tokio::test]
async fn test_create_and_update_gateway() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/payment-gateways"))
        .and(body_json(json!({
            "name": "Razorpay",
            "provider": "razorpay",
            "enabled": true,
            "mode": "test"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "success": true,
            "data": {
                "id": "gw_1",
                "name": "Razorpay",
                "provider": "razorpay",
                "enabled": true,
                "mode": "test",
                "createdAt": "2026-01-01T00:00:00Z"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/payment-gateways/gw_1"))
        .and(body_json(json!({"enabled": false})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "id": "gw_1",
                "name": "Razorpay",
                "provider": "razorpay",
                "enabled": false,
                "mode": "test"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = api(&server).await;
    let gateway = NewPaymentGateway::new("Razorpay", "razorpay", true, Some("test".to_string()))
        .unwrap();
    let created = api.create_payment_gateway(&gateway).await.unwrap();
    assert_eq!(created.id, "gw_1");
    assert!(created.extra.contains_key("createdAt"));

    let update = PaymentGatewayUpdate {
        enabled: Some(false),
        ..Default::default()
    };
    let updated = api
        .update_payment_gateway(&GatewayId::new("gw_1").unwrap(), &update)
        .await
        .unwrap();
    assert!(!updated.enabled);
}

#[tokio::test]
async fn test_serviceability_query_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/shipping-partners/serviceability"))
        .and(query_param("pickup", "110001"))
        .and(query_param("delivery", "560001"))
        .and(query_param("cod", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "serviceable": true,
                "partners": [{"id": "sp_1", "eta_days": 3}]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let query = ServiceabilityQuery::new("110001", "560001", None, true).unwrap();
    let result = api(&server).await.check_serviceability(&query).await.unwrap();
    assert!(result.serviceable);
    assert_eq!(result.partners.len(), 1);
}

#[tokio::test]
async fn test_orchestrated_cycle_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/analytics/dashboard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"orders": 12}
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/analytics/sales"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let source = std::sync::Arc::new(api(&server).await);
    let use_case = FetchSnapshotUseCase::new(source, StderrProgressReporter::quiet());
    let response = use_case.execute(FetchSnapshotRequest::default()).await;

    assert!(response.is_degraded());
    assert_eq!(response.snapshot.payload("dashboard"), Some(&json!({"orders": 12})));
    assert_eq!(
        response.snapshot.group("sales").unwrap().freshness,
        Freshness::Error
    );
}
