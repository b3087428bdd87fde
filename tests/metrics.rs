// tests/metrics.rs
//
// The Prometheus recorder can be installed once per process, so this file
// holds the single test that touches it.

use axum::body::{self, Body};
use axum::http::Request;
use tower::ServiceExt as _;

use healthy_tummies_score::metrics::Metrics;

#[tokio::test]
async fn metrics_endpoint_exposes_the_rule_table_gauge() {
    let metrics = Metrics::init();
    let app = metrics.router();

    let req = Request::builder()
        .method("GET")
        .uri("/metrics")
        .body(Body::empty())
        .expect("build GET /metrics");

    let resp = app.oneshot(req).await.expect("oneshot /metrics");
    assert!(resp.status().is_success());

    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body")
        .to_vec();
    let text = String::from_utf8(bytes).expect("utf8");
    assert!(
        text.contains("tummies_additive_rules"),
        "exposition should include the rule table gauge, got: {text}"
    );
}
