//! HTTP facade over the pure scoring engine.
//!
//! The router is stateless: every handler deserializes, calls the engine,
//! and serializes the result. Product retrieval, persistence, and auth all
//! live in the surrounding application, not here.

use axum::{
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::config::ServiceConfig;
use crate::engine::{self, ScoreResult};
use crate::product::ProductRecord;
use crate::profile::BabyProfile;

/// Build the public router.
pub fn router(cfg: &ServiceConfig) -> Router {
    let cors = if cfg.permissive_cors {
        CorsLayer::very_permissive()
    } else {
        CorsLayer::new()
    };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/score", post(score))
        .layer(cors)
}

#[derive(Debug, Deserialize)]
struct ScoreRequest {
    product: ProductRecord,
    profile: BabyProfile,
    /// Optional fixed evaluation instant for deterministic replays;
    /// defaults to now.
    #[serde(default)]
    evaluated_at: Option<DateTime<Utc>>,
}

async fn score(Json(req): Json<ScoreRequest>) -> Json<ScoreResult> {
    let now = req.evaluated_at.unwrap_or_else(Utc::now);
    let result = engine::evaluate_at(&req.product, &req.profile, now);

    metrics::counter!(
        "tummies_score_evaluations_total",
        "tier" => result.interpretation.clone()
    )
    .increment(1);

    // Never log raw product names; a short hash is enough to correlate
    // repeat scans in the logs.
    info!(
        target: "score",
        product = %anon_product_id(&req.product.product_name),
        final_score = result.final_score,
        tier = %result.interpretation,
        "product scored"
    );

    Json(result)
}

/// Truncated SHA-256 of the product name for anonymized log correlation.
fn anon_product_id(name: &str) -> String {
    use sha2::{Digest, Sha256};
    let digest = Sha256::digest(name.as_bytes());
    digest.iter().take(6).map(|b| format!("{b:02x}")).collect()
}
