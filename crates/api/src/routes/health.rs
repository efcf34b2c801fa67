//! Liveness endpoint, mounted at the root rather than under `/api`.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use cinetag_db::repositories::FeatureRepo;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `ok` when the database answers, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Number of seeded features; absent when the database is unreachable.
    pub features: Option<i64>,
}

/// GET /health
async fn report(State(state): State<AppState>) -> Json<HealthReport> {
    let features = match cinetag_db::health_check(&state.pool).await {
        Ok(()) => FeatureRepo::count(&state.pool).await.ok(),
        Err(e) => {
            tracing::warn!(error = %e, "Database health check failed");
            None
        }
    };
    let db_healthy = features.is_some();

    Json(HealthReport {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        features,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(report))
}
