use axum::{extract::State, routing::get, Json, Router};
use tracing::instrument;

use crate::{
    dashboard::{
        events::AccessEvent,
        fixtures::{AnomalyAlert, LedgerEntry},
        stats::DashboardStats,
    },
    state::AppState,
};

pub fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard/stats", get(stats))
        .route("/dashboard/feed", get(feed))
        .route("/dashboard/alerts", get(alerts))
        .route("/dashboard/ledger", get(ledger))
}

#[instrument(skip(state))]
pub async fn stats(State(state): State<AppState>) -> Json<DashboardStats> {
    Json(state.dashboard.read().await.stats())
}

#[instrument(skip(state))]
pub async fn feed(State(state): State<AppState>) -> Json<Vec<AccessEvent>> {
    Json(state.dashboard.read().await.recent_events())
}

#[instrument(skip(state))]
pub async fn alerts(State(state): State<AppState>) -> Json<Vec<AnomalyAlert>> {
    Json(state.dashboard.read().await.alerts().to_vec())
}

#[instrument(skip(state))]
pub async fn ledger(State(state): State<AppState>) -> Json<Vec<LedgerEntry>> {
    Json(state.dashboard.read().await.ledger().to_vec())
}
