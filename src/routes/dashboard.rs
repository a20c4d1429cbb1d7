use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::catalog::DashboardSummary;
use crate::models::Listing;
use crate::state::SharedState;

#[derive(Serialize)]
pub struct DashboardResponse {
    #[serde(flatten)]
    pub summary: DashboardSummary,
    pub listings: Vec<Listing>,
}

pub async fn summary(State(state): State<SharedState>) -> Json<DashboardResponse> {
    let owned = state.catalog.by_providers(&state.config.dashboard_providers);
    let summary = DashboardSummary::from_listings(&owned);
    Json(DashboardResponse {
        summary,
        listings: owned.into_iter().cloned().collect(),
    })
}
