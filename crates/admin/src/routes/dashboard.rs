//! Dashboard overview route.

use axum::{
    Json,
    extract::{Query, State},
};
use tracing::instrument;

use crate::{services::dashboard::DashboardSummary, state::AppState};

use super::ScopeQuery;

/// GET /api/dashboard
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ScopeQuery>,
) -> Json<DashboardSummary> {
    let scope = state.effective_scope(query.scope);
    Json(DashboardSummary::compute(state.store(), &scope))
}
