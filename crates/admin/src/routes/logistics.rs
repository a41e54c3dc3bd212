//! Logistics provider views.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use brandhub_core::{LogisticsProvider, ScopedList, Shipment, ShipmentStatus};
use serde::Serialize;
use tracing::instrument;

use crate::{error::AppError, state::AppState};

use super::ScopeQuery;

/// Shipment counts for one provider.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSummary {
    pub provider: LogisticsProvider,
    pub name: &'static str,
    pub shipments: usize,
    pub in_transit: usize,
    pub exceptions: usize,
}

/// One provider's shipments under the active scope.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderView {
    pub provider: LogisticsProvider,
    pub name: &'static str,
    pub shipments: ScopedList<Shipment>,
}

fn handled_by(shipments: &[Shipment], provider: LogisticsProvider) -> Vec<Shipment> {
    shipments
        .iter()
        .filter(|s| s.provider == provider)
        .cloned()
        .collect()
}

/// GET /api/logistics
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ScopeQuery>,
) -> Json<Vec<ProviderSummary>> {
    let scope = state.effective_scope(query.scope);
    let shipments = state.store().shipments.scoped(&scope);

    let summaries = LogisticsProvider::ALL
        .iter()
        .map(|&provider| {
            let handled = handled_by(&shipments, provider);
            let count = |status: ShipmentStatus| handled.iter().filter(|s| s.status == status).count();
            ProviderSummary {
                provider,
                name: provider.display_name(),
                shipments: handled.len(),
                in_transit: count(ShipmentStatus::InTransit),
                exceptions: count(ShipmentStatus::Exception),
            }
        })
        .collect();

    Json(summaries)
}

/// GET /api/logistics/{provider}
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(provider): Path<String>,
    Query(query): Query<ScopeQuery>,
) -> Result<Json<ProviderView>, AppError> {
    let provider: LogisticsProvider = provider
        .parse()
        .map_err(|_| AppError::NotFound(format!("logistics provider {provider}")))?;

    let scope = state.effective_scope(query.scope);
    let shipments = handled_by(&state.store().shipments.scoped(&scope), provider);

    Ok(Json(ProviderView {
        provider,
        name: provider.display_name(),
        shipments: ScopedList::new(scope, shipments),
    }))
}
