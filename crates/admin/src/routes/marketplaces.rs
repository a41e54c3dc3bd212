//! Marketplace integration views.
//!
//! Orders are attributed to a marketplace through their sales channel.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use brandhub_core::{MarketplacePlatform, Order, ScopedList};
use serde::Serialize;
use tracing::instrument;

use crate::{error::AppError, state::AppState};

use super::ScopeQuery;

/// Order count for one marketplace.
#[derive(Debug, Clone, Serialize)]
pub struct MarketplaceSummary {
    pub platform: MarketplacePlatform,
    pub name: &'static str,
    pub orders: usize,
}

/// One marketplace's orders under the active scope.
#[derive(Debug, Clone, Serialize)]
pub struct MarketplaceView {
    pub platform: MarketplacePlatform,
    pub name: &'static str,
    pub orders: ScopedList<Order>,
}

fn orders_on(orders: &[Order], platform: MarketplacePlatform) -> Vec<Order> {
    orders
        .iter()
        .filter(|o| o.channel.marketplace() == Some(platform))
        .cloned()
        .collect()
}

/// GET /api/marketplaces
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ScopeQuery>,
) -> Json<Vec<MarketplaceSummary>> {
    let scope = state.effective_scope(query.scope);
    let orders = state.store().orders.scoped(&scope);

    let summaries = MarketplacePlatform::ALL
        .iter()
        .map(|&platform| MarketplaceSummary {
            platform,
            name: platform.display_name(),
            orders: orders_on(&orders, platform).len(),
        })
        .collect();

    Json(summaries)
}

/// GET /api/marketplaces/{platform}
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(platform): Path<String>,
    Query(query): Query<ScopeQuery>,
) -> Result<Json<MarketplaceView>, AppError> {
    let platform: MarketplacePlatform = platform
        .parse()
        .map_err(|_| AppError::NotFound(format!("marketplace {platform}")))?;

    let scope = state.effective_scope(query.scope);
    let orders = orders_on(&state.store().orders.scoped(&scope), platform);

    Ok(Json(MarketplaceView {
        platform,
        name: platform.display_name(),
        orders: ScopedList::new(scope, orders),
    }))
}
