//! Inventory overview.

use axum::{
    Json,
    extract::{Query, State},
};
use brandhub_core::{Product, ProductId, ProductStatus, Scope, ScopedList};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{services::dashboard::is_low_stock, state::AppState};

/// Query parameters for the inventory listing.
#[derive(Debug, Default, Deserialize)]
pub struct InventoryQuery {
    pub scope: Option<Scope>,
    pub low_stock_only: Option<bool>,
}

/// Stock level for one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub product_id: ProductId,
    pub name: String,
    pub sku: String,
    pub stock: u32,
    pub low_stock: bool,
    pub status: ProductStatus,
}

impl From<Product> for InventoryItem {
    fn from(product: Product) -> Self {
        Self {
            low_stock: is_low_stock(&product),
            product_id: product.id,
            name: product.name,
            sku: product.sku,
            stock: product.stock,
            status: product.status,
        }
    }
}

/// GET /api/inventory
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<InventoryQuery>,
) -> Json<ScopedList<InventoryItem>> {
    let scope = state.effective_scope(query.scope);
    let low_stock_only = query.low_stock_only.unwrap_or(false);

    let items = state
        .store()
        .products
        .scoped(&scope)
        .into_iter()
        .map(InventoryItem::from)
        .filter(|item| !low_stock_only || item.low_stock)
        .collect();

    Json(ScopedList::new(scope, items))
}
