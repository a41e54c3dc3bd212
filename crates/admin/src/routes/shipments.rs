//! Shipping label previews.

use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use brandhub_core::ShipmentId;
use serde::Deserialize;
use tracing::instrument;

use crate::{error::AppError, services::labels::ShippingLabel, state::AppState};

/// Output format for a label preview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelFormat {
    #[default]
    Json,
    Text,
}

#[derive(Debug, Default, Deserialize)]
pub struct LabelQuery {
    #[serde(default)]
    pub format: LabelFormat,
}

/// GET /api/shipments/{id}/label
#[instrument(skip(state))]
pub async fn label(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<LabelQuery>,
) -> Result<Response, AppError> {
    let store = state.store();
    let shipment = store
        .shipments
        .get(&ShipmentId::new(id.as_str()))
        .ok_or_else(|| AppError::NotFound(format!("shipment {id}")))?;

    let order = store.orders.get(&shipment.order_id);
    let tenant = store.tenant(&shipment.company_id);
    let label = ShippingLabel::build(&shipment, order.as_ref(), tenant);

    Ok(match query.format {
        LabelFormat::Json => Json(label).into_response(),
        LabelFormat::Text => label.render_text().into_response(),
    })
}
