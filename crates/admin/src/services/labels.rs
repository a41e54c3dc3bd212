//! Shipping label and QR code previews.
//!
//! Labels are built from static templates; nothing is sent to a carrier.
//! Missing related records (order, tenant) render as placeholders so a
//! preview is always available for an existing shipment.

use brandhub_core::{Order, Shipment, ShipmentId, Tenant};
use serde::Serialize;

const UNKNOWN_SENDER: &str = "Unknown sender";
const UNKNOWN_RECIPIENT: &str = "Unknown recipient";

/// A printable label preview for one shipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingLabel {
    pub shipment_id: ShipmentId,
    pub carrier: String,
    pub tracking_number: String,
    pub sender: String,
    pub recipient: String,
    pub destination: String,
    pub order_reference: String,
    pub weight: String,
    /// Content to encode in the label's QR code.
    pub qr_payload: String,
}

impl ShippingLabel {
    /// Build the preview for `shipment`.
    #[must_use]
    pub fn build(shipment: &Shipment, order: Option<&Order>, tenant: Option<&Tenant>) -> Self {
        Self {
            shipment_id: shipment.id.clone(),
            carrier: shipment.provider.display_name().to_string(),
            tracking_number: shipment.tracking_number.clone(),
            sender: tenant.map_or_else(|| UNKNOWN_SENDER.to_string(), |t| t.name.clone()),
            recipient: order.map_or_else(|| UNKNOWN_RECIPIENT.to_string(), |o| o.customer.clone()),
            destination: shipment.destination.clone(),
            order_reference: shipment.order_id.to_string(),
            weight: format_weight(shipment.weight_grams),
            qr_payload: qr_payload(shipment),
        }
    }

    /// Render the label as fixed-layout text.
    #[must_use]
    pub fn render_text(&self) -> String {
        format!(
            "{carrier} | {tracking}\n\
             FROM: {sender}\n\
             TO:   {recipient}\n\
             \x20     {destination}\n\
             REF:  {reference}\n\
             WT:   {weight}\n\
             QR:   {qr}\n",
            carrier = self.carrier,
            tracking = self.tracking_number,
            sender = self.sender,
            recipient = self.recipient,
            destination = self.destination,
            reference = self.order_reference,
            weight = self.weight,
            qr = self.qr_payload,
        )
    }
}

/// `{CARRIER}|{tracking}|{order}|{tenant}`
fn qr_payload(shipment: &Shipment) -> String {
    format!(
        "{}|{}|{}|{}",
        shipment.provider.as_str().to_ascii_uppercase(),
        shipment.tracking_number,
        shipment.order_id,
        shipment.company_id
    )
}

fn format_weight(grams: u32) -> String {
    format!("{}.{:02} kg", grams / 1000, (grams % 1000) / 10)
}
