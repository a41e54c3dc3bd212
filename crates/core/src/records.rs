//! Back-office record types.
//!
//! Every record belongs to exactly one tenant through its `company_id`
//! field (serialized as `companyId`). The field is set when the record is
//! created and only changes if the whole record is replaced.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::collection::Keyed;
use crate::scoped::TenantScoped;
use crate::types::{
    CampaignChannel, CampaignId, CampaignStatus, CurrencyCode, CustomerId, Email,
    LogisticsProvider, OrderId, OrderStatus, PaymentStatus, Price, ProductId, ProductStatus,
    SalesChannel, ShipmentId, ShipmentStatus, SupplierOrderId, SupplierOrderStatus, TenantId,
    TrafficSampleId, TrafficSource, WishlistEntryId,
};

/// An independently branded business sharing the back office.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: TenantId,
    pub name: String,
    pub slug: String,
    /// Currency the brand reports in.
    #[serde(default)]
    pub currency: CurrencyCode,
}

impl Keyed for Tenant {
    type Key = TenantId;

    fn key(&self) -> &TenantId {
        &self.id
    }
}

/// Implements [`TenantScoped`] and [`Keyed`] for a record with `id` and
/// `company_id` fields.
macro_rules! tenant_record {
    ($record:ty, $key:ty) => {
        impl TenantScoped for $record {
            fn tenant_id(&self) -> &TenantId {
                &self.company_id
            }
        }

        impl Keyed for $record {
            type Key = $key;

            fn key(&self) -> &$key {
                &self.id
            }
        }
    };
}

/// A customer order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub company_id: TenantId,
    /// Customer display name.
    pub customer: String,
    pub email: Email,
    pub total: Price,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub payment: PaymentStatus,
    #[serde(default)]
    pub channel: SalesChannel,
    /// Number of line items.
    pub items: u32,
    pub placed_at: DateTime<Utc>,
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub company_id: TenantId,
    pub name: String,
    pub sku: String,
    pub price: Price,
    /// Units on hand across all locations.
    pub stock: u32,
    #[serde(default)]
    pub status: ProductStatus,
    pub category: String,
}

/// A customer account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub company_id: TenantId,
    pub name: String,
    pub email: Email,
    /// Lifetime order count.
    pub orders: u32,
    pub lifetime_value: Price,
    pub joined_at: NaiveDate,
}

/// An outbound parcel for an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    pub id: ShipmentId,
    pub company_id: TenantId,
    pub order_id: OrderId,
    pub provider: LogisticsProvider,
    pub tracking_number: String,
    #[serde(default)]
    pub status: ShipmentStatus,
    /// Destination city and country, as printed on the label.
    pub destination: String,
    pub weight_grams: u32,
    pub shipped_at: Option<DateTime<Utc>>,
}

/// A product saved to a customer's wishlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistEntry {
    pub id: WishlistEntryId,
    pub company_id: TenantId,
    pub customer_id: CustomerId,
    pub product_id: ProductId,
    pub added_at: NaiveDate,
}

/// Daily storefront traffic for one acquisition source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficSample {
    pub id: TrafficSampleId,
    pub company_id: TenantId,
    pub day: NaiveDate,
    pub visitors: u32,
    pub page_views: u32,
    pub conversions: u32,
    pub source: TrafficSource,
}

/// A purchase order placed with a supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierOrder {
    pub id: SupplierOrderId,
    pub company_id: TenantId,
    /// Supplier company name.
    pub supplier: String,
    /// Units ordered.
    pub items: u32,
    pub total: Price,
    #[serde(default)]
    pub status: SupplierOrderStatus,
    pub expected_at: NaiveDate,
}

/// A marketing campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: CampaignId,
    pub company_id: TenantId,
    pub name: String,
    pub channel: CampaignChannel,
    #[serde(default)]
    pub status: CampaignStatus,
    pub budget: Price,
    pub starts_at: NaiveDate,
    pub ends_at: Option<NaiveDate>,
}

tenant_record!(Order, OrderId);
tenant_record!(Product, ProductId);
tenant_record!(Customer, CustomerId);
tenant_record!(Shipment, ShipmentId);
tenant_record!(WishlistEntry, WishlistEntryId);
tenant_record!(TrafficSample, TrafficSampleId);
tenant_record!(SupplierOrder, SupplierOrderId);
tenant_record!(Campaign, CampaignId);
