//! Status enums for back-office records.
//!
//! Every enum serializes in `snake_case` and round-trips through
//! `Display`/`FromStr` with the same spelling, so the values used in query
//! strings, fixture files and JSON bodies are identical.

use serde::{Deserialize, Serialize};

use super::ParseError;

/// Implements `as_str`, `Display` and `FromStr` for a fieldless enum using
/// the listed wire names.
macro_rules! wire_enum {
    ($name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The wire name of this value.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)+
                    _ => Err(ParseError::new(stringify!($name), s)),
                }
            }
        }
    };
}

pub(crate) use wire_enum;

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Refunded,
}

wire_enum!(OrderStatus {
    Pending => "pending",
    Processing => "processing",
    Shipped => "shipped",
    Delivered => "delivered",
    Cancelled => "cancelled",
    Refunded => "refunded",
});

/// Order payment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Unpaid,
    Paid,
    PartiallyRefunded,
    Refunded,
}

wire_enum!(PaymentStatus {
    Unpaid => "unpaid",
    Paid => "paid",
    PartiallyRefunded => "partially_refunded",
    Refunded => "refunded",
});

/// Catalog visibility of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    #[default]
    Draft,
    Active,
    Archived,
}

wire_enum!(ProductStatus {
    Draft => "draft",
    Active => "active",
    Archived => "archived",
});

/// Carrier-reported shipment progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    #[default]
    LabelCreated,
    InTransit,
    OutForDelivery,
    Delivered,
    Exception,
}

wire_enum!(ShipmentStatus {
    LabelCreated => "label_created",
    InTransit => "in_transit",
    OutForDelivery => "out_for_delivery",
    Delivered => "delivered",
    Exception => "exception",
});

/// Purchase order status with a supplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SupplierOrderStatus {
    #[default]
    Draft,
    Sent,
    Confirmed,
    Received,
    Cancelled,
}

wire_enum!(SupplierOrderStatus {
    Draft => "draft",
    Sent => "sent",
    Confirmed => "confirmed",
    Received => "received",
    Cancelled => "cancelled",
});

/// Marketing campaign status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    #[default]
    Scheduled,
    Active,
    Paused,
    Completed,
}

wire_enum!(CampaignStatus {
    Scheduled => "scheduled",
    Active => "active",
    Paused => "paused",
    Completed => "completed",
});
