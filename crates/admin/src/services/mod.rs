//! Business logic services for admin.
//!
//! # Services
//!
//! - `dashboard` - Scoped overview metrics
//! - `labels` - Shipping label and QR code previews

pub mod dashboard;
pub mod labels;

pub use dashboard::{DashboardSummary, LOW_STOCK_THRESHOLD, RecentOrder, is_low_stock};
pub use labels::ShippingLabel;
