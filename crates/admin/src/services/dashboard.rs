//! Dashboard overview metrics.
//!
//! Every figure is derived from the scoped views of the session store, so
//! switching scope changes the whole overview at once.

use std::collections::BTreeMap;

use brandhub_core::{
    CurrencyCode, Order, OrderId, OrderStatus, PaymentStatus, Price, Product, Scope, Tenant,
    TrafficSample,
};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::store::Store;

/// Products with fewer units than this are flagged as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Number of orders listed in the "recent orders" panel.
const RECENT_ORDER_COUNT: usize = 5;

/// Recent order row for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentOrder {
    pub id: OrderId,
    pub customer: String,
    pub total: String,
    pub status: OrderStatus,
}

impl From<&Order> for RecentOrder {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.clone(),
            customer: order.customer.clone(),
            total: order.total.display(),
            status: order.status,
        }
    }
}

/// Overview metrics for one scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub scope: Scope,
    /// The selected tenant, when the scope names a known one.
    pub tenant: Option<Tenant>,
    pub orders: usize,
    pub pending_orders: usize,
    /// Collected revenue, one entry per currency, ordered by currency code.
    pub revenue: Vec<Price>,
    pub customers: usize,
    pub products: usize,
    pub low_stock_products: usize,
    pub visitors: u64,
    pub conversions: u64,
    /// Conversions per 100 visitors, rounded to two decimal places.
    pub conversion_rate: Decimal,
    pub recent_orders: Vec<RecentOrder>,
}

impl DashboardSummary {
    /// Compute the overview for `scope`.
    #[must_use]
    pub fn compute(store: &Store, scope: &Scope) -> Self {
        let orders = store.orders.scoped(scope);
        let products = store.products.scoped(scope);
        let traffic = store.traffic.scoped(scope);

        let visitors: u64 = traffic.iter().map(|t| u64::from(t.visitors)).sum();
        let conversions: u64 = traffic.iter().map(|t| u64::from(t.conversions)).sum();

        Self {
            scope: scope.clone(),
            tenant: scope.tenant().and_then(|id| store.tenant(id)).cloned(),
            orders: orders.len(),
            pending_orders: orders
                .iter()
                .filter(|o| o.status == OrderStatus::Pending)
                .count(),
            revenue: revenue_by_currency(&orders),
            customers: store.customers.scoped(scope).len(),
            products: products.len(),
            low_stock_products: products.iter().filter(|p| is_low_stock(p)).count(),
            visitors,
            conversions,
            conversion_rate: conversion_rate(&traffic),
            recent_orders: recent_orders(&orders),
        }
    }
}

/// Whether a product is below the low-stock threshold.
#[must_use]
pub const fn is_low_stock(product: &Product) -> bool {
    product.stock < LOW_STOCK_THRESHOLD
}

/// Sum of paid order totals, grouped by currency.
///
/// Unpaid and fully refunded orders do not count as revenue.
fn revenue_by_currency(orders: &[Order]) -> Vec<Price> {
    let mut totals: BTreeMap<CurrencyCode, Decimal> = BTreeMap::new();
    for order in orders {
        if matches!(
            order.payment,
            PaymentStatus::Paid | PaymentStatus::PartiallyRefunded
        ) {
            *totals.entry(order.total.currency_code).or_default() += order.total.amount;
        }
    }
    totals
        .into_iter()
        .map(|(currency, amount)| Price::new(amount, currency))
        .collect()
}

fn conversion_rate(traffic: &[TrafficSample]) -> Decimal {
    let visitors: u64 = traffic.iter().map(|t| u64::from(t.visitors)).sum();
    if visitors == 0 {
        return Decimal::ZERO;
    }
    let conversions: u64 = traffic.iter().map(|t| u64::from(t.conversions)).sum();
    (Decimal::from(conversions) * Decimal::ONE_HUNDRED / Decimal::from(visitors)).round_dp(2)
}

fn recent_orders(orders: &[Order]) -> Vec<RecentOrder> {
    let mut sorted: Vec<&Order> = orders.iter().collect();
    sorted.sort_by(|a, b| b.placed_at.cmp(&a.placed_at));
    sorted
        .into_iter()
        .take(RECENT_ORDER_COUNT)
        .map(RecentOrder::from)
        .collect()
}
