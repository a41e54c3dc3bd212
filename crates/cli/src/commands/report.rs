//! Scoped reports over fixture data.

use std::path::Path;

use brandhub_admin::services::DashboardSummary;
use brandhub_admin::store::Store;
use brandhub_core::Scope;
use tracing::info;

use super::load;

/// Log the orders visible under `scope`.
///
/// # Errors
///
/// Returns an error if the fixtures cannot be loaded.
pub fn orders(fixtures: Option<&Path>, scope: &Scope) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::from_fixtures(load(fixtures)?);
    let orders = store.orders.scoped(scope);

    if orders.is_empty() {
        info!(%scope, "No orders in scope");
        return Ok(());
    }

    for order in &orders {
        info!(
            id = %order.id,
            tenant = %order.company_id,
            customer = %order.customer,
            total = %order.total.display(),
            status = %order.status,
            channel = %order.channel,
            "Order"
        );
    }
    info!(%scope, count = orders.len(), "Listed orders");
    Ok(())
}

/// Log the dashboard overview for `scope`.
///
/// # Errors
///
/// Returns an error if the fixtures cannot be loaded.
pub fn dashboard(fixtures: Option<&Path>, scope: &Scope) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::from_fixtures(load(fixtures)?);
    let summary = DashboardSummary::compute(&store, scope);

    let revenue: Vec<String> = summary.revenue.iter().map(|p| p.display()).collect();
    info!(
        %scope,
        tenant = summary.tenant.as_ref().map(|t| t.name.as_str()),
        orders = summary.orders,
        pending = summary.pending_orders,
        revenue = %revenue.join(", "),
        customers = summary.customers,
        products = summary.products,
        low_stock = summary.low_stock_products,
        conversion_rate = %summary.conversion_rate,
        "Dashboard"
    );
    Ok(())
}
