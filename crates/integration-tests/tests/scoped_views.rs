//! Scope filtering and session-local mutation over the sample data.

#![allow(clippy::unwrap_used)]

use brandhub_admin::scope::ScopeSelector;
use brandhub_admin::services::DashboardSummary;
use brandhub_core::{Order, OrderId, Scope, TenantId, remove, scoped_view, upsert};
use brandhub_integration_tests::sample_store;

fn ids(orders: &[Order]) -> Vec<&str> {
    orders.iter().map(|o| o.id.as_str()).collect()
}

#[test]
fn test_c1_scope_yields_eight_orders() {
    let store = sample_store().unwrap();
    let c1 = store.orders.scoped(&Scope::parse("c1"));

    assert_eq!(store.orders.len(), 19);
    assert_eq!(c1.len(), 8);
    assert!(c1.iter().all(|o| o.company_id.as_str() == "c1"));
    assert_eq!(
        ids(&c1),
        [
            "#ORD-7782",
            "#ORD-7783",
            "#ORD-7786",
            "#ORD-7788",
            "#ORD-7791",
            "#ORD-7794",
            "#ORD-7797",
            "#ORD-7800",
        ]
    );
}

#[test]
fn test_filter_correct_for_every_scope() {
    let store = sample_store().unwrap();
    let all = store.orders.snapshot();

    for tenant in store.tenants() {
        let scope = Scope::Tenant(tenant.id.clone());
        let view = scoped_view(&all, &scope);
        let expected: Vec<&Order> = all.iter().filter(|o| o.company_id == tenant.id).collect();
        assert_eq!(view, expected, "scope {scope}");
    }

    assert_eq!(scoped_view(&all, &Scope::All).len(), all.len());
    assert!(scoped_view(&all, &Scope::parse("c9")).is_empty());
}

#[test]
fn test_tenant_views_partition_all() {
    let store = sample_store().unwrap();
    let total: usize = store
        .tenants()
        .iter()
        .map(|t| store.orders.scoped(&Scope::Tenant(t.id.clone())).len())
        .sum();
    assert_eq!(total, 19);
}

#[test]
fn test_all_after_c2_restores_original_order() {
    let store = sample_store().unwrap();
    let selector = ScopeSelector::default();
    let original = store.orders.snapshot();

    selector.set_scope(Scope::parse("c2"));
    let c2 = store.orders.scoped(&selector.scope());
    assert_eq!(c2.len(), 6);

    selector.set_scope(Scope::All);
    let restored = store.orders.scoped(&selector.scope());
    assert_eq!(restored, original);
    assert_eq!(restored.first().map(|o| o.id.as_str()), Some("#ORD-7782"));
    assert_eq!(restored.last().map(|o| o.id.as_str()), Some("#ORD-7800"));
}

#[test]
fn test_remove_absent_id_leaves_collection_unchanged() {
    let store = sample_store().unwrap();
    let before = store.orders.snapshot();

    let pure = remove(&before, &OrderId::new("#ORD-9999"));
    assert_eq!(pure, before);

    assert!(!store.orders.remove(&OrderId::new("#ORD-9999")));
    assert_eq!(store.orders.snapshot(), before);
}

#[test]
fn test_upsert_new_id_appends_twentieth() {
    let store = sample_store().unwrap();
    let before = store.orders.snapshot();

    let mut fresh = before[0].clone();
    fresh.id = OrderId::new("#ORD-7801");

    let after = upsert(&before, fresh.clone());
    assert_eq!(after.len(), 20);
    assert_eq!(after[19], fresh);
    assert_eq!(after[..19], before[..]);
}

#[test]
fn test_upsert_existing_id_replaces_exactly_one() {
    let store = sample_store().unwrap();
    let before = store.orders.snapshot();

    let mut edited = before[5].clone();
    edited.customer = "Renamed Customer".to_string();

    let after = upsert(&before, edited.clone());
    assert_eq!(after.len(), before.len());
    let changed: Vec<usize> = (0..after.len()).filter(|&i| after[i] != before[i]).collect();
    assert_eq!(changed, [5]);
    assert_eq!(after[5], edited);
}

#[test]
fn test_scope_switch_recomputes_every_view() {
    let store = sample_store().unwrap();
    let selector = ScopeSelector::default();
    let c3 = TenantId::new("c3");

    selector.set_scope(Scope::parse("c1"));
    let scope = selector.scope();
    assert!(store.products.scoped(&scope).iter().all(|p| p.company_id.as_str() == "c1"));

    selector.set_scope(Scope::Tenant(c3.clone()));
    let scope = selector.scope();

    assert!(store.orders.scoped(&scope).iter().all(|o| o.company_id == c3));
    assert!(store.products.scoped(&scope).iter().all(|p| p.company_id == c3));
    assert!(store.customers.scoped(&scope).iter().all(|c| c.company_id == c3));
    assert!(store.shipments.scoped(&scope).iter().all(|s| s.company_id == c3));
    assert!(store.wishlist.scoped(&scope).iter().all(|w| w.company_id == c3));
    assert!(store.traffic.scoped(&scope).iter().all(|t| t.company_id == c3));
    assert!(store.supplier_orders.scoped(&scope).iter().all(|s| s.company_id == c3));
    assert!(store.campaigns.scoped(&scope).iter().all(|c| c.company_id == c3));

    let summary = DashboardSummary::compute(&store, &scope);
    assert_eq!(summary.orders, 5);
    assert_eq!(summary.tenant.map(|t| t.id), Some(c3));
    assert!(summary.recent_orders.len() <= 5);
}

#[test]
fn test_session_edits_visible_through_scoped_views() {
    let store = sample_store().unwrap();
    let mut fresh = store.orders.get(&OrderId::new("#ORD-7784")).unwrap();
    fresh.id = OrderId::new("#ORD-7900");
    store.orders.upsert(fresh).unwrap();

    let c2 = store.orders.scoped(&Scope::parse("c2"));
    assert_eq!(c2.len(), 7);
    assert_eq!(c2.last().map(|o| o.id.as_str()), Some("#ORD-7900"));
    assert_eq!(store.orders.scoped(&Scope::parse("c1")).len(), 8);
}
