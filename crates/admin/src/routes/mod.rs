//! HTTP route handlers for admin.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                          - Health check
//!
//! # Tenants & scope
//! GET  /api/tenants                     - Tenant list
//! GET  /api/scope                       - Active scope and tenant
//! PUT  /api/scope                       - Switch scope
//! GET  /api/scope/events                - Scope changes (SSE)
//!
//! # Dashboard
//! GET  /api/dashboard                   - Overview metrics
//!
//! # Editable collections (POST upserts)
//! GET|POST    /api/orders               GET|DELETE /api/orders/{id}
//! GET|POST    /api/products             GET|DELETE /api/products/{id}
//! GET|POST    /api/suppliers/orders     GET|DELETE /api/suppliers/orders/{id}
//! GET|POST    /api/marketing/campaigns  GET|DELETE /api/marketing/campaigns/{id}
//!
//! # Read-only collections
//! GET  /api/customers[/{id}]
//! GET  /api/shipments[/{id}]
//! GET  /api/shipments/{id}/label        - Label preview (?format=text)
//! GET  /api/wishlist[/{id}]
//! GET  /api/traffic[/{id}]
//!
//! # Derived views
//! GET  /api/inventory                   - Stock levels (?low_stock_only=true)
//! GET  /api/marketplaces[/{platform}]
//! GET  /api/logistics[/{provider}]
//! ```
//!
//! Every listing honours `?scope=` and otherwise uses the selected scope.

use axum::{Router, routing::get};
use brandhub_core::{
    Campaign, Customer, Order, Product, Scope, Shipment, SupplierOrder, TrafficSample,
    WishlistEntry,
};
use serde::Deserialize;

use crate::state::AppState;

pub mod dashboard;
pub mod inventory;
pub mod logistics;
pub mod marketplaces;
pub mod resource;
pub mod scope;
pub mod shipments;

/// Per-request scope override.
#[derive(Debug, Default, Deserialize)]
pub struct ScopeQuery {
    pub scope: Option<Scope>,
}

/// Build the admin router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        // Tenants & scope
        .route("/api/tenants", get(scope::tenants))
        .route("/api/scope", get(scope::show).put(scope::update))
        .route("/api/scope/events", get(scope::events))
        // Dashboard
        .route("/api/dashboard", get(dashboard::index))
        // Editable collections
        .merge(resource::crud::<Order>("/api/orders"))
        .merge(resource::crud::<Product>("/api/products"))
        .merge(resource::crud::<SupplierOrder>("/api/suppliers/orders"))
        .merge(resource::crud::<Campaign>("/api/marketing/campaigns"))
        // Read-only collections
        .merge(resource::read_only::<Customer>("/api/customers"))
        .merge(resource::read_only::<Shipment>("/api/shipments"))
        .merge(resource::read_only::<WishlistEntry>("/api/wishlist"))
        .merge(resource::read_only::<TrafficSample>("/api/traffic"))
        .route("/api/shipments/{id}/label", get(shipments::label))
        // Derived views
        .route("/api/inventory", get(inventory::index))
        .route("/api/marketplaces", get(marketplaces::index))
        .route("/api/marketplaces/{platform}", get(marketplaces::show))
        .route("/api/logistics", get(logistics::index))
        .route("/api/logistics/{provider}", get(logistics::show))
}

/// Build the admin application with state attached.
pub fn app(state: AppState) -> Router {
    routes().with_state(state)
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode, header},
    };
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::{config::AdminConfig, fixtures::Fixtures};

    fn state() -> AppState {
        AppState::new(AdminConfig::default(), Fixtures::sample().unwrap())
    }

    async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(value) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };

        let response = app.oneshot(request.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    async fn get_json(state: &AppState, uri: &str) -> (StatusCode, Value) {
        send(app(state.clone()), Method::GET, uri, None).await
    }

    fn ids(list: &Value) -> Vec<String> {
        list["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["id"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app(state())
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_orders_follow_selected_scope() {
        let state = state();

        let (status, all) = get_json(&state, "/api/orders").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(all["scope"], "all");
        assert_eq!(all["total"], 19);

        let (status, body) = send(
            app(state.clone()),
            Method::PUT,
            "/api/scope",
            Some(json!({ "scope": "c1" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["scope"], "c1");
        assert_eq!(body["tenant"]["name"], "Lumen Living");

        let (_, c1) = get_json(&state, "/api/orders").await;
        assert_eq!(c1["total"], 8);
        assert!(ids(&c1).contains(&"#ORD-7794".to_string()));
    }

    #[tokio::test]
    async fn test_query_scope_overrides_selection() {
        let state = state();
        state.scope().set_scope(Scope::parse("c1"));

        let (_, c2) = get_json(&state, "/api/orders?scope=c2").await;
        assert_eq!(c2["scope"], "c2");
        assert_eq!(c2["total"], 6);
        assert_eq!(state.scope().scope(), Scope::parse("c1"));
    }

    #[tokio::test]
    async fn test_unknown_scope_is_empty_not_error() {
        let state = state();
        let (status, body) = send(
            app(state.clone()),
            Method::PUT,
            "/api/scope",
            Some(json!({ "scope": "c9" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tenant"], Value::Null);

        let (status, orders) = get_json(&state, "/api/orders").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(orders["empty"], true);
        assert_eq!(orders["total"], 0);
    }

    #[tokio::test]
    async fn test_show_order_by_encoded_id() {
        let (status, body) = get_json(&state(), "/api/orders/%23ORD-7782").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["customer"], "Ana Ruiz");

        let (status, _) = get_json(&state(), "/api/orders/%23ORD-9999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_upsert_inserts_then_replaces() {
        let state = state();
        let (_, mut order) = get_json(&state, "/api/orders/%23ORD-7782").await;
        order["id"] = json!("#ORD-8001");

        let (status, _) = send(app(state.clone()), Method::POST, "/api/orders", Some(order.clone())).await;
        assert_eq!(status, StatusCode::CREATED);

        order["items"] = json!(7);
        let (status, body) = send(app(state.clone()), Method::POST, "/api/orders", Some(order)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["items"], 7);

        let (_, all) = get_json(&state, "/api/orders").await;
        assert_eq!(all["total"], 20);
        assert_eq!(ids(&all).last().map(String::as_str), Some("#ORD-8001"));
    }

    #[tokio::test]
    async fn test_upsert_rejects_tenant_change_and_unknown_tenant() {
        let state = state();
        let (_, mut order) = get_json(&state, "/api/orders/%23ORD-7782").await;

        order["companyId"] = json!("c2");
        let (status, _) = send(app(state.clone()), Method::POST, "/api/orders", Some(order.clone())).await;
        assert_eq!(status, StatusCode::CONFLICT);

        order["companyId"] = json!("c9");
        let (status, _) = send(app(state.clone()), Method::POST, "/api/orders", Some(order)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let state = state();
        for _ in 0..2 {
            let (status, _) = send(app(state.clone()), Method::DELETE, "/api/products/P-1001", None).await;
            assert_eq!(status, StatusCode::NO_CONTENT);
        }
        let (status, _) = get_json(&state, "/api/products/P-1001").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(state.store().products.len(), 11);
    }

    #[tokio::test]
    async fn test_read_only_collections_reject_writes() {
        let state = state();
        let (status, _) = send(app(state.clone()), Method::DELETE, "/api/customers/CUST-101", None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

        let (_, customers) = get_json(&state, "/api/customers?scope=c3").await;
        assert_eq!(customers["total"], 3);
    }

    #[tokio::test]
    async fn test_supplier_orders_and_campaigns_are_scoped() {
        let state = state();
        let (_, pos) = get_json(&state, "/api/suppliers/orders?scope=c2").await;
        assert_eq!(ids(&pos), ["PO-303", "PO-304"]);

        let (_, campaigns) = get_json(&state, "/api/marketing/campaigns?scope=c3").await;
        assert_eq!(ids(&campaigns), ["CMP-31", "CMP-32"]);
    }

    #[tokio::test]
    async fn test_dashboard_uses_scope() {
        let state = state();
        let (_, all) = get_json(&state, "/api/dashboard").await;
        assert_eq!(all["orders"], 19);
        assert_eq!(all["pendingOrders"], 3);

        let (_, c1) = get_json(&state, "/api/dashboard?scope=c1").await;
        assert_eq!(c1["orders"], 8);
        assert_eq!(c1["tenant"]["id"], "c1");
    }

    #[tokio::test]
    async fn test_inventory_low_stock_filter() {
        let state = state();
        let (_, all) = get_json(&state, "/api/inventory?scope=c1").await;
        assert_eq!(all["total"], 4);

        let (_, low) = get_json(&state, "/api/inventory?scope=c1&low_stock_only=true").await;
        let products: Vec<&str> = low["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["productId"].as_str().unwrap())
            .collect();
        assert_eq!(products, ["P-1002", "P-1003"]);
    }

    #[tokio::test]
    async fn test_marketplace_view() {
        let state = state();
        let (status, all) = get_json(&state, "/api/marketplaces/amazon").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(all["orders"]["total"], 4);

        let (_, c1) = get_json(&state, "/api/marketplaces/amazon?scope=c1").await;
        assert_eq!(ids(&c1["orders"]), ["#ORD-7783", "#ORD-7800"]);

        let (status, _) = get_json(&state, "/api/marketplaces/aliexpress").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_logistics_view() {
        let state = state();
        let (_, dhl) = get_json(&state, "/api/logistics/dhl?scope=c2").await;
        assert_eq!(dhl["name"], "DHL");
        assert_eq!(ids(&dhl["shipments"]), ["SHP-5003", "SHP-5004"]);

        let (_, summary) = get_json(&state, "/api/logistics").await;
        let dhl = summary
            .as_array()
            .unwrap()
            .iter()
            .find(|p| p["provider"] == "dhl")
            .unwrap();
        assert_eq!(dhl["shipments"], 3);
        assert_eq!(dhl["exceptions"], 1);

        let (status, _) = get_json(&state, "/api/logistics/royal_mail").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_shipping_label() {
        let state = state();
        let (status, label) = get_json(&state, "/api/shipments/SHP-5001/label").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(label["carrier"], "UPS");
        assert_eq!(label["sender"], "Lumen Living");
        assert_eq!(label["recipient"], "Ana Ruiz");

        let response = app(state.clone())
            .oneshot(
                Request::get("/api/shipments/SHP-5001/label?format=text")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.starts_with("UPS | "));
        assert!(text.contains("FROM: Lumen Living"));

        let (status, _) = get_json(&state, "/api/shipments/SHP-0000/label").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_tenants() {
        let (_, tenants) = get_json(&state(), "/api/tenants").await;
        let ids: Vec<&str> = tenants
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, ["c1", "c2", "c3"]);
    }
}
