//! Generic JSON handlers for tenant-owned collections.
//!
//! Each back-office collection implements [`Resource`] to name itself and
//! locate its [`Collection`] in the store; [`crud`] and [`read_only`] then
//! mount the standard endpoints for it.

use std::fmt::Display;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use brandhub_core::{
    Campaign, Customer, Keyed, Order, Product, ScopedList, Shipment, SupplierOrder, TenantScoped,
    TrafficSample, UpsertOutcome, WishlistEntry,
};
use serde::{Serialize, de::DeserializeOwned};
use tracing::instrument;

use crate::{
    error::AppError,
    state::AppState,
    store::{Collection, Store},
};

use super::ScopeQuery;

/// A collection served over the admin API.
pub trait Resource:
    Keyed + TenantScoped + Clone + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Singular name used in logs and error messages.
    const NAME: &'static str;

    /// This resource's collection in the store.
    fn collection(store: &Store) -> &Collection<Self>;
}

macro_rules! resource {
    ($record:ty, $name:literal, $field:ident) => {
        impl Resource for $record {
            const NAME: &'static str = $name;

            fn collection(store: &Store) -> &Collection<Self> {
                &store.$field
            }
        }
    };
}

resource!(Order, "order", orders);
resource!(Product, "product", products);
resource!(Customer, "customer", customers);
resource!(Shipment, "shipment", shipments);
resource!(WishlistEntry, "wishlist entry", wishlist);
resource!(TrafficSample, "traffic sample", traffic);
resource!(SupplierOrder, "supplier order", supplier_orders);
resource!(Campaign, "campaign", campaigns);

/// List, show, upsert and delete endpoints for `T` under `path`.
pub fn crud<T>(path: &str) -> Router<AppState>
where
    T: Resource,
    T::Key: Display + From<String>,
{
    Router::new()
        .route(path, get(list::<T>).post(upsert::<T>))
        .route(
            &format!("{path}/{{id}}"),
            get(show::<T>).delete(destroy::<T>),
        )
}

/// List and show endpoints for `T` under `path`.
pub fn read_only<T>(path: &str) -> Router<AppState>
where
    T: Resource,
    T::Key: Display + From<String>,
{
    Router::new()
        .route(path, get(list::<T>))
        .route(&format!("{path}/{{id}}"), get(show::<T>))
}

/// Scoped listing.
#[instrument(skip(state), fields(resource = T::NAME))]
async fn list<T>(
    State(state): State<AppState>,
    Query(query): Query<ScopeQuery>,
) -> Json<ScopedList<T>>
where
    T: Resource,
    T::Key: Display,
{
    let scope = state.effective_scope(query.scope);
    let items = T::collection(state.store()).scoped(&scope);
    Json(ScopedList::new(scope, items))
}

/// Single record by id, regardless of scope.
#[instrument(skip(state), fields(resource = T::NAME))]
async fn show<T>(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<T>, AppError>
where
    T: Resource,
    T::Key: Display + From<String>,
{
    T::collection(state.store())
        .get(&T::Key::from(id.clone()))
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("{} {id}", T::NAME)))
}

/// Replace the record with the same id, or append it.
///
/// Responds `201 Created` for a new record and `200 OK` for a replacement.
#[instrument(skip(state, record), fields(resource = T::NAME))]
async fn upsert<T>(
    State(state): State<AppState>,
    Json(record): Json<T>,
) -> Result<(StatusCode, Json<T>), AppError>
where
    T: Resource,
    T::Key: Display,
{
    if state.store().tenant(record.tenant_id()).is_none() {
        return Err(AppError::BadRequest(format!(
            "unknown tenant {}",
            record.tenant_id()
        )));
    }

    let outcome = T::collection(state.store()).upsert(record.clone())?;
    tracing::info!(id = %record.key(), ?outcome, "Upserted {}", T::NAME);

    let status = match outcome {
        UpsertOutcome::Inserted => StatusCode::CREATED,
        UpsertOutcome::Replaced => StatusCode::OK,
    };
    Ok((status, Json(record)))
}

/// Remove a record. Absent ids succeed without change.
#[instrument(skip(state), fields(resource = T::NAME))]
async fn destroy<T>(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode
where
    T: Resource,
    T::Key: Display + From<String>,
{
    let removed = T::collection(state.store()).remove(&T::Key::from(id.clone()));
    tracing::info!(%id, removed, "Deleted {}", T::NAME);
    StatusCode::NO_CONTENT
}
