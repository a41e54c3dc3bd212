//! In-memory session store.
//!
//! Each collection lives behind its own lock for the lifetime of the
//! process. Writes swap in the collection produced by
//! [`brandhub_core::upsert`] / [`brandhub_core::remove`]; nothing is
//! persisted.

use std::fmt::Display;
use std::sync::{PoisonError, RwLock};

use brandhub_core::{
    Campaign, Customer, Keyed, Order, Product, Scope, Shipment, SupplierOrder, Tenant, TenantId,
    TenantScoped, TrafficSample, UpsertOutcome, WishlistEntry, remove, scoped_view,
    upsert_with_outcome,
};
use thiserror::Error;

use crate::fixtures::Fixtures;

/// Writes the store refuses.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// An upsert tried to move an existing record to another tenant.
    #[error("record {key} belongs to tenant {existing}, not {incoming}")]
    TenantChanged {
        key: String,
        existing: TenantId,
        incoming: TenantId,
    },
}

/// One session-local collection.
#[derive(Debug)]
pub struct Collection<T> {
    items: RwLock<Vec<T>>,
}

impl<T> Collection<T>
where
    T: Keyed + TenantScoped + Clone,
    T::Key: Display,
{
    /// Create a collection seeded with `items`.
    #[must_use]
    pub const fn new(items: Vec<T>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    /// Clone of the whole collection, in order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<T> {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Records visible under `scope`, in collection order.
    #[must_use]
    pub fn scoped(&self, scope: &Scope) -> Vec<T> {
        let items = self.items.read().unwrap_or_else(PoisonError::into_inner);
        scoped_view(&items, scope).into_iter().cloned().collect()
    }

    /// Look up one record by key, ignoring scope.
    #[must_use]
    pub fn get(&self, key: &T::Key) -> Option<T> {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|item| item.key() == key)
            .cloned()
    }

    /// Number of records across all tenants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether the collection holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replace the record sharing `record`'s key, or append it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TenantChanged`] if a record with the same key
    /// exists under a different tenant. The collection is left unchanged.
    pub fn upsert(&self, record: T) -> Result<UpsertOutcome, StoreError> {
        let mut items = self.items.write().unwrap_or_else(PoisonError::into_inner);

        let existing = items.iter().find(|item| item.key() == record.key());
        if let Some(existing) = existing.filter(|item| item.tenant_id() != record.tenant_id()) {
            return Err(StoreError::TenantChanged {
                key: record.key().to_string(),
                existing: existing.tenant_id().clone(),
                incoming: record.tenant_id().clone(),
            });
        }

        let (next, outcome) = upsert_with_outcome(&items, record);
        *items = next;
        Ok(outcome)
    }

    /// Drop the record keyed `key`. Returns whether a record was removed;
    /// removing an absent key leaves the collection unchanged.
    pub fn remove(&self, key: &T::Key) -> bool {
        let mut items = self.items.write().unwrap_or_else(PoisonError::into_inner);
        let before = items.len();
        *items = remove(&items, key);
        items.len() != before
    }
}

/// Every back-office collection for the session.
#[derive(Debug)]
pub struct Store {
    tenants: Vec<Tenant>,
    pub orders: Collection<Order>,
    pub products: Collection<Product>,
    pub customers: Collection<Customer>,
    pub shipments: Collection<Shipment>,
    pub wishlist: Collection<WishlistEntry>,
    pub traffic: Collection<TrafficSample>,
    pub supplier_orders: Collection<SupplierOrder>,
    pub campaigns: Collection<Campaign>,
}

impl Store {
    /// Seed a store from fixture data.
    #[must_use]
    pub fn from_fixtures(fixtures: Fixtures) -> Self {
        Self {
            tenants: fixtures.tenants,
            orders: Collection::new(fixtures.orders),
            products: Collection::new(fixtures.products),
            customers: Collection::new(fixtures.customers),
            shipments: Collection::new(fixtures.shipments),
            wishlist: Collection::new(fixtures.wishlist),
            traffic: Collection::new(fixtures.traffic),
            supplier_orders: Collection::new(fixtures.supplier_orders),
            campaigns: Collection::new(fixtures.campaigns),
        }
    }

    /// The tenant list. Fixed for the session.
    #[must_use]
    pub fn tenants(&self) -> &[Tenant] {
        &self.tenants
    }

    /// Look up a tenant by id.
    #[must_use]
    pub fn tenant(&self, id: &TenantId) -> Option<&Tenant> {
        self.tenants.iter().find(|tenant| &tenant.id == id)
    }
}
