//! Seed data for the session store.
//!
//! Collections are loaded once at startup, either from the built-in sample
//! (`fixtures/sample.yaml`, compiled into the binary) or from a YAML file
//! named by `ADMIN_FIXTURES_PATH`. Both use the same format.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::path::{Path, PathBuf};

use brandhub_core::{
    Campaign, Customer, Keyed, Order, Product, Shipment, SupplierOrder, Tenant, TenantId,
    TenantScoped, TrafficSample, WishlistEntry,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Built-in sample data.
const SAMPLE_YAML: &str = include_str!("../fixtures/sample.yaml");

/// Errors loading fixture data.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The fixture file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The fixture document is not valid YAML or does not match the schema.
    #[error("invalid fixture data: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A structural problem found by [`Fixtures::validate`].
///
/// Issues are reported rather than rejected: a record naming an unknown
/// tenant is still loadable and simply never appears in a tenant view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FixtureIssue {
    /// Two tenants share an id.
    DuplicateTenant { id: String },
    /// Two records in one collection share an id.
    DuplicateId { collection: String, id: String },
    /// A record names a tenant that is not in the tenant list.
    UnknownTenant {
        collection: String,
        id: String,
        tenant: String,
    },
}

impl fmt::Display for FixtureIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateTenant { id } => write!(f, "duplicate tenant id {id}"),
            Self::DuplicateId { collection, id } => {
                write!(f, "{collection}: duplicate id {id}")
            }
            Self::UnknownTenant {
                collection,
                id,
                tenant,
            } => write!(f, "{collection}: {id} references unknown tenant {tenant}"),
        }
    }
}

/// Every collection the back office serves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Fixtures {
    pub tenants: Vec<Tenant>,
    pub orders: Vec<Order>,
    pub products: Vec<Product>,
    pub customers: Vec<Customer>,
    pub shipments: Vec<Shipment>,
    pub wishlist: Vec<WishlistEntry>,
    pub traffic: Vec<TrafficSample>,
    pub supplier_orders: Vec<SupplierOrder>,
    pub campaigns: Vec<Campaign>,
}

impl Fixtures {
    /// The built-in sample data set: three tenants and nineteen orders.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Yaml`] if the embedded document is malformed.
    pub fn sample() -> Result<Self, FixtureError> {
        Self::from_yaml_str(SAMPLE_YAML)
    }

    /// Parse fixtures from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Yaml`] if the document does not match the
    /// fixture schema.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, FixtureError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read and parse a YAML fixture file.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Io`] if the file cannot be read, or
    /// [`FixtureError::Yaml`] if it does not parse.
    pub fn from_yaml_file(path: &Path) -> Result<Self, FixtureError> {
        let yaml = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let fixtures = Self::from_yaml_str(&yaml)?;
        tracing::info!(
            path = %path.display(),
            tenants = fixtures.tenants.len(),
            orders = fixtures.orders.len(),
            "Loaded fixtures"
        );
        Ok(fixtures)
    }

    /// Serialize back to YAML.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Yaml`] if serialization fails.
    pub fn to_yaml(&self) -> Result<String, FixtureError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check ids are unique per collection and every record names a known
    /// tenant.
    #[must_use]
    pub fn validate(&self) -> Vec<FixtureIssue> {
        let mut issues = Vec::new();

        let mut tenant_ids = HashSet::new();
        for tenant in &self.tenants {
            if !tenant_ids.insert(&tenant.id) {
                issues.push(FixtureIssue::DuplicateTenant {
                    id: tenant.id.to_string(),
                });
            }
        }

        check_collection("orders", &self.orders, &tenant_ids, &mut issues);
        check_collection("products", &self.products, &tenant_ids, &mut issues);
        check_collection("customers", &self.customers, &tenant_ids, &mut issues);
        check_collection("shipments", &self.shipments, &tenant_ids, &mut issues);
        check_collection("wishlist", &self.wishlist, &tenant_ids, &mut issues);
        check_collection("traffic", &self.traffic, &tenant_ids, &mut issues);
        check_collection(
            "supplierOrders",
            &self.supplier_orders,
            &tenant_ids,
            &mut issues,
        );
        check_collection("campaigns", &self.campaigns, &tenant_ids, &mut issues);

        issues
    }
}

fn check_collection<T>(
    collection: &str,
    records: &[T],
    tenants: &HashSet<&TenantId>,
    issues: &mut Vec<FixtureIssue>,
) where
    T: Keyed + TenantScoped,
    T::Key: Eq + Hash + fmt::Display,
{
    let mut seen = HashSet::new();
    for record in records {
        if !seen.insert(record.key()) {
            issues.push(FixtureIssue::DuplicateId {
                collection: collection.to_string(),
                id: record.key().to_string(),
            });
        }
        if !tenants.contains(record.tenant_id()) {
            issues.push(FixtureIssue::UnknownTenant {
                collection: collection.to_string(),
                id: record.key().to_string(),
                tenant: record.tenant_id().to_string(),
            });
        }
    }
}
