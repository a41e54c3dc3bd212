//! Scope-filtered views over tenant-owned collections.

use serde::{Deserialize, Serialize};

use crate::types::{Scope, TenantId};

/// A record owned by exactly one tenant.
pub trait TenantScoped {
    /// The owning tenant.
    fn tenant_id(&self) -> &TenantId;
}

/// The subset of `items` visible under `scope`.
///
/// [`Scope::All`] yields every record; a tenant scope yields the records
/// owned by that tenant. Relative order is always preserved. A scope that
/// matches nothing yields an empty vector.
///
/// ```
/// use brandhub_core::{Scope, TenantId, TenantScoped, scoped_view};
///
/// struct Row(TenantId, u32);
///
/// impl TenantScoped for Row {
///     fn tenant_id(&self) -> &TenantId {
///         &self.0
///     }
/// }
///
/// let rows = [Row("c1".into(), 1), Row("c2".into(), 2), Row("c1".into(), 3)];
/// let view = scoped_view(&rows, &Scope::parse("c1"));
/// assert_eq!(view.iter().map(|r| r.1).collect::<Vec<_>>(), [1, 3]);
/// ```
#[must_use]
pub fn scoped_view<'a, T: TenantScoped>(items: &'a [T], scope: &Scope) -> Vec<&'a T> {
    match scope {
        Scope::All => items.iter().collect(),
        Scope::Tenant(id) => items.iter().filter(|item| item.tenant_id() == id).collect(),
    }
}

/// A scoped listing as returned to API clients.
///
/// `empty` is set when the scope matched no records, so the client can show
/// an empty-state message instead of an empty table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopedList<T> {
    pub scope: Scope,
    pub total: usize,
    pub empty: bool,
    pub items: Vec<T>,
}

impl<T> ScopedList<T> {
    /// Wrap already-scoped items.
    #[must_use]
    pub fn new(scope: Scope, items: Vec<T>) -> Self {
        Self {
            scope,
            total: items.len(),
            empty: items.is_empty(),
            items,
        }
    }
}

impl<T: TenantScoped + Clone> ScopedList<T> {
    /// Build a listing by scoping `items`.
    #[must_use]
    pub fn from_collection(items: &[T], scope: Scope) -> Self {
        let view = scoped_view(items, &scope).into_iter().cloned().collect();
        Self::new(scope, view)
    }
}
