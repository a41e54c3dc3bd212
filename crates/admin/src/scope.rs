//! Process-wide tenant scope selection.
//!
//! The selector holds one [`Scope`] for the whole admin process. Every
//! listing reads it when the request does not pin its own scope, and
//! subscribers are notified on each change so dependent views can
//! recompute.

use brandhub_core::{Scope, Tenant};
use tokio::sync::watch;

/// Holds the active tenant scope and publishes changes.
#[derive(Debug)]
pub struct ScopeSelector {
    tx: watch::Sender<Scope>,
}

impl Default for ScopeSelector {
    fn default() -> Self {
        Self::new(Scope::All)
    }
}

impl ScopeSelector {
    /// Create a selector starting at `initial`.
    #[must_use]
    pub fn new(initial: Scope) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// The current scope.
    #[must_use]
    pub fn scope(&self) -> Scope {
        self.tx.borrow().clone()
    }

    /// Replace the scope. The id is not checked against the tenant list;
    /// an unknown tenant yields empty views everywhere.
    ///
    /// Returns the previous scope. Subscribers are notified even when the
    /// value is unchanged.
    pub fn set_scope(&self, scope: Scope) -> Scope {
        tracing::info!(scope = %scope, "Scope changed");
        self.tx.send_replace(scope)
    }

    /// The tenant the current scope selects, or `None` for `all` and for ids
    /// that match no tenant.
    #[must_use]
    pub fn current_tenant<'a>(&self, tenants: &'a [Tenant]) -> Option<&'a Tenant> {
        let scope = self.scope();
        let id = scope.tenant()?;
        tenants.iter().find(|tenant| &tenant.id == id)
    }

    /// Watch for scope changes. The receiver starts with the current value
    /// marked as seen.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Scope> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use brandhub_core::{CurrencyCode, TenantId};

    use super::*;

    fn tenants() -> Vec<Tenant> {
        ["c1", "c2"]
            .iter()
            .map(|id| Tenant {
                id: TenantId::new(*id),
                name: format!("Brand {id}"),
                slug: (*id).to_string(),
                currency: CurrencyCode::USD,
            })
            .collect()
    }

    #[test]
    fn test_initial_scope_is_all() {
        let selector = ScopeSelector::default();
        assert_eq!(selector.scope(), Scope::All);
        assert!(selector.current_tenant(&tenants()).is_none());
    }

    #[test]
    fn test_set_scope_returns_previous() {
        let selector = ScopeSelector::default();
        let previous = selector.set_scope(Scope::parse("c2"));
        assert_eq!(previous, Scope::All);
        assert_eq!(selector.scope(), Scope::parse("c2"));
    }

    #[test]
    fn test_current_tenant() {
        let tenants = tenants();
        let selector = ScopeSelector::new(Scope::parse("c2"));
        assert_eq!(
            selector.current_tenant(&tenants).map(|t| t.id.as_str()),
            Some("c2")
        );

        selector.set_scope(Scope::parse("c9"));
        assert!(selector.current_tenant(&tenants).is_none());
    }

    #[tokio::test]
    async fn test_subscribers_see_change() {
        let selector = ScopeSelector::default();
        let mut rx = selector.subscribe();
        assert!(!rx.has_changed().unwrap());

        selector.set_scope(Scope::parse("c1"));
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), Scope::parse("c1"));
    }
}
