//! Application state shared across handlers.

use std::sync::Arc;

use brandhub_core::Scope;

use crate::config::AdminConfig;
use crate::error::AppError;
use crate::fixtures::Fixtures;
use crate::scope::ScopeSelector;
use crate::store::Store;

/// Application state shared across all handlers.
///
/// Cheap to clone; everything lives behind one `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    store: Store,
    scope: ScopeSelector,
}

impl AppState {
    /// Build state from already-loaded fixtures.
    #[must_use]
    pub fn new(config: AdminConfig, fixtures: Fixtures) -> Self {
        let scope = ScopeSelector::new(config.default_scope.clone());
        Self {
            inner: Arc::new(AppStateInner {
                config,
                store: Store::from_fixtures(fixtures),
                scope,
            }),
        }
    }

    /// Build state, loading fixtures from `config.fixtures_path` or the
    /// built-in sample.
    ///
    /// # Errors
    ///
    /// Returns an error if the fixture file cannot be read or parsed.
    pub fn load(config: AdminConfig) -> Result<Self, AppError> {
        let fixtures = match &config.fixtures_path {
            Some(path) => Fixtures::from_yaml_file(path)?,
            None => Fixtures::sample()?,
        };

        for issue in fixtures.validate() {
            tracing::warn!(%issue, "Fixture issue");
        }

        Ok(Self::new(config, fixtures))
    }

    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    pub fn store(&self) -> &Store {
        &self.inner.store
    }

    pub fn scope(&self) -> &ScopeSelector {
        &self.inner.scope
    }

    /// The scope a request should see: its own override, or the selector's.
    #[must_use]
    pub fn effective_scope(&self, requested: Option<Scope>) -> Scope {
        requested.unwrap_or_else(|| self.inner.scope.scope())
    }
}
