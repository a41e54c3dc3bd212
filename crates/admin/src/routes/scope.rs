//! Tenant list and scope selection.

use std::convert::Infallible;

use axum::{
    Json,
    extract::State,
    response::{
        Sse,
        sse::{Event, KeepAlive},
    },
};
use brandhub_core::{Scope, Tenant};
use futures::Stream;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::state::AppState;

/// The active scope and the tenant it selects.
#[derive(Debug, Clone, Serialize)]
pub struct ScopeView {
    pub scope: Scope,
    /// `None` for `all` and for ids that match no tenant.
    pub tenant: Option<Tenant>,
}

impl ScopeView {
    fn current(state: &AppState) -> Self {
        let scope = state.scope().scope();
        let tenant = scope
            .tenant()
            .and_then(|id| state.store().tenant(id))
            .cloned();
        Self { scope, tenant }
    }
}

/// Body for `PUT /api/scope`.
#[derive(Debug, Deserialize)]
pub struct SetScopeRequest {
    pub scope: Scope,
}

/// GET /api/tenants
#[instrument(skip(state))]
pub async fn tenants(State(state): State<AppState>) -> Json<Vec<Tenant>> {
    Json(state.store().tenants().to_vec())
}

/// GET /api/scope
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Json<ScopeView> {
    Json(ScopeView::current(&state))
}

/// PUT /api/scope
///
/// Any id is accepted. Selecting an unknown tenant empties every view.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Json(request): Json<SetScopeRequest>,
) -> Json<ScopeView> {
    state.scope().set_scope(request.scope);
    Json(ScopeView::current(&state))
}

/// GET /api/scope/events
///
/// Streams the current scope once on connect, then one event per change.
pub async fn events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let mut rx = state.scope().subscribe();

    let stream = async_stream::stream! {
        loop {
            let scope = rx.borrow_and_update().to_string();
            yield Ok::<_, Infallible>(Event::default().event("scope").data(scope));

            if rx.changed().await.is_err() {
                break;
            }
        }
    };

    Sse::new(stream).keep_alive(KeepAlive::default())
}
