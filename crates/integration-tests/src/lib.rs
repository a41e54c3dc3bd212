//! Integration test harness for Brandhub.
//!
//! Tests run the admin router in-process on an ephemeral port and talk to
//! it over real HTTP, seeded with the built-in sample fixtures.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p brandhub-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::SocketAddr;

use brandhub_admin::config::AdminConfig;
use brandhub_admin::fixtures::{FixtureError, Fixtures};
use brandhub_admin::routes;
use brandhub_admin::state::AppState;
use brandhub_admin::store::Store;

/// A fresh session store seeded with the sample fixtures.
///
/// # Errors
///
/// Returns an error if the embedded sample fails to parse.
pub fn sample_store() -> Result<Store, FixtureError> {
    Ok(Store::from_fixtures(Fixtures::sample()?))
}

/// An admin server running on a local ephemeral port.
pub struct TestServer {
    pub state: AppState,
    pub client: reqwest::Client,
    addr: SocketAddr,
}

impl TestServer {
    /// Start a server over the sample fixtures.
    ///
    /// # Errors
    ///
    /// Returns an error if the fixtures fail to load or the listener cannot
    /// bind.
    pub async fn start() -> Result<Self, Box<dyn std::error::Error>> {
        let state = AppState::new(AdminConfig::default(), Fixtures::sample()?);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let app = routes::app(state.clone());
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            state,
            client: reqwest::Client::new(),
            addr,
        })
    }

    /// Absolute URL for `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }
}
