//! Brandhub admin library.
//!
//! Back-office JSON API for several brands ("tenants") managed from one
//! dashboard. A process-wide scope selects either every tenant or one of
//! them, and every listing is filtered through it.
//!
//! All data is session-local: collections are seeded from fixtures at
//! startup and edits live until the process exits.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod fixtures;
pub mod routes;
pub mod scope;
pub mod services;
pub mod state;
pub mod store;
