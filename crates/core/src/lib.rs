//! Brandhub Core - Shared types library.
//!
//! This crate provides the types and pure operations used across all
//! Brandhub components:
//! - `admin` - Back-office JSON API
//! - `cli` - Fixture tooling
//!
//! # Architecture
//!
//! The core crate contains only types, traits and pure functions - no I/O,
//! no HTTP, no shared state. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, scope, prices, emails, statuses and channels
//! - [`records`] - Tenant-owned back-office records
//! - [`scoped`] - Scope-filtered views
//! - [`collection`] - `upsert`/`remove` for keyed collections

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod collection;
pub mod records;
pub mod scoped;
pub mod types;

pub use collection::{Keyed, UpsertOutcome, remove, upsert, upsert_with_outcome};
pub use records::*;
pub use scoped::{ScopedList, TenantScoped, scoped_view};
pub use types::*;
