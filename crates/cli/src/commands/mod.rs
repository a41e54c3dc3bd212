//! CLI command implementations.

use std::path::Path;

use brandhub_admin::fixtures::{FixtureError, Fixtures};
use thiserror::Error;

pub mod fixtures;
pub mod report;

/// Command failures that are not I/O or parse errors.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("fixture validation found {0} issue(s)")]
    InvalidFixtures(usize),
}

/// Load fixtures from `path`, or the built-in sample when `None`.
fn load(path: Option<&Path>) -> Result<Fixtures, FixtureError> {
    match path {
        Some(path) => Fixtures::from_yaml_file(path),
        None => Fixtures::sample(),
    }
}
