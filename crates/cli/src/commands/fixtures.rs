//! Fixture file validation and export.

use std::path::Path;

use tracing::{info, warn};

use super::{CommandError, load};

/// Parse and validate a fixture file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if validation
/// reports any issue.
pub fn validate(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let fixtures = load(Some(path))?;

    let issues = fixtures.validate();
    for issue in &issues {
        warn!(%issue, "Fixture issue");
    }

    if !issues.is_empty() {
        return Err(CommandError::InvalidFixtures(issues.len()).into());
    }

    info!(
        tenants = fixtures.tenants.len(),
        orders = fixtures.orders.len(),
        products = fixtures.products.len(),
        shipments = fixtures.shipments.len(),
        "Fixtures are valid"
    );
    Ok(())
}

/// Write fixtures as YAML to `output`, or stdout.
///
/// With no `source`, exports the built-in sample; useful as a starting
/// point for a custom `ADMIN_FIXTURES_PATH` file.
///
/// # Errors
///
/// Returns an error if the source cannot be loaded or the output cannot be
/// written.
#[allow(clippy::print_stdout)]
pub async fn export(
    source: Option<&Path>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let yaml = load(source)?.to_yaml()?;

    match output {
        Some(path) => {
            tokio::fs::write(path, yaml).await?;
            info!(path = %path.display(), "Exported fixtures");
        }
        None => print!("{yaml}"),
    }
    Ok(())
}
