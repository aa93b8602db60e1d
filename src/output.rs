//! Persisted run output.
//!
//! The report and integration template are written as pretty JSON. The
//! serialized field names are part of the contract with downstream
//! consumers and must survive a read-back unchanged.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::{IntegrationTemplate, PublishReport};

/// Write the publish report to `path`.
pub fn write_report(report: &PublishReport, path: &Path) -> Result<()> {
    let json =
        serde_json::to_string_pretty(report).context("failed to serialize publish report")?;
    fs::write(path, json)
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    tracing::info!(path = %path.display(), "Publish report written");
    Ok(())
}

/// Write the soul-bound token integration template derived from `report`.
pub fn write_integration_template(report: &PublishReport, path: &Path) -> Result<()> {
    let template = IntegrationTemplate::from_report(report);
    let json = serde_json::to_string_pretty(&template)
        .context("failed to serialize integration template")?;
    fs::write(path, json)
        .with_context(|| format!("failed to write integration template to {}", path.display()))?;
    tracing::info!(path = %path.display(), "Integration template written");
    Ok(())
}
