use std::path::Path;

use anyhow::{Context, Result};

use super::model::IssueRecord;

/// File name offered by the save dialog.
pub const EXPORT_FILE_NAME: &str = "consumption_issues_updated.json";

/// Serialize the full record set as JSON indented with two spaces.
pub fn export_json(issues: &[IssueRecord]) -> Result<String> {
    serde_json::to_string_pretty(issues).context("serializing issues")
}

/// Write the export document to `path`.
pub fn write_export(path: &Path, issues: &[IssueRecord]) -> Result<()> {
    let text = export_json(issues)?;
    std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}
