use std::path::{Path, PathBuf};

use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::IssueRecord;

/// Input file read at start-up, relative to the working directory.
pub const DEFAULT_SOURCE: &str = "consumption_issues.json";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("expected a top-level JSON array of issue records")]
    NotAnArray,
}

// ---------------------------------------------------------------------------
// Loaded payload
// ---------------------------------------------------------------------------

/// Result of a successful load.
#[derive(Debug, Clone, Default)]
pub struct LoadedIssues {
    /// Every array entry, in file order.
    pub issues: Vec<IssueRecord>,
    /// Entries without an integer `id`. They are listed and exported but
    /// cannot be selected.
    pub without_id: usize,
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read and parse an issues file.
pub fn load_file(path: &Path) -> Result<LoadedIssues, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_issues(&text)
}

/// Parse the JSON text of an issues file.
///
/// Expected schema:
///
/// ```json
/// [
///   {
///     "id": 1,
///     "location": "Building A",
///     "issue_type": "High Consumption",
///     "severity": "Critical",
///     "status": "Open",
///     "energy_deviation_percentage": 42.5,
///     "monthly_history": { "Jan": { "usage": "1200", "status": "High" } },
///     ...
///   },
///   ...
/// ]
/// ```
pub fn parse_issues(text: &str) -> Result<LoadedIssues, LoadError> {
    let root: JsonValue = serde_json::from_str(text)?;
    let JsonValue::Array(records) = root else {
        return Err(LoadError::NotAnArray);
    };

    let mut loaded = LoadedIssues {
        issues: Vec::with_capacity(records.len()),
        without_id: 0,
    };

    for (i, rec) in records.into_iter().enumerate() {
        let issue = IssueRecord::from_value(rec);
        if issue.id().is_none() {
            log::warn!("Record {i} has no integer id; it will not be selectable");
            loaded.without_id += 1;
        }
        loaded.issues.push(issue);
    }

    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_array() {
        let loaded = parse_issues(
            r#"[{"id": 1, "status": "Open"}, {"id": 2, "status": "Resolved", "solution": "Replaced relay"}]"#,
        )
        .unwrap();
        assert_eq!(loaded.issues.len(), 2);
        assert_eq!(loaded.without_id, 0);
        assert_eq!(loaded.issues[1].solution(), Some("Replaced relay"));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        assert!(matches!(parse_issues("[{"), Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_object_root_is_rejected() {
        assert!(matches!(
            parse_issues(r#"{"id": 1}"#),
            Err(LoadError::NotAnArray)
        ));
    }

    #[test]
    fn test_records_without_integer_id_are_kept() {
        let loaded = parse_issues(
            r#"[{"id": 1}, {"id": "7", "location": "Plant 7"}, "oops", {"location": "no id"}, {"id": 4}]"#,
        )
        .unwrap();
        let ids: Vec<Option<i64>> = loaded.issues.iter().map(IssueRecord::id).collect();
        assert_eq!(ids, vec![Some(1), None, None, None, Some(4)]);
        assert_eq!(loaded.without_id, 3);
        assert_eq!(loaded.issues[1].location(), Some("Plant 7"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("consumption-viewer-does-not-exist.json");
        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("could not read"));
    }
}
