use crate::data::model::{IssueRecord, IssueStatus};

use super::format::{display_value, format_deviation, or_not_available, value_text};

// ---------------------------------------------------------------------------
// DetailView – everything the detail panel shows for one issue
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub month: String,
    pub usage: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub id: i64,
    pub title: String,
    pub subtitle: String,
    /// Labelled descriptive fields, in display order.
    pub fields: Vec<(&'static str, String)>,
    /// Empty when the issue has no monthly history.
    pub history: Vec<HistoryRow>,
}

impl DetailView {
    /// Project a selected record. Only records with an id can be selected.
    pub fn from_issue(id: i64, issue: &IssueRecord) -> Self {
        let text = |v: Option<&str>| v.unwrap_or_default().to_string();
        let na = |v: Option<&str>| or_not_available(text(v));

        let title = format!("Issue #{id} — {}", text(issue.location()));
        let subtitle = format!(
            "Type: {} • Severity: {} • Status: {}",
            text(issue.issue_type()),
            text(issue.severity()),
            text(issue.status()),
        );

        let fields = vec![
            ("Reported", na(issue.reported_date())),
            ("Current Usage", or_not_available(display_value(issue.current_usage()))),
            ("Expected Usage", or_not_available(display_value(issue.expected_usage()))),
            ("Deviation", format_deviation(issue.deviation())),
            ("Estimated Cost", or_not_available(display_value(issue.estimated_cost()))),
            ("Description", text(issue.description())),
            ("Pattern Analysis", na(issue.pattern_analysis())),
            ("Last Maintenance", na(issue.last_maintenance())),
            ("External Factors", na(issue.external_factors())),
            ("Recommended Action", na(issue.recommended_action())),
        ];

        let history = issue
            .history()
            .map(|h| {
                h.iter()
                    .map(|(month, entry)| HistoryRow {
                        month: month.clone(),
                        usage: value_text(entry.usage.as_ref()),
                        status: text(entry.status.as_deref()),
                    })
                    .collect()
            })
            .unwrap_or_default();

        DetailView {
            id,
            title,
            subtitle,
            fields,
            history,
        }
    }

    pub fn field(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, v)| v.as_str())
    }
}

// ---------------------------------------------------------------------------
// EditDraft – the edit form's working copy
// ---------------------------------------------------------------------------

/// Values in the edit form, written back to the record on save.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditDraft {
    pub status: IssueStatus,
    pub solution: String,
}

impl EditDraft {
    /// Pre-fill from a record; unknown statuses start as Open.
    pub fn from_issue(issue: &IssueRecord) -> Self {
        EditDraft {
            status: issue
                .status()
                .and_then(IssueStatus::from_label)
                .unwrap_or_default(),
            solution: issue.solution().unwrap_or_default().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_issues;
    use serde_json::json;

    fn issue() -> IssueRecord {
        parse_issues(
            r#"[{
                "id": 4,
                "location": "Lab 2",
                "issue_type": "Intermittent",
                "severity": "Medium",
                "status": "Investigating",
                "current_usage": 340,
                "estimated_cost": 0,
                "energy_deviation_percentage": null,
                "description": "Spikes overnight",
                "solution": "Check HVAC timer",
                "monthly_history": {
                    "Jan": {"usage": "300", "status": "Normal"},
                    "Feb": {"usage": 410, "status": "High"},
                    "Mar": {"usage": 0, "status": "Offline"}
                }
            }]"#,
        )
        .unwrap()
        .issues
        .remove(0)
    }

    #[test]
    fn test_detail_fields() {
        let view = DetailView::from_issue(4, &issue());
        assert_eq!(view.title, "Issue #4 — Lab 2");
        assert_eq!(view.subtitle, "Type: Intermittent • Severity: Medium • Status: Investigating");
        assert_eq!(view.field("Current Usage"), Some("340"));
        assert_eq!(view.field("Expected Usage"), Some("N/A"));
        assert_eq!(view.field("Estimated Cost"), Some("N/A"));
        assert_eq!(view.field("Deviation"), Some("N/A"));
        assert_eq!(view.field("Description"), Some("Spikes overnight"));
        assert_eq!(view.field("Pattern Analysis"), Some("N/A"));
    }

    #[test]
    fn test_history_rows_in_order() {
        let view = DetailView::from_issue(4, &issue());
        let months: Vec<&str> = view.history.iter().map(|r| r.month.as_str()).collect();
        assert_eq!(months, vec!["Jan", "Feb", "Mar"]);
        assert_eq!(view.history[1].usage, "410");
        assert_eq!(view.history[2].usage, "0");
    }

    #[test]
    fn test_no_history_means_no_rows() {
        let view = DetailView::from_issue(1, &IssueRecord::new(1));
        assert!(view.history.is_empty());
        assert_eq!(view.field("Description"), Some(""));
    }

    #[test]
    fn test_draft_prefill() {
        let draft = EditDraft::from_issue(&issue());
        assert_eq!(draft.status, IssueStatus::Open);
        assert_eq!(draft.solution, "Check HVAC timer");

        let resolved = IssueRecord::from_value(json!({"id": 2, "status": "Resolved"}));
        assert_eq!(EditDraft::from_issue(&resolved).status, IssueStatus::Resolved);
    }
}
