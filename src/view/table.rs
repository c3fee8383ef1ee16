use crate::data::model::IssueRecord;

use super::format::{display_value, format_deviation, solution_preview, value_text};

pub const COLUMN_TITLES: [&str; 10] = [
    "ID",
    "Location",
    "Type",
    "Severity",
    "Current Usage",
    "Expected Usage",
    "Deviation",
    "Status",
    "Reported Date",
    "Solution",
];

/// One table row, every cell already rendered to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Row click target; `None` for records without an integer id.
    pub id: Option<i64>,
    /// The id as found in the file, blank when missing.
    pub id_text: String,
    pub location: String,
    pub issue_type: String,
    pub severity: String,
    pub current_usage: String,
    pub expected_usage: String,
    pub deviation: String,
    pub status: String,
    pub reported_date: String,
    pub solution: String,
}

impl TableRow {
    pub fn from_issue(issue: &IssueRecord) -> Self {
        let text = |v: Option<&str>| v.unwrap_or_default().to_string();
        TableRow {
            id: issue.id(),
            id_text: value_text(issue.id_value()),
            location: text(issue.location()),
            issue_type: text(issue.issue_type()),
            severity: text(issue.severity()),
            current_usage: display_value(issue.current_usage()),
            expected_usage: display_value(issue.expected_usage()),
            deviation: format_deviation(issue.deviation()),
            status: text(issue.status()),
            reported_date: text(issue.reported_date()),
            solution: solution_preview(issue.solution()),
        }
    }

    /// Cells in [`COLUMN_TITLES`] order.
    pub fn cells(&self) -> [String; 10] {
        [
            self.id_text.clone(),
            self.location.clone(),
            self.issue_type.clone(),
            self.severity.clone(),
            self.current_usage.clone(),
            self.expected_usage.clone(),
            self.deviation.clone(),
            self.status.clone(),
            self.reported_date.clone(),
            self.solution.clone(),
        ]
    }
}

/// Project the filtered issues into table rows.
pub fn table_rows<'a>(issues: impl IntoIterator<Item = &'a IssueRecord>) -> Vec<TableRow> {
    issues.into_iter().map(TableRow::from_issue).collect()
}

pub fn count_summary(n: usize) -> String {
    format!("Found {n} issue(s)")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_row_projection() {
        let issue = IssueRecord::from_value(json!({
            "id": 12,
            "location": "Warehouse",
            "severity": "High",
            "current_usage": 1800,
            "expected_usage": 0,
            "energy_deviation_percentage": 33.333,
            "solution": "s".repeat(60),
        }));

        let row = TableRow::from_issue(&issue);
        assert_eq!(row.id, Some(12));
        assert_eq!(row.location, "Warehouse");
        assert_eq!(row.current_usage, "1800");
        assert_eq!(row.expected_usage, "");
        assert_eq!(row.deviation, "33.3%");
        assert_eq!(row.status, "");
        assert!(row.solution.ends_with("..."));
        assert_eq!(row.cells()[0], "12");
    }

    #[test]
    fn test_rows_for_records_without_id() {
        let issues = [
            IssueRecord::from_value(json!({"id": "7", "location": "Plant 7"})),
            IssueRecord::from_value(json!({"location": "Plant 8"})),
        ];
        let rows = table_rows(&issues);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, None);
        assert_eq!(rows[0].cells()[0], "7");
        assert_eq!(rows[0].location, "Plant 7");
        assert_eq!(rows[1].cells()[0], "");
    }

    #[test]
    fn test_missing_deviation_is_na() {
        let row = TableRow::from_issue(&IssueRecord::new(1));
        assert_eq!(row.deviation, "N/A");
    }

    #[test]
    fn test_count_summary() {
        assert_eq!(count_summary(0), "Found 0 issue(s)");
        assert_eq!(count_summary(3), "Found 3 issue(s)");
    }

    #[test]
    fn test_rows_follow_input_order() {
        let issues = vec![IssueRecord::new(3), IssueRecord::new(1), IssueRecord::new(2)];
        let ids: Vec<Option<i64>> = table_rows(&issues).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![Some(3), Some(1), Some(2)]);
    }
}
