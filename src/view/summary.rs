use crate::data::model::IssueRecord;

/// Headline counts over the full record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SummaryStats {
    pub critical: usize,
    pub open: usize,
    pub high_consumption: usize,
    pub resolved: usize,
}

impl SummaryStats {
    pub fn from_issues(issues: &[IssueRecord]) -> Self {
        SummaryStats {
            critical: count_where(issues, IssueRecord::severity, "Critical"),
            open: count_where(issues, IssueRecord::status, "Open"),
            high_consumption: count_where(issues, IssueRecord::issue_type, "High Consumption"),
            resolved: count_where(issues, IssueRecord::status, "Resolved"),
        }
    }

    /// Label/value pairs for the summary bar.
    pub fn entries(&self) -> [(&'static str, usize); 4] {
        [
            ("Critical", self.critical),
            ("Open", self.open),
            ("High Consumption", self.high_consumption),
            ("Resolved", self.resolved),
        ]
    }
}

fn count_where<F>(issues: &[IssueRecord], field: F, value: &str) -> usize
where
    F: Fn(&IssueRecord) -> Option<&str>,
{
    issues.iter().filter(|i| field(i) == Some(value)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_counts() {
        let a = IssueRecord::from_value(json!({
            "id": 1,
            "severity": "Critical",
            "status": "Open",
            "issue_type": "High Consumption",
        }));
        let b = IssueRecord::from_value(json!({"id": 2, "status": "Resolved"}));
        let c = IssueRecord::new(3);

        let stats = SummaryStats::from_issues(&[a, b, c]);
        assert_eq!(
            stats,
            SummaryStats {
                critical: 1,
                open: 1,
                high_consumption: 1,
                resolved: 1
            }
        );
    }
}
