use std::collections::BTreeSet;

use super::model::IssueRecord;

/// Label of the wildcard option in every selector.
pub const WILDCARD: &str = "All";

// ---------------------------------------------------------------------------
// Criterion – wildcard or exact value
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Criterion {
    #[default]
    All,
    Exactly(String),
}

impl Criterion {
    /// Whether a field value passes. An absent field only passes the wildcard.
    pub fn matches(&self, value: Option<&str>) -> bool {
        match self {
            Criterion::All => true,
            Criterion::Exactly(want) => value == Some(want.as_str()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Criterion::All => WILDCARD,
            Criterion::Exactly(v) => v.as_str(),
        }
    }
}

// ---------------------------------------------------------------------------
// FilterCriteria – the three selectors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub status: Criterion,
    pub severity: Criterion,
    pub issue_type: Criterion,
}

impl FilterCriteria {
    pub fn matches(&self, issue: &IssueRecord) -> bool {
        self.status.matches(issue.status())
            && self.severity.matches(issue.severity())
            && self.issue_type.matches(issue.issue_type())
    }
}

/// Return indices of issues passing all criteria, in input order.
pub fn apply_filters(issues: &[IssueRecord], criteria: &FilterCriteria) -> Vec<usize> {
    issues
        .iter()
        .enumerate()
        .filter(|(_, issue)| criteria.matches(issue))
        .map(|(i, _)| i)
        .collect()
}

// ---------------------------------------------------------------------------
// Selector options
// ---------------------------------------------------------------------------

/// Distinct values present in the data for each selector, sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub statuses: Vec<String>,
    pub severities: Vec<String>,
    pub issue_types: Vec<String>,
}

impl FilterOptions {
    pub fn from_issues(issues: &[IssueRecord]) -> Self {
        fn distinct<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Vec<String> {
            values
                .flatten()
                .collect::<BTreeSet<_>>()
                .into_iter()
                .map(str::to_string)
                .collect()
        }

        FilterOptions {
            statuses: distinct(issues.iter().map(IssueRecord::status)),
            severities: distinct(issues.iter().map(IssueRecord::severity)),
            issue_types: distinct(issues.iter().map(IssueRecord::issue_type)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn issue(id: i64, status: &str, severity: &str, issue_type: &str) -> IssueRecord {
        IssueRecord::from_value(json!({
            "id": id,
            "status": status,
            "severity": severity,
            "issue_type": issue_type,
        }))
    }

    fn sample() -> Vec<IssueRecord> {
        vec![
            issue(1, "Open", "Critical", "High Consumption"),
            issue(2, "Resolved", "Low", "Intermittent"),
            issue(3, "Open", "High", "High Consumption"),
            issue(4, "In Progress", "Critical", "Low Consumption"),
            issue(5, "Open", "Critical", "Intermittent"),
            IssueRecord::new(6),
        ]
    }

    fn exactly(v: &str) -> Criterion {
        Criterion::Exactly(v.to_string())
    }

    #[test]
    fn test_wildcards_keep_everything() {
        let issues = sample();
        let all = apply_filters(&issues, &FilterCriteria::default());
        assert_eq!(all, (0..issues.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_single_criterion() {
        let issues = sample();
        let criteria = FilterCriteria {
            status: exactly("Open"),
            ..Default::default()
        };
        assert_eq!(apply_filters(&issues, &criteria), vec![0, 2, 4]);
    }

    #[test]
    fn test_combined_criteria_are_conjunctive() {
        let issues = sample();
        let criteria = FilterCriteria {
            status: exactly("Open"),
            severity: exactly("Critical"),
            issue_type: exactly("High Consumption"),
        };
        assert_eq!(apply_filters(&issues, &criteria), vec![0]);
    }

    #[test]
    fn test_no_partial_matching() {
        let issues = sample();
        let criteria = FilterCriteria {
            issue_type: exactly("Consumption"),
            ..Default::default()
        };
        assert!(apply_filters(&issues, &criteria).is_empty());
    }

    #[test]
    fn test_every_combination_is_ordered_subset() {
        let issues = sample();
        let options = FilterOptions::from_issues(&issues);
        let choices = |vals: &[String]| {
            std::iter::once(Criterion::All)
                .chain(vals.iter().map(|v| exactly(v)))
                .collect::<Vec<_>>()
        };

        for status in choices(options.statuses.as_slice()) {
            for severity in choices(options.severities.as_slice()) {
                for issue_type in choices(options.issue_types.as_slice()) {
                    let criteria = FilterCriteria {
                        status: status.clone(),
                        severity: severity.clone(),
                        issue_type: issue_type.clone(),
                    };
                    let out = apply_filters(&issues, &criteria);
                    assert!(out.windows(2).all(|w| w[0] < w[1]));
                    for &i in &out {
                        assert!(criteria.matches(&issues[i]));
                    }
                    // Idempotent.
                    assert_eq!(out, apply_filters(&issues, &criteria));
                }
            }
        }
    }

    #[test]
    fn test_options_are_distinct_and_sorted() {
        let options = FilterOptions::from_issues(&sample());
        assert_eq!(options.statuses, vec!["In Progress", "Open", "Resolved"]);
        assert_eq!(options.severities, vec!["Critical", "High", "Low"]);
        assert_eq!(
            options.issue_types,
            vec!["High Consumption", "Intermittent", "Low Consumption"]
        );
    }
}
