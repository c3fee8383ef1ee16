use serde_json::Value as JsonValue;

use crate::data::model::{IssueRecord, MonthlyHistory};

// ---------------------------------------------------------------------------
// Usage series
// ---------------------------------------------------------------------------

/// One point per month, in history order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UsageSeries {
    pub points: Vec<(String, i64)>,
}

impl UsageSeries {
    pub fn from_history(history: &MonthlyHistory) -> Self {
        UsageSeries {
            points: history
                .iter()
                .map(|(month, entry)| (month.clone(), entry.usage.as_ref().map_or(0, parse_usage)))
                .collect(),
        }
    }

    pub fn labels(&self) -> Vec<String> {
        self.points.iter().map(|(m, _)| m.clone()).collect()
    }

    /// `[x, y]` pairs with the month's position as x.
    pub fn xy(&self) -> Vec<[f64; 2]> {
        self.points
            .iter()
            .enumerate()
            .map(|(i, (_, usage))| [i as f64, *usage as f64])
            .collect()
    }
}

/// Usage as an integer; anything without a leading integer is 0.
pub fn parse_usage(value: &JsonValue) -> i64 {
    match value {
        JsonValue::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            .unwrap_or(0),
        JsonValue::String(s) => parse_int_prefix(s),
        _ => 0,
    }
}

/// Integer read from the start of `s`: optional sign, then digits.
/// `"120.5 kWh"` → 120, `"bad"` → 0.
pub fn parse_int_prefix(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let magnitude = digits[..end].bytes().fold(0i64, |acc, d| {
        acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
    });
    if negative { -magnitude } else { magnitude }
}

// ---------------------------------------------------------------------------
// Chart slot – at most one chart alive
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct TrendChart {
    /// Distinct per chart; the plot widget id is derived from it.
    pub generation: u64,
    pub issue_id: i64,
    pub series: UsageSeries,
}

/// Holds the single trend chart for the current selection.
#[derive(Debug, Default)]
pub struct ChartSlot {
    current: Option<TrendChart>,
    next_generation: u64,
}

impl ChartSlot {
    pub fn current(&self) -> Option<&TrendChart> {
        self.current.as_ref()
    }

    /// Drop the previous chart and build one for `issue` if it has an id and history.
    pub fn replace(&mut self, issue: Option<&IssueRecord>) {
        self.current = issue.and_then(|issue| {
            let issue_id = issue.id()?;
            let history = issue.history()?;
            let generation = self.next_generation;
            self.next_generation += 1;
            Some(TrendChart {
                generation,
                issue_id,
                series: UsageSeries::from_history(history),
            })
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_issues;

    fn issue_with_history() -> IssueRecord {
        parse_issues(
            r#"[{"id": 1, "monthly_history": {"Jan":{"usage":"100","status":"ok"},"Feb":{"usage":"bad","status":"warn"}}}]"#,
        )
        .unwrap()
        .issues
        .remove(0)
    }

    #[test]
    fn test_series_coerces_bad_usage_to_zero() {
        let issue = issue_with_history();
        let series = UsageSeries::from_history(issue.history().unwrap());
        assert_eq!(
            series.points,
            vec![("Jan".to_string(), 100), ("Feb".to_string(), 0)]
        );
        assert_eq!(series.xy(), vec![[0.0, 100.0], [1.0, 0.0]]);
    }

    #[test]
    fn test_parse_int_prefix() {
        assert_eq!(parse_int_prefix("120.5 kWh"), 120);
        assert_eq!(parse_int_prefix("  42"), 42);
        assert_eq!(parse_int_prefix("-7units"), -7);
        assert_eq!(parse_int_prefix("kWh 5"), 0);
        assert_eq!(parse_int_prefix(""), 0);
        assert_eq!(parse_int_prefix("-"), 0);
    }

    #[test]
    fn test_parse_usage_numbers() {
        assert_eq!(parse_usage(&serde_json::json!(250)), 250);
        assert_eq!(parse_usage(&serde_json::json!(99.9)), 99);
        assert_eq!(parse_usage(&serde_json::json!(true)), 0);
    }

    #[test]
    fn test_slot_keeps_one_chart() {
        let issue = issue_with_history();
        let mut slot = ChartSlot::default();
        slot.replace(Some(&issue));
        let first = slot.current().unwrap().generation;
        slot.replace(Some(&issue));
        let second = slot.current().unwrap().generation;
        assert_ne!(first, second);

        slot.replace(Some(&IssueRecord::new(2)));
        assert!(slot.current().is_none());

        slot.replace(Some(&issue));
        slot.replace(None);
        assert!(slot.current().is_none());
    }
}
