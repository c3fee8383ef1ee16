use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value as JsonValue;

// ---------------------------------------------------------------------------
// IssueStatus – the three states offered by the edit form
// ---------------------------------------------------------------------------

/// Status values selectable in the edit form.
///
/// Records may carry any status string when loaded; only the edit form is
/// restricted to these three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IssueStatus {
    #[default]
    Open,
    InProgress,
    Resolved,
}

impl IssueStatus {
    pub const ALL: [IssueStatus; 3] = [
        IssueStatus::Open,
        IssueStatus::InProgress,
        IssueStatus::Resolved,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            IssueStatus::Open => "Open",
            IssueStatus::InProgress => "In Progress",
            IssueStatus::Resolved => "Resolved",
        }
    }

    /// Parse a stored status label. Unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == label)
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MonthlyEntry – one month of the usage history
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MonthlyEntry {
    /// Number-like usage, as found in the file.
    pub usage: Option<JsonValue>,
    pub status: Option<String>,
}

/// Ordered month label → entry mapping (JSON object order is kept).
pub type MonthlyHistory = IndexMap<String, MonthlyEntry>;

// ---------------------------------------------------------------------------
// IssueRecord – one consumption issue
// ---------------------------------------------------------------------------

/// A single consumption issue as found in the input file.
///
/// The source JSON value is kept as-is and is what gets serialized, so
/// fields nobody edited are written back exactly as they were read. The
/// typed fields are decoded from it leniently: a value of the wrong shape
/// reads as absent. Only [`IssueRecord::set_status`] and
/// [`IssueRecord::set_solution`] change a record, and they update both.
#[derive(Debug, Clone, PartialEq)]
pub struct IssueRecord {
    raw: JsonValue,

    id: Option<i64>,
    location: Option<String>,
    issue_type: Option<String>,
    severity: Option<String>,
    status: Option<String>,
    current_usage: Option<JsonValue>,
    expected_usage: Option<JsonValue>,
    energy_deviation_percentage: Option<f64>,
    reported_date: Option<String>,
    description: Option<String>,
    pattern_analysis: Option<String>,
    last_maintenance: Option<String>,
    external_factors: Option<String>,
    estimated_cost: Option<JsonValue>,
    recommended_action: Option<String>,
    solution: Option<String>,
    monthly_history: Option<MonthlyHistory>,
}

impl IssueRecord {
    /// Decode a record from one entry of the input array. Never fails;
    /// entries that are not objects decode with every field absent.
    pub fn from_value(raw: JsonValue) -> Self {
        let field = |key: &str| raw.get(key);
        let text = |key: &str| field(key).and_then(lenient::text);
        let value = |key: &str| field(key).and_then(lenient::raw);

        IssueRecord {
            id: field("id").and_then(lenient::id),
            location: text("location"),
            issue_type: text("issue_type"),
            severity: text("severity"),
            status: text("status"),
            current_usage: value("current_usage"),
            expected_usage: value("expected_usage"),
            energy_deviation_percentage: field("energy_deviation_percentage")
                .and_then(lenient::number),
            reported_date: text("reported_date"),
            description: text("description"),
            pattern_analysis: text("pattern_analysis"),
            last_maintenance: text("last_maintenance"),
            external_factors: text("external_factors"),
            estimated_cost: value("estimated_cost"),
            recommended_action: text("recommended_action"),
            solution: text("solution"),
            monthly_history: field("monthly_history").and_then(lenient::history),
            raw,
        }
    }

    /// A record with only an id.
    pub fn new(id: i64) -> Self {
        Self::from_value(serde_json::json!({ "id": id }))
    }

    /// The source value, including any edits.
    pub fn raw(&self) -> &JsonValue {
        &self.raw
    }

    /// Integer id; `None` when the entry has no usable id (such records
    /// are shown but cannot be selected).
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    /// The `id` value as found in the file, for display.
    pub fn id_value(&self) -> Option<&JsonValue> {
        self.raw.get("id")
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn issue_type(&self) -> Option<&str> {
        self.issue_type.as_deref()
    }

    pub fn severity(&self) -> Option<&str> {
        self.severity.as_deref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn current_usage(&self) -> Option<&JsonValue> {
        self.current_usage.as_ref()
    }

    pub fn expected_usage(&self) -> Option<&JsonValue> {
        self.expected_usage.as_ref()
    }

    pub fn deviation(&self) -> Option<f64> {
        self.energy_deviation_percentage
    }

    pub fn reported_date(&self) -> Option<&str> {
        self.reported_date.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn pattern_analysis(&self) -> Option<&str> {
        self.pattern_analysis.as_deref()
    }

    pub fn last_maintenance(&self) -> Option<&str> {
        self.last_maintenance.as_deref()
    }

    pub fn external_factors(&self) -> Option<&str> {
        self.external_factors.as_deref()
    }

    pub fn estimated_cost(&self) -> Option<&JsonValue> {
        self.estimated_cost.as_ref()
    }

    pub fn recommended_action(&self) -> Option<&str> {
        self.recommended_action.as_deref()
    }

    pub fn solution(&self) -> Option<&str> {
        self.solution.as_deref()
    }

    /// Monthly history, if present and non-empty.
    pub fn history(&self) -> Option<&MonthlyHistory> {
        self.monthly_history.as_ref().filter(|h| !h.is_empty())
    }

    // -- Edits --

    pub fn set_status(&mut self, status: IssueStatus) {
        self.status = Some(status.as_str().to_string());
        self.set_raw("status", status.as_str());
    }

    pub fn set_solution(&mut self, solution: &str) {
        self.solution = Some(solution.to_string());
        self.set_raw("solution", solution);
    }

    fn set_raw(&mut self, key: &str, value: &str) {
        if let JsonValue::Object(map) = &mut self.raw {
            map.insert(key.to_string(), JsonValue::String(value.to_string()));
        }
    }
}

impl Serialize for IssueRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for IssueRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        JsonValue::deserialize(deserializer).map(IssueRecord::from_value)
    }
}

// ---------------------------------------------------------------------------
// Lenient field decoders
// ---------------------------------------------------------------------------

mod lenient {
    use super::*;

    /// Integral number. Strings are not ids: they never match a numeric lookup.
    pub fn id(v: &JsonValue) -> Option<i64> {
        let JsonValue::Number(n) = v else {
            return None;
        };
        n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        })
    }

    /// Any JSON scalar as text; `null`, arrays and objects are absent.
    pub fn text(v: &JsonValue) -> Option<String> {
        match v {
            JsonValue::String(s) => Some(s.clone()),
            JsonValue::Number(n) => Some(n.to_string()),
            JsonValue::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// A number, or a string holding one.
    pub fn number(v: &JsonValue) -> Option<f64> {
        match v {
            JsonValue::Number(n) => n.as_f64(),
            JsonValue::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
            _ => None,
        }
    }

    /// Any value except `null`.
    pub fn raw(v: &JsonValue) -> Option<JsonValue> {
        (!v.is_null()).then(|| v.clone())
    }

    /// Month → entry object; entries that are not objects are dropped.
    pub fn history(v: &JsonValue) -> Option<MonthlyHistory> {
        let months = v.as_object()?;
        let history = months
            .iter()
            .filter(|(_, entry)| entry.is_object())
            .map(|(month, entry)| {
                let e = MonthlyEntry {
                    usage: entry.get("usage").and_then(raw),
                    status: entry.get("status").and_then(text),
                };
                (month.clone(), e)
            })
            .collect();
        Some(history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_record_decodes() {
        let rec = IssueRecord::from_value(json!({
            "id": 7,
            "location": "Building A",
            "issue_type": "High Consumption",
            "severity": "Critical",
            "status": "Open",
            "current_usage": "1500 kWh",
            "expected_usage": 1000,
            "energy_deviation_percentage": 50.0,
            "monthly_history": {
                "Jan": {"usage": "100", "status": "ok"},
                "Feb": {"usage": 120, "status": "warn"}
            }
        }));

        assert_eq!(rec.id(), Some(7));
        assert_eq!(rec.severity(), Some("Critical"));
        assert_eq!(rec.current_usage(), Some(&json!("1500 kWh")));
        assert_eq!(rec.deviation(), Some(50.0));
        let months: Vec<&str> = rec.history().unwrap().keys().map(|k| k.as_str()).collect();
        assert_eq!(months, vec!["Jan", "Feb"]);
    }

    #[test]
    fn test_wrong_shapes_decode_as_absent() {
        let rec = IssueRecord::from_value(json!({
            "id": 1,
            "location": ["not", "a", "string"],
            "severity": 3,
            "energy_deviation_percentage": "abc",
            "monthly_history": "none"
        }));

        assert_eq!(rec.location(), None);
        assert_eq!(rec.severity(), Some("3"));
        assert_eq!(rec.deviation(), None);
        assert!(rec.history().is_none());
    }

    #[test]
    fn test_numeric_string_deviation() {
        let rec = IssueRecord::from_value(json!({"id": 1, "energy_deviation_percentage": " 12.5 "}));
        assert_eq!(rec.deviation(), Some(12.5));
    }

    #[test]
    fn test_lenient_ids() {
        assert_eq!(IssueRecord::from_value(json!({"id": 4.0})).id(), Some(4));
        assert_eq!(IssueRecord::from_value(json!({"id": 4.5})).id(), None);
        assert_eq!(IssueRecord::from_value(json!({"id": "7"})).id(), None);
        assert_eq!(IssueRecord::from_value(json!({"location": "x"})).id(), None);
        assert_eq!(IssueRecord::from_value(json!("oops")).id(), None);
    }

    #[test]
    fn test_serializes_source_value_unchanged() {
        let input = json!({
            "id": 1,
            "location": ["Bldg", "A"],
            "severity": 3,
            "energy_deviation_percentage": "12.5",
            "solution": null,
            "building_code": "B-12"
        });
        let rec = IssueRecord::from_value(input.clone());
        assert_eq!(serde_json::to_value(&rec).unwrap(), input);

        let decoded: IssueRecord = serde_json::from_value(input).unwrap();
        assert_eq!(decoded, rec);
    }

    #[test]
    fn test_edits_touch_only_their_keys() {
        let mut rec = IssueRecord::from_value(json!({"id": 2, "severity": 3, "status": "Pending"}));
        rec.set_status(IssueStatus::Resolved);
        rec.set_solution("Swapped breaker");

        assert_eq!(rec.status(), Some("Resolved"));
        assert_eq!(rec.solution(), Some("Swapped breaker"));
        assert_eq!(
            rec.raw(),
            &json!({"id": 2, "severity": 3, "status": "Resolved", "solution": "Swapped breaker"})
        );
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(IssueStatus::from_label("In Progress"), Some(IssueStatus::InProgress));
        assert_eq!(IssueStatus::from_label("Pending"), None);
        assert_eq!(IssueStatus::Resolved.to_string(), "Resolved");
    }
}
