use serde_json::Value as JsonValue;

/// Characters kept by the table's solution preview.
pub const PREVIEW_CHARS: usize = 50;

/// Placeholder for absent values in the detail view.
pub const NOT_AVAILABLE: &str = "N/A";

/// Deviation as shown in both the table and the detail view.
pub fn format_deviation(deviation: Option<f64>) -> String {
    match deviation {
        Some(v) => format!("{}%", one_decimal(v)),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// One decimal place; exact ties round away from zero (12.25 → "12.3").
///
/// `{:.1}` already rounds on the exact decimal value of `v`, but sends exact
/// ties to even. A value is an exact tie at one place iff `4 * v` is an odd
/// integer.
fn one_decimal(v: f64) -> String {
    let quarters = v * 4.0;
    let is_tie = quarters.fract() == 0.0 && quarters % 2.0 != 0.0 && quarters.abs() < 1e15;
    if !is_tie {
        return format!("{:.1}", v + 0.0);
    }
    let tenths = (v * 10.0).round() as i64;
    let sign = if tenths < 0 { "-" } else { "" };
    let abs = tenths.unsigned_abs();
    format!("{sign}{}.{}", abs / 10, abs % 10)
}

/// First [`PREVIEW_CHARS`] characters of a solution, with `...` when cut.
pub fn solution_preview(solution: Option<&str>) -> String {
    let Some(text) = solution else {
        return String::new();
    };
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Render a usage/cost cell. Falsy values (absent, `null`, `false`, `0`,
/// `""`) become "" so that `or_not_available` can replace them.
pub fn display_value(value: Option<&JsonValue>) -> String {
    match value {
        Some(JsonValue::Bool(false)) => String::new(),
        Some(JsonValue::Number(n)) if n.as_f64() == Some(0.0) => String::new(),
        other => value_text(other),
    }
}

/// Render any value as text; only absent and `null` become "".
pub fn value_text(value: Option<&JsonValue>) -> String {
    match value {
        None | Some(JsonValue::Null) => String::new(),
        Some(JsonValue::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Replace a blank rendering with "N/A".
pub fn or_not_available(text: impl Into<String>) -> String {
    let text = text.into();
    if text.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        text
    }
}
