use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

lazy_static! {
    static ref LEADING_INT: Regex = Regex::new(r"^\s*([+-]?[0-9]+)").unwrap();
}

/// Returns true if the given string is missing or empty.
pub fn is_blank(text: Option<&str>) -> bool {
    text.map_or(true, str::is_empty)
}

/// Returns true if the value is missing, null or an empty string.
pub fn is_blank_value(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// Textual form of a scalar field. Sequences and mappings have none.
pub fn field_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Renders any value for an error message. Missing and null become "".
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Parses the integer prefix of `text`, ignoring leading whitespace and
/// whatever follows the digits. Text without a prefix yields 0 and
/// magnitudes beyond i64 saturate.
pub fn leading_int(text: &str) -> i64 {
    let Some(digits) = LEADING_INT.captures(text).and_then(|cap| cap.get(1)) else {
        return 0;
    };
    let digits = digits.as_str();

    digits.parse::<i64>().unwrap_or_else(|_| {
        if digits.starts_with('-') {
            i64::MIN
        } else {
            i64::MAX
        }
    })
}
