use serde_json::Value;

/// Literal string treated the same as a JSON `null`.
const NULL_LITERAL: &str = "null";

/// Converts one raw cell into a finite number, or `None` when the cell is
/// missing, a placeholder, or not numeric.
pub fn clean_value(value: &Value) -> Option<f64> {
    match value {
        Value::Null => None,
        Value::String(s) if s == NULL_LITERAL => None,
        // Email-like placeholders.
        Value::String(s) if s.contains('@') => None,
        Value::String(s) => parse_number(s),
        Value::Number(n) => n.as_f64().and_then(clean_f64),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Array(_) | Value::Object(_) => None,
    }
}

pub fn clean_series(values: &[Value]) -> Vec<Option<f64>> {
    values.iter().map(clean_value).collect()
}

/// NaN and infinities become missing.
pub fn clean_f64(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

// Blank strings coerce to zero; unsigned 0x/0o/0b literals are integers.
fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    if let Some(value) = parse_radix_literal(trimmed) {
        return clean_f64(value);
    }
    trimmed.parse::<f64>().ok().and_then(clean_f64)
}

fn parse_radix_literal(s: &str) -> Option<f64> {
    let radix = match s.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &s[2..];
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    })
}
