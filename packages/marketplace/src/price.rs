//! Price parsing for free-form text and structured offer values.
//!
//! Upstream sources disagree on format: structured offers carry a bare
//! number or numeric string (`1234.5`, `"1,234.50"`), visible markup
//! carries a display string (`"From $89"`). Both call shapes are kept.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

lazy_static! {
    static ref BARE_PRICE: Regex = Regex::new(r"[\d,]+(\.\d+)?").unwrap();
    static ref DISPLAY_PRICE: Regex = Regex::new(r"\$([\d,]+(\.\d+)?)").unwrap();
}

/// Extract a numeric price from text. No currency symbol required; the
/// first digit sequence wins, thousands separators are stripped.
///
/// Returns `None` when the text has no numeric content, never an error.
pub fn parse_price(text: &str) -> Option<f64> {
    let m = BARE_PRICE.find(text)?;
    m.as_str().replace(',', "").parse().ok()
}

/// Extract a numeric price from display text, requiring a `$` prefix.
///
/// Visible markup mixes prices with other numbers (row counts, seat
/// numbers), so only a dollar-prefixed amount qualifies here.
pub fn parse_display_price(text: &str) -> Option<f64> {
    let caps = DISPLAY_PRICE.captures(text)?;
    caps.get(1)?.as_str().replace(',', "").parse().ok()
}

/// Extract a numeric price from a structured offer value, which upstream
/// emits as either a JSON number or a numeric string.
pub fn price_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_price(s),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_price_plain() {
        assert_eq!(parse_price("99"), Some(99.0));
        assert_eq!(parse_price("1234.50"), Some(1234.5));
    }

    #[test]
    fn test_parse_price_strips_separators() {
        assert_eq!(parse_price("$1,234.50"), Some(1234.5));
        assert_eq!(parse_price("1,234,567"), Some(1234567.0));
    }

    #[test]
    fn test_parse_price_first_match_wins() {
        assert_eq!(parse_price("from 89 to 120"), Some(89.0));
    }

    #[test]
    fn test_parse_price_no_digits() {
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("call for pricing"), None);
    }

    #[test]
    fn test_parse_display_price_requires_symbol() {
        assert_eq!(parse_display_price("From $89"), Some(89.0));
        assert_eq!(parse_display_price("$1,050"), Some(1050.0));
        assert_eq!(parse_display_price("89"), None);
        assert_eq!(parse_display_price("Row 12"), None);
    }

    #[test]
    fn test_price_value_shapes() {
        assert_eq!(price_value(&json!(120.5)), Some(120.5));
        assert_eq!(price_value(&json!("1,299")), Some(1299.0));
        assert_eq!(price_value(&json!(null)), None);
        assert_eq!(price_value(&json!(["120"])), None);
    }
}
