//! Type inference for CSV cell values.
//!
//! Each raw cell is classified on its own, with no knowledge of the rest of
//! its column. Checks run in a fixed order and the first match wins:
//! integer, then float, then JSON array of strings, then plain text.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::schema::types::ColumnType;

/// Detect integers: optional sign followed by digits.
static INTEGER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-+]?\d+$").unwrap());

/// Check if a string is a base-10 integer that fits in an `i64`.
pub fn is_integer_string(s: &str) -> bool {
    INTEGER_REGEX.is_match(s) && s.parse::<i64>().is_ok()
}

/// Check if a string parses as a floating point number.
///
/// Values outside the `f64` range (e.g. `1e400`) are rejected; only text that
/// literally spells infinity may parse to an infinite value.
pub fn is_float_string(s: &str) -> bool {
    match s.parse::<f64>() {
        Ok(f) if f.is_infinite() => spells_infinity(s),
        Ok(_) => true,
        Err(_) => false,
    }
}

fn spells_infinity(s: &str) -> bool {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// Check if a string decodes as a JSON array of strings.
///
/// `null` elements are allowed; a bare `null` is not an array.
pub fn is_text_array(s: &str) -> bool {
    serde_json::from_str::<Vec<Option<String>>>(s).is_ok()
}

/// Classify a single raw value.
///
/// Never fails: anything that is not an integer, a float or a JSON array
/// of strings is [`ColumnType::VarcharDefault`]. This function never returns
/// [`ColumnType::VarcharPassword`]; that tag is applied by the schema builder.
pub fn classify(value: &str) -> ColumnType {
    if is_integer_string(value) {
        return ColumnType::Integer;
    }
    if is_float_string(value) {
        return ColumnType::Decimal;
    }
    if is_text_array(value) {
        return ColumnType::TextArray;
    }
    ColumnType::VarcharDefault
}
