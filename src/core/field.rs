//! Field value types, ordering rules and format validation

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;
use std::sync::OnceLock;

/// A polymorphic field value that can hold different types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    DateTime(DateTime<Utc>),
    Null,
}

impl FieldValue {
    /// Get the value as a string if possible
    pub fn as_string(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as an integer if possible
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the value as a float, widening integers
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(i) => Some(*i as f64),
            FieldValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get the value as a timestamp, parsing RFC 3339 strings
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            FieldValue::DateTime(dt) => Some(*dt),
            FieldValue::String(s) => DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            _ => None,
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Convert a JSON scalar into a field value
    ///
    /// Arrays and objects have no field representation and yield `None`.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(FieldValue::Null),
            Value::Bool(b) => Some(FieldValue::Boolean(*b)),
            Value::Number(n) => n
                .as_i64()
                .map(FieldValue::Integer)
                .or_else(|| n.as_f64().map(FieldValue::Float)),
            Value::String(s) => Some(FieldValue::String(s.clone())),
            Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Compare two values of compatible kinds
    ///
    /// Numbers compare numerically (integers and floats mix), timestamps
    /// chronologically (a string operand is parsed as RFC 3339), strings
    /// with [`locale_cmp`] and booleans with `false < true`. Returns `None`
    /// when the kinds are incompatible, either side is null or a float is NaN.
    pub fn compare(&self, other: &FieldValue) -> Option<Ordering> {
        match (self, other) {
            (FieldValue::Integer(a), FieldValue::Integer(b)) => Some(a.cmp(b)),
            (
                FieldValue::Integer(_) | FieldValue::Float(_),
                FieldValue::Integer(_) | FieldValue::Float(_),
            ) => self.as_f64()?.partial_cmp(&other.as_f64()?),
            (FieldValue::DateTime(a), FieldValue::DateTime(b)) => Some(a.cmp(b)),
            (FieldValue::DateTime(_), FieldValue::String(_))
            | (FieldValue::String(_), FieldValue::DateTime(_)) => {
                Some(self.as_datetime()?.cmp(&other.as_datetime()?))
            }
            (FieldValue::String(a), FieldValue::String(b)) => Some(locale_cmp(a, b)),
            (FieldValue::Boolean(a), FieldValue::Boolean(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    /// Exact equality used by equality filters
    pub fn equals(&self, other: &FieldValue) -> bool {
        self.compare(other) == Some(Ordering::Equal)
    }

    /// Case-insensitive substring test on the display form of the value
    pub fn contains_text(&self, needle: &str) -> bool {
        match self {
            FieldValue::Null => false,
            other => other
                .to_string()
                .to_lowercase()
                .contains(&needle.to_lowercase()),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Integer(i) => write!(f, "{}", i),
            FieldValue::Float(v) => write!(f, "{}", v),
            FieldValue::Boolean(b) => write!(f, "{}", b),
            FieldValue::DateTime(dt) => write!(f, "{}", dt.to_rfc3339()),
            FieldValue::Null => Ok(()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        FieldValue::DateTime(value)
    }
}

/// Borrowing conversion used by `impl_record!` to expose struct fields
pub trait ToFieldValue {
    fn to_field_value(&self) -> FieldValue;
}

impl ToFieldValue for String {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::String(self.clone())
    }
}

impl ToFieldValue for i64 {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Integer(*self)
    }
}

impl ToFieldValue for u32 {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Integer(i64::from(*self))
    }
}

impl ToFieldValue for f64 {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Float(*self)
    }
}

impl ToFieldValue for bool {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Boolean(*self)
    }
}

impl ToFieldValue for DateTime<Utc> {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::DateTime(*self)
    }
}

impl<T: ToFieldValue> ToFieldValue for Option<T> {
    fn to_field_value(&self) -> FieldValue {
        self.as_ref()
            .map(ToFieldValue::to_field_value)
            .unwrap_or(FieldValue::Null)
    }
}

/// Locale-aware, case-sensitive string ordering
///
/// Strings are ordered case-insensitively first; strings that differ only in
/// case put lowercase before uppercase at the first differing character.
/// Two strings compare `Equal` only when they are identical.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let folded = |s: &str| s.chars().flat_map(char::to_lowercase).collect::<Vec<_>>();
    let case_key = |c: char| (!c.is_lowercase(), c);

    folded(a)
        .cmp(&folded(b))
        .then_with(|| a.chars().map(case_key).cmp(b.chars().map(case_key)))
}

/// Field format validators for automatic validation
#[derive(Debug, Clone)]
pub enum FieldFormat {
    /// `#rgb` or `#rrggbb`
    HexColor,
    Url,
    Custom(Regex),
}

impl FieldFormat {
    /// Validate a field value against this format
    pub fn validate(&self, value: &FieldValue) -> bool {
        let string_value = match value.as_string() {
            Some(s) => s,
            None => return false,
        };

        match self {
            FieldFormat::HexColor => Self::is_valid_hex_color(string_value),
            FieldFormat::Url => Self::is_valid_url(string_value),
            FieldFormat::Custom(regex) => regex.is_match(string_value),
        }
    }

    fn is_valid_hex_color(code: &str) -> bool {
        static HEX_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = HEX_REGEX.get_or_init(|| {
            Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("hex color regex is valid")
        });
        regex.is_match(code)
    }

    fn is_valid_url(url: &str) -> bool {
        static URL_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = URL_REGEX.get_or_init(|| {
            Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").expect("url regex is valid")
        });
        regex.is_match(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_field_value_string() {
        let value = FieldValue::String("test".to_string());
        assert_eq!(value.as_string(), Some("test"));
        assert_eq!(value.as_integer(), None);
        assert!(!value.is_null());
    }

    #[test]
    fn test_field_value_numbers_widen() {
        assert_eq!(FieldValue::Integer(42).as_f64(), Some(42.0));
        assert_eq!(FieldValue::Float(2.5).as_f64(), Some(2.5));
        assert_eq!(FieldValue::Boolean(true).as_f64(), None);
    }

    #[test]
    fn test_compare_numbers_mix_integer_and_float() {
        let a = FieldValue::Integer(3200);
        let b = FieldValue::Float(4800.5);
        assert_eq!(a.compare(&b), Some(Ordering::Less));
        assert!(FieldValue::Integer(2).equals(&FieldValue::Float(2.0)));
    }

    #[test]
    fn test_compare_nan_is_unordered() {
        let nan = FieldValue::Float(f64::NAN);
        assert_eq!(nan.compare(&FieldValue::Float(1.0)), None);
    }

    #[test]
    fn test_compare_dates_chronologically() {
        let early = Utc.with_ymd_and_hms(2023, 6, 15, 8, 30, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2024, 3, 20, 12, 15, 0).unwrap();
        assert_eq!(
            FieldValue::DateTime(early).compare(&FieldValue::DateTime(late)),
            Some(Ordering::Less)
        );
        assert_eq!(
            FieldValue::DateTime(late).compare(&FieldValue::from("2023-06-15T08:30:00Z")),
            Some(Ordering::Greater)
        );
        assert_eq!(
            FieldValue::DateTime(late).compare(&FieldValue::from("not a date")),
            None
        );
    }

    #[test]
    fn test_compare_incompatible_kinds() {
        assert_eq!(
            FieldValue::from("10").compare(&FieldValue::Integer(10)),
            None
        );
        assert_eq!(FieldValue::Null.compare(&FieldValue::Null), None);
    }

    #[test]
    fn test_locale_cmp_orders_case_insensitively_first() {
        assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_cmp("Zebra", "apple"), Ordering::Greater);
    }

    #[test]
    fn test_locale_cmp_lowercase_before_uppercase() {
        assert_eq!(locale_cmp("table", "Table"), Ordering::Less);
        assert_eq!(locale_cmp("Table", "table"), Ordering::Greater);
        assert_eq!(locale_cmp("Table", "Table"), Ordering::Equal);
    }

    #[test]
    fn test_locale_cmp_prefix_sorts_first() {
        assert_eq!(locale_cmp("Dining", "Dining Table Set"), Ordering::Less);
    }

    #[test]
    fn test_equals_strings_is_case_sensitive() {
        let a = FieldValue::from("Electronics");
        assert!(a.equals(&FieldValue::from("Electronics")));
        assert!(!a.equals(&FieldValue::from("electronics")));
    }

    #[test]
    fn test_contains_text_is_case_insensitive() {
        let value = FieldValue::from("Coffee Table");
        assert!(value.contains_text("table"));
        assert!(value.contains_text("COFFEE"));
        assert!(!value.contains_text("shelf"));
        assert!(!FieldValue::Null.contains_text(""));
    }

    #[test]
    fn test_from_json_scalars() {
        assert_eq!(FieldValue::from_json(&json!(12)), Some(FieldValue::Integer(12)));
        assert_eq!(FieldValue::from_json(&json!(1.5)), Some(FieldValue::Float(1.5)));
        assert_eq!(
            FieldValue::from_json(&json!("Furniture")),
            Some(FieldValue::from("Furniture"))
        );
        assert_eq!(FieldValue::from_json(&json!(null)), Some(FieldValue::Null));
        assert_eq!(FieldValue::from_json(&json!([1, 2])), None);
    }

    #[test]
    fn test_option_to_field_value() {
        let some: Option<i64> = Some(7);
        let none: Option<i64> = None;
        assert_eq!(some.to_field_value(), FieldValue::Integer(7));
        assert_eq!(none.to_field_value(), FieldValue::Null);
    }

    #[test]
    fn test_hex_color_validation() {
        let format = FieldFormat::HexColor;

        assert!(format.validate(&FieldValue::from("#1890ff")));
        assert!(format.validate(&FieldValue::from("#FFF")));
        assert!(!format.validate(&FieldValue::from("1890ff")));
        assert!(!format.validate(&FieldValue::from("#12345")));
        assert!(!format.validate(&FieldValue::Integer(42)));
    }

    #[test]
    fn test_url_validation() {
        let format = FieldFormat::Url;

        assert!(format.validate(&FieldValue::from("https://picsum.photos/id/1/800/800")));
        assert!(!format.validate(&FieldValue::from("not a url")));
    }

    #[test]
    fn test_custom_regex_validation() {
        let format = FieldFormat::Custom(Regex::new(r"^#\d{6}$").unwrap());

        assert!(format.validate(&FieldValue::from("#123456")));
        assert!(!format.validate(&FieldValue::from("123456")));
    }

    #[test]
    fn test_serde_roundtrip_float() {
        let original = FieldValue::Float(29.99);
        let json = serde_json::to_string(&original).expect("serialize should succeed");
        let restored: FieldValue =
            serde_json::from_str(&json).expect("deserialize should succeed");
        assert_eq!(original, restored);
    }
}
