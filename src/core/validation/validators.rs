//! Reusable field validators
//!
//! Each validator receives the field name and its value and returns the
//! failure message, if any. Records combine them in `Validate::validate`.

use crate::core::field::{FieldFormat, FieldValue};

/// Validator: field is required (not null, not a blank string)
pub fn required() -> impl Fn(&str, &FieldValue) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &FieldValue| match value {
        FieldValue::Null => Err(format!("'{}' is required", field)),
        FieldValue::String(s) if s.trim().is_empty() => Err(format!("'{}' is required", field)),
        _ => Ok(()),
    }
}

/// Validator: number must be positive
pub fn positive() -> impl Fn(&str, &FieldValue) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &FieldValue| {
        if let Some(num) = value.as_f64() {
            if num <= 0.0 || num.is_nan() {
                Err(format!("'{}' must be positive (value: {})", field, num))
            } else {
                Ok(())
            }
        } else {
            Ok(())
        }
    }
}

/// Validator: number must be zero or more
pub fn non_negative() -> impl Fn(&str, &FieldValue) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &FieldValue| {
        if let Some(num) = value.as_f64() {
            if num < 0.0 || num.is_nan() {
                Err(format!("'{}' must not be negative (value: {})", field, num))
            } else {
                Ok(())
            }
        } else {
            Ok(())
        }
    }
}

/// Validator: string length must be within range
pub fn string_length(
    min: usize,
    max: usize,
) -> impl Fn(&str, &FieldValue) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &FieldValue| {
        if let Some(s) = value.as_string() {
            let len = s.chars().count();
            if len < min {
                Err(format!(
                    "'{}' must have at least {} characters (currently: {})",
                    field, min, len
                ))
            } else if len > max {
                Err(format!(
                    "'{}' must not exceed {} characters (currently: {})",
                    field, max, len
                ))
            } else {
                Ok(())
            }
        } else {
            Ok(())
        }
    }
}

/// Validator: value must be in allowed list
pub fn in_list(
    allowed: Vec<String>,
) -> impl Fn(&str, &FieldValue) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &FieldValue| {
        if let Some(s) = value.as_string() {
            if !allowed.iter().any(|a| a == s) {
                Err(format!(
                    "'{}' must be one of: {:?} (current value: {})",
                    field, allowed, s
                ))
            } else {
                Ok(())
            }
        } else {
            Ok(())
        }
    }
}

/// Validator: string must match a format
pub fn format(
    format: FieldFormat,
) -> impl Fn(&str, &FieldValue) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &FieldValue| {
        if value.as_string().is_none() || format.validate(value) {
            Ok(())
        } else {
            Err(format!("'{}' has an invalid format (value: {})", field, value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // === required() ===

    #[test]
    fn test_required_null_value_returns_error() {
        let v = required();
        let result = v("name", &FieldValue::Null);
        assert!(result.unwrap_err().contains("required"));
    }

    #[test]
    fn test_required_blank_string_returns_error() {
        let v = required();
        assert!(v("question", &FieldValue::from("   ")).is_err());
        assert!(v("question", &FieldValue::from("What is JSX?")).is_ok());
    }

    #[test]
    fn test_required_number_passes() {
        let v = required();
        assert!(v("price", &FieldValue::Integer(0)).is_ok());
    }

    // === positive() / non_negative() ===

    #[test]
    fn test_positive_rejects_zero_and_negative() {
        let v = positive();
        assert!(v("price", &FieldValue::Float(0.0)).is_err());
        assert!(v("price", &FieldValue::Integer(-5)).is_err());
        assert!(v("price", &FieldValue::Float(29.99)).is_ok());
    }

    #[test]
    fn test_positive_ignores_non_numbers() {
        let v = positive();
        assert!(v("price", &FieldValue::from("abc")).is_ok());
    }

    #[test]
    fn test_non_negative_allows_zero() {
        let v = non_negative();
        assert!(v("quantity", &FieldValue::Integer(0)).is_ok());
        assert!(v("quantity", &FieldValue::Integer(-1)).is_err());
    }

    // === string_length() ===

    #[test]
    fn test_string_length_bounds() {
        let v = string_length(2, 5);
        assert!(v("code", &FieldValue::from("a")).is_err());
        assert!(v("code", &FieldValue::from("abc")).is_ok());
        assert!(v("code", &FieldValue::from("abcdef")).is_err());
    }

    // === in_list() ===

    #[test]
    fn test_in_list() {
        let v = in_list(vec!["Pending".to_string(), "Completed".to_string()]);
        assert!(v("status", &FieldValue::from("Pending")).is_ok());
        assert!(v("status", &FieldValue::from("Shipped")).is_err());
    }

    // === format() ===

    #[test]
    fn test_format_hex_color() {
        let v = format(FieldFormat::HexColor);
        assert!(v("color_code", &FieldValue::from("#52c41a")).is_ok());
        let err = v("color_code", &FieldValue::from("green")).unwrap_err();
        assert!(err.contains("color_code"));
    }

    #[test]
    fn test_format_skips_non_strings() {
        let v = format(FieldFormat::Url);
        assert!(v("images", &FieldValue::Null).is_ok());
    }
}
