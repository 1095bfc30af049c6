//! Reusable field filters
//!
//! These filters normalize record field values before validation

/// Filter: trim whitespace from string
pub fn trim(value: &str) -> String {
    value.trim().to_string()
}

/// Filter: trim every entry and drop the ones left blank
pub fn trim_non_empty(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

/// Filter: convert string to lowercase
pub fn lowercase(value: &str) -> String {
    value.to_lowercase()
}

/// Filter: round number to specified decimal places
pub fn round_decimals(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}
