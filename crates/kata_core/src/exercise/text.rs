//! String utilities.

/// Reverses `value` by Unicode scalar value. Absent input stays absent.
pub fn reverse(value: Option<&str>) -> Option<String> {
    value.map(|text| text.chars().rev().collect())
}
