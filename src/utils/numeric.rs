use crate::error::AppError;

/// Parse a floating-point literal using the standard `f64` grammar.
///
/// Accepts an optional sign, digits with an optional fractional part,
/// an optional exponent, and the special values `inf`, `infinity` and
/// `nan` in any ASCII case. Whitespace is not trimmed.
pub fn parse_numeric(value: &str) -> Result<f64, AppError> {
    value
        .parse::<f64>()
        .map_err(|_| AppError::InvalidNumber {
            input: value.to_string(),
        })
}

/// Whether `value` is present and reads as an `f64`. Never fails.
pub fn is_numeric(value: Option<&str>) -> bool {
    value.is_some_and(is_numeric_str)
}

pub fn is_numeric_str(value: &str) -> bool {
    parse_numeric(value).is_ok()
}
