//! Parsing of raw form values into numbers

use crate::error::FieldError;

/// Parse a decimal amount, rate or duration
///
/// Surrounding whitespace and Indian/western thousands separators are accepted
/// ("1,00,000" and "100,000" both parse to 100000).
pub fn parse_number(field: &str, raw: &str) -> Result<f64, FieldError> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return Err(FieldError::new(field, "Required"));
    }

    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        Ok(_) => Err(FieldError::new(field, "Must be a finite number")),
        Err(_) => Err(FieldError::new(field, "Must be a number")),
    }
}

/// Parse a non-negative whole number (ages, month counts)
pub fn parse_whole(field: &str, raw: &str) -> Result<u32, FieldError> {
    let value = parse_number(field, raw)?;
    if value < 0.0 {
        return Err(FieldError::new(field, "Cannot be negative"));
    }
    if value.fract() != 0.0 || value > u32::MAX as f64 {
        return Err(FieldError::new(field, "Must be a whole number"));
    }
    Ok(value as u32)
}

/// Like [`parse_whole`], but an empty value reads as zero
pub fn parse_whole_or_zero(field: &str, raw: &str) -> Result<u32, FieldError> {
    if raw.trim().is_empty() {
        Ok(0)
    } else {
        parse_whole(field, raw)
    }
}
