//! Range and sign rules shared by every instrument
//!
//! Each rule takes an `Option` so a field that already failed to parse is skipped
//! instead of being reported twice.

use crate::error::ErrorCollector;

pub(crate) fn positive(c: &mut ErrorCollector, field: &str, value: Option<f64>) {
    if let Some(v) = value {
        c.require(v.is_finite() && v > 0.0, field, "Must be greater than 0");
    }
}

pub(crate) fn non_negative(c: &mut ErrorCollector, field: &str, value: Option<f64>) {
    if let Some(v) = value {
        c.require(v.is_finite() && v >= 0.0, field, "Cannot be negative");
    }
}

/// Inclusive range check
pub(crate) fn within(c: &mut ErrorCollector, field: &str, value: Option<f64>, min: f64, max: f64, reason: &str) {
    if let Some(v) = value {
        c.require(v.is_finite() && v >= min && v <= max, field, reason);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_skip_missing_values() {
        let mut c = ErrorCollector::new();
        positive(&mut c, "principal", None);
        non_negative(&mut c, "rate", None);
        within(&mut c, "tenure", None, 1.0, 50.0, "out of range");
        assert!(!c.has_errors());
    }

    #[test]
    fn test_rules_boundaries() {
        let mut c = ErrorCollector::new();
        positive(&mut c, "a", Some(0.0));
        non_negative(&mut c, "b", Some(0.0));
        within(&mut c, "c", Some(1.0), 1.0, 50.0, "x");
        within(&mut c, "d", Some(50.0), 1.0, 50.0, "x");
        within(&mut c, "e", Some(50.5), 1.0, 50.0, "x");

        let errors = c.finish(Some(())).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.for_field("a").is_some());
        assert!(errors.for_field("e").is_some());
    }

    #[test]
    fn test_rules_reject_non_finite() {
        let mut c = ErrorCollector::new();
        positive(&mut c, "a", Some(f64::INFINITY));
        non_negative(&mut c, "b", Some(f64::NAN));
        assert_eq!(c.finish(Some(())).unwrap_err().len(), 2);
    }
}
