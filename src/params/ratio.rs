//! Price pair for the ratio advisory

use crate::error::{ErrorCollector, ValidationErrors};
use crate::validation::rules;
use serde::Serialize;

/// Two positive prices quoted in the same unit (gold and silver per ounce, by default)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatioParameters {
    price_a: f64,
    price_b: f64,
}

impl RatioParameters {
    pub fn new(price_a: f64, price_b: f64) -> Result<Self, ValidationErrors> {
        let mut c = ErrorCollector::new();
        check(&mut c, Some(price_a), Some(price_b));
        c.finish(Some(Self::from_checked(price_a, price_b)))
    }

    pub(crate) fn from_checked(price_a: f64, price_b: f64) -> Self {
        Self { price_a, price_b }
    }

    pub fn price_a(&self) -> f64 {
        self.price_a
    }

    pub fn price_b(&self) -> f64 {
        self.price_b
    }
}

pub(crate) fn check(c: &mut ErrorCollector, price_a: Option<f64>, price_b: Option<f64>) {
    rules::positive(c, "price_a", price_a);
    rules::positive(c, "price_b", price_b);

    if let (Some(a), Some(b)) = (price_a, price_b) {
        if a > 0.0 && b > 0.0 {
            c.require((a / b).is_finite(), "price_b", "Price ratio is out of range");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive_prices() {
        let errors = RatioParameters::new(0.0, -28.0).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.for_field("price_a"), Some("Must be greater than 0"));
    }

    #[test]
    fn test_rejects_ratio_that_overflows() {
        let errors = RatioParameters::new(1e300, 1e-10).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.for_field("price_b"), Some("Price ratio is out of range"));

        assert!(RatioParameters::new(1e300, 1e10).is_ok());
    }
}
