//! Fixed economic assumptions and numeric thresholds used by the calculators

use serde::{Deserialize, Serialize};
use std::env;

/// Annual inflation applied to retirement expenses (6%)
pub const DEFAULT_INFLATION_RATE: f64 = 0.06;

/// Below this magnitude a rate is treated as zero and the limiting-case formula is used
pub const DEFAULT_DEGENERATE_RATE: f64 = 1e-4;

/// Ratio above which the second asset is considered undervalued
pub const DEFAULT_RATIO_UPPER: f64 = 90.0;

/// Ratio below which the first asset is considered undervalued
pub const DEFAULT_RATIO_LOWER: f64 = 70.0;

/// Container for every constant the calculators depend on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Assumptions {
    /// Annual inflation rate as a decimal
    pub inflation_rate: f64,

    /// Threshold on |real return| for the retirement corpus annuity
    pub real_return_epsilon: f64,

    /// Threshold on the nominal monthly rate for the required saving
    pub monthly_rate_epsilon: f64,

    /// Upper band edge for the ratio advisory (strict)
    pub ratio_upper: f64,

    /// Lower band edge for the ratio advisory (strict)
    pub ratio_lower: f64,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            inflation_rate: DEFAULT_INFLATION_RATE,
            real_return_epsilon: DEFAULT_DEGENERATE_RATE,
            monthly_rate_epsilon: DEFAULT_DEGENERATE_RATE,
            ratio_upper: DEFAULT_RATIO_UPPER,
            ratio_lower: DEFAULT_RATIO_LOWER,
        }
    }
}

impl Assumptions {
    /// Defaults, overridden by environment variables where present:
    ///   FINCALC_INFLATION_RATE, FINCALC_RATIO_UPPER, FINCALC_RATIO_LOWER
    ///
    /// Unparsable values fall back to the default, as does an inflation rate
    /// at or below -1 and a lower ratio band above the upper one.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str, default: f64| -> f64 {
            match lookup(key) {
                Some(raw) => match raw.trim().parse::<f64>() {
                    Ok(v) if v.is_finite() => v,
                    _ => {
                        log::warn!("ignoring {}={:?}: not a finite number", key, raw);
                        default
                    }
                },
                None => default,
            }
        };

        let defaults = Self::default();
        let mut assumptions = Self {
            inflation_rate: read("FINCALC_INFLATION_RATE", defaults.inflation_rate),
            ratio_upper: read("FINCALC_RATIO_UPPER", defaults.ratio_upper),
            ratio_lower: read("FINCALC_RATIO_LOWER", defaults.ratio_lower),
            ..defaults
        };

        // 1 + inflation divides the nominal return
        if assumptions.inflation_rate <= -1.0 {
            log::warn!(
                "ignoring inflation rate {}: must be above -1",
                assumptions.inflation_rate
            );
            assumptions.inflation_rate = defaults.inflation_rate;
        }

        if assumptions.ratio_lower > assumptions.ratio_upper {
            log::warn!(
                "ratio bands inverted ({} > {}), using defaults",
                assumptions.ratio_lower,
                assumptions.ratio_upper
            );
            assumptions.ratio_upper = defaults.ratio_upper;
            assumptions.ratio_lower = defaults.ratio_lower;
        }

        assumptions
    }
}
