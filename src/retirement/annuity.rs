//! Level annuity helpers

/// Present and future value helpers for level payment streams
pub struct AnnuityCalculator;

impl AnnuityCalculator {
    /// PV of `periods` payments made at the end of each period
    ///
    /// Falls back to `payment * periods` when |rate| <= epsilon.
    pub fn pv_ordinary(payment: f64, periods: u32, rate: f64, epsilon: f64) -> f64 {
        if rate.abs() <= epsilon {
            log::trace!("|rate| {} within {}, undiscounted annuity", rate, epsilon);
            return payment * periods as f64;
        }

        payment * (1.0 - (1.0 + rate).powi(-(periods as i32))) / rate
    }

    /// Level end-of-period payment whose accumulated value after `periods` is `target`
    ///
    /// Falls back to `target / periods` when |rate| <= epsilon.
    pub fn sinking_fund_payment(target: f64, periods: u32, rate: f64, epsilon: f64) -> f64 {
        if rate.abs() <= epsilon {
            log::trace!("|rate| {} within {}, level saving without growth", rate, epsilon);
            return target / periods as f64;
        }

        target * rate / ((1.0 + rate).powi(periods as i32) - 1.0)
    }

    /// Accumulated value of `periods` end-of-period payments
    pub fn fv_ordinary(payment: f64, periods: u32, rate: f64) -> f64 {
        if rate == 0.0 {
            return payment * periods as f64;
        }

        payment * ((1.0 + rate).powi(periods as i32) - 1.0) / rate
    }
}
