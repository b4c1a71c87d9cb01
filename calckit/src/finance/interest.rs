//! Compounding: future value, present value, inflation and APY.
//!
//! Rates are fractions throughout (`0.05` is 5 %).

use crate::{validate, CalcError, Result};
use serde::Serialize;

/// Outcome of [`compound_interest`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompoundInterest {
    /// Starting amount.
    pub principal: f64,
    /// Balance at the end of the horizon.
    pub future_value: f64,
    /// `future_value - principal`.
    pub interest: f64,
}

/// `A = P(1 + r/n)^(n·t)`.
///
/// ```rust
/// use calckit::finance::compound_interest;
///
/// let ci = compound_interest(1_000.0, 0.05, 12, 1.0).unwrap();
/// assert!((ci.future_value - 1_051.16).abs() < 0.01);
/// ```
pub fn compound_interest(
    principal: f64,
    annual_rate: f64,
    periods_per_year: u32,
    years: f64,
) -> Result<CompoundInterest> {
    let principal = validate::non_negative("principal", principal)?;
    let rate = validate::non_negative("annual rate", annual_rate)?;
    let years = validate::non_negative("years", years)?;
    if periods_per_year == 0 {
        return Err(CalcError::validation(
            "compounding periods per year must be greater than zero",
        ));
    }

    let n = f64::from(periods_per_year);
    let growth = (1.0 + rate / n).powf(n * years);
    let future_value = validate::finite_result("future value", principal * growth)?;

    Ok(CompoundInterest {
        principal,
        future_value,
        interest: future_value - principal,
    })
}

/// `PV = FV / (1 + r)^n`, with `r` the rate per period and `n` the number of periods.
pub fn present_value(future_value: f64, rate: f64, periods: f64) -> Result<f64> {
    let future_value = validate::non_negative("future value", future_value)?;
    let rate = validate::non_negative("rate", rate)?;
    let periods = validate::non_negative("periods", periods)?;
    validate::finite_result("present value", future_value / (1.0 + rate).powf(periods))
}

/// Cost of `amount` after `years` of inflation at `rate`.
pub fn inflation_future_cost(amount: f64, rate: f64, years: f64) -> Result<f64> {
    let amount = validate::non_negative("amount", amount)?;
    let rate = validate::non_negative("inflation rate", rate)?;
    let years = validate::non_negative("years", years)?;
    validate::finite_result("future cost", amount * (1.0 + rate).powf(years))
}

/// What `amount` buys after `years` of inflation at `rate`, in today's money.
pub fn purchasing_power(amount: f64, rate: f64, years: f64) -> Result<f64> {
    present_value(amount, rate, years)
}

/// How often a nominal rate compounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Compounding {
    /// `n` times per year.
    Periodic(u32),
    /// The limit as `n` grows without bound.
    Continuous,
}

impl Compounding {
    /// Monthly compounding.
    pub const MONTHLY: Compounding = Compounding::Periodic(12);
    /// Daily compounding.
    pub const DAILY: Compounding = Compounding::Periodic(365);
}

/// Annual percentage yield of a nominal rate: `(1 + r/n)^n - 1`, or `e^r - 1` when continuous.
pub fn apy(nominal_rate: f64, compounding: Compounding) -> Result<f64> {
    let r = validate::non_negative("nominal rate", nominal_rate)?;
    let yield_ = match compounding {
        Compounding::Periodic(0) => {
            return Err(CalcError::validation(
                "compounding periods per year must be greater than zero",
            ))
        }
        Compounding::Periodic(n) => {
            let n = f64::from(n);
            (n * (r / n).ln_1p()).exp_m1()
        }
        Compounding::Continuous => r.exp_m1(),
    };
    validate::finite_result("APY", yield_)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn compound_interest_monthly() {
        let ci = compound_interest(1_000.0, 0.05, 12, 1.0).unwrap();
        assert_abs_diff_eq!(ci.future_value, 1_051.16, epsilon = 0.005);
        assert_abs_diff_eq!(ci.interest, ci.future_value - 1_000.0);
    }

    #[test]
    fn zero_horizon_keeps_principal() {
        let ci = compound_interest(500.0, 0.1, 4, 0.0).unwrap();
        assert_eq!(ci.future_value, 500.0);
        assert_eq!(ci.interest, 0.0);
    }

    #[test]
    fn zero_periods_is_not_computed() {
        let err = compound_interest(1_000.0, 0.05, 0, 1.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn present_value_discounts() {
        assert_relative_eq!(present_value(1_102.5, 0.05, 2.0).unwrap(), 1_000.0, max_relative = 1e-12);
        assert!(present_value(-1.0, 0.05, 2.0).is_err());
    }

    #[test]
    fn inflation_is_symmetric() {
        let later = inflation_future_cost(100.0, 0.03, 10.0).unwrap();
        assert_abs_diff_eq!(later, 134.39, epsilon = 0.01);
        assert_relative_eq!(purchasing_power(later, 0.03, 10.0).unwrap(), 100.0, max_relative = 1e-12);
    }

    #[test]
    fn apy_periodic_and_continuous() {
        assert_abs_diff_eq!(apy(0.05, Compounding::MONTHLY).unwrap(), 0.051_161_9, epsilon = 1e-6);
        assert_abs_diff_eq!(apy(0.05, Compounding::Periodic(1)).unwrap(), 0.05, epsilon = 1e-15);
        assert_abs_diff_eq!(apy(0.05, Compounding::Continuous).unwrap(), 0.051_271_1, epsilon = 1e-6);
        assert!(apy(0.05, Compounding::Periodic(0)).is_err());
    }

    #[test]
    fn overflowing_growth_is_reported() {
        let err = compound_interest(1e300, 1.0, 1, 1e4).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Overflow);
    }
}
