//! Return on investment.

use crate::{validate, CalcError, Result};

/// `(returned − invested) / invested`.
///
/// `returned` may be negative (losses beyond the stake); `invested` must be positive.
pub fn roi(invested: f64, returned: f64) -> Result<f64> {
    let invested = validate::positive("invested amount", invested)?;
    let returned = validate::finite("returned amount", returned)?;
    validate::finite_result("ROI", (returned - invested) / invested)
}

/// Compound annual rate that turns `invested` into `returned` over `years`: `(returned/invested)^(1/years) − 1`.
///
/// # Errors
///
/// * [`CalcError::Validation`] when `invested` or `years` is not positive.
/// * [`CalcError::Domain`] when `returned/invested` is not positive, since the root has no real value.
pub fn annualized_roi(invested: f64, returned: f64, years: f64) -> Result<f64> {
    let invested = validate::positive("invested amount", invested)?;
    let returned = validate::finite("returned amount", returned)?;
    let years = validate::positive("years", years)?;

    let ratio = returned / invested;
    if ratio <= 0.0 {
        return Err(CalcError::domain(format!(
            "annualized return needs a positive return ratio, found {ratio}"
        )));
    }
    validate::finite_result("annualized ROI", ratio.powf(years.recip()) - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use approx::assert_abs_diff_eq;

    #[test]
    fn simple_roi() {
        assert_abs_diff_eq!(roi(1_000.0, 1_500.0).unwrap(), 0.5);
        assert_abs_diff_eq!(roi(1_000.0, 800.0).unwrap(), -0.2, epsilon = 1e-15);
    }

    #[test]
    fn zero_investment_is_not_computed() {
        assert_eq!(roi(0.0, 10.0).unwrap_err().kind(), ErrorKind::Validation);
        assert_eq!(
            annualized_roi(0.0, 10.0, 1.0).unwrap_err().kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            annualized_roi(10.0, 20.0, 0.0).unwrap_err().kind(),
            ErrorKind::Validation
        );
    }

    #[test]
    fn overflowing_ratio_is_reported() {
        assert_eq!(roi(5e-324, 1e308).unwrap_err().kind(), ErrorKind::Overflow);
        assert_eq!(roi(1e-300, -1e300).unwrap_err().kind(), ErrorKind::Overflow);
    }

    #[test]
    fn doubling_over_two_years() {
        assert_abs_diff_eq!(
            annualized_roi(100.0, 200.0, 2.0).unwrap(),
            std::f64::consts::SQRT_2 - 1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn non_positive_ratio_has_no_real_rate() {
        assert_eq!(
            annualized_roi(100.0, -50.0, 3.0).unwrap_err().kind(),
            ErrorKind::Domain
        );
        assert_eq!(annualized_roi(100.0, 0.0, 3.0).unwrap_err().kind(), ErrorKind::Domain);
    }
}
