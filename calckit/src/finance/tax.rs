//! Sales tax, forward and reverse.

use crate::{validate, Result};
use serde::Serialize;

/// A price split into its net amount and tax.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SalesTax {
    /// Price before tax.
    pub net: f64,
    /// Tax amount.
    pub tax: f64,
    /// Price including tax.
    pub gross: f64,
    /// Tax rate as a fraction.
    pub rate: f64,
}

/// Adds tax to a net price: `gross = net·(1 + rate)`.
///
/// ```rust
/// use calckit::finance::{add_sales_tax, remove_sales_tax};
///
/// let fwd = add_sales_tax(100.0, 0.085).unwrap();
/// let back = remove_sales_tax(fwd.gross, 0.085).unwrap();
/// assert!((back.net - 100.0).abs() < 1e-9);
/// ```
pub fn add_sales_tax(net: f64, rate: f64) -> Result<SalesTax> {
    let net = validate::non_negative("net price", net)?;
    let rate = validate::non_negative("tax rate", rate)?;
    let gross = validate::finite_result("gross price", net * (1.0 + rate))?;
    Ok(SalesTax {
        net,
        tax: gross - net,
        gross,
        rate,
    })
}

/// Takes tax out of a gross price: `net = gross / (1 + rate)`.
pub fn remove_sales_tax(gross: f64, rate: f64) -> Result<SalesTax> {
    let gross = validate::non_negative("gross price", gross)?;
    let rate = validate::non_negative("tax rate", rate)?;
    let net = gross / (1.0 + rate);
    Ok(SalesTax {
        net,
        tax: gross - net,
        gross,
        rate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn forward_and_reverse() {
        let fwd = add_sales_tax(100.0, 0.085).unwrap();
        assert_abs_diff_eq!(fwd.gross, 108.5, epsilon = 1e-9);
        assert_abs_diff_eq!(fwd.tax, 8.5, epsilon = 1e-9);

        let rev = remove_sales_tax(108.5, 0.085).unwrap();
        assert_abs_diff_eq!(rev.net, 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(rev.tax, 8.5, epsilon = 1e-9);
    }

    #[test]
    fn negative_rate_is_rejected() {
        assert!(add_sales_tax(100.0, -0.1).is_err());
        assert!(remove_sales_tax(f64::INFINITY, 0.1).is_err());
    }

    proptest! {
        #[test]
        fn prop_reverse_inverts_forward(net in 0.0..1e9f64, rate in 0.0..1.0f64) {
            let fwd = add_sales_tax(net, rate).unwrap();
            let back = remove_sales_tax(fwd.gross, rate).unwrap();
            prop_assert!((back.net - net).abs() <= 1e-9 * net.max(1.0));
        }
    }
}
