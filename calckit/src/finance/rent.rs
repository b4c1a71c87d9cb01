//! Rent affordability.

use crate::{validate, Result};
use serde::Serialize;

/// Share of gross monthly income usually recommended for rent.
pub const RENT_TO_INCOME: f64 = 0.30;
/// Ceiling on total debt payments as a share of gross monthly income.
pub const MAX_DEBT_TO_INCOME: f64 = 0.43;
/// Landlord rule of thumb: annual income of at least 40 times the monthly rent.
pub const INCOME_TO_RENT_MULTIPLE: f64 = 40.0;

/// What a monthly income supports.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RentAffordability {
    /// `income · 0.30`.
    pub recommended_rent: f64,
    /// `max(0, income · 0.43 − debts)`.
    pub max_rent_by_dti: f64,
    /// `recommended_rent · 40`.
    pub annual_income_needed: f64,
}

/// Affordable rent for a gross monthly income and existing monthly debt payments.
pub fn rent_affordability(monthly_income: f64, monthly_debts: f64) -> Result<RentAffordability> {
    let income = validate::non_negative("monthly income", monthly_income)?;
    let debts = validate::non_negative("monthly debts", monthly_debts)?;

    let recommended_rent = income * RENT_TO_INCOME;
    Ok(RentAffordability {
        recommended_rent,
        max_rent_by_dti: (income * MAX_DEBT_TO_INCOME - debts).max(0.0),
        annual_income_needed: recommended_rent * INCOME_TO_RENT_MULTIPLE,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn ratios_apply() {
        let r = rent_affordability(5_000.0, 500.0).unwrap();
        assert_abs_diff_eq!(r.recommended_rent, 1_500.0, epsilon = 1e-9);
        assert_abs_diff_eq!(r.max_rent_by_dti, 1_650.0, epsilon = 1e-9);
        assert_abs_diff_eq!(r.annual_income_needed, 60_000.0, epsilon = 1e-6);
    }

    #[test]
    fn heavy_debt_floors_at_zero() {
        let r = rent_affordability(2_000.0, 1_500.0).unwrap();
        assert_eq!(r.max_rent_by_dti, 0.0);
    }
}
