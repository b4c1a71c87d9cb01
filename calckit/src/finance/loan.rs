//! Amortized loans.

use crate::{validate, CalcError, Result};
use serde::Serialize;

/// Longest schedule [`LoanTerms::schedule`] will build.
pub const MAX_SCHEDULE_ROWS: u32 = 12_000;

/// Principal, rate and length of an amortized loan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoanTerms {
    principal: f64,
    annual_rate: f64,
    term_count: u32,
    periods_per_year: u32,
}

/// One period of an amortization schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AmortizationRow {
    /// 1-based period number.
    pub period: u32,
    /// Amount paid this period.
    pub payment: f64,
    /// Part of the payment that reduces the balance.
    pub principal: f64,
    /// Part of the payment that is interest.
    pub interest: f64,
    /// Balance left after the payment.
    pub balance: f64,
}

/// Totals over the life of a loan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoanSummary {
    /// Periodic payment.
    pub payment: f64,
    /// Number of payments.
    pub payments: u32,
    /// Sum of every payment.
    pub total_paid: f64,
    /// `total_paid - principal`.
    pub total_interest: f64,
}

impl LoanTerms {
    /// Validates and builds loan terms.
    ///
    /// `term_count` is the number of payments and `periods_per_year` how many of them fall in a year, so a
    /// 5-year monthly loan is `term_count = 60, periods_per_year = 12`.
    pub fn new(principal: f64, annual_rate: f64, term_count: u32, periods_per_year: u32) -> Result<Self> {
        let principal = validate::non_negative("principal", principal)?;
        let annual_rate = validate::non_negative("annual rate", annual_rate)?;
        if term_count == 0 {
            return Err(CalcError::validation("loan term must be at least one payment"));
        }
        if periods_per_year == 0 {
            return Err(CalcError::validation(
                "payment periods per year must be greater than zero",
            ));
        }
        Ok(Self {
            principal,
            annual_rate,
            term_count,
            periods_per_year,
        })
    }

    /// Builds terms from a length in whole years.
    pub fn from_years(principal: f64, annual_rate: f64, years: u32, periods_per_year: u32) -> Result<Self> {
        let term_count = years.checked_mul(periods_per_year).ok_or_else(|| {
            CalcError::overflow(format!("{years} years of {periods_per_year} payments"))
        })?;
        Self::new(principal, annual_rate, term_count, periods_per_year)
    }

    /// Amount borrowed.
    pub fn principal(&self) -> f64 {
        self.principal
    }

    /// Nominal annual rate.
    pub fn annual_rate(&self) -> f64 {
        self.annual_rate
    }

    /// Rate per payment period.
    pub fn periodic_rate(&self) -> f64 {
        self.annual_rate / f64::from(self.periods_per_year)
    }

    /// Number of payments.
    pub fn payment_count(&self) -> u32 {
        self.term_count
    }

    /// Periodic payment: `P·r·(1+r)^N / ((1+r)^N − 1)`, or `P/N` when the rate is zero.
    pub fn payment(&self) -> Result<f64> {
        let r = self.periodic_rate();
        let n = f64::from(self.term_count);
        if r == 0.0 {
            return Ok(self.principal / n);
        }
        // (1+r)^N - 1 without cancellation for small r
        let growth = (n * r.ln_1p()).exp_m1();
        validate::finite_result("payment", self.principal * r * (growth + 1.0) / growth)
    }

    /// Payment and lifetime totals.
    pub fn summary(&self) -> Result<LoanSummary> {
        let payment = self.payment()?;
        let total_paid = validate::finite_result("total paid", payment * f64::from(self.term_count))?;
        Ok(LoanSummary {
            payment,
            payments: self.term_count,
            total_paid,
            total_interest: total_paid - self.principal,
        })
    }

    /// Full amortization schedule, one row per payment.
    ///
    /// The last row absorbs rounding so the closing balance is exactly zero.
    pub fn schedule(&self) -> Result<Vec<AmortizationRow>> {
        if self.term_count > MAX_SCHEDULE_ROWS {
            log::warn!("refusing a {}-row amortization schedule", self.term_count);
            return Err(CalcError::overflow(format!(
                "schedule of {} payments exceeds {MAX_SCHEDULE_ROWS}",
                self.term_count
            )));
        }

        let payment = self.payment()?;
        let r = self.periodic_rate();
        let mut balance = self.principal;
        let mut rows = Vec::with_capacity(self.term_count as usize);

        for period in 1..=self.term_count {
            let interest = balance * r;
            let (principal, payment) = if period == self.term_count {
                (balance, balance + interest)
            } else {
                (payment - interest, payment)
            };
            balance = (balance - principal).max(0.0);
            rows.push(AmortizationRow {
                period,
                payment,
                principal,
                interest,
                balance,
            });
        }

        Ok(rows)
    }
}

/// Periodic payment of `terms`; see [`LoanTerms::payment`].
pub fn loan_payment(terms: &LoanTerms) -> Result<f64> {
    terms.payment()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn standard_amortization() {
        let terms = LoanTerms::new(10_000.0, 0.06, 60, 12).unwrap();
        assert_abs_diff_eq!(terms.payment().unwrap(), 193.33, epsilon = 0.005);
        assert_abs_diff_eq!(terms.periodic_rate(), 0.005, epsilon = 1e-15);
    }

    #[test]
    fn zero_rate_divides_evenly() {
        let terms = LoanTerms::new(1_200.0, 0.0, 12, 12).unwrap();
        assert_eq!(loan_payment(&terms).unwrap(), 100.0);
    }

    #[test]
    fn from_years_matches_explicit_count() {
        let a = LoanTerms::from_years(250_000.0, 0.045, 30, 12).unwrap();
        let b = LoanTerms::new(250_000.0, 0.045, 360, 12).unwrap();
        assert_eq!(a, b);
        assert_abs_diff_eq!(a.payment().unwrap(), 1_266.71, epsilon = 0.01);
        assert!(LoanTerms::from_years(1.0, 0.0, u32::MAX, 12).is_err());
    }

    #[test]
    fn invalid_terms_are_rejected() {
        assert_eq!(
            LoanTerms::new(1_000.0, 0.05, 0, 12).unwrap_err().kind(),
            ErrorKind::Validation
        );
        assert!(LoanTerms::new(1_000.0, 0.05, 12, 0).is_err());
        assert!(LoanTerms::new(-1.0, 0.05, 12, 12).is_err());
        assert!(LoanTerms::new(1_000.0, f64::NAN, 12, 12).is_err());
    }

    #[test]
    fn schedule_pays_off_the_loan() {
        let terms = LoanTerms::new(10_000.0, 0.06, 60, 12).unwrap();
        let rows = terms.schedule().unwrap();
        assert_eq!(rows.len(), 60);
        assert_eq!(rows[0].period, 1);
        assert_abs_diff_eq!(rows[0].interest, 50.0, epsilon = 1e-9);
        assert_eq!(rows[59].balance, 0.0);

        let repaid: f64 = rows.iter().map(|r| r.principal).sum();
        assert_relative_eq!(repaid, 10_000.0, max_relative = 1e-9);

        let summary = terms.summary().unwrap();
        let paid: f64 = rows.iter().map(|r| r.payment).sum();
        assert_relative_eq!(paid, summary.total_paid, max_relative = 1e-9);
        assert_abs_diff_eq!(summary.total_interest, 1_599.68, epsilon = 0.01);
    }

    #[test]
    fn oversized_schedule_is_refused() {
        let terms = LoanTerms::new(1.0, 0.01, MAX_SCHEDULE_ROWS + 1, 12).unwrap();
        assert_eq!(terms.schedule().unwrap_err().kind(), ErrorKind::Overflow);
    }
}
