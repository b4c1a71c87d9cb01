//! Closed-form financial formulas.
//!
//! Every function validates its inputs and returns a [`Result`](crate::Result). A zero denominator or a
//! non-numeric input is a [`CalcError::Validation`](crate::CalcError::Validation), which callers render as "not
//! computed"; no function returns NaN or an infinity.

mod interest;
mod loan;
mod pricing;
mod rent;
mod returns;
mod tax;

pub use interest::{
    apy, compound_interest, inflation_future_cost, present_value, purchasing_power, CompoundInterest,
    Compounding,
};
pub use loan::{loan_payment, AmortizationRow, LoanSummary, LoanTerms, MAX_SCHEDULE_ROWS};
pub use pricing::{
    breakdown, margin, margin_to_markup, markup, markup_to_margin, revenue_from_margin, revenue_from_markup,
    PriceBreakdown,
};
pub use rent::{
    rent_affordability, RentAffordability, INCOME_TO_RENT_MULTIPLE, MAX_DEBT_TO_INCOME, RENT_TO_INCOME,
};
pub use returns::{annualized_roi, roi};
pub use tax::{add_sales_tax, remove_sales_tax, SalesTax};
