//! Margin and markup.
//!
//! Margin is profit over revenue, markup is profit over cost. Both are fractions.

use crate::{validate, CalcError, Result};
use serde::Serialize;

/// Profit figures for a cost/revenue pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceBreakdown {
    /// What the item cost.
    pub cost: f64,
    /// What it sold for.
    pub revenue: f64,
    /// `revenue - cost`.
    pub profit: f64,
    /// `profit / revenue`.
    pub margin: f64,
    /// `profit / cost`.
    pub markup: f64,
}

/// `(revenue − cost) / revenue`.
pub fn margin(cost: f64, revenue: f64) -> Result<f64> {
    let cost = validate::non_negative("cost", cost)?;
    let revenue = validate::positive("revenue", revenue)?;
    validate::finite_result("margin", (revenue - cost) / revenue)
}

/// `(revenue − cost) / cost`.
pub fn markup(cost: f64, revenue: f64) -> Result<f64> {
    let cost = validate::positive("cost", cost)?;
    let revenue = validate::non_negative("revenue", revenue)?;
    validate::finite_result("markup", (revenue - cost) / cost)
}

/// Profit, margin and markup at once. Both `cost` and `revenue` must be positive.
pub fn breakdown(cost: f64, revenue: f64) -> Result<PriceBreakdown> {
    Ok(PriceBreakdown {
        cost,
        revenue,
        profit: revenue - cost,
        margin: margin(cost, revenue)?,
        markup: markup(cost, revenue)?,
    })
}

/// Selling price for a target markup: `cost·(1 + markup)`.
pub fn revenue_from_markup(cost: f64, markup: f64) -> Result<f64> {
    let cost = validate::non_negative("cost", cost)?;
    let markup = validate::non_negative("markup", markup)?;
    validate::finite_result("revenue", cost * (1.0 + markup))
}

/// Selling price for a target margin: `cost / (1 − margin)`.
pub fn revenue_from_margin(cost: f64, margin: f64) -> Result<f64> {
    let cost = validate::non_negative("cost", cost)?;
    let margin = validate::non_negative("margin", margin)?;
    if margin >= 1.0 {
        return Err(CalcError::validation("margin must be below 100%"));
    }
    validate::finite_result("revenue", cost / (1.0 - margin))
}

/// The markup that yields `margin`: `m / (1 − m)`.
pub fn margin_to_markup(margin: f64) -> Result<f64> {
    let margin = validate::finite("margin", margin)?;
    if margin >= 1.0 {
        return Err(CalcError::validation("margin must be below 100%"));
    }
    validate::finite_result("markup", margin / (1.0 - margin))
}

/// The margin that `markup` yields: `k / (1 + k)`.
pub fn markup_to_margin(markup: f64) -> Result<f64> {
    let markup = validate::finite("markup", markup)?;
    if markup <= -1.0 {
        return Err(CalcError::validation("markup must be above -100%"));
    }
    validate::finite_result("margin", markup / (1.0 + markup))
}
