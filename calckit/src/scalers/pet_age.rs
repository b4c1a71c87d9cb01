//! Pet age in human years.
//!
//! Both curves are fixed lookup data taken from published veterinary charts; they are not derived from a formula.

use crate::{validate, CalcError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Cat curve knots: (age in months, human years). Linear between knots.
const CAT_KNOTS: [(f64, f64); 8] = [
    (0.0, 0.0),
    (1.0, 1.0),
    (3.0, 4.0),
    (4.0, 7.0),
    (6.0, 10.0),
    (12.0, 15.0),
    (18.0, 21.0),
    (24.0, 24.0),
];

/// Human years per cat year after the second birthday.
const CAT_YEARLY: f64 = 4.0;

/// Human years per dog year during the first year.
const DOG_FIRST_YEAR: f64 = 15.0;
/// Human years per dog year during the second year.
const DOG_SECOND_YEAR: f64 = 9.0;

/// Dog breed size, which sets the rate after the second year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DogSize {
    /// Up to about 9 kg.
    Small,
    /// About 10 to 22 kg.
    Medium,
    /// About 23 to 40 kg.
    Large,
    /// Over about 40 kg.
    Giant,
}

impl DogSize {
    /// Human years per dog year from the third year on.
    pub const fn yearly_rate(self) -> f64 {
        match self {
            DogSize::Small => 4.0,
            DogSize::Medium => 5.0,
            DogSize::Large => 6.0,
            DogSize::Giant => 7.0,
        }
    }
}

impl fmt::Display for DogSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DogSize::Small => "small",
            DogSize::Medium => "medium",
            DogSize::Large => "large",
            DogSize::Giant => "giant",
        })
    }
}

impl FromStr for DogSize {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" | "s" => Ok(DogSize::Small),
            "medium" | "m" => Ok(DogSize::Medium),
            "large" | "l" => Ok(DogSize::Large),
            "giant" | "xl" => Ok(DogSize::Giant),
            other => Err(CalcError::configuration(format!("unknown dog size '{other}'"))),
        }
    }
}

fn check_months(months: u32) -> Result<()> {
    if months > 11 {
        return Err(CalcError::validation(format!(
            "months must be between 0 and 11, got {months}"
        )));
    }
    Ok(())
}

/// Human age of a cat of `total_months`.
pub fn cat_age_from_months(total_months: f64) -> Result<f64> {
    let m = validate::non_negative("age in months", total_months)?;
    let (last_month, last_age) = CAT_KNOTS[CAT_KNOTS.len() - 1];
    if m >= last_month {
        return Ok(last_age + CAT_YEARLY * (m - last_month) / 12.0);
    }
    let age = CAT_KNOTS
        .windows(2)
        .find(|w| m <= w[1].0)
        .map(|w| {
            let ((m0, h0), (m1, h1)) = (w[0], w[1]);
            h0 + (h1 - h0) * (m - m0) / (m1 - m0)
        })
        .unwrap_or(last_age);
    Ok(age)
}

/// Human age of a cat aged `years` and `months` (0 to 11).
///
/// ```rust
/// use calckit::scalers::cat_age;
///
/// assert_eq!(cat_age(2, 0).unwrap(), 24.0);
/// assert_eq!(cat_age(5, 0).unwrap(), 36.0);
/// ```
pub fn cat_age(years: u32, months: u32) -> Result<f64> {
    check_months(months)?;
    cat_age_from_months(f64::from(years) * 12.0 + f64::from(months))
}

/// Human age of a dog aged `years` and `months` (0 to 11).
///
/// The first year counts 15 human years, the second 9, and later years depend on `size`.
pub fn dog_age(years: u32, months: u32, size: DogSize) -> Result<f64> {
    check_months(months)?;
    let age = f64::from(years) + f64::from(months) / 12.0;
    let human = if age <= 1.0 {
        DOG_FIRST_YEAR * age
    } else if age <= 2.0 {
        DOG_FIRST_YEAR + DOG_SECOND_YEAR * (age - 1.0)
    } else {
        DOG_FIRST_YEAR + DOG_SECOND_YEAR + size.yearly_rate() * (age - 2.0)
    };
    Ok(human)
}
