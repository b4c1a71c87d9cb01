//! Body mass index.

use crate::length::{Inches, Meter};
use crate::weight::{Kilogram, Pounds};
use crate::{validate, Result};
use serde::Serialize;
use std::fmt;

/// Lower bound of the healthy BMI band.
pub const HEALTHY_MIN: f64 = 18.5;
/// Upper bound of the healthy BMI band.
pub const HEALTHY_MAX: f64 = 24.9;

/// WHO adult weight category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// Below 18.5.
    Underweight,
    /// 18.5 up to 25.
    Normal,
    /// 25 up to 30.
    Overweight,
    /// 30 and above.
    Obese,
}

impl BmiCategory {
    /// Category of a BMI value.
    pub fn of(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BmiCategory::Underweight => "underweight",
            BmiCategory::Normal => "normal",
            BmiCategory::Overweight => "overweight",
            BmiCategory::Obese => "obese",
        })
    }
}

/// A BMI value with its category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bmi {
    /// kg/m².
    pub value: f64,
    /// WHO category.
    pub category: BmiCategory,
}

/// BMI from kilograms and centimetres.
pub fn bmi_metric(weight_kg: f64, height_cm: f64) -> Result<Bmi> {
    let w = validate::positive("weight", weight_kg)?;
    let h = validate::positive("height", height_cm)? / 100.0;
    let value = validate::finite_result("BMI", w / (h * h))?;
    Ok(Bmi {
        value,
        category: BmiCategory::of(value),
    })
}

/// BMI from pounds and inches.
pub fn bmi_imperial(weight_lb: f64, height_in: f64) -> Result<Bmi> {
    let kg = Pounds::new(validate::positive("weight", weight_lb)?).to::<Kilogram>();
    let m = Inches::new(validate::positive("height", height_in)?).to::<Meter>();
    bmi_metric(kg.value(), m.value() * 100.0)
}

/// Weight range in kilograms that keeps BMI within the healthy band for `height_cm`.
pub fn healthy_weight_range(height_cm: f64) -> Result<(f64, f64)> {
    let h = validate::positive("height", height_cm)? / 100.0;
    Ok((HEALTHY_MIN * h * h, HEALTHY_MAX * h * h))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn metric_reference() {
        let b = bmi_metric(70.0, 175.0).unwrap();
        assert_abs_diff_eq!(b.value, 22.857, epsilon = 1e-3);
        assert_eq!(b.category, BmiCategory::Normal);
    }

    #[test]
    fn imperial_matches_metric() {
        let imperial = bmi_imperial(154.0, 69.0).unwrap();
        assert_abs_diff_eq!(imperial.value, 22.74, epsilon = 0.01);
    }

    #[test]
    fn category_boundaries() {
        assert_eq!(BmiCategory::of(18.49), BmiCategory::Underweight);
        assert_eq!(BmiCategory::of(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::of(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::of(30.0), BmiCategory::Obese);
    }

    #[test]
    fn healthy_range() {
        let (lo, hi) = healthy_weight_range(180.0).unwrap();
        assert_abs_diff_eq!(lo, 59.94, epsilon = 1e-9);
        assert_abs_diff_eq!(hi, 80.676, epsilon = 1e-9);
        assert!(healthy_weight_range(0.0).is_err());
    }
}
