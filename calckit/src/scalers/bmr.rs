//! Basal metabolic rate and daily energy expenditure.

use crate::{validate, CalcError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sex parameter of the BMR equations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Male coefficients.
    Male,
    /// Female coefficients.
    Female,
}

impl FromStr for Sex {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            other => Err(CalcError::configuration(format!("unknown sex '{other}'"))),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Sex::Male => "male",
            Sex::Female => "female",
        })
    }
}

/// Weight, height, age and sex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Body {
    weight_kg: f64,
    height_cm: f64,
    age_years: f64,
    sex: Sex,
}

impl Body {
    /// Validates the measurements; all three must be positive.
    pub fn new(weight_kg: f64, height_cm: f64, age_years: f64, sex: Sex) -> Result<Self> {
        Ok(Self {
            weight_kg: validate::positive("weight", weight_kg)?,
            height_cm: validate::positive("height", height_cm)?,
            age_years: validate::positive("age", age_years)?,
            sex,
        })
    }
}

/// Both BMR estimates, in kcal per day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bmr {
    /// Mifflin-St Jeor, the recommended figure.
    pub mifflin_st_jeor: f64,
    /// Revised Harris-Benedict.
    pub harris_benedict: f64,
}

/// Mifflin-St Jeor (1990): `10w + 6.25h − 5a + s`, with `s = +5` for men and `−161` for women.
pub fn mifflin_st_jeor(body: &Body) -> f64 {
    let base = 10.0 * body.weight_kg + 6.25 * body.height_cm - 5.0 * body.age_years;
    match body.sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

/// Harris-Benedict, as revised by Roza and Shizgal (1984).
pub fn harris_benedict(body: &Body) -> f64 {
    let (w, h, a) = (body.weight_kg, body.height_cm, body.age_years);
    match body.sex {
        Sex::Male => 88.362 + 13.397 * w + 4.799 * h - 5.677 * a,
        Sex::Female => 447.593 + 9.247 * w + 3.098 * h - 4.330 * a,
    }
}

/// Both estimates for `body`.
pub fn bmr(body: &Body) -> Bmr {
    Bmr {
        mifflin_st_jeor: mifflin_st_jeor(body),
        harris_benedict: harris_benedict(body),
    }
}

/// Activity multiplier applied to BMR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise.
    Sedentary,
    /// Exercise 1 to 3 days a week.
    Light,
    /// Exercise 3 to 5 days a week.
    Moderate,
    /// Exercise 6 to 7 days a week.
    Active,
    /// Hard daily exercise or a physical job.
    VeryActive,
}

impl ActivityLevel {
    /// The multiplier.
    pub const fn factor(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            "very_active" => Ok(ActivityLevel::VeryActive),
            other => Err(CalcError::configuration(format!(
                "unknown activity level '{other}'"
            ))),
        }
    }
}

/// Total daily energy expenditure: BMR times the activity multiplier.
pub fn tdee(bmr_kcal: f64, level: ActivityLevel) -> Result<f64> {
    Ok(validate::positive("BMR", bmr_kcal)? * level.factor())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn mifflin_reference() {
        let man = Body::new(70.0, 175.0, 30.0, Sex::Male).unwrap();
        assert_abs_diff_eq!(mifflin_st_jeor(&man), 1_648.75, epsilon = 1e-9);
        let woman = Body::new(70.0, 175.0, 30.0, Sex::Female).unwrap();
        assert_abs_diff_eq!(mifflin_st_jeor(&woman), 1_482.75, epsilon = 1e-9);
    }

    #[test]
    fn harris_benedict_reference() {
        let man = Body::new(70.0, 175.0, 30.0, Sex::Male).unwrap();
        assert_abs_diff_eq!(harris_benedict(&man), 1_695.667, epsilon = 1e-6);
        let both = bmr(&man);
        assert!(both.harris_benedict > both.mifflin_st_jeor);
    }

    #[test]
    fn tdee_scales_bmr() {
        assert_abs_diff_eq!(tdee(1_600.0, ActivityLevel::Moderate).unwrap(), 2_480.0, epsilon = 1e-9);
        assert!(tdee(0.0, ActivityLevel::Active).is_err());
        assert_eq!("very active".parse::<ActivityLevel>().unwrap(), ActivityLevel::VeryActive);
    }

    #[test]
    fn body_requires_positive_measurements() {
        assert!(Body::new(0.0, 175.0, 30.0, Sex::Male).is_err());
        assert!(Body::new(70.0, 175.0, -1.0, Sex::Female).is_err());
        assert_eq!("F".parse::<Sex>().unwrap(), Sex::Female);
    }
}
