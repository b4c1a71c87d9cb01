//! Domain-specific scalers: pet age, BMR and BMI.

mod bmi;
mod bmr;
mod pet_age;

pub use bmi::{bmi_imperial, bmi_metric, healthy_weight_range, Bmi, BmiCategory, HEALTHY_MAX, HEALTHY_MIN};
pub use bmr::{bmr, harris_benedict, mifflin_st_jeor, tdee, ActivityLevel, Bmr, Body, Sex};
pub use pet_age::{cat_age, cat_age_from_months, dog_age, DogSize};
