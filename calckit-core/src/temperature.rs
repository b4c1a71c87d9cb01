//! Temperature conversion.
//!
//! Temperature scales are affine, not multiplicative, so they cannot live in a [`UnitFactorTable`]. Every
//! conversion pivots through Celsius: `to_celsius(from, value)` then `from_celsius(to, celsius)`.
//!
//! ```rust
//! use calckit_core::temperature::{convert_temperature, TemperatureScale};
//!
//! let f = convert_temperature(100.0, TemperatureScale::Celsius, TemperatureScale::Fahrenheit).unwrap();
//! assert!((f - 212.0).abs() < 1e-12);
//! ```
//!
//! [`UnitFactorTable`]: crate::UnitFactorTable

use crate::error::{CalcError, Result};
use crate::validate;
use core::fmt;
use core::str::FromStr;

/// Absolute zero on the Celsius scale.
pub const ABSOLUTE_ZERO_CELSIUS: f64 = -273.15;

/// A temperature scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TemperatureScale {
    /// Degrees Celsius.
    Celsius,
    /// Degrees Fahrenheit.
    Fahrenheit,
    /// Kelvin.
    Kelvin,
}

impl TemperatureScale {
    /// Every scale.
    pub const ALL: [TemperatureScale; 3] = [Self::Celsius, Self::Fahrenheit, Self::Kelvin];

    /// Printable symbol.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
            Self::Kelvin => "K",
        }
    }
}

impl fmt::Display for TemperatureScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for TemperatureScale {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let s = s.strip_prefix('°').unwrap_or(s);
        match s.to_ascii_lowercase().as_str() {
            "c" | "celsius" | "centigrade" => Ok(Self::Celsius),
            "f" | "fahrenheit" => Ok(Self::Fahrenheit),
            "k" | "kelvin" => Ok(Self::Kelvin),
            _ => Err(CalcError::configuration(format!(
                "unknown temperature scale '{s}'"
            ))),
        }
    }
}

/// Expresses `value` on `from` in degrees Celsius.
#[inline]
pub fn to_celsius(from: TemperatureScale, value: f64) -> f64 {
    match from {
        TemperatureScale::Celsius => value,
        TemperatureScale::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        TemperatureScale::Kelvin => value + ABSOLUTE_ZERO_CELSIUS,
    }
}

/// Expresses a Celsius value on `to`.
#[inline]
pub fn from_celsius(to: TemperatureScale, celsius: f64) -> f64 {
    match to {
        TemperatureScale::Celsius => celsius,
        TemperatureScale::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
        TemperatureScale::Kelvin => celsius - ABSOLUTE_ZERO_CELSIUS,
    }
}

/// Converts `value` between two scales.
///
/// Values below absolute zero are passed through; use [`convert_temperature_checked`] to reject them.
///
/// # Errors
///
/// * [`CalcError::Validation`] when `value` is not finite.
/// * [`CalcError::Overflow`] when the converted value does not fit in an `f64`.
pub fn convert_temperature(value: f64, from: TemperatureScale, to: TemperatureScale) -> Result<f64> {
    let value = validate::finite("temperature", value)?;
    if from == to {
        return Ok(value);
    }
    let celsius = to_celsius(from, value);
    log::debug!("temperature {value} {from} -> {celsius} °C -> {to}");
    validate::finite_result("converted temperature", from_celsius(to, celsius))
}

/// Like [`convert_temperature`], but rejects inputs colder than absolute zero.
pub fn convert_temperature_checked(
    value: f64,
    from: TemperatureScale,
    to: TemperatureScale,
) -> Result<f64> {
    let value = validate::finite("temperature", value)?;
    // small tolerance so that 0 K and -459.67 °F survive the round through Celsius
    if to_celsius(from, value) < ABSOLUTE_ZERO_CELSIUS - 1e-9 {
        return Err(CalcError::validation(format!(
            "{value} {from} is below absolute zero"
        )));
    }
    convert_temperature(value, from, to)
}
