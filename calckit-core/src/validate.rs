//! Input guards used at the top of every formula.
//!
//! Each guard returns the value unchanged when it is acceptable, so calls chain with `?`:
//!
//! ```rust
//! use calckit_core::validate;
//!
//! let r = validate::positive("radius", 2.0).unwrap();
//! assert_eq!(r, 2.0);
//! assert!(validate::positive("radius", 0.0).is_err());
//! ```

use crate::error::{CalcError, Result};

/// Rejects NaN and infinities.
#[inline]
pub fn finite(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::validation(format!("{name} must be a finite number")))
    }
}

/// Accepts finite values strictly greater than zero.
#[inline]
pub fn positive(name: &str, value: f64) -> Result<f64> {
    let value = finite(name, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(CalcError::validation(format!("{name} must be greater than zero")))
    }
}

/// Accepts finite values greater than or equal to zero.
#[inline]
pub fn non_negative(name: &str, value: f64) -> Result<f64> {
    let value = finite(name, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(CalcError::validation(format!("{name} must not be negative")))
    }
}

/// Rejects a non-finite computed value as an overflow.
#[inline]
pub fn finite_result(what: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::overflow(format!("{what} is not representable")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn finite_rejects_nan_and_infinity() {
        assert!(finite("x", f64::NAN).is_err());
        assert!(finite("x", f64::INFINITY).is_err());
        assert_eq!(finite("x", -3.5).unwrap(), -3.5);
    }

    #[test]
    fn positive_and_non_negative_boundaries() {
        assert!(positive("x", 0.0).is_err());
        assert_eq!(non_negative("x", 0.0).unwrap(), 0.0);
        assert!(non_negative("x", -1e-12).is_err());
    }

    #[test]
    fn finite_result_is_an_overflow() {
        let err = finite_result("payment", f64::INFINITY).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Overflow);
    }
}
