//! Exact factorials.

use super::Limits;
use crate::{CalcError, Result};
use num_bigint::BigUint;
use num_traits::One;

/// `n!` with the default [`Limits`].
///
/// ```rust
/// use calckit::numtheory::{digit_count, factorial};
///
/// assert_eq!(factorial(10).unwrap().to_string(), "3628800");
/// assert_eq!(digit_count(&factorial(20).unwrap()), 19);
/// ```
pub fn factorial(n: i64) -> Result<BigUint> {
    factorial_with(n, &Limits::default())
}

/// `n!` accumulated in an arbitrary-precision integer, refusing `n` above [`Limits::factorial_limit`].
///
/// # Errors
///
/// * [`CalcError::Validation`] when `n` is negative.
/// * [`CalcError::Overflow`] when `n` exceeds the configured ceiling.
pub fn factorial_with(n: i64, limits: &Limits) -> Result<BigUint> {
    if n < 0 {
        return Err(CalcError::validation(format!(
            "factorial is defined for non-negative integers, got {n}"
        )));
    }
    let limit = limits.factorial_limit();
    if n > i64::from(limit) {
        log::warn!("factorial input {n} above ceiling {limit}");
        return Err(CalcError::overflow(format!(
            "{n}! is above the factorial limit of {limit}"
        )));
    }

    let mut acc = BigUint::one();
    for k in 2..=n.unsigned_abs() {
        acc *= k;
    }
    Ok(acc)
}

/// Number of decimal digits of `value`.
pub fn digit_count(value: &BigUint) -> usize {
    value.to_str_radix(10).len()
}

/// Number of trailing zeros of `n!`, by Legendre's formula; no big integer is built.
pub fn factorial_trailing_zeros(n: u64) -> u64 {
    let mut zeros = 0;
    let mut power = n / 5;
    while power > 0 {
        zeros += power;
        power /= 5;
    }
    zeros
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn small_values() {
        assert_eq!(factorial(0).unwrap(), BigUint::one());
        assert_eq!(factorial(1).unwrap(), BigUint::one());
        assert_eq!(factorial(5).unwrap(), BigUint::from(120u32));
        assert_eq!(factorial(10).unwrap(), BigUint::from(3_628_800u32));
    }

    #[test]
    fn digits_are_exact() {
        let f = factorial(25).unwrap();
        assert_eq!(f.to_string(), "15511210043330985984000000");
        assert_eq!(digit_count(&factorial(20).unwrap()), 19);
        assert_eq!(digit_count(&factorial(100).unwrap()), 158);
    }

    #[test]
    fn trailing_zeros_match_the_digits() {
        let text = factorial(100).unwrap().to_string();
        let zeros = text.len() - text.trim_end_matches('0').len();
        assert_eq!(zeros as u64, factorial_trailing_zeros(100));
        assert_eq!(factorial_trailing_zeros(100), 24);
    }

    #[test]
    fn bounds() {
        assert_eq!(factorial(-1).unwrap_err().kind(), ErrorKind::Validation);
        assert_eq!(factorial(5_001).unwrap_err().kind(), ErrorKind::Overflow);
        let tight = Limits {
            max_factorial: 10,
            ..Limits::default()
        };
        assert!(factorial_with(11, &tight).is_err());
        assert!(factorial_with(10, &tight).is_ok());
    }
}
