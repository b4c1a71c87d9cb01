//! Greatest common divisor and least common multiple.

use crate::{CalcError, Result};

/// Euclid: `gcd(a, 0) = |a|`, `gcd(a, b) = gcd(b, a mod b)`.
///
/// `gcd(0, 0)` is `0`.
pub fn gcd(a: i64, b: i64) -> u64 {
    gcd_u64(a.unsigned_abs(), b.unsigned_abs())
}

fn gcd_u64(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd_u64(b, a % b)
    }
}

/// GCD of a whole set.
pub fn gcd_of(values: &[i64]) -> Result<u64> {
    if values.is_empty() {
        return Err(CalcError::validation("gcd needs at least one value"));
    }
    Ok(values.iter().fold(0, |acc, &v| gcd_u64(acc, v.unsigned_abs())))
}

/// `|a·b| / gcd(a, b)`, with the multiplication checked.
///
/// # Errors
///
/// * [`CalcError::Validation`] when either value is zero.
/// * [`CalcError::Overflow`] when the result does not fit in a `u64`.
pub fn lcm(a: i64, b: i64) -> Result<u64> {
    if a == 0 || b == 0 {
        return Err(CalcError::validation("lcm is undefined for zero"));
    }
    lcm_u64(a.unsigned_abs(), b.unsigned_abs())
}

fn lcm_u64(a: u64, b: u64) -> Result<u64> {
    (a / gcd_u64(a, b))
        .checked_mul(b)
        .ok_or_else(|| CalcError::overflow(format!("lcm of {a} and {b} exceeds {}", u64::MAX)))
}

/// LCM of a set, reduced pairwise.
///
/// Zeros are dropped and duplicate magnitudes collapsed before the reduction. A set with nothing left is a
/// [`CalcError::Validation`]; an intermediate result that overflows is a [`CalcError::Overflow`].
///
/// ```rust
/// use calckit::numtheory::lcm_of;
///
/// assert_eq!(lcm_of(&[12, 18, 30]).unwrap(), 180);
/// assert_eq!(lcm_of(&[0, 4, -6, 4]).unwrap(), 12);
/// ```
pub fn lcm_of(values: &[i64]) -> Result<u64> {
    let mut set: Vec<u64> = values
        .iter()
        .filter(|&&v| v != 0)
        .map(|v| v.unsigned_abs())
        .collect();
    set.sort_unstable();
    set.dedup();

    let (first, rest) = set
        .split_first()
        .ok_or_else(|| CalcError::validation("lcm needs at least one non-zero value"))?;
    rest.iter().try_fold(*first, |acc, &v| lcm_u64(acc, v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use proptest::prelude::*;

    #[test]
    fn reference_values() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(lcm(4, 6).unwrap(), 12);
        assert_eq!(lcm_of(&[12, 18, 30]).unwrap(), 180);
        assert_eq!(gcd_of(&[12, 18, 30]).unwrap(), 6);
    }

    #[test]
    fn signs_and_zero() {
        assert_eq!(gcd(-12, 18), 6);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(i64::MIN, 0), 1 << 63);
        assert_eq!(lcm(0, 5).unwrap_err().kind(), ErrorKind::Validation);
    }

    #[test]
    fn empty_sets_are_rejected() {
        assert!(gcd_of(&[]).is_err());
        assert_eq!(lcm_of(&[0, 0]).unwrap_err().kind(), ErrorKind::Validation);
    }

    #[test]
    fn overflow_is_signalled() {
        let err = lcm_of(&[i64::MAX, i64::MAX - 1]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Overflow);
    }

    proptest! {
        #[test]
        fn prop_gcd_times_lcm_is_product(a in 1i64..100_000, b in 1i64..100_000) {
            let g = gcd(a, b);
            let l = lcm(a, b).unwrap();
            prop_assert_eq!(g * l, (a * b) as u64);
            prop_assert_eq!(a as u64 % g, 0);
            prop_assert_eq!(l % b as u64, 0);
        }
    }
}
