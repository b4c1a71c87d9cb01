//! Trial-division prime factorization.

use super::Limits;
use crate::{CalcError, Result};
use serde::Serialize;
use std::fmt;

/// One `prime^exponent` term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrimePower {
    /// The prime.
    pub prime: u64,
    /// How many times it divides the input, at least 1.
    pub exponent: u32,
}

/// Prime factorization of an integer `n ≥ 2`.
///
/// Primes are strictly increasing and the product of `prime^exponent` is `n`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Factorization {
    n: u64,
    factors: Vec<PrimePower>,
}

impl Factorization {
    /// The factored integer.
    pub fn n(&self) -> u64 {
        self.n
    }

    /// The `prime^exponent` terms, primes ascending.
    pub fn factors(&self) -> &[PrimePower] {
        &self.factors
    }

    /// `(prime, exponent)` pairs, primes ascending.
    pub fn pairs(&self) -> Vec<(u64, u32)> {
        self.factors.iter().map(|f| (f.prime, f.exponent)).collect()
    }

    /// Whether `n` is itself prime.
    pub fn is_prime(&self) -> bool {
        matches!(self.factors.as_slice(), [only] if only.exponent == 1)
    }

    /// Multiplies the factors back together.
    pub fn product(&self) -> u64 {
        self.factors
            .iter()
            .map(|f| f.prime.pow(f.exponent))
            .product()
    }
}

impl fmt::Display for Factorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.factors.iter().enumerate() {
            if i > 0 {
                f.write_str(" × ")?;
            }
            match term.exponent {
                1 => write!(f, "{}", term.prime)?,
                e => write!(f, "{}^{e}", term.prime)?,
            }
        }
        Ok(())
    }
}

/// Factors `n` with the default [`Limits`].
///
/// ```rust
/// use calckit::numtheory::factorize;
///
/// let f = factorize(84).unwrap();
/// assert_eq!(f.pairs(), vec![(2, 2), (3, 1), (7, 1)]);
/// assert_eq!(f.to_string(), "2^2 × 3 × 7");
/// ```
pub fn factorize(n: i64) -> Result<Factorization> {
    factorize_with(n, &Limits::default())
}

/// Factors `n`, refusing inputs above [`Limits::factorization_limit`].
///
/// # Errors
///
/// * [`CalcError::Validation`] when `n < 2`.
/// * [`CalcError::Overflow`] when `n` exceeds the configured ceiling.
pub fn factorize_with(n: i64, limits: &Limits) -> Result<Factorization> {
    if n < 2 {
        return Err(CalcError::validation(format!(
            "{n} has no prime factorization; enter an integer of at least 2"
        )));
    }
    let n = n.unsigned_abs();
    let limit = limits.factorization_limit();
    if n > limit {
        log::warn!("factorization input {n} above ceiling {limit}");
        return Err(CalcError::overflow(format!(
            "{n} is above the factorization limit of {limit}"
        )));
    }

    let mut factors = Vec::new();
    let mut rest = n;

    let twos = rest.trailing_zeros();
    if twos > 0 {
        factors.push(PrimePower {
            prime: 2,
            exponent: twos,
        });
        rest >>= twos;
    }

    let mut d = 3u64;
    while d * d <= rest {
        let mut exponent = 0;
        while rest % d == 0 {
            rest /= d;
            exponent += 1;
        }
        if exponent > 0 {
            factors.push(PrimePower { prime: d, exponent });
        }
        d += 2;
    }

    if rest > 1 {
        factors.push(PrimePower {
            prime: rest,
            exponent: 1,
        });
    }

    log::debug!("factorized {n} into {} prime(s)", factors.len());
    Ok(Factorization { n, factors })
}

/// Whether `n` is prime, by trial division under the default [`Limits`].
pub fn is_prime(n: i64) -> Result<bool> {
    if n < 2 {
        return Ok(false);
    }
    Ok(factorize(n)?.is_prime())
}
