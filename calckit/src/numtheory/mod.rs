//! Integer and number-theory toolkit.
//!
//! Factorial and factorization refuse inputs above the ceilings in [`Limits`] so that a single call stays fast.

mod factorial;
mod gcd;
mod primes;
mod quadratic;

pub use factorial::{digit_count, factorial, factorial_trailing_zeros, factorial_with};
pub use gcd::{gcd, gcd_of, lcm, lcm_of};
pub use primes::{factorize, factorize_with, is_prime, Factorization, PrimePower};
pub use quadratic::{discriminant, solve_quadratic, QuadraticRoots};

use crate::{CalcError, Result};
use serde::{Deserialize, Serialize};

/// Default ceiling for [`factorial`].
pub const DEFAULT_MAX_FACTORIAL: u32 = 5_000;
/// Default ceiling for [`factorize`], `10^12`: trial division stops by `10^6`.
pub const DEFAULT_MAX_FACTORIZATION: u64 = 1_000_000_000_000;

/// Highest [`Limits::max_factorial`] honoured, whatever the configuration says.
pub const FACTORIAL_CEILING: u32 = 20_000;
/// Highest [`Limits::max_factorization`] honoured, `10^16`: trial division stops by `10^8`.
pub const FACTORIZATION_CEILING: u64 = 10_000_000_000_000_000;

/// Input ceilings for the unbounded-cost operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    /// Largest `n` accepted by [`factorial_with`].
    #[serde(default = "default_max_factorial")]
    pub max_factorial: u32,
    /// Largest `n` accepted by [`factorize_with`].
    #[serde(default = "default_max_factorization")]
    pub max_factorization: u64,
}

fn default_max_factorial() -> u32 {
    DEFAULT_MAX_FACTORIAL
}

fn default_max_factorization() -> u64 {
    DEFAULT_MAX_FACTORIZATION
}

impl Limits {
    /// The factorial bound actually applied, never above [`FACTORIAL_CEILING`].
    pub fn factorial_limit(&self) -> u32 {
        self.max_factorial.min(FACTORIAL_CEILING)
    }

    /// The factorization bound actually applied, never above [`FACTORIZATION_CEILING`].
    pub fn factorization_limit(&self) -> u64 {
        self.max_factorization.min(FACTORIZATION_CEILING)
    }

    /// Rejects bounds a configuration file should not set.
    pub fn validate(&self) -> Result<()> {
        if self.max_factorial > FACTORIAL_CEILING {
            return Err(CalcError::configuration(format!(
                "limits.max_factorial must be at most {FACTORIAL_CEILING}, found {}",
                self.max_factorial
            )));
        }
        if self.max_factorization < 2 {
            return Err(CalcError::configuration(
                "limits.max_factorization must be at least 2",
            ));
        }
        if self.max_factorization > FACTORIZATION_CEILING {
            return Err(CalcError::configuration(format!(
                "limits.max_factorization must be at most {FACTORIZATION_CEILING}, found {}",
                self.max_factorization
            )));
        }
        Ok(())
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_factorial: default_max_factorial(),
            max_factorization: default_max_factorization(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn defaults_are_within_the_ceilings() {
        let limits = Limits::default();
        limits.validate().unwrap();
        assert_eq!(limits.factorial_limit(), DEFAULT_MAX_FACTORIAL);
        assert_eq!(limits.factorization_limit(), DEFAULT_MAX_FACTORIZATION);
    }

    #[test]
    fn oversized_limits_are_refused_and_clamped() {
        let wide = Limits {
            max_factorial: u32::MAX,
            max_factorization: u64::MAX,
        };
        assert_eq!(wide.validate().unwrap_err().kind(), ErrorKind::Configuration);
        assert_eq!(wide.factorial_limit(), FACTORIAL_CEILING);
        assert_eq!(wide.factorization_limit(), FACTORIZATION_CEILING);

        assert_eq!(
            factorize_with(i64::MAX, &wide).unwrap_err().kind(),
            ErrorKind::Overflow
        );
        assert_eq!(
            factorial_with(i64::from(FACTORIAL_CEILING) + 1, &wide)
                .unwrap_err()
                .kind(),
            ErrorKind::Overflow
        );
    }
}
