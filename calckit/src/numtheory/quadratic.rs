//! Quadratic equations `ax² + bx + c = 0`.

use crate::{validate, Result};
use serde::Serialize;
use std::fmt;

/// Roots of a quadratic, tagged by the shape of the answer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuadraticRoots {
    /// `D > 0`: two distinct real roots.
    TwoReal {
        /// First root.
        x1: f64,
        /// Second root.
        x2: f64,
    },
    /// `D = 0`: one repeated real root.
    Repeated {
        /// The root.
        x: f64,
    },
    /// `D < 0`: the pair `re ± im·i`.
    Complex {
        /// Real part, `−b/2a`.
        re: f64,
        /// Imaginary part, `√(−D)/2a`, positive.
        im: f64,
    },
    /// `a = 0`: the linear equation `bx + c = 0`.
    Linear {
        /// `−c/b`.
        x: f64,
    },
    /// `a = 0` and `b = 0`.
    NoSolution,
}

impl fmt::Display for QuadraticRoots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            QuadraticRoots::TwoReal { x1, x2 } => write!(f, "x1 = {x1}, x2 = {x2}"),
            QuadraticRoots::Repeated { x } => write!(f, "x = {x} (repeated)"),
            QuadraticRoots::Complex { re, im } => write!(f, "x = {re} ± {im}i"),
            QuadraticRoots::Linear { x } => write!(f, "x = {x} (linear)"),
            QuadraticRoots::NoSolution => f.write_str("no solution"),
        }
    }
}

/// `b² − 4ac`.
pub fn discriminant(a: f64, b: f64, c: f64) -> f64 {
    b * b - 4.0 * a * c
}

/// Solves `ax² + bx + c = 0`.
///
/// ```rust
/// use calckit::numtheory::{solve_quadratic, QuadraticRoots};
///
/// assert_eq!(solve_quadratic(1.0, 2.0, 1.0).unwrap(), QuadraticRoots::Repeated { x: -1.0 });
/// ```
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Result<QuadraticRoots> {
    let a = validate::finite("a", a)?;
    let b = validate::finite("b", b)?;
    let c = validate::finite("c", c)?;

    if a == 0.0 {
        if b == 0.0 {
            return Ok(QuadraticRoots::NoSolution);
        }
        return Ok(QuadraticRoots::Linear {
            x: validate::finite_result("root", -c / b)? + 0.0,
        });
    }

    let d = validate::finite_result("discriminant", discriminant(a, b, c))?;
    let roots = if d > 0.0 {
        // avoid cancellation between -b and √D
        let q = -0.5 * (b + d.sqrt().copysign(b));
        QuadraticRoots::TwoReal {
            x1: q / a,
            x2: c / q,
        }
    } else if d == 0.0 {
        QuadraticRoots::Repeated {
            x: -b / (2.0 * a) + 0.0,
        }
    } else {
        QuadraticRoots::Complex {
            re: -b / (2.0 * a) + 0.0,
            im: ((-d).sqrt() / (2.0 * a)).abs(),
        }
    };
    Ok(roots)
}
