//! Tree-walking evaluator.

use super::ast::{BinOp, Expr, Func};
use super::parser::MAX_TOKENS;
use super::ExprError;
use crate::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How trigonometric arguments are read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleMode {
    /// Arguments are radians.
    #[default]
    Radians,
    /// Arguments are degrees.
    Degrees,
}

impl FromStr for AngleMode {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rad" | "radian" | "radians" => Ok(AngleMode::Radians),
            "deg" | "degree" | "degrees" => Ok(AngleMode::Degrees),
            other => Err(CalcError::configuration(format!("unknown angle mode '{other}'"))),
        }
    }
}

impl fmt::Display for AngleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AngleMode::Radians => "radians",
            AngleMode::Degrees => "degrees",
        })
    }
}

/// Below this, `cos(x)` counts as zero and `tan(x)` as undefined.
const TAN_POLE_EPSILON: f64 = 1e-12;

/// Evaluates expression trees under a fixed angle mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    angle_mode: AngleMode,
}

impl Evaluator {
    /// Creates an evaluator.
    pub fn new(angle_mode: AngleMode) -> Self {
        Self { angle_mode }
    }

    /// The angle mode in use.
    pub fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    /// Evaluates `expr`; the result is always finite.
    ///
    /// Trees deeper than [`MAX_TOKENS`] levels, which [`parse`](super::parse) never builds, are refused with
    /// [`ExprError::TooDeep`].
    pub fn eval(&self, expr: &Expr) -> Result<f64, ExprError> {
        let value = self.walk(expr, 0)?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(ExprError::NonFinite)
        }
    }

    fn walk(&self, expr: &Expr, depth: usize) -> Result<f64, ExprError> {
        if depth > MAX_TOKENS {
            return Err(ExprError::TooDeep {
                max: MAX_TOKENS,
                pos: 0,
            });
        }
        let depth = depth + 1;
        match expr {
            Expr::Number(n) => Ok(*n),
            Expr::Const(c) => Ok(c.value()),
            Expr::Neg(inner) => Ok(-self.walk(inner, depth)?),
            Expr::Binary { op, lhs, rhs } => {
                let (a, b) = (self.walk(lhs, depth)?, self.walk(rhs, depth)?);
                match op {
                    BinOp::Add => Ok(a + b),
                    BinOp::Sub => Ok(a - b),
                    BinOp::Mul => Ok(a * b),
                    BinOp::Div if b == 0.0 => Err(ExprError::DivisionByZero),
                    BinOp::Div => Ok(a / b),
                    BinOp::Pow => {
                        if a == 0.0 && b < 0.0 {
                            return Err(ExprError::DivisionByZero);
                        }
                        let v = a.powf(b);
                        if v.is_nan() {
                            return Err(ExprError::Domain(format!("{a}^{b} has no real value")));
                        }
                        Ok(v)
                    }
                }
            }
            Expr::Call { func, arg } => self.call(*func, self.walk(arg, depth)?),
        }
    }

    fn call(&self, func: Func, x: f64) -> Result<f64, ExprError> {
        match func {
            Func::Sin => Ok(self.angle(x).sin()),
            Func::Cos => Ok(self.angle(x).cos()),
            Func::Tan => {
                let a = self.angle(x);
                if a.cos().abs() < TAN_POLE_EPSILON {
                    return Err(ExprError::Domain(format!("tan is undefined at {x}")));
                }
                Ok(a.tan())
            }
            Func::Log | Func::Ln if x <= 0.0 => Err(ExprError::Domain(format!(
                "{} of a non-positive number ({x})",
                func.name()
            ))),
            Func::Log => Ok(x.log10()),
            Func::Ln => Ok(x.ln()),
            Func::Sqrt if x < 0.0 => Err(ExprError::Domain(format!(
                "sqrt of a negative number ({x})"
            ))),
            Func::Sqrt => Ok(x.sqrt()),
        }
    }

    fn angle(&self, x: f64) -> f64 {
        match self.angle_mode {
            AngleMode::Radians => x,
            AngleMode::Degrees => x.to_radians(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::parse;
    use approx::assert_abs_diff_eq;

    fn eval(src: &str, mode: AngleMode) -> Result<f64, ExprError> {
        Evaluator::new(mode).eval(&parse(src)?)
    }

    fn rad(src: &str) -> f64 {
        eval(src, AngleMode::Radians).unwrap()
    }

    #[test]
    fn arithmetic() {
        assert_eq!(rad("1 + 2 * 3"), 7.0);
        assert_eq!(rad("(1 + 2) * 3"), 9.0);
        assert_eq!(rad("-2^2"), -4.0);
        assert_eq!(rad("2^3^2"), 512.0);
        assert_eq!(rad("10 ÷ 4 × 2 − 1"), 4.0);
        assert_eq!(rad("2^-1"), 0.5);
    }

    #[test]
    fn functions_and_constants() {
        assert_abs_diff_eq!(rad("sin(pi / 2)"), 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(rad("ln(e)"), 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(rad("log(1000)"), 3.0, epsilon = 1e-15);
        assert_eq!(rad("sqrt(16) + √(9)"), 7.0);
        assert_abs_diff_eq!(rad("2π"), std::f64::consts::TAU);
    }

    #[test]
    fn degrees_mode() {
        assert_abs_diff_eq!(eval("sin(30)", AngleMode::Degrees).unwrap(), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(eval("cos(180)", AngleMode::Degrees).unwrap(), -1.0, epsilon = 1e-12);
        assert!(matches!(
            eval("tan(90)", AngleMode::Degrees).unwrap_err(),
            ExprError::Domain(_)
        ));
        assert!(eval("tan(45)", AngleMode::Degrees).is_ok());
    }

    #[test]
    fn math_errors() {
        assert_eq!(eval("1 / 0", AngleMode::Radians).unwrap_err(), ExprError::DivisionByZero);
        assert_eq!(eval("1 / (2 - 2)", AngleMode::Radians).unwrap_err(), ExprError::DivisionByZero);
        assert_eq!(eval("0^-1", AngleMode::Radians).unwrap_err(), ExprError::DivisionByZero);
        assert!(matches!(eval("log(0)", AngleMode::Radians).unwrap_err(), ExprError::Domain(_)));
        assert!(matches!(eval("ln(-1)", AngleMode::Radians).unwrap_err(), ExprError::Domain(_)));
        assert!(matches!(eval("sqrt(-4)", AngleMode::Radians).unwrap_err(), ExprError::Domain(_)));
        assert!(matches!(eval("(-8)^0.5", AngleMode::Radians).unwrap_err(), ExprError::Domain(_)));
        assert_eq!(eval("10^400", AngleMode::Radians).unwrap_err(), ExprError::NonFinite);
    }

    #[test]
    fn long_flat_chains_evaluate() {
        let sum = vec!["1"; 500].join(" + ");
        assert_eq!(rad(&sum), 500.0);
        let signs = "-".repeat(1001) + "2";
        assert_eq!(rad(&signs), -2.0);
    }

    #[test]
    fn hand_built_deep_tree_is_refused() {
        let mut expr = Expr::Number(1.0);
        for _ in 0..=MAX_TOKENS + 1 {
            expr = Expr::Neg(Box::new(expr));
        }
        assert!(matches!(
            Evaluator::default().eval(&expr).unwrap_err(),
            ExprError::TooDeep { .. }
        ));
    }

    #[test]
    fn errors_map_to_calc_error_kinds() {
        use crate::ErrorKind;
        let syntax: CalcError = ExprError::UnmatchedParen { pos: 0 }.into();
        assert_eq!(syntax.kind(), ErrorKind::Validation);
        let math: CalcError = ExprError::DivisionByZero.into();
        assert_eq!(math.kind(), ErrorKind::Domain);
        let nested: CalcError = ExprError::TooDeep { max: 256, pos: 0 }.into();
        assert_eq!(nested.kind(), ErrorKind::Validation);
    }
}
