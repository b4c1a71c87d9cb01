//! Expression tree.

use std::fmt;

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    /// `+`
    Add,
    /// `-` or `−`
    Sub,
    /// `*`, `×` or juxtaposition
    Mul,
    /// `/` or `÷`
    Div,
    /// `^`, right-associative
    Pow,
}

impl BinOp {
    fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Pow => "^",
        }
    }
}

/// The closed set of functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Func {
    /// Sine, in the evaluator's angle mode.
    Sin,
    /// Cosine, in the evaluator's angle mode.
    Cos,
    /// Tangent, undefined where the cosine vanishes.
    Tan,
    /// Base-10 logarithm.
    Log,
    /// Natural logarithm.
    Ln,
    /// Square root of a non-negative argument.
    Sqrt,
}

impl Func {
    /// Resolves a lower-case identifier.
    pub fn from_name(name: &str) -> Option<Func> {
        match name {
            "sin" => Some(Func::Sin),
            "cos" => Some(Func::Cos),
            "tan" => Some(Func::Tan),
            "log" => Some(Func::Log),
            "ln" => Some(Func::Ln),
            "sqrt" => Some(Func::Sqrt),
            _ => None,
        }
    }

    /// Lower-case name.
    pub fn name(self) -> &'static str {
        match self {
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Tan => "tan",
            Func::Log => "log",
            Func::Ln => "ln",
            Func::Sqrt => "sqrt",
        }
    }
}

/// Named constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constant {
    /// `pi` or `π`
    Pi,
    /// Euler's number.
    E,
}

impl Constant {
    /// Resolves a lower-case identifier.
    pub fn from_name(name: &str) -> Option<Constant> {
        match name {
            "pi" => Some(Constant::Pi),
            "e" => Some(Constant::E),
            _ => None,
        }
    }

    /// Numeric value.
    pub fn value(self) -> f64 {
        match self {
            Constant::Pi => std::f64::consts::PI,
            Constant::E => std::f64::consts::E,
        }
    }
}

/// A parsed expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal.
    Number(f64),
    /// A named constant.
    Const(Constant),
    /// Unary minus.
    Neg(Box<Expr>),
    /// `lhs op rhs`.
    Binary {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// `func(arg)`.
    Call {
        func: Func,
        arg: Box<Expr>,
    },
}

impl Expr {
    pub(crate) fn binary(op: BinOp, lhs: Expr, rhs: Expr) -> Expr {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }
}

/// Fully parenthesized form, so the parse is unambiguous when printed.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(n) => write!(f, "{n}"),
            Expr::Const(Constant::Pi) => f.write_str("pi"),
            Expr::Const(Constant::E) => f.write_str("e"),
            Expr::Neg(inner) => write!(f, "(-{inner})"),
            Expr::Binary { op, lhs, rhs } => write!(f, "({lhs} {} {rhs})", op.symbol()),
            Expr::Call { func, arg } => write!(f, "{}({arg})", func.name()),
        }
    }
}
