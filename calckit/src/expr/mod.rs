//! Scientific-calculator expressions.
//!
//! Text goes through a tokenizer and a recursive-descent parser into an [`Expr`] tree, which an [`Evaluator`]
//! walks. The operator and function set is closed: `+ - * / ^`, `sin cos tan log ln sqrt`, `pi` and `e`. Nothing in
//! the input is ever executed as code.
//!
//! ```rust
//! use calckit::expr::{evaluate, AngleMode};
//!
//! assert_eq!(evaluate("2(3 + 4)^2", AngleMode::Radians).unwrap(), 98.0);
//! assert!(evaluate("1 / 0", AngleMode::Radians).is_err());
//! ```

mod ast;
mod error;
mod eval;
mod lexer;
mod parser;

pub use ast::{BinOp, Constant, Expr, Func};
pub use error::ExprError;
pub use eval::{AngleMode, Evaluator};
pub use lexer::{tokenize, Token, TokenKind};
pub use parser::{parse, MAX_NESTING, MAX_TOKENS};

/// Parses and evaluates `src` in one step.
pub fn evaluate(src: &str, angle_mode: AngleMode) -> Result<f64, ExprError> {
    let expr = parse(src)?;
    log::debug!("parsed '{src}' as {expr}");
    Evaluator::new(angle_mode).eval(&expr)
}
