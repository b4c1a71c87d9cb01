//! Expression errors and how they map onto [`CalcError`].

use crate::{CalcError, ErrorKind};
use thiserror::Error;

/// Errors raised while tokenizing, parsing or evaluating an expression.
///
/// Positions are 0-based character offsets into the source text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExprError {
    /// Nothing but whitespace.
    #[error("expression is empty")]
    Empty,

    /// A numeric literal that does not parse, such as `1.2.3`.
    #[error("invalid number '{text}' at position {pos}")]
    InvalidNumber { text: String, pos: usize },

    /// A character outside the expression alphabet.
    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    /// A token the grammar does not allow here.
    #[error("unexpected {found} at position {pos}")]
    UnexpectedToken { found: String, pos: usize },

    /// Input stopped in the middle of an expression.
    #[error("unexpected end of expression")]
    UnexpectedEnd,

    /// A `(` without its `)`, or the reverse.
    #[error("unmatched parenthesis at position {pos}")]
    UnmatchedParen { pos: usize },

    /// An identifier that is neither a function nor a constant.
    #[error("unknown identifier '{name}' at position {pos}")]
    UnknownIdentifier { name: String, pos: usize },

    /// More tokens than the parser accepts.
    #[error("expression has {tokens} tokens, more than the limit of {max}")]
    TooLong { tokens: usize, max: usize },

    /// Brackets, calls or exponents nested past the limit.
    #[error("expression nests deeper than {max} levels at position {pos}")]
    TooDeep { max: usize, pos: usize },

    /// Division, or a negative power, of zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A function or power applied outside its domain.
    #[error("{0}")]
    Domain(String),

    /// The value overflowed or is otherwise not finite.
    #[error("result is not a finite number")]
    NonFinite,
}

impl ExprError {
    /// Whether the error comes from the text itself rather than from evaluating it.
    pub fn is_syntax(&self) -> bool {
        !matches!(
            self,
            ExprError::DivisionByZero | ExprError::Domain(_) | ExprError::NonFinite
        )
    }
}

impl From<ExprError> for CalcError {
    fn from(err: ExprError) -> Self {
        if err.is_syntax() {
            CalcError::validation(err.to_string())
        } else {
            CalcError::domain(err.to_string())
        }
    }
}

impl From<&ExprError> for ErrorKind {
    fn from(err: &ExprError) -> Self {
        if err.is_syntax() {
            ErrorKind::Validation
        } else {
            ErrorKind::Domain
        }
    }
}
