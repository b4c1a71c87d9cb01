//! Recursive-descent parser.
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary | implicit)*
//! implicit:= power            when the next token is an identifier or '('
//! unary   := ('-' | '+')* power
//! power   := primary ('^' unary)?
//! primary := NUMBER | CONST | FUNC '(' expr ')' | '(' expr ')'
//! ```
//!
//! `^` is right-associative and binds tighter than unary minus, so `-2^2` is `-4` and `2^3^2` is `512`.
//!
//! Input is capped at [`MAX_TOKENS`] tokens and [`MAX_NESTING`] levels of brackets, function calls and exponents, so
//! neither the parser nor the evaluator can run out of stack.

use super::ast::{BinOp, Constant, Expr, Func};
use super::lexer::{tokenize, Token, TokenKind};
use super::ExprError;

/// Longest accepted input, in tokens. Also bounds the depth of any parsed tree.
pub const MAX_TOKENS: usize = 1024;

/// Deepest accepted nesting of brackets, function arguments and exponents.
pub const MAX_NESTING: usize = 256;

/// Parses `src` into an expression tree.
pub fn parse(src: &str) -> Result<Expr, ExprError> {
    let tokens = tokenize(src)?;
    if tokens.is_empty() {
        return Err(ExprError::Empty);
    }
    if tokens.len() > MAX_TOKENS {
        return Err(ExprError::TooLong {
            tokens: tokens.len(),
            max: MAX_TOKENS,
        });
    }

    let mut parser = Parser {
        tokens,
        cursor: 0,
        depth: 0,
    };
    let expr = parser.expr()?;

    match parser.peek() {
        None => Ok(expr),
        Some(Token {
            kind: TokenKind::RParen,
            pos,
        }) => Err(ExprError::UnmatchedParen { pos: *pos }),
        Some(tok) => Err(ExprError::UnexpectedToken {
            found: tok.kind.to_string(),
            pos: tok.pos,
        }),
    }
}

struct Parser {
    tokens: Vec<Token>,
    cursor: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    fn peek_kind(&self) -> Option<&TokenKind> {
        self.peek().map(|t| &t.kind)
    }

    fn next(&mut self) -> Result<Token, ExprError> {
        let tok = self.tokens.get(self.cursor).cloned().ok_or(ExprError::UnexpectedEnd)?;
        self.cursor += 1;
        Ok(tok)
    }

    fn expr(&mut self) -> Result<Expr, ExprError> {
        let mut lhs = self.term()?;
        loop {
            let op = match self.peek_kind() {
                Some(TokenKind::Plus) => BinOp::Add,
                Some(TokenKind::Minus) => BinOp::Sub,
                _ => return Ok(lhs),
            };
            self.cursor += 1;
            let rhs = self.term()?;
            lhs = Expr::binary(op, lhs, rhs);
        }
    }

    fn term(&mut self) -> Result<Expr, ExprError> {
        let mut lhs = self.unary()?;
        loop {
            let (op, rhs) = match self.peek_kind() {
                Some(TokenKind::Star) => {
                    self.cursor += 1;
                    (BinOp::Mul, self.unary()?)
                }
                Some(TokenKind::Slash) => {
                    self.cursor += 1;
                    (BinOp::Div, self.unary()?)
                }
                Some(TokenKind::Ident(_)) | Some(TokenKind::LParen) => (BinOp::Mul, self.power()?),
                _ => return Ok(lhs),
            };
            lhs = Expr::binary(op, lhs, rhs);
        }
    }

    /// A run of signs folds into at most one negation.
    fn unary(&mut self) -> Result<Expr, ExprError> {
        let mut negate = false;
        loop {
            match self.peek_kind() {
                Some(TokenKind::Minus) => negate = !negate,
                Some(TokenKind::Plus) => {}
                _ => break,
            }
            self.cursor += 1;
        }
        let operand = self.power()?;
        Ok(if negate {
            Expr::Neg(Box::new(operand))
        } else {
            operand
        })
    }

    fn power(&mut self) -> Result<Expr, ExprError> {
        let base = self.primary()?;
        if let Some(TokenKind::Caret) = self.peek_kind() {
            self.cursor += 1;
            let exponent = self.nested(Self::unary)?;
            return Ok(Expr::binary(BinOp::Pow, base, exponent));
        }
        Ok(base)
    }

    /// Runs `rule` one nesting level deeper.
    fn nested(
        &mut self,
        rule: fn(&mut Self) -> Result<Expr, ExprError>,
    ) -> Result<Expr, ExprError> {
        if self.depth >= MAX_NESTING {
            let pos = self
                .cursor
                .checked_sub(1)
                .and_then(|i| self.tokens.get(i))
                .map_or(0, |t| t.pos);
            return Err(ExprError::TooDeep {
                max: MAX_NESTING,
                pos,
            });
        }
        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }

    fn primary(&mut self) -> Result<Expr, ExprError> {
        let tok = self.next()?;
        match tok.kind {
            TokenKind::Number(n) => Ok(Expr::Number(n)),
            TokenKind::LParen => self.parenthesized(tok.pos),
            TokenKind::Ident(name) => {
                if let Some(c) = Constant::from_name(&name) {
                    return Ok(Expr::Const(c));
                }
                let func = Func::from_name(&name).ok_or_else(|| ExprError::UnknownIdentifier {
                    name: name.clone(),
                    pos: tok.pos,
                })?;
                let open = self.next().map_err(|_| ExprError::UnexpectedEnd)?;
                if open.kind != TokenKind::LParen {
                    return Err(ExprError::UnexpectedToken {
                        found: format!("{} after '{name}' (expected '(')", open.kind),
                        pos: open.pos,
                    });
                }
                let arg = self.parenthesized(open.pos)?;
                Ok(Expr::Call {
                    func,
                    arg: Box::new(arg),
                })
            }
            TokenKind::RParen => Err(ExprError::UnmatchedParen { pos: tok.pos }),
            other => Err(ExprError::UnexpectedToken {
                found: other.to_string(),
                pos: tok.pos,
            }),
        }
    }

    /// Parses `expr ')'` after an already consumed `(` at `open`.
    fn parenthesized(&mut self, open: usize) -> Result<Expr, ExprError> {
        if let Some(TokenKind::RParen) = self.peek_kind() {
            let pos = self.peek().map_or(open, |t| t.pos);
            return Err(ExprError::UnexpectedToken {
                found: "')'".to_string(),
                pos,
            });
        }
        let inner = self.nested(Self::expr)?;
        match self.next() {
            Ok(Token {
                kind: TokenKind::RParen,
                ..
            }) => Ok(inner),
            Ok(tok) => Err(ExprError::UnexpectedToken {
                found: tok.kind.to_string(),
                pos: tok.pos,
            }),
            Err(_) => Err(ExprError::UnmatchedParen { pos: open }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(src: &str) -> String {
        parse(src).unwrap().to_string()
    }

    #[test]
    fn precedence_and_associativity() {
        assert_eq!(show("1 + 2 * 3"), "(1 + (2 * 3))");
        assert_eq!(show("8 - 3 - 2"), "((8 - 3) - 2)");
        assert_eq!(show("2 ^ 3 ^ 2"), "(2 ^ (3 ^ 2))");
        assert_eq!(show("-2 ^ 2"), "(-(2 ^ 2))");
        assert_eq!(show("2 ^ -1"), "(2 ^ (-1))");
    }

    #[test]
    fn implicit_multiplication() {
        assert_eq!(show("2pi"), "(2 * pi)");
        assert_eq!(show("3(1 + 2)"), "(3 * (1 + 2))");
        assert_eq!(show("2sin(0)"), "(2 * sin(0))");
        assert_eq!(show("(1)(2)"), "(1 * 2)");
    }

    #[test]
    fn parenthesis_errors() {
        assert_eq!(parse("(1 + 2").unwrap_err(), ExprError::UnmatchedParen { pos: 0 });
        assert_eq!(parse("1 + 2)").unwrap_err(), ExprError::UnmatchedParen { pos: 5 });
        assert!(matches!(parse("()").unwrap_err(), ExprError::UnexpectedToken { .. }));
    }

    #[test]
    fn other_errors() {
        assert_eq!(parse("   ").unwrap_err(), ExprError::Empty);
        assert_eq!(parse("1 +").unwrap_err(), ExprError::UnexpectedEnd);
        assert_eq!(
            parse("2 * foo").unwrap_err(),
            ExprError::UnknownIdentifier {
                name: "foo".into(),
                pos: 4
            }
        );
        assert!(matches!(parse("sin 30").unwrap_err(), ExprError::UnexpectedToken { pos: 4, .. }));
        assert!(matches!(parse("1 2").unwrap_err(), ExprError::UnexpectedToken { pos: 2, .. }));
        assert_eq!(parse("sqrt").unwrap_err(), ExprError::UnexpectedEnd);
    }

    #[test]
    fn sign_runs_fold() {
        assert_eq!(show("--2"), "2");
        assert_eq!(show("-+-2"), "2");
        assert_eq!(show("---2"), "(-2)");
        assert_eq!(show("2 - -3"), "(2 - (-3))");

        let src = "-".repeat(1001) + "1";
        assert_eq!(show(&src), "(-1)");
    }

    #[test]
    fn nesting_is_bounded() {
        let ok = "(".repeat(MAX_NESTING) + "1" + &")".repeat(MAX_NESTING);
        assert_eq!(show(&ok), "1");

        let deep = "(".repeat(MAX_NESTING + 1) + "1" + &")".repeat(MAX_NESTING + 1);
        assert_eq!(
            parse(&deep).unwrap_err(),
            ExprError::TooDeep {
                max: MAX_NESTING,
                pos: MAX_NESTING
            }
        );

        let calls = "sqrt(".repeat(MAX_NESTING + 1) + "1" + &")".repeat(MAX_NESTING + 1);
        assert!(matches!(parse(&calls).unwrap_err(), ExprError::TooDeep { .. }));

        let exponents = "2^".repeat(MAX_NESTING + 1) + "2";
        assert!(matches!(parse(&exponents).unwrap_err(), ExprError::TooDeep { .. }));
    }

    #[test]
    fn oversized_input_is_rejected() {
        let huge = "(".repeat(100_000) + "1" + &")".repeat(100_000);
        assert_eq!(
            parse(&huge).unwrap_err(),
            ExprError::TooLong {
                tokens: 200_001,
                max: MAX_TOKENS
            }
        );
        assert!(matches!(
            parse(&("-".repeat(5000) + "1")).unwrap_err(),
            ExprError::TooLong { .. }
        ));
    }
}
