//! Tokenizer.

use super::ExprError;
use std::fmt;

/// Kind of a [`Token`].
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(n) => write!(f, "number {n}"),
            TokenKind::Ident(name) => write!(f, "'{name}'"),
            TokenKind::Plus => f.write_str("'+'"),
            TokenKind::Minus => f.write_str("'-'"),
            TokenKind::Star => f.write_str("'*'"),
            TokenKind::Slash => f.write_str("'/'"),
            TokenKind::Caret => f.write_str("'^'"),
            TokenKind::LParen => f.write_str("'('"),
            TokenKind::RParen => f.write_str("')'"),
        }
    }
}

/// A token and the character offset where it starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: usize,
}

/// Splits `src` into tokens.
///
/// Accepts the typographic operators a calculator keypad produces (`×`, `÷`, `−`, `π`, `√`) alongside their
/// ASCII forms.
pub fn tokenize(src: &str) -> Result<Vec<Token>, ExprError> {
    let chars: Vec<char> = src.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let pos = i;

        let simple = match c {
            '+' => Some(TokenKind::Plus),
            '-' | '−' => Some(TokenKind::Minus),
            '*' | '×' | '·' => Some(TokenKind::Star),
            '/' | '÷' => Some(TokenKind::Slash),
            '^' => Some(TokenKind::Caret),
            '(' => Some(TokenKind::LParen),
            ')' => Some(TokenKind::RParen),
            'π' => Some(TokenKind::Ident("pi".to_string())),
            '√' => Some(TokenKind::Ident("sqrt".to_string())),
            _ => None,
        };
        if let Some(kind) = simple {
            tokens.push(Token { kind, pos });
            i += 1;
            continue;
        }

        if c.is_whitespace() {
            i += 1;
        } else if c.is_ascii_digit() || c == '.' {
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            // exponent suffix such as 1e-3, only when digits follow
            if i < chars.len() && matches!(chars[i], 'e' | 'E') {
                let mut j = i + 1;
                if j < chars.len() && matches!(chars[j], '+' | '-') {
                    j += 1;
                }
                if j < chars.len() && chars[j].is_ascii_digit() {
                    i = j;
                    while i < chars.len() && chars[i].is_ascii_digit() {
                        i += 1;
                    }
                }
            }
            let text: String = chars[pos..i].iter().collect();
            let value = text
                .parse::<f64>()
                .map_err(|_| ExprError::InvalidNumber { text: text.clone(), pos })?;
            tokens.push(Token {
                kind: TokenKind::Number(value),
                pos,
            });
        } else if c.is_alphabetic() {
            while i < chars.len() && chars[i].is_alphanumeric() {
                i += 1;
            }
            let name: String = chars[pos..i].iter().collect();
            tokens.push(Token {
                kind: TokenKind::Ident(name.to_lowercase()),
                pos,
            });
        } else {
            return Err(ExprError::UnexpectedChar { ch: c, pos });
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        tokenize(src).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn numbers_and_operators() {
        assert_eq!(
            kinds("1.5 + 2e3×4"),
            vec![
                TokenKind::Number(1.5),
                TokenKind::Plus,
                TokenKind::Number(2000.0),
                TokenKind::Star,
                TokenKind::Number(4.0),
            ]
        );
    }

    #[test]
    fn bare_e_is_an_identifier() {
        assert_eq!(
            kinds("2e"),
            vec![TokenKind::Number(2.0), TokenKind::Ident("e".into())]
        );
    }

    #[test]
    fn symbols_map_to_names() {
        assert_eq!(
            kinds("√π"),
            vec![TokenKind::Ident("sqrt".into()), TokenKind::Ident("pi".into())]
        );
        assert_eq!(kinds("SIN"), vec![TokenKind::Ident("sin".into())]);
    }

    #[test]
    fn positions_are_character_offsets() {
        let tokens = tokenize("π + 10").unwrap();
        assert_eq!(tokens[2].pos, 4);
    }

    #[test]
    fn malformed_input() {
        assert_eq!(
            tokenize("1.2.3").unwrap_err(),
            ExprError::InvalidNumber {
                text: "1.2.3".into(),
                pos: 0
            }
        );
        assert_eq!(
            tokenize("2 $ 3").unwrap_err(),
            ExprError::UnexpectedChar { ch: '$', pos: 2 }
        );
    }
}
