//! Parse errors
//!
//! Offsets count tokens of the whitespace-collapsed stream the grammar runs on.

use thiserror::Error;

use crate::lexer::Token;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input that cannot be tokenized. The lexer falls back to one token per
    /// unmatched character, so `tokenize` never produces this.
    #[error("cannot tokenize input at byte {offset}")]
    Lex { offset: usize },

    /// A required token (open paren, head, separator, close paren) is missing
    #[error("syntax error at token {offset}: unexpected {found}")]
    Syntax { offset: usize, found: String },

    /// A root node parsed but tokens are left over
    #[error("trailing input at token {offset}: {remaining} unconsumed tokens")]
    TrailingInput { offset: usize, remaining: usize },

    #[error("nesting depth {depth} exceeds the configured limit of {limit}")]
    DepthExceeded { depth: usize, limit: usize },
}

impl ParseError {
    /// Syntax error describing the token at `offset`
    pub fn syntax_at(tokens: &[Token], offset: usize) -> Self {
        let found = tokens
            .get(offset)
            .map(Token::to_string)
            .unwrap_or_else(|| "end of input".to_string());
        ParseError::Syntax { offset, found }
    }

    /// Token offset the error points at, when it has one
    pub fn offset(&self) -> Option<usize> {
        match self {
            ParseError::Lex { offset }
            | ParseError::Syntax { offset, .. }
            | ParseError::TrailingInput { offset, .. } => Some(*offset),
            ParseError::DepthExceeded { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_at_names_the_token() {
        let tokens = vec![Token::OpenParen, Token::Number(1.0)];
        assert_eq!(
            ParseError::syntax_at(&tokens, 1),
            ParseError::Syntax {
                offset: 1,
                found: "number 1".to_string()
            }
        );
        assert_eq!(
            ParseError::syntax_at(&tokens, 2).to_string(),
            "syntax error at token 2: unexpected end of input"
        );
    }

    #[test]
    fn test_offset() {
        let error = ParseError::TrailingInput {
            offset: 7,
            remaining: 2,
        };
        assert_eq!(error.offset(), Some(7));
        assert_eq!(
            ParseError::DepthExceeded { depth: 9, limit: 4 }.offset(),
            None
        );
    }
}
