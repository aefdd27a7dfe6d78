//! Token definitions for AST dumps
//!
//! Tokens are defined with the logos derive macro. Every pattern here matches at
//! least one character, and anything none of them match is turned into a
//! [`Token::Char`] by the lexer driver, so tokenization covers any input.
use logos::Logos;
use serde::Serialize;
use std::fmt;

/// Token paired with its byte range in the source
pub type TokenSpan = (Token, std::ops::Range<usize>);

fn strip_quotes(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

fn parse_number(lex: &mut logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// All tokens that can appear in a dump
#[derive(Logos, Debug, Clone, PartialEq, Serialize)]
pub enum Token {
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,
    #[token("=")]
    Equals,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token(":")]
    Colon,
    #[token("<")]
    LessThan,
    #[token(">")]
    GreaterThan,

    // Newlines and indentation collapse together with plain spaces
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    // Quotes are stripped; contents stop at the nearest matching quote on the line
    #[regex(r#""[^"\n]*""#, strip_quotes)]
    #[regex(r"'[^'\n]*'", strip_quotes)]
    Literal(String),

    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number)]
    Number(f64),

    #[regex(r"[a-zA-Z][_a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Symbol(String),

    /// A single character no other rule accepts (`-`, `@`, a lone quote, ...)
    Char(char),
}

impl Token {
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace)
    }

    /// The identifier text, if this is a symbol
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Token::Symbol(name) => Some(name),
            _ => None,
        }
    }

    /// Check for a symbol with exactly this text
    pub fn is_symbol_named(&self, expected: &str) -> bool {
        self.as_symbol() == Some(expected)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::OpenParen => write!(f, "'('"),
            Token::CloseParen => write!(f, "')'"),
            Token::OpenBracket => write!(f, "'['"),
            Token::CloseBracket => write!(f, "']'"),
            Token::Equals => write!(f, "'='"),
            Token::Comma => write!(f, "','"),
            Token::Dot => write!(f, "'.'"),
            Token::Colon => write!(f, "':'"),
            Token::LessThan => write!(f, "'<'"),
            Token::GreaterThan => write!(f, "'>'"),
            Token::Whitespace => write!(f, "whitespace"),
            Token::Literal(text) => write!(f, "literal {:?}", text),
            Token::Number(value) => write!(f, "number {}", value),
            Token::Symbol(name) => write!(f, "symbol `{}`", name),
            Token::Char(c) => write!(f, "character {:?}", c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(source: &str) -> Vec<Result<Token, ()>> {
        Token::lexer(source).collect()
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(
            lex_all("()[]=,.:<>"),
            vec![
                Ok(Token::OpenParen),
                Ok(Token::CloseParen),
                Ok(Token::OpenBracket),
                Ok(Token::CloseBracket),
                Ok(Token::Equals),
                Ok(Token::Comma),
                Ok(Token::Dot),
                Ok(Token::Colon),
                Ok(Token::LessThan),
                Ok(Token::GreaterThan),
            ]
        );
    }

    #[test]
    fn test_whitespace_run_is_one_token() {
        assert_eq!(lex_all(" \n\t  "), vec![Ok(Token::Whitespace)]);
    }

    #[test]
    fn test_literals_strip_quotes() {
        assert_eq!(
            lex_all("'(Int, Int) -> Int'"),
            vec![Ok(Token::Literal("(Int, Int) -> Int".to_string()))]
        );
        assert_eq!(
            lex_all("\"smart(a:b:)\""),
            vec![Ok(Token::Literal("smart(a:b:)".to_string()))]
        );
    }

    #[test]
    fn test_literal_is_non_greedy() {
        assert_eq!(
            lex_all("'a''b'"),
            vec![
                Ok(Token::Literal("a".to_string())),
                Ok(Token::Literal("b".to_string()))
            ]
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(lex_all("38"), vec![Ok(Token::Number(38.0))]);
        assert_eq!(lex_all("1.5"), vec![Ok(Token::Number(1.5))]);
        assert_eq!(
            lex_all("9."),
            vec![Ok(Token::Number(9.0)), Ok(Token::Dot)]
        );
    }

    #[test]
    fn test_symbols() {
        assert_eq!(
            lex_all("declref_expr x2"),
            vec![
                Ok(Token::Symbol("declref_expr".to_string())),
                Ok(Token::Whitespace),
                Ok(Token::Symbol("x2".to_string())),
            ]
        );
    }

    #[test]
    fn test_unmatched_characters_are_errors_for_the_driver() {
        let tokens = lex_all("@");
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_err());
    }

    #[test]
    fn test_token_predicates() {
        assert!(Token::Whitespace.is_whitespace());
        assert!(!Token::Dot.is_whitespace());
        assert!(Token::Symbol("function_ref".into()).is_symbol_named("function_ref"));
        assert!(!Token::Literal("function_ref".into()).is_symbol_named("function_ref"));
    }

    #[test]
    fn test_numbers_compare_by_value() {
        assert_eq!(Token::Number(9.0), Token::Number(9.00));
        assert_ne!(Token::Number(9.0), Token::Symbol("9".into()));
    }
}
