//! Detokenizer for AST dump tokens
//!
//! Converts tokens back into dump text. Literals come back single-quoted (or
//! double-quoted when the text itself holds a single quote), numbers in their
//! shortest form and whitespace as one space, so the output lexes back to the
//! same tokens. A whole number followed by `.` and another number keeps its
//! `.0`, otherwise `1.0.5` would come back as `1.5`.
use crate::lexer::tokens::Token;

/// Trait for converting a token to its dump text
pub trait ToDumpString {
    fn to_dump_string(&self) -> String;
}

impl ToDumpString for Token {
    fn to_dump_string(&self) -> String {
        match self {
            Token::OpenParen => "(".to_string(),
            Token::CloseParen => ")".to_string(),
            Token::OpenBracket => "[".to_string(),
            Token::CloseBracket => "]".to_string(),
            Token::Equals => "=".to_string(),
            Token::Comma => ",".to_string(),
            Token::Dot => ".".to_string(),
            Token::Colon => ":".to_string(),
            Token::LessThan => "<".to_string(),
            Token::GreaterThan => ">".to_string(),
            Token::Whitespace => " ".to_string(),
            Token::Literal(text) if text.contains('\'') => format!("\"{}\"", text),
            Token::Literal(text) => format!("'{}'", text),
            Token::Number(value) => value.to_string(),
            Token::Symbol(name) => name.clone(),
            Token::Char(c) => c.to_string(),
        }
    }
}

/// Detokenize a stream of tokens into a string
pub fn detokenize(tokens: &[Token]) -> String {
    let mut result = String::new();
    for (index, token) in tokens.iter().enumerate() {
        match (token, tokens.get(index + 1..index + 3)) {
            (Token::Number(value), Some([Token::Dot, Token::Number(_)])) if value.fract() == 0.0 => {
                result.push_str(&format!("{:.1}", value));
            }
            _ => result.push_str(&token.to_dump_string()),
        }
    }
    result
}
