//! Lexer driver
//!
//! logos does the matching; this module adds the single-character fallback so
//! that any input, however malformed, tokenizes completely.

use crate::lexer::tokens::{Token, TokenSpan};
use logos::Logos;

/// Tokenize a string and collect all tokens
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_with_spans(source)
        .into_iter()
        .map(|(token, _)| token)
        .collect()
}

/// Tokenize a string and collect tokens with their byte spans
///
/// The spans are contiguous and cover the whole source: concatenating
/// `source[span]` for every token gives back `source`.
pub fn tokenize_with_spans(source: &str) -> Vec<TokenSpan> {
    let mut tokens = Vec::new();
    let mut offset = 0;
    let mut lexer = Token::lexer(source);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(token) => tokens.push((token, offset + span.start..offset + span.end)),
            Err(()) => {
                // Emit one character and restart right after it
                let start = offset + span.start;
                let Some(c) = source[start..].chars().next() else {
                    break;
                };
                let end = start + c.len_utf8();
                tokens.push((Token::Char(c), start..end));
                offset = end;
                lexer = Token::lexer(&source[offset..]);
            }
        }
    }

    log::trace!("tokenized {} bytes into {} tokens", source.len(), tokens.len());
    tokens
}
