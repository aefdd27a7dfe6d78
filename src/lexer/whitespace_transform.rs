//! Whitespace normalization
//!
//! The grammar treats exactly one whitespace token as a structural separator.
//! Runs of adjacent whitespace tokens are merged into one before parsing.

use crate::lexer::tokens::{Token, TokenSpan};

/// Collapse adjacent whitespace tokens into a single token
pub fn collapse_whitespace(tokens: Vec<Token>) -> Vec<Token> {
    let mut result: Vec<Token> = Vec::with_capacity(tokens.len());
    for token in tokens {
        if token.is_whitespace() && result.last().is_some_and(Token::is_whitespace) {
            continue;
        }
        result.push(token);
    }
    result
}

/// Collapse adjacent whitespace tokens, merging their spans
pub fn collapse_whitespace_with_spans(tokens: Vec<TokenSpan>) -> Vec<TokenSpan> {
    let mut result: Vec<TokenSpan> = Vec::with_capacity(tokens.len());
    for (token, span) in tokens {
        if let Some((previous, previous_span)) = result.last_mut() {
            if previous.is_whitespace() && token.is_whitespace() {
                previous_span.end = span.end;
                continue;
            }
        }
        result.push((token, span));
    }
    log::trace!("{} tokens after whitespace collapse", result.len());
    result
}
