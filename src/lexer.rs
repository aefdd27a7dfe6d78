//! Lexer module for AST dumps
//!
//! Tokenization happens in two passes. The first is a plain logos lexer with a
//! single-character fallback, so every input produces tokens that cover it
//! exactly. The second collapses runs of whitespace into one token: the grammar
//! uses a single whitespace token as its separator and never re-checks this.

pub mod detokenizer;
pub mod lexer_impl;
pub mod tokens;
pub mod whitespace_transform;

pub use detokenizer::{detokenize, ToDumpString};
pub use lexer_impl::{tokenize, tokenize_with_spans};
pub use tokens::{Token, TokenSpan};
pub use whitespace_transform::{collapse_whitespace, collapse_whitespace_with_spans};

/// Main lexer function: tokenize and collapse whitespace
pub fn lex(source: &str) -> Vec<Token> {
    collapse_whitespace(tokenize(source))
}

/// Lexing function that keeps source spans
pub fn lex_with_spans(source: &str) -> Vec<TokenSpan> {
    collapse_whitespace_with_spans(tokenize_with_spans(source))
}
