//! # astdump
//!
//! A parser for the parenthesized AST dumps printed by compiler front ends,
//! such as `(declref_expr type='Int' location=hello.swift:9:38 function_ref=unapplied)`.
//!
//! Parsing runs in three layers:
//!
//! - [`lexer`]: a logos tokenizer with a single-character fallback, followed by
//!   whitespace collapsing.
//! - [`parser::combinators`]: a small backtracking parser-combinator engine over
//!   token slices.
//! - [`parser::elements`]: the node grammar, including the lookahead rules that
//!   decide where a free-form attribute value ends.
//!
//! [`formats`] renders parsed trees, [`processor`] ties reading, parsing and
//! rendering together, and [`config`] loads [`config::ParserOptions`] and
//! output settings from TOML.
//!
//! ```rust,ignore
//! let node = astdump::parse("(head x=a (child y=b))")?;
//! assert_eq!(node.children()[0].attribute("y").unwrap().to_text(), "b");
//! ```

pub mod config;
pub mod formats;
pub mod lexer;
pub mod parser;
pub mod processor;

#[cfg(test)]
pub mod testing;

pub use config::{AstDumpConfig, ParserOptions, QuirkOptions};
pub use lexer::{lex, Token};
pub use parser::{
    parse, parse_tokens, parse_with_options, AttributeValue, Label, Node, ParseError, ParseOutput,
};
