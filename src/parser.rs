//! Parser for AST dumps
//!
//! [`combinators`] is a small grammar-agnostic engine; [`elements`] builds the
//! node and attribute grammar on top of it, and [`api`] runs that grammar over
//! a token stream and turns failures into [`ParseError`]s.

pub mod api;
pub mod ast;
pub mod combinators;
pub mod elements;
pub mod error;

pub use api::{nesting_depth, parse, parse_tokens, parse_with_options, ParseOutput};
pub use ast::{AttributeValue, Attributes, Label, Node};
pub use error::ParseError;
