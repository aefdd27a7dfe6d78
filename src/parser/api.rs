//! Public API for the parser.

use crate::config::ParserOptions;
use crate::lexer::{lex, Token};
use crate::parser::ast::Node;
use crate::parser::elements::node::document;
use crate::parser::error::ParseError;

/// A parsed root plus what the grammar left unconsumed
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutput {
    pub node: Node,
    /// Tokens consumed by the root, including surrounding whitespace
    pub consumed: usize,
    /// Unconsumed tokens; anything but zero is trailing garbage
    pub remaining: usize,
}

/// Deepest parenthesis nesting in the token stream
pub fn nesting_depth(tokens: &[Token]) -> usize {
    let mut depth = 0usize;
    let mut deepest = 0usize;
    for token in tokens {
        match token {
            Token::OpenParen => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            Token::CloseParen => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    deepest
}

/// Parse a root node from a whitespace-collapsed token stream
///
/// Leftover tokens are reported in [`ParseOutput::remaining`], not as an error.
pub fn parse_tokens(tokens: &[Token], options: &ParserOptions) -> Result<ParseOutput, ParseError> {
    if let Some(limit) = options.max_depth {
        let depth = nesting_depth(tokens);
        if depth > limit {
            log::debug!("rejecting input nested {} deep (limit {})", depth, limit);
            return Err(ParseError::DepthExceeded { depth, limit });
        }
    }

    let (result, cursor) = document(options).parse_prefix(tokens);
    match result {
        Some(node) => {
            log::debug!(
                "parsed `{}` with {} children from {} of {} tokens",
                node.head(),
                node.children().len(),
                cursor.position(),
                tokens.len()
            );
            Ok(ParseOutput {
                node,
                consumed: cursor.position(),
                remaining: cursor.remaining().len(),
            })
        }
        None => {
            let offset = cursor.furthest();
            log::debug!("parse failed; furthest token reached was {}", offset);
            Err(ParseError::syntax_at(tokens, offset))
        }
    }
}

/// Parse a dump with the given options
pub fn parse_with_options(source: &str, options: &ParserOptions) -> Result<Node, ParseError> {
    let tokens = lex(source);
    let output = parse_tokens(&tokens, options)?;
    if output.remaining > 0 {
        return Err(ParseError::TrailingInput {
            offset: output.consumed,
            remaining: output.remaining,
        });
    }
    Ok(output.node)
}

/// Parse a dump with default options
pub fn parse(source: &str) -> Result<Node, ParseError> {
    parse_with_options(source, &ParserOptions::default())
}
