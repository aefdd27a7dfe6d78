//! Attribute parsing for nodes
//!
//! Grammar: `<attributes> = " " <entry> (" " <entry>)*`
//! Where: `<entry> = <key> ("=" <value>)?`
//!
//! Keys are identifiers, or quoted literals used as bare names (declarations
//! print their quoted signature this way). A key with no `=` is a bare flag and
//! its value is the key token itself.
//!
//! Values are free-form token runs. They can hold spaces, parens, brackets and
//! any punctuation, so no single token ends them. Instead each token is checked
//! together with up to [`LOOKAHEAD`] tokens after it, and [`ends_value`] decides
//! whether it terminates the value. A terminating token is never consumed: it is
//! the separator before the next entry, the space before the children, or the
//! paren closing the node.

use crate::config::QuirkOptions;
use crate::lexer::Token;
use crate::parser::ast::{AttributeValue, Attributes, Label};
use crate::parser::combinators::{just, select, take_while_lookahead, Parser};

/// Tokens inspected past the current one
pub const LOOKAHEAD: usize = 3;

/// Symbol that follows a declaration reference in dumps hit by the paren quirk
const FUNCTION_REF_MARKER: &str = "function_ref";

/// Decide whether `current` ends the attribute value being accumulated
///
/// Checked in order; the first rule that applies wins.
pub fn ends_value(current: &Token, lookahead: &[Token], quirks: &QuirkOptions) -> bool {
    // Exception to the `)` rules below, so it is checked first
    if quirks.function_ref_paren && is_function_ref_paren(current, lookahead) {
        return false;
    }

    starts_key_value(current, lookahead)
        || starts_flag_before_child(current, lookahead)
        || closes_node(current, lookahead)
        || starts_children(current, lookahead)
        || ends_block(current, lookahead)
}

/// ` key=`: the next entry starts after this space
fn starts_key_value(current: &Token, lookahead: &[Token]) -> bool {
    current.is_whitespace() && matches!(lookahead, [Token::Symbol(_), Token::Equals, ..])
}

/// ` flag (`: a bare flag sits between this space and the first child
fn starts_flag_before_child(current: &Token, lookahead: &[Token]) -> bool {
    current.is_whitespace()
        && matches!(
            lookahead,
            [Token::Symbol(_), Token::Whitespace, Token::OpenParen, ..]
        )
}

/// `) ` or `))`: this paren closes the node
fn closes_node(current: &Token, lookahead: &[Token]) -> bool {
    *current == Token::CloseParen
        && matches!(lookahead.first(), Some(Token::Whitespace | Token::CloseParen))
}

/// ` (`: the children start after this space
fn starts_children(current: &Token, lookahead: &[Token]) -> bool {
    current.is_whitespace() && matches!(lookahead.first(), Some(Token::OpenParen))
}

/// A space or paren with (almost) nothing after it ends the block
fn ends_block(current: &Token, lookahead: &[Token]) -> bool {
    (current.is_whitespace() || *current == Token::CloseParen) && lookahead.len() < 2
}

/// Format quirk: `...(label:) function_ref=...`
///
/// Some dumps print a declaration reference whose argument-label list ends
/// right before ` function_ref=`. That paren belongs to the value; read as a
/// node close it would end the node early. Only this exact shape is accepted.
fn is_function_ref_paren(current: &Token, lookahead: &[Token]) -> bool {
    *current == Token::CloseParen
        && matches!(
            lookahead,
            [Token::Whitespace, marker, ..] if marker.is_symbol_named(FUNCTION_REF_MARKER)
        )
}

/// Attribute value tokens, up to the first terminating token
pub fn value(quirks: &QuirkOptions) -> Parser<Token, AttributeValue> {
    let quirks = quirks.clone();
    take_while_lookahead(LOOKAHEAD, move |current: &Token, lookahead: &[Token]| {
        ends_value(current, lookahead, &quirks)
    })
    .map(AttributeValue::new)
}

/// Entry key: an identifier or a quoted bare name
fn key() -> Parser<Token, Label> {
    select(|token: &Token| match token {
        Token::Symbol(name) | Token::Literal(name) => Some(Label::new(name.as_str())),
        _ => None,
    })
}

/// One `key=value` or bare `key` entry
pub fn entry(quirks: &QuirkOptions) -> Parser<Token, (Label, AttributeValue)> {
    let assigned = just(Token::Equals).ignore_then(value(quirks));
    key()
        .then(assigned.or_not())
        .map(|(label, value)| {
            let value = value.unwrap_or_else(|| AttributeValue::flag(label.as_str()));
            (label, value)
        })
}

/// The attribute block after a node's head
///
/// Optional: when no entry follows the leading space, nothing is consumed and
/// the map is empty. Duplicate keys keep the last value.
pub fn attribute_block(quirks: &QuirkOptions) -> Parser<Token, Attributes> {
    let space = just(Token::Whitespace);
    space
        .clone()
        .ignore_then(entry(quirks).separated_by(space))
        .map(|entries| {
            let mut attributes = Attributes::new();
            for (label, value) in entries {
                attributes.insert(label, value);
            }
            attributes
        })
        .or_not()
        .map(Option::unwrap_or_default)
}
