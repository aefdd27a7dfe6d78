//! Node parsing
//!
//! Grammar: `<node> = "(" <head> <attributes>? (" " <node>)* ")"`
//!
//! The head is a single identifier. Attributes always come before the first
//! child; children are separated from what precedes them by exactly one space.

use crate::config::ParserOptions;
use crate::lexer::Token;
use crate::parser::ast::{AttributeValue, Label, Node};
use crate::parser::combinators::{just, lift3, recursive, select, Parser};
use crate::parser::elements::attributes::attribute_block;

/// Node head: one identifier
pub(crate) fn head() -> Parser<Token, Label> {
    select(|token: &Token| token.as_symbol().map(Label::new))
}

/// One node and, recursively, its children
pub fn node(options: &ParserOptions) -> Parser<Token, Node> {
    let quirks = options.quirks.clone();
    recursive(move |node: Parser<Token, Node>| {
        let attributes = attribute_block(&quirks)
            .filter(|attributes| attributes.values().all(AttributeValue::is_balanced));
        let children = just(Token::Whitespace).ignore_then(node).many();

        just(Token::OpenParen)
            .ignore_then(lift3(Node::new, head(), attributes, children))
            .then_ignore(just(Token::CloseParen))
    })
}

/// A root node, optionally surrounded by whitespace
pub fn document(options: &ParserOptions) -> Parser<Token, Node> {
    let space = just(Token::Whitespace).or_not();
    space
        .clone()
        .ignore_then(node(options))
        .then_ignore(space)
}
