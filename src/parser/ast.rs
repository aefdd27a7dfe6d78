//! Parsed tree types
//!
//! A dump parses into a tree of [`Node`]s. Attribute values are kept as the
//! raw token runs they were written as; nothing here interprets them.

use serde::Serialize;
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

use crate::lexer::{detokenize, Token};

/// Node head or attribute key
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Label(String);

impl Label {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Label {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The ordered token run assigned to one attribute key
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct AttributeValue(Vec<Token>);

impl AttributeValue {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self(tokens)
    }

    /// Value of a bare flag: the key as a symbol, even when it was quoted
    pub fn flag(key: &str) -> Self {
        Self(vec![Token::Symbol(key.to_string())])
    }

    pub fn tokens(&self) -> &[Token] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The value rendered back to dump text
    pub fn to_text(&self) -> String {
        detokenize(&self.0)
    }

    /// The symbol text, if the value is exactly one symbol
    pub fn as_symbol(&self) -> Option<&str> {
        match self.0.as_slice() {
            [token] => token.as_symbol(),
            _ => None,
        }
    }

    /// The literal text, if the value is exactly one quoted literal
    pub fn as_literal(&self) -> Option<&str> {
        match self.0.as_slice() {
            [Token::Literal(text)] => Some(text),
            _ => None,
        }
    }

    /// Whether this is the value a bare flag named `key` gets
    pub fn is_flag_of(&self, key: &str) -> bool {
        match self.0.as_slice() {
            [Token::Symbol(text)] => text == key,
            _ => false,
        }
    }

    /// Parentheses in the value pair up, never closing more than were opened
    pub fn is_balanced(&self) -> bool {
        let mut depth = 0usize;
        for token in &self.0 {
            match token {
                Token::OpenParen => depth += 1,
                Token::CloseParen => match depth.checked_sub(1) {
                    Some(d) => depth = d,
                    None => return false,
                },
                _ => {}
            }
        }
        depth == 0
    }
}

impl From<Vec<Token>> for AttributeValue {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}

/// Attribute map of one node; one value per key
pub type Attributes = BTreeMap<Label, AttributeValue>;

/// One parsed `(head attributes... children...)` unit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    head: Label,
    attributes: Attributes,
    children: Vec<Node>,
}

impl Node {
    pub fn new(head: Label, attributes: Attributes, children: Vec<Node>) -> Self {
        Self {
            head,
            attributes,
            children,
        }
    }

    pub fn head(&self) -> &Label {
        &self.head
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    /// True if `key` is present as a bare flag
    pub fn has_flag(&self, key: &str) -> bool {
        self.attribute(key).is_some_and(|value| value.is_flag_of(key))
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Levels of nesting, counting this node
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Node::depth).max().unwrap_or(0)
    }

    /// This node and all nodes below it, in source order
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// All nodes in this subtree with the given head
    pub fn find_all<'a>(&'a self, head: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.descendants().filter(move |node| node.head.as_str() == head)
    }
}

/// Pre-order iterator over a subtree
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::formats::to_sexp_string(self))
    }
}
