//! Fluent assertion API for parsed nodes

use crate::lexer::Token;
use crate::parser::ast::{AttributeValue, Node};

/// Create an assertion builder for a root node
pub fn assert_node(node: &Node) -> NodeAssertion<'_> {
    NodeAssertion {
        node,
        context: "root".to_string(),
    }
}

pub struct NodeAssertion<'a> {
    node: &'a Node,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    pub fn head(self, expected: &str) -> Self {
        assert_eq!(
            self.node.head().as_str(),
            expected,
            "{}: expected head '{}', found '{}'",
            self.context,
            expected,
            self.node.head()
        );
        self
    }

    pub fn attribute_count(self, expected: usize) -> Self {
        let actual = self.node.attributes().len();
        assert_eq!(
            actual,
            expected,
            "{}: expected {} attributes, found {}: [{}]",
            self.context,
            expected,
            actual,
            self.summarize_keys()
        );
        self
    }

    pub fn no_attributes(self) -> Self {
        self.attribute_count(0)
    }

    /// Assert the exact tokens of one attribute value
    pub fn attribute_tokens(self, key: &str, expected: &[Token]) -> Self {
        let value = self.expect_attribute(key);
        assert_eq!(
            value.tokens(),
            expected,
            "{}: attribute '{}' has unexpected tokens",
            self.context,
            key
        );
        self
    }

    /// Assert an attribute value as rendered dump text
    pub fn attribute_text(self, key: &str, expected: &str) -> Self {
        let actual = self.expect_attribute(key).to_text();
        assert_eq!(
            actual, expected,
            "{}: attribute '{}' expected '{}', found '{}'",
            self.context, key, expected, actual
        );
        self
    }

    /// Assert `key` is present as a bare flag
    pub fn flag(self, key: &str) -> Self {
        assert!(
            self.node.has_flag(key),
            "{}: expected bare flag '{}', attributes are [{}]",
            self.context,
            key,
            self.summarize_keys()
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.node.children().len();
        assert_eq!(
            actual,
            expected,
            "{}: expected {} children, found {}: [{}]",
            self.context,
            expected,
            actual,
            self.summarize_children()
        );
        self
    }

    /// Assert on a specific child by index
    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let children = self.node.children();
        assert!(
            index < children.len(),
            "{}: child index {} out of bounds ({} children)",
            self.context,
            index,
            children.len()
        );
        assertion(NodeAssertion {
            node: &children[index],
            context: format!("{}.children[{}]", self.context, index),
        });
        self
    }

    fn expect_attribute(&self, key: &str) -> &'a AttributeValue {
        match self.node.attribute(key) {
            Some(value) => value,
            None => panic!(
                "{}: missing attribute '{}', attributes are [{}]",
                self.context,
                key,
                self.summarize_keys()
            ),
        }
    }

    fn summarize_keys(&self) -> String {
        self.node
            .attributes()
            .keys()
            .map(|key| key.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn summarize_children(&self) -> String {
        self.node
            .children()
            .iter()
            .map(|child| child.head().as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
