//! S-expression rendering
//!
//! Writes a node back in dump syntax: `(head flag key=value (child))`. Bare
//! flags come first, then `key=value` entries in key order, then children.
//! Flags go first because a bare word after a value would be read as part of
//! that value.
//!
//! Values are written through the detokenizer, so the output is canonical
//! rather than byte-identical to the input (quotes and number formatting may
//! differ).

use crate::lexer::{detokenize, Token};
use crate::parser::ast::{Label, Node};

/// Attribute entries of `node` as dump text, flags first
pub(crate) fn attribute_entries(node: &Node) -> Vec<String> {
    let (flags, assigned): (Vec<_>, Vec<_>) = node
        .attributes()
        .iter()
        .partition(|(key, value)| value.is_flag_of(key.as_str()));

    let flags = flags.into_iter().map(|(key, _)| render_key(key));
    let assigned = assigned
        .into_iter()
        .map(|(key, value)| format!("{}={}", render_key(key), value.to_text()));
    flags.chain(assigned).collect()
}

/// Keys that are not plain identifiers were quoted bare names; quote them again
fn render_key(key: &Label) -> String {
    let text = key.as_str();
    let mut chars = text.chars();
    let is_identifier = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric());
    if is_identifier {
        text.to_string()
    } else {
        detokenize(&[Token::Literal(text.to_string())])
    }
}

/// Single-line rendering
pub fn to_sexp_string(node: &Node) -> String {
    let mut result = String::new();
    append_node(&mut result, node);
    result
}

fn append_node(result: &mut String, node: &Node) {
    result.push('(');
    result.push_str(node.head().as_str());
    for entry in attribute_entries(node) {
        result.push(' ');
        result.push_str(&entry);
    }
    for child in node.children() {
        result.push(' ');
        append_node(result, child);
    }
    result.push(')');
}

/// One node per line, children indented by two spaces
///
/// Whitespace runs collapse before parsing, so this parses back to the same tree.
pub fn to_sexp_pretty(node: &Node) -> String {
    let mut result = String::new();
    append_node_pretty(&mut result, node, 0);
    result
}

fn append_node_pretty(result: &mut String, node: &Node, indent_level: usize) {
    result.push('(');
    result.push_str(node.head().as_str());
    for entry in attribute_entries(node) {
        result.push(' ');
        result.push_str(&entry);
    }
    for child in node.children() {
        result.push('\n');
        result.push_str(&"  ".repeat(indent_level + 1));
        append_node_pretty(result, child, indent_level + 1);
    }
    result.push(')');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_flags_are_written_before_values() {
        let node = parse("(call_expr type='()' nothrow (head2 foo=bar))").expect("parse");
        assert_eq!(
            to_sexp_string(&node),
            "(call_expr nothrow type='()' (head2 foo=bar))"
        );
    }

    #[test]
    fn test_quoted_bare_names_stay_quoted() {
        let node = parse("(func_decl \"smart(accountA:)\" interface)").expect("parse");
        assert_eq!(
            to_sexp_string(&node),
            "(func_decl interface 'smart(accountA:)')"
        );
        let reparsed = parse(&to_sexp_string(&node)).expect("reparse");
        assert_eq!(reparsed, node);
    }

    #[test]
    fn test_dotted_numbers_survive_reparse() {
        let node = parse("(a v=1.0.5)").expect("parse");
        assert_eq!(to_sexp_string(&node), "(a v=1.0.5)");
        assert_eq!(parse(&to_sexp_string(&node)).expect("reparse"), node);
    }

    #[test]
    fn test_display_matches_single_line() {
        let node = parse("(a x=1 (b))").expect("parse");
        assert_eq!(node.to_string(), "(a x=1 (b))");
    }

    #[test]
    fn test_pretty_output_reparses() {
        let node = parse("(a x=1 (b y=2 (c)) (d))").expect("parse");
        let pretty = to_sexp_pretty(&node);
        assert_eq!(pretty, "(a x=1\n  (b y=2\n    (c))\n  (d))");
        assert_eq!(parse(&pretty).expect("reparse"), node);
    }

    #[test]
    fn test_render_key() {
        assert_eq!(render_key(&Label::new("type")), "type");
        assert_eq!(render_key(&Label::new("a b")), "'a b'");
    }
}
