//! Treeviz formatter for parsed nodes
//!
//! One line per node: `{prefix}{connector} {head}: {attributes}`, where the
//! attribute summary is cut to a fixed width.

use crate::formats::sexp::attribute_entries;
use crate::parser::ast::Node;

/// Width used when no configuration is given
pub const DEFAULT_LABEL_WIDTH: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

pub fn to_treeviz_str(node: &Node) -> String {
    to_treeviz_str_with_width(node, DEFAULT_LABEL_WIDTH)
}

pub fn to_treeviz_str_with_width(node: &Node, label_width: usize) -> String {
    let mut result = String::new();
    append_node(&mut result, node, "", true, label_width);
    result
}

fn append_node(result: &mut String, node: &Node, prefix: &str, is_last: bool, width: usize) {
    let connector = if is_last { "└─" } else { "├─" };
    let summary = attribute_entries(node).join(" ");

    if summary.is_empty() {
        result.push_str(&format!("{}{} {}\n", prefix, connector, node.head()));
    } else {
        result.push_str(&format!(
            "{}{} {}: {}\n",
            prefix,
            connector,
            node.head(),
            truncate(&summary, width)
        ));
    }

    let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    let children = node.children();
    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        append_node(result, child, &new_prefix, is_last, width);
    }
}
