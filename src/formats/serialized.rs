//! JSON and YAML output via serde
//!
//! Both mirror the [`Node`] structure: `head`, an `attributes` object mapping
//! each key to its token list, and `children`.

use crate::parser::ast::Node;

pub fn to_json(node: &Node, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(node)
    } else {
        serde_json::to_string(node)
    }
}

pub fn to_yaml(node: &Node) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(node)
}
