//! Format registry for node serialization
//!
//! Each output format implements [`Formatter`] and is looked up by name in a
//! [`FormatRegistry`].

use std::collections::HashMap;
use thiserror::Error;

use crate::config::OutputOptions;
use crate::formats::{serialized, sexp, treeviz};
use crate::parser::ast::Node;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("format '{0}' not found")]
    FormatNotFound(String),
    #[error("serialization error: {0}")]
    SerializationError(String),
}

/// A named way of rendering a parsed tree
pub trait Formatter {
    /// The name of this format (e.g., "treeviz", "sexp")
    fn name(&self) -> &str;

    fn serialize(&self, node: &Node) -> Result<String, FormatError>;

    fn description(&self) -> &str {
        ""
    }
}

pub struct SexpFormatter;

impl Formatter for SexpFormatter {
    fn name(&self) -> &str {
        "sexp"
    }

    fn serialize(&self, node: &Node) -> Result<String, FormatError> {
        Ok(sexp::to_sexp_pretty(node))
    }

    fn description(&self) -> &str {
        "Dump syntax, one node per line"
    }
}

pub struct TreevizFormatter {
    pub label_width: usize,
}

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, node: &Node) -> Result<String, FormatError> {
        Ok(treeviz::to_treeviz_str_with_width(node, self.label_width))
    }

    fn description(&self) -> &str {
        "Tree drawing with attribute summaries"
    }
}

pub struct JsonFormatter {
    pub pretty: bool,
}

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, node: &Node) -> Result<String, FormatError> {
        serialized::to_json(node, self.pretty)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, node: &Node) -> Result<String, FormatError> {
        serialized::to_yaml(node).map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}

/// Formatters by name
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter, replacing any with the same name
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    pub fn serialize(&self, node: &Node, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(node)
    }

    /// All format names, sorted
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// The built-in formatters, configured from `options`
    pub fn with_options(options: &OutputOptions) -> Self {
        let mut registry = Self::new();
        registry.register(SexpFormatter);
        registry.register(TreevizFormatter {
            label_width: options.treeviz_label_width,
        });
        registry.register(JsonFormatter {
            pretty: options.json_pretty,
        });
        registry.register(YamlFormatter);
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_options(&OutputOptions::default())
    }
}
