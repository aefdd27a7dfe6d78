//! Element-specific parsers
//!
//! Each element of the dump grammar has its own module with its parser and tests.

pub mod attributes;
pub mod node;
