//! Testing utilities for tree assertions
//!
//! A fluent API for asserting on parsed nodes. Failures name the path to the
//! node that failed, e.g. `root.children[1].children[0]`.
//!
//! ```rust,ignore
//! let node = parse("(call_expr nothrow (arg x=1))").unwrap();
//!
//! assert_node(&node)
//!     .head("call_expr")
//!     .flag("nothrow")
//!     .child(0, |arg| {
//!         arg.head("arg").attribute_text("x", "1");
//!     });
//! ```

mod assertions;

pub use assertions::{assert_node, NodeAssertion};
