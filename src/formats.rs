//! Output formats for parsed trees

pub mod registry;
pub mod serialized;
pub mod sexp;
pub mod treeviz;

pub use registry::{FormatError, FormatRegistry, Formatter};
pub use serialized::{to_json, to_yaml};
pub use sexp::{to_sexp_pretty, to_sexp_string};
pub use treeviz::{to_treeviz_str, to_treeviz_str_with_width};
