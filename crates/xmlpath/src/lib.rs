//! Dotted path expressions over read-only XML element trees.
//!
//! A path such as `Plan.Stops.Stop[@type='drop'].StopNumber` walks element children by
//! local name, may filter a step by one attribute equality test, and may end in an
//! attribute read (`@_id`). Paths written without namespaces match documents whose
//! root declares one. Resolution never fails: any miss yields `None`.

pub mod ast;
pub mod datasource;
pub mod engine;
pub mod error;
mod parser;

// --- Public API ---
pub use ast::{PathExpression, PathSegment};
pub use datasource::{QName, TreeNode, XmlDocument};
pub use engine::{resolve, resolve_path};
pub use error::XmlPathError;
pub use parser::parse_path;
