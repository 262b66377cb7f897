//! Defines the Abstract Syntax Tree (AST) for dotted XML path expressions.
use crate::error::XmlPathError;
use std::fmt;
use std::str::FromStr;

/// A single step of a path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// A child element lookup by local name (e.g., `LoadNumber`).
    Child(String),
    /// An attribute read on the current element (e.g., `@_id`). Always terminal.
    Attribute(String),
    /// A child element filtered by an attribute equality test (e.g., `Stop[@type='pickup']`).
    Predicate {
        element: String,
        attribute: String,
        value: String,
    },
}

/// A parsed path expression, evaluated left to right against a tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathExpression {
    source: String,
    segments: Vec<PathSegment>,
}

impl PathExpression {
    pub(crate) fn new(source: &str, segments: Vec<PathSegment>) -> Self {
        Self {
            source: source.to_string(),
            segments,
        }
    }

    pub fn parse(input: &str) -> Result<Self, XmlPathError> {
        crate::parser::parse_path(input)
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// The expression text as it was parsed, surrounding whitespace removed.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl FromStr for PathExpression {
    type Err = XmlPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PathExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
