// src/transformer.rs
use crate::error::TransformError;
use crate::json::{JsonStyle, to_json_string};
use crate::mapping::{MappingRule, MappingTable, OutputPath, set_nested_value};
use loadplan_xmlpath::{PathExpression, TreeNode, XmlDocument, resolve_path};
use serde_json::{Map, Value};
use std::path::Path;

/// Transforms `input` with the built-in shipper load plan table, pretty-printed.
pub fn transform(input: &str) -> Result<String, TransformError> {
    TransformerBuilder::new().build()?.transform(input)
}

#[derive(Debug, Clone)]
enum FieldSource {
    Path(PathExpression),
    Constant(String),
}

#[derive(Debug, Clone)]
struct CompiledRule {
    output: OutputPath,
    source: FieldSource,
}

impl CompiledRule {
    fn compile(rule: &MappingRule) -> Result<Self, TransformError> {
        let output = OutputPath::parse(rule.output_path())?;
        let source = match rule {
            MappingRule::Direct { source_path, .. } => {
                let expr = PathExpression::parse(source_path).map_err(|e| {
                    TransformError::mapping(rule.output_path(), format!("source path: {}", e))
                })?;
                FieldSource::Path(expr)
            }
            MappingRule::Constant { constant_value, .. } => {
                FieldSource::Constant(constant_value.clone())
            }
        };
        Ok(Self { output, source })
    }
}

/// A compiled mapping table, ready to run against any number of documents.
///
/// Holds no per-document state, so one instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct Transformer {
    rules: Vec<CompiledRule>,
    style: JsonStyle,
}

impl Transformer {
    /// Compiles every rule of `table`. Malformed output or source paths are reported here
    /// rather than when a document is transformed.
    pub fn new(table: &MappingTable) -> Result<Self, TransformError> {
        let rules = table
            .rules
            .iter()
            .map(CompiledRule::compile)
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("Compiled {} mapping rules", rules.len());
        Ok(Self {
            rules,
            style: JsonStyle::default(),
        })
    }

    /// Builds the output record for an already parsed tree.
    pub fn apply<'a, N: TreeNode<'a>>(&self, root: N) -> Value {
        let mut output = Value::Object(Map::new());
        for rule in &self.rules {
            let value = match &rule.source {
                FieldSource::Path(expr) => {
                    let resolved = resolve_path(root, expr);
                    log::trace!("{} <- '{}' = {:?}", rule.output, expr, resolved);
                    resolved.map_or(Value::Null, |s| Value::String(s.into_owned()))
                }
                FieldSource::Constant(constant) => Value::String(constant.clone()),
            };
            set_nested_value(&mut output, &rule.output, value);
        }
        output
    }

    /// Parses `input` and builds the output record. Malformed XML is an error;
    /// unmatched paths become `null`.
    pub fn transform_value(&self, input: &str) -> Result<Value, TransformError> {
        let doc = XmlDocument::parse(input)?;
        Ok(self.apply(doc.root_element()))
    }

    /// Parses `input` and serializes the output record.
    pub fn transform(&self, input: &str) -> Result<String, TransformError> {
        let value = self.transform_value(input)?;
        to_json_string(&value, self.style)
    }
}

/// A builder for creating a `Transformer`.
pub struct TransformerBuilder {
    mapping: MappingTable,
    style: JsonStyle,
}

impl Default for TransformerBuilder {
    fn default() -> Self {
        Self {
            mapping: MappingTable::shipper_load_plan(),
            style: JsonStyle::default(),
        }
    }
}

impl TransformerBuilder {
    /// Creates a builder with the built-in shipper load plan table and pretty,
    /// ASCII-escaped output.
    pub fn new() -> Self {
        Default::default()
    }

    /// Replaces the mapping table.
    pub fn with_mapping(mut self, table: MappingTable) -> Self {
        self.mapping = table;
        self
    }

    /// Loads the mapping table from a JSON file.
    pub fn with_mapping_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, TransformError> {
        self.mapping = MappingTable::from_file(path)?;
        Ok(self)
    }

    /// Loads the mapping table from JSON text.
    pub fn with_mapping_json(mut self, source: &str) -> Result<Self, TransformError> {
        self.mapping = MappingTable::from_json(source)?;
        Ok(self)
    }

    /// Selects indented (default) or single-line JSON output.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.style.pretty = pretty;
        self
    }

    /// Selects `\uXXXX` escapes (default) or raw UTF-8 for non-ASCII characters.
    pub fn with_escape_non_ascii(mut self, escape: bool) -> Self {
        self.style.escape_non_ascii = escape;
        self
    }

    /// Compiles the table and creates the `Transformer`.
    pub fn build(self) -> Result<Transformer, TransformError> {
        let mut transformer = Transformer::new(&self.mapping)?;
        transformer.style = self.style;
        Ok(transformer)
    }
}
