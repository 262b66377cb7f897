// src/error.rs
use loadplan_xmlpath::XmlPathError;
use thiserror::Error;

/// Everything that can stop a load plan from being transformed.
///
/// Path misses are not errors: they surface as `null` fields in the output.
#[derive(Error, Debug)]
pub enum TransformError {
    #[error("XML input error: {0}")]
    Xml(#[from] XmlPathError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid mapping rule for '{output_path}': {message}")]
    Mapping {
        output_path: String,
        message: String,
    },
}

impl TransformError {
    pub(crate) fn mapping(output_path: &str, message: impl Into<String>) -> Self {
        TransformError::Mapping {
            output_path: output_path.to_string(),
            message: message.into(),
        }
    }
}
