use thiserror::Error;

#[derive(Error, Debug)]
pub enum XmlPathError {
    #[error("XML parse error: {0}")]
    XmlParse(#[from] roxmltree::Error),

    #[error("Path expression is empty")]
    EmptyPath,

    #[error("Path '{path}' has an empty segment at position {position}")]
    EmptySegment { path: String, position: usize },
}
