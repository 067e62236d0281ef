use thiserror::Error;

use crate::element::ElementId;

/// Errors raised by document and session operations
#[derive(Debug, Error)]
pub enum BuilderError {
    /// The property name is not one of the properties of the element's kind
    #[error("Property `{property}` is not defined for {kind} elements")]
    InvalidProperty { kind: String, property: String },

    /// The operation referenced an element that is not in the document
    #[error("Element {0} not found")]
    NotFound(ElementId),

    /// Reading a config file or writing an export failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A config file could not be parsed
    #[error("Invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for builder operations
pub type BuilderResult<T> = Result<T, BuilderError>;
