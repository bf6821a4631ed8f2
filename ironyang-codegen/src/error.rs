//! Error types for output generation.

use thiserror::Error;

/// Error type for generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema loading error.
    #[error("schema parse error: {0}")]
    Parse(#[from] ironyang_schema::ParseError),

    /// Schema validation error.
    #[error("schema error: {0}")]
    Schema(#[from] ironyang_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No formatter registered under the requested name.
    #[error("unknown format '{name}' (available: {available})")]
    UnknownFormat {
        /// Requested name.
        name: String,
        /// Comma separated list of registered names.
        available: String,
    },
}

impl CodegenError {
    /// Creates an unknown format error listing the registered formatters.
    pub fn unknown_format(name: impl Into<String>) -> Self {
        let available = crate::formatter::FORMATTERS
            .iter()
            .map(|f| f.name)
            .collect::<Vec<_>>()
            .join(", ");
        Self::UnknownFormat {
            name: name.into(),
            available,
        }
    }
}
