//! Error types for YIN loading and entry validation.

use thiserror::Error;

/// Error type for YIN loading operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// XML parsing error.
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Missing required argument.
    #[error("missing argument '{argument}' on statement '{statement}' at line {line}")]
    MissingArgument {
        /// Statement keyword.
        statement: String,
        /// Argument (attribute) name.
        argument: String,
        /// Line of the statement.
        line: usize,
    },

    /// Invalid argument value.
    #[error("invalid value '{value}' for '{statement}' at line {line}")]
    InvalidArgument {
        /// Statement keyword.
        statement: String,
        /// Invalid value.
        value: String,
        /// Line of the statement.
        line: usize,
    },

    /// Duplicate sibling definition.
    #[error("duplicate node '{name}' in '{parent}'")]
    DuplicateNode {
        /// Parent node name.
        parent: String,
        /// Name of the duplicate.
        name: String,
    },

    /// Unknown grouping reference.
    #[error("unknown grouping '{name}' referenced at line {line}")]
    UnknownGrouping {
        /// Grouping name.
        name: String,
        /// Line of the `uses` statement.
        line: usize,
    },

    /// Grouping that uses itself.
    #[error("recursive grouping: {path}")]
    RecursiveGrouping {
        /// Chain of grouping names.
        path: String,
    },

    /// Invalid document structure.
    #[error("invalid YIN structure: {message}")]
    InvalidStructure {
        /// Error message.
        message: String,
    },

    /// Entity or character reference that cannot be resolved.
    #[error("XML escape error: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),

    /// Text that cannot be decoded.
    #[error("XML encoding error: {0}")]
    Encoding(#[from] quick_xml::encoding::EncodingError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Error type for entry tree validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Leaf that also has children.
    #[error("leaf '{path}' has {count} children")]
    LeafWithChildren {
        /// Path of the leaf.
        path: String,
        /// Number of children.
        count: usize,
    },

    /// RPC that has children.
    #[error("rpc '{path}' has {count} children")]
    RpcWithChildren {
        /// Path of the RPC.
        path: String,
        /// Number of children.
        count: usize,
    },

    /// Child stored under a key that differs from its name.
    #[error("child '{name}' of '{path}' is stored under key '{key}'")]
    MismatchedKey {
        /// Path of the parent.
        path: String,
        /// Map key.
        key: String,
        /// Child name.
        name: String,
    },
}

impl ParseError {
    /// Creates a missing argument error.
    pub fn missing_arg(
        statement: impl Into<String>,
        argument: impl Into<String>,
        line: usize,
    ) -> Self {
        Self::MissingArgument {
            statement: statement.into(),
            argument: argument.into(),
            line,
        }
    }

    /// Creates an invalid argument error.
    pub fn invalid_arg(
        statement: impl Into<String>,
        value: impl Into<String>,
        line: usize,
    ) -> Self {
        Self::InvalidArgument {
            statement: statement.into(),
            value: value.into(),
            line,
        }
    }

    /// Creates a duplicate node error.
    pub fn duplicate(parent: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateNode {
            parent: parent.into(),
            name: name.into(),
        }
    }

    /// Creates an invalid structure error.
    pub fn structure(message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            message: message.into(),
        }
    }
}
