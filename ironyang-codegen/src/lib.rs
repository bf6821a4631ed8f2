//! # IronYANG Codegen
//!
//! Output formatters for YANG schema trees.
//!
//! This crate provides:
//! - Flattening of entry trees into independent struct definitions
//! - Thrift struct generation with YANG to Thrift type mapping
//! - Name normalization for generated identifiers
//! - A registry of formatters selectable by name

pub mod error;
pub mod flatten;
pub mod formatter;
pub mod names;
pub mod thrift;

pub use error::CodegenError;
pub use flatten::flatten;
pub use formatter::{FORMATTERS, Formatter, find_formatter};
pub use thrift::{StructGenerator, ThriftGenerator};

/// Generates Thrift structs from a YIN document string.
///
/// # Arguments
/// * `xml` - YIN document content
///
/// # Returns
/// Generated Thrift IDL as a string.
///
/// # Errors
/// Returns `CodegenError` if the document cannot be loaded.
pub fn generate_from_yin(xml: &str) -> Result<String, CodegenError> {
    let entries = ironyang_schema::parse_yin(xml)?;
    Ok(ThriftGenerator::new(&entries).generate())
}

/// Generates Thrift structs from a YIN file.
///
/// # Arguments
/// * `path` - Path to the YIN document
///
/// # Returns
/// Generated Thrift IDL as a string.
///
/// # Errors
/// Returns `CodegenError` if reading or loading fails.
pub fn generate_from_file(path: &std::path::Path) -> Result<String, CodegenError> {
    let entries = ironyang_schema::parse_yin_file(path)?;
    Ok(ThriftGenerator::new(&entries).generate())
}
