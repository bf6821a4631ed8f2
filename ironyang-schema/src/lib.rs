//! # IronYANG Schema
//!
//! YANG schema tree model and YIN loader.
//!
//! This crate provides:
//! - The entry tree handed to output formatters
//! - Built-in YANG type kinds
//! - A loader for YIN, the XML encoding of YANG modules
//! - Structural validation of entry trees

pub mod entry;
pub mod error;
pub mod parser;
pub mod types;
pub mod validation;

pub use entry::{Entry, EntryKind, ListAttr, SourceLocation};
pub use error::{ParseError, SchemaError};
pub use parser::{parse_yin, parse_yin_file};
pub use types::{TypeKind, YangType};
pub use validation::validate_entry;
