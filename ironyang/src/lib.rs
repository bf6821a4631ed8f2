//! # IronYANG
//!
//! Converts YANG schema trees into Thrift-style interface definitions.
//!
//! ## Quick Start
//!
//! ```ignore
//! use ironyang::prelude::*;
//!
//! let entries = parse_yin(&std::fs::read_to_string("device.yin")?)?;
//! print!("{}", ThriftGenerator::new(&entries).generate());
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Entry tree model, YIN loading and validation
//! - [`codegen`] - Flattening, type mapping and the formatter registry
//! - [`cli`] - The `ironyang` command line

pub mod cli;
pub mod prelude;

/// Entry tree model, YIN loading and validation.
pub mod schema {
    pub use ironyang_schema::*;
}

/// Output formatters.
pub mod codegen {
    pub use ironyang_codegen::*;
}

pub use ironyang_codegen::{CodegenError, Formatter, ThriftGenerator, find_formatter, flatten};
pub use ironyang_schema::{Entry, EntryKind, ParseError, SchemaError, TypeKind, parse_yin};
