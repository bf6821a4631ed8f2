//! Prelude module for convenient imports.
//!
//! ```ignore
//! use ironyang::prelude::*;
//! ```

pub use ironyang_schema::{
    Entry, EntryKind, ListAttr, ParseError, SchemaError, SourceLocation, TypeKind, YangType,
    parse_yin, parse_yin_file, validate_entry,
};

pub use ironyang_codegen::names::{field_name, struct_name};
pub use ironyang_codegen::thrift::thrift_type;
pub use ironyang_codegen::{
    CodegenError, FORMATTERS, Formatter, StructGenerator, ThriftGenerator, find_formatter, flatten,
};
