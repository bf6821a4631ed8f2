//! Formatter registry.
//!
//! Each output format registers under a stable name with a one-line help
//! string; the command line selects one by name.

use crate::error::CodegenError;
use ironyang_schema::Entry;
use std::io::{self, Write};

/// A named output format.
#[derive(Debug, Clone, Copy)]
pub struct Formatter {
    /// Name used to select the format.
    pub name: &'static str,
    /// One-line description.
    pub help: &'static str,
    /// Writes the given module trees.
    pub format: fn(&mut dyn Write, &[Entry]) -> io::Result<()>,
}

impl Formatter {
    /// Runs the formatter over `entries`.
    ///
    /// # Errors
    /// Returns any error reported by the writer.
    pub fn run(&self, w: &mut dyn Write, entries: &[Entry]) -> io::Result<()> {
        (self.format)(w, entries)
    }
}

/// All registered formatters.
pub static FORMATTERS: &[Formatter] = &[Formatter {
    name: "thrift",
    help: "display tree in a thrift format",
    format: crate::thrift::format_thrift,
}];

/// Looks up a formatter by name.
#[must_use]
pub fn find_formatter(name: &str) -> Option<&'static Formatter> {
    FORMATTERS.iter().find(|f| f.name == name)
}

/// Looks up a formatter by name, failing with the list of known names.
///
/// # Errors
/// Returns `CodegenError::UnknownFormat` if no formatter has that name.
pub fn formatter(name: &str) -> Result<&'static Formatter, CodegenError> {
    find_formatter(name).ok_or_else(|| CodegenError::unknown_format(name))
}
