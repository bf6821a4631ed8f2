//! Thrift IDL generation.

pub mod structs;
pub mod types;

pub use structs::StructGenerator;
pub use types::{PLACEHOLDER_PREFIX, is_placeholder, thrift_type};

use crate::flatten::flatten;
use ironyang_schema::Entry;
use std::io::{self, Write};

/// Generator for the Thrift rendering of a set of schema trees.
pub struct ThriftGenerator<'a> {
    roots: &'a [Entry],
}

impl<'a> ThriftGenerator<'a> {
    /// Creates a new Thrift generator over the given roots.
    #[must_use]
    pub fn new(roots: &'a [Entry]) -> Self {
        Self { roots }
    }

    /// Generates the structs of every root, in flatten order.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();

        for root in self.roots {
            for entry in flatten(root) {
                output.push_str(&StructGenerator::new(entry).generate());
            }
        }

        output
    }

    /// Writes the structs of every root to `w`, one struct per write.
    ///
    /// # Errors
    /// Returns any error reported by the writer.
    pub fn write_to(&self, w: &mut dyn Write) -> io::Result<()> {
        for root in self.roots {
            for entry in flatten(root) {
                let text = StructGenerator::new(entry).generate();
                if !text.is_empty() {
                    w.write_all(text.as_bytes())?;
                }
            }
        }
        Ok(())
    }
}

/// Formatter entry point: writes `entries` as Thrift structs.
///
/// # Errors
/// Returns any error reported by the writer.
pub fn format_thrift(w: &mut dyn Write, entries: &[Entry]) -> io::Result<()> {
    ThriftGenerator::new(entries).write_to(w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironyang_schema::TypeKind;

    fn sample_roots() -> Vec<Entry> {
        let first = Entry::container("alpha")
            .with_child(Entry::leaf("count", TypeKind::Int32))
            .with_child(
                Entry::container("inner").with_child(Entry::leaf("flag", TypeKind::Boolean)),
            );
        let second = Entry::container("beta").with_child(Entry::leaf("name", TypeKind::String));
        vec![first, second]
    }

    #[test]
    fn test_generate_multiple_roots_in_order() {
        let roots = sample_roots();
        let output = ThriftGenerator::new(&roots).generate();

        let alpha = output.find("struct alpha {").expect("alpha");
        let inner = output.find("struct inner {").expect("inner");
        let beta = output.find("struct beta {").expect("beta");
        assert!(alpha < inner);
        assert!(inner < beta);
        assert!(output.contains("    2: optional inner inner; // \n"));
    }

    #[test]
    fn test_write_to_matches_generate() {
        let roots = sample_roots();
        let generator = ThriftGenerator::new(&roots);

        let mut buffer: Vec<u8> = Vec::new();
        generator.write_to(&mut buffer).expect("write");
        assert_eq!(String::from_utf8(buffer).expect("utf8"), generator.generate());
    }

    #[test]
    fn test_rpc_body_not_rendered() {
        let roots = vec![
            Entry::container("m")
                .with_child(Entry::leaf("uptime", TypeKind::Int64))
                .with_child(
                    Entry::rpc("reboot").with_child(Entry::leaf("delay", TypeKind::Uint32)),
                ),
        ];
        let output = ThriftGenerator::new(&roots).generate();

        assert_eq!(output, "\nstruct m {\n    1: optional i64 uptime; // \n}\n");
        assert!(!output.contains("struct reboot"));
        assert!(!output.contains("delay"));
    }

    #[test]
    fn test_generate_no_roots() {
        let output = ThriftGenerator::new(&[]).generate();
        assert!(output.is_empty());
    }

    #[test]
    fn test_format_thrift() {
        let roots = sample_roots();
        let mut buffer: Vec<u8> = Vec::new();
        format_thrift(&mut buffer, &roots).expect("write");
        let text = String::from_utf8(buffer).expect("utf8");
        assert!(text.starts_with("\nstruct alpha {\n"));
    }
}
