//! Thrift struct generation.

use super::types::thrift_type;
use crate::names::{field_name, struct_name};
use ironyang_schema::Entry;

/// Generator for the Thrift struct of a single entry.
pub struct StructGenerator<'a> {
    entry: &'a Entry,
}

impl<'a> StructGenerator<'a> {
    /// Creates a new struct generator.
    #[must_use]
    pub fn new(entry: &'a Entry) -> Self {
        Self { entry }
    }

    /// Returns the children rendered as fields, sorted by name.
    ///
    /// RPCs are never fields, and neither are containers that would not
    /// produce a struct of their own.
    #[must_use]
    pub fn fields(&self) -> Vec<&'a Entry> {
        let mut fields: Vec<&'a Entry> = self
            .entry
            .children
            .values()
            .filter(|child| {
                !child.is_rpc() && (child.is_leaf() || child.has_renderable_children())
            })
            .collect();
        fields.sort_by(|a, b| a.name.cmp(&b.name));
        fields
    }

    /// Generates the struct definition.
    ///
    /// Returns an empty string when the entry is an RPC or has no fields.
    #[must_use]
    pub fn generate(&self) -> String {
        if self.entry.is_rpc() {
            tracing::debug!("Skipping struct '{}': rpc", self.entry.name);
            return String::new();
        }

        let fields = self.fields();
        if fields.is_empty() {
            if self.entry.is_dir() {
                tracing::debug!("Skipping struct '{}': no renderable fields", self.entry.name);
            }
            return String::new();
        }

        let mut output = String::from("\n");
        if let Some(description) = non_empty(&self.entry.description) {
            push_comment(&mut output, "", description);
        }
        output.push_str(&format!("struct {} {{\n", struct_name(&self.entry.name)));

        for (index, field) in fields.iter().enumerate() {
            output.push_str(&self.generate_field(index + 1, field));
        }

        output.push_str("}\n");

        tracing::trace!(
            "Generated struct '{}' with {} fields",
            self.entry.name,
            fields.len()
        );
        output
    }

    /// Generates one field line, preceded by its description.
    fn generate_field(&self, index: usize, field: &Entry) -> String {
        let mut output = String::new();

        if let Some(description) = non_empty(&field.description) {
            push_comment(&mut output, "    ", description);
        }

        let type_token = field_type(field);
        let declared = if field.is_list() {
            format!("list<{}>", type_token)
        } else {
            format!("optional {}", type_token)
        };

        output.push_str(&format!(
            "    {}: {} {}; // {}\n",
            index,
            declared,
            field_name(&field.name),
            field.source_text()
        ));

        output
    }
}

/// Resolves the Thrift type of a field, without list wrapping.
///
/// Leaves map through the type table; anything with children refers to the
/// struct generated for it.
fn field_type(field: &Entry) -> String {
    match field.leaf_type() {
        Some(ty) if field.children.is_empty() => thrift_type(ty.kind).to_string(),
        _ => struct_name(&field.name),
    }
}

fn non_empty(text: &Option<String>) -> Option<&str> {
    text.as_deref().filter(|t| !t.is_empty())
}

/// Appends `text` as `// ` comment lines, one per input line.
fn push_comment(output: &mut String, indent: &str, text: &str) {
    for line in text.lines() {
        output.push_str(indent);
        output.push_str("// ");
        output.push_str(line);
        output.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironyang_schema::{ListAttr, SourceLocation, TypeKind};

    fn device() -> Entry {
        Entry::container("Device")
            .with_child(
                Entry::leaf("host-name", TypeKind::String)
                    .with_source(SourceLocation::new(Some("dev.yin".to_string()), 4, 5)),
            )
            .with_child(
                Entry::leaf("ip-addr", TypeKind::Uint16)
                    .with_list(ListAttr::default())
                    .with_source(SourceLocation::new(Some("dev.yin".to_string()), 7, 5)),
            )
    }

    #[test]
    fn test_generate_device_struct() {
        let entry = device();
        let output = StructGenerator::new(&entry).generate();

        // Sorting is bytewise, so "host-name" precedes "ip-addr".
        assert_eq!(
            output,
            "\nstruct Device {\n\
             \x20   1: optional string host_name; // dev.yin:4:5\n\
             \x20   2: list<TODO-uint16> ip_addr; // dev.yin:7:5\n\
             }\n"
        );
    }

    #[test]
    fn test_fields_sorted_independent_of_insertion_order() {
        let forward = Entry::container("s")
            .with_child(Entry::leaf("b", TypeKind::Int8))
            .with_child(Entry::leaf("a", TypeKind::Int16))
            .with_child(Entry::leaf("c", TypeKind::Int32));
        let backward = Entry::container("s")
            .with_child(Entry::leaf("c", TypeKind::Int32))
            .with_child(Entry::leaf("a", TypeKind::Int16))
            .with_child(Entry::leaf("b", TypeKind::Int8));

        let first = StructGenerator::new(&forward).generate();
        let second = StructGenerator::new(&backward).generate();
        assert_eq!(first, second);
        assert!(first.contains("    1: optional i16 a; // \n"));
        assert!(first.contains("    2: optional byte b; // \n"));
        assert!(first.contains("    3: optional i32 c; // \n"));
    }

    #[test]
    fn test_field_numbering_skips_rpcs_without_gaps() {
        let entry = Entry::container("s")
            .with_child(Entry::leaf("a", TypeKind::String))
            .with_child(Entry::rpc("b-reset"))
            .with_child(Entry::leaf("c", TypeKind::String));
        let output = StructGenerator::new(&entry).generate();

        assert!(output.contains("    1: optional string a;"));
        assert!(output.contains("    2: optional string c;"));
        assert!(!output.contains("b_reset"));
        assert!(!output.contains("    3:"));
    }

    #[test]
    fn test_only_rpc_children_produce_nothing() {
        let entry = Entry::container("ops").with_child(Entry::rpc("reboot"));
        assert!(StructGenerator::new(&entry).generate().is_empty());
    }

    #[test]
    fn test_rpc_with_children_produces_nothing() {
        let reboot = Entry::rpc("reboot").with_child(Entry::leaf("delay", TypeKind::Uint32));
        assert!(StructGenerator::new(&reboot).generate().is_empty());
    }

    #[test]
    fn test_leaf_and_empty_container_produce_nothing() {
        let leaf = Entry::leaf("x", TypeKind::String);
        assert!(StructGenerator::new(&leaf).generate().is_empty());

        let empty = Entry::container("empty");
        assert!(StructGenerator::new(&empty).generate().is_empty());
    }

    #[test]
    fn test_container_field_references_struct() {
        let entry = Entry::container("system")
            .with_child(
                Entry::container("ntp-server")
                    .with_list(ListAttr::default())
                    .with_child(Entry::leaf("address", TypeKind::String)),
            )
            .with_child(
                Entry::container("clock").with_child(Entry::leaf("tz", TypeKind::String)),
            );
        let output = StructGenerator::new(&entry).generate();

        assert!(output.contains("    1: optional clock clock; // \n"));
        assert!(output.contains("    2: list<ntp_server> ntp_server; // \n"));
    }

    #[test]
    fn test_empty_and_rpc_only_containers_are_not_fields() {
        let entry = Entry::container("s")
            .with_child(Entry::container("nothing"))
            .with_child(Entry::container("ops").with_child(Entry::rpc("go")))
            .with_child(Entry::leaf("value", TypeKind::Int64));
        let output = StructGenerator::new(&entry).generate();

        assert!(output.contains("    1: optional i64 value;"));
        assert!(!output.contains("nothing"));
        assert!(!output.contains("ops"));
    }

    #[test]
    fn test_struct_description_comment() {
        let entry = device().with_description("Network device.\nManaged remotely.");
        let output = StructGenerator::new(&entry).generate();
        assert!(
            output.starts_with("\n// Network device.\n// Managed remotely.\nstruct Device {\n")
        );
    }

    #[test]
    fn test_field_description_comment() {
        let entry = Entry::container("s").with_child(
            Entry::leaf("mtu", TypeKind::Uint32).with_description("Maximum\ntransmission unit."),
        );
        let output = StructGenerator::new(&entry).generate();
        assert!(output.contains(
            "struct s {\n    // Maximum\n    // transmission unit.\n    \
             1: optional TODO-uint32 mtu; // \n}\n"
        ));
    }

    #[test]
    fn test_empty_description_emits_no_comment() {
        let entry = Entry::container("s")
            .with_description("")
            .with_child(Entry::leaf("x", TypeKind::Boolean).with_description(""));
        let output = StructGenerator::new(&entry).generate();
        assert_eq!(output, "\nstruct s {\n    1: optional bool x; // \n}\n");
    }

    #[test]
    fn test_struct_name_normalized_field_name_hyphens_only() {
        let entry = Entry::container("if.stats-v2")
            .with_child(Entry::leaf("rx.bytes-total", TypeKind::Int64));
        let output = StructGenerator::new(&entry).generate();
        assert!(output.contains("struct if_stats_v2 {"));
        assert!(output.contains(" rx.bytes_total; "));
    }

    #[test]
    fn test_malformed_leaf_with_children_is_struct_reference() {
        let odd =
            Entry::leaf("odd", TypeKind::String).with_child(Entry::leaf("inner", TypeKind::Int8));
        let entry = Entry::container("s").with_child(odd);
        let output = StructGenerator::new(&entry).generate();
        assert!(output.contains("    1: optional odd odd;"));
    }

    #[test]
    fn test_unresolved_type_placeholder() {
        let entry = Entry::container("s").with_child(Entry::leaf("addr", TypeKind::None));
        let output = StructGenerator::new(&entry).generate();
        assert!(output.contains("    1: optional TODO-none addr;"));
    }
}
