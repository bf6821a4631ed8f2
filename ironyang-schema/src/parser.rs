//! YIN schema loader.
//!
//! This module reads YIN documents (the XML encoding of YANG modules) and
//! builds the [`Entry`] tree consumed by the formatters. Loading happens in
//! two passes: the XML is first read into a generic statement tree, then the
//! data definition statements are turned into entries with typedefs and
//! groupings resolved.

use crate::entry::{Entry, ListAttr, SourceLocation};
use crate::error::ParseError;
use crate::types::{TypeKind, YangType};
use quick_xml::Reader;
use quick_xml::escape::{EscapeError, resolve_predefined_entity, unescape};
use quick_xml::events::{BytesRef, BytesStart, Event};
use std::collections::HashMap;
use std::path::Path;

/// Maximum typedef chain followed before giving up.
const MAX_TYPEDEF_DEPTH: usize = 32;

/// One YIN element: a YANG statement with its argument.
#[derive(Debug, Clone, Default)]
struct Statement {
    keyword: String,
    argument: Option<String>,
    line: usize,
    column: usize,
    children: Vec<Statement>,
    text: String,
}

impl Statement {
    fn arg(&self) -> Result<&str, ParseError> {
        self.argument
            .as_deref()
            .ok_or_else(|| ParseError::missing_arg(&self.keyword, "name", self.line))
    }

    fn child(&self, keyword: &str) -> Option<&Statement> {
        self.children.iter().find(|c| c.keyword == keyword)
    }

    fn child_arg(&self, keyword: &str) -> Option<&str> {
        self.child(keyword).and_then(|c| c.argument.as_deref())
    }
}

/// Byte offset to line/column translation.
struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            text.bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self { line_starts }
    }

    fn locate(&self, offset: usize) -> (usize, usize) {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx - 1,
        };
        (line + 1, offset - self.line_starts[line] + 1)
    }
}

/// Parses a YIN document from a string.
///
/// # Arguments
/// * `xml` - YIN document content
///
/// # Returns
/// One root entry per module in the document.
///
/// # Errors
/// Returns `ParseError` if the XML is malformed or the module is inconsistent.
pub fn parse_yin(xml: &str) -> Result<Vec<Entry>, ParseError> {
    parse_yin_with_file(xml, None)
}

/// Parses a YIN document, recording `file` in every source location.
///
/// # Errors
/// Returns `ParseError` if the XML is malformed or the module is inconsistent.
pub fn parse_yin_with_file(xml: &str, file: Option<&str>) -> Result<Vec<Entry>, ParseError> {
    let roots = read_statements(xml)?;

    let mut entries = Vec::new();
    for root in &roots {
        match root.keyword.as_str() {
            "module" | "submodule" => {
                let builder = EntryBuilder::new(root, file);
                let entry = builder.build_module(root)?;
                tracing::debug!(
                    "Loaded {} '{}' with {} top-level nodes",
                    root.keyword,
                    entry.name,
                    entry.children.len()
                );
                entries.push(entry);
            }
            other => {
                return Err(ParseError::structure(format!(
                    "expected module or submodule, found '{}'",
                    other
                )));
            }
        }
    }

    if entries.is_empty() {
        return Err(ParseError::structure("no module element found"));
    }

    Ok(entries)
}

/// Parses a YIN document from a file.
///
/// # Errors
/// Returns `ParseError` if reading or parsing fails.
pub fn parse_yin_file(path: &Path) -> Result<Vec<Entry>, ParseError> {
    let xml = std::fs::read_to_string(path)?;
    let file = path.display().to_string();
    parse_yin_with_file(&xml, Some(&file))
}

/// Reads the XML into a statement tree.
fn read_statements(xml: &str) -> Result<Vec<Statement>, ParseError> {
    let mut reader = Reader::from_str(xml);
    let index = LineIndex::new(xml);
    let bytes = xml.as_bytes();

    let mut roots = Vec::new();
    let mut stack: Vec<Statement> = Vec::new();
    let mut yin_prefix: Option<Option<String>> = None;
    let mut skip_depth = 0usize;
    let mut buf = Vec::new();

    loop {
        let mut offset = usize::try_from(reader.buffer_position()).unwrap_or(bytes.len());
        while bytes.get(offset).is_some_and(u8::is_ascii_whitespace) {
            offset += 1;
        }

        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                if skip_depth > 0 {
                    skip_depth += 1;
                } else if let Some(stmt) = open_statement(e, &mut yin_prefix, &index, offset)? {
                    stack.push(stmt);
                } else {
                    skip_depth = 1;
                }
            }
            Ok(Event::Empty(ref e)) => {
                if skip_depth == 0 {
                    if let Some(stmt) = open_statement(e, &mut yin_prefix, &index, offset)? {
                        close_statement(stmt, &mut stack, &mut roots);
                    }
                }
            }
            Ok(Event::End(_)) => {
                if skip_depth > 0 {
                    skip_depth -= 1;
                } else if let Some(stmt) = stack.pop() {
                    close_statement(stmt, &mut stack, &mut roots);
                }
            }
            Ok(Event::Text(ref t)) => {
                if skip_depth == 0 {
                    if let Some(top) = stack.last_mut() {
                        top.text.push_str(&unescape(&t.decode()?)?);
                    }
                }
            }
            Ok(Event::CData(ref t)) => {
                if skip_depth == 0 {
                    if let Some(top) = stack.last_mut() {
                        top.text.push_str(&t.decode()?);
                    }
                }
            }
            Ok(Event::GeneralRef(ref r)) => {
                if skip_depth == 0 {
                    if let Some(top) = stack.last_mut() {
                        push_reference(&mut top.text, r)?;
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    if !stack.is_empty() {
        return Err(ParseError::structure("unexpected end of document"));
    }

    Ok(roots)
}

/// Builds a statement from a start tag, or `None` for extension elements.
fn open_statement(
    e: &BytesStart<'_>,
    yin_prefix: &mut Option<Option<String>>,
    index: &LineIndex,
    offset: usize,
) -> Result<Option<Statement>, ParseError> {
    let name_bytes = e.name().as_ref().to_vec();
    let name = std::str::from_utf8(&name_bytes)?;
    let (prefix, keyword) = match name.split_once(':') {
        Some((p, k)) => (Some(p.to_string()), k),
        None => (None, name),
    };

    // The root element fixes the prefix used for YIN statements.
    let expected = yin_prefix.get_or_insert_with(|| prefix.clone());
    if *expected != prefix {
        tracing::debug!("Skipping extension element '{}'", name);
        return Ok(None);
    }

    let mut argument = None;
    for attr in e.attributes().flatten() {
        let key = std::str::from_utf8(attr.key.as_ref())?;
        if key == "xmlns" || key.starts_with("xmlns:") {
            continue;
        }
        if argument.is_none() {
            argument = Some(attr.unescape_value()?.into_owned());
        }
    }

    let (line, column) = index.locate(offset);
    Ok(Some(Statement {
        keyword: keyword.to_string(),
        argument,
        line,
        column,
        ..Statement::default()
    }))
}

/// Attaches a finished statement to its parent.
///
/// Attribute-less `text` and `value` elements carry the argument of their
/// parent (`description`, `error-message` and friends) instead of being
/// statements. An enum's `<value value=".."/>` is a real statement.
fn close_statement(stmt: Statement, stack: &mut [Statement], roots: &mut Vec<Statement>) {
    match stack.last_mut() {
        Some(parent)
            if stmt.argument.is_none() && (stmt.keyword == "text" || stmt.keyword == "value") =>
        {
            parent.argument = Some(stmt.text.trim().to_string());
        }
        Some(parent) => parent.children.push(stmt),
        None => roots.push(stmt),
    }
}

/// Appends the text a character or predefined entity reference stands for.
fn push_reference(text: &mut String, r: &BytesRef<'_>) -> Result<(), ParseError> {
    if let Some(ch) = r.resolve_char_ref()? {
        text.push(ch);
        return Ok(());
    }

    let name = r.decode()?;
    let resolved = resolve_predefined_entity(&name)
        .ok_or_else(|| EscapeError::UnrecognizedEntity(0..name.len(), name.to_string()))?;
    text.push_str(resolved);
    Ok(())
}

/// Strips a `prefix:` from a YANG identifier reference.
fn local_name(name: &str) -> &str {
    name.rsplit_once(':').map_or(name, |(_, local)| local)
}

/// Turns the statements of one module into entries.
struct EntryBuilder<'a> {
    typedefs: HashMap<&'a str, &'a Statement>,
    groupings: HashMap<&'a str, &'a Statement>,
    file: Option<String>,
}

impl<'a> EntryBuilder<'a> {
    fn new(module: &'a Statement, file: Option<&str>) -> Self {
        let mut builder = Self {
            typedefs: HashMap::new(),
            groupings: HashMap::new(),
            file: file.map(str::to_string),
        };
        builder.collect_definitions(module);
        builder
    }

    /// Indexes every typedef and grouping in the module by name.
    fn collect_definitions(&mut self, stmt: &'a Statement) {
        for child in &stmt.children {
            if let Some(name) = child.argument.as_deref() {
                match child.keyword.as_str() {
                    "typedef" => {
                        self.typedefs.entry(name).or_insert(child);
                    }
                    "grouping" => {
                        self.groupings.entry(name).or_insert(child);
                    }
                    _ => {}
                }
            }
            self.collect_definitions(child);
        }
    }

    fn build_module(&self, module: &Statement) -> Result<Entry, ParseError> {
        let mut entry = self.new_entry(Entry::container(module.arg()?), module);
        self.build_children(&mut entry, module, &mut Vec::new())?;
        Ok(entry)
    }

    fn new_entry(&self, entry: Entry, stmt: &Statement) -> Entry {
        let mut entry =
            entry.with_source(SourceLocation::new(self.file.clone(), stmt.line, stmt.column));
        entry.description = stmt
            .child_arg("description")
            .filter(|d| !d.is_empty())
            .map(str::to_string);
        entry
    }

    /// Adds the data nodes defined under `stmt` to `parent`.
    fn build_children(
        &self,
        parent: &mut Entry,
        stmt: &Statement,
        uses_stack: &mut Vec<String>,
    ) -> Result<(), ParseError> {
        for child in &stmt.children {
            let entry = match child.keyword.as_str() {
                "container" => {
                    let mut entry = self.new_entry(Entry::container(child.arg()?), child);
                    self.build_children(&mut entry, child, uses_stack)?;
                    entry
                }
                "list" => {
                    let mut entry = self
                        .new_entry(Entry::container(child.arg()?), child)
                        .with_list(self.list_attr(child)?);
                    self.build_children(&mut entry, child, uses_stack)?;
                    entry
                }
                "leaf" => self.new_entry(
                    Entry::leaf_with_type(child.arg()?, self.leaf_type(child)?),
                    child,
                ),
                "leaf-list" => self
                    .new_entry(Entry::leaf_with_type(child.arg()?, self.leaf_type(child)?), child)
                    .with_list(self.list_attr(child)?),
                "rpc" | "action" => self.new_entry(Entry::rpc(child.arg()?), child),
                "choice" | "case" => {
                    self.build_children(parent, child, uses_stack)?;
                    continue;
                }
                "uses" => {
                    self.expand_uses(parent, child, uses_stack)?;
                    continue;
                }
                "anydata" | "anyxml" | "notification" | "augment" | "deviation" | "extension" => {
                    tracing::debug!(
                        "Skipping unsupported statement '{}' at line {}",
                        child.keyword,
                        child.line
                    );
                    continue;
                }
                _ => continue,
            };

            let name = entry.name.clone();
            if parent.add_child(entry).is_some() {
                return Err(ParseError::duplicate(&parent.name, name));
            }
        }
        Ok(())
    }

    /// Inlines the data nodes of a grouping.
    fn expand_uses(
        &self,
        parent: &mut Entry,
        uses: &Statement,
        uses_stack: &mut Vec<String>,
    ) -> Result<(), ParseError> {
        let name = local_name(uses.arg()?);
        let grouping = self
            .groupings
            .get(name)
            .ok_or_else(|| ParseError::UnknownGrouping {
                name: name.to_string(),
                line: uses.line,
            })?;

        if uses_stack.iter().any(|g| g == name) {
            let mut path = uses_stack.join(" -> ");
            path.push_str(" -> ");
            path.push_str(name);
            return Err(ParseError::RecursiveGrouping { path });
        }

        uses_stack.push(name.to_string());
        let result = self.build_children(parent, grouping, uses_stack);
        uses_stack.pop();
        result
    }

    fn leaf_type(&self, leaf: &Statement) -> Result<YangType, ParseError> {
        let type_stmt = leaf
            .child("type")
            .ok_or_else(|| ParseError::missing_arg(&leaf.keyword, "type", leaf.line))?;
        let name = type_stmt.arg()?;
        Ok(YangType::new(name, self.resolve_kind(name, 0)))
    }

    /// Follows typedefs down to a built-in type.
    fn resolve_kind(&self, name: &str, depth: usize) -> TypeKind {
        if let Some(kind) = TypeKind::from_yang_name(name) {
            return kind;
        }
        if depth >= MAX_TYPEDEF_DEPTH {
            tracing::debug!("Typedef chain too deep at '{}'", name);
            return TypeKind::None;
        }

        let base = self
            .typedefs
            .get(local_name(name))
            .and_then(|typedef| typedef.child_arg("type"));
        match base {
            Some(base) => self.resolve_kind(base, depth + 1),
            None => {
                tracing::debug!("Unresolved type '{}'", name);
                TypeKind::None
            }
        }
    }

    fn list_attr(&self, stmt: &Statement) -> Result<ListAttr, ParseError> {
        let mut attr = ListAttr {
            key: stmt.child_arg("key").map(str::to_string),
            ..ListAttr::default()
        };

        if let Some(min) = stmt.child("min-elements") {
            let value = min.arg()?;
            attr.min_elements = value
                .parse()
                .map_err(|_| ParseError::invalid_arg("min-elements", value, min.line))?;
        }

        if let Some(max) = stmt.child("max-elements") {
            let value = max.arg()?;
            attr.max_elements = match value {
                "unbounded" => None,
                _ => Some(
                    value
                        .parse()
                        .map_err(|_| ParseError::invalid_arg("max-elements", value, max.line))?,
                ),
            };
        }

        attr.ordered_by_user = stmt.child_arg("ordered-by") == Some("user");
        Ok(attr)
    }
}
