//! Schema entry tree.
//!
//! An [`Entry`] is one node of a parsed YANG module: a leaf carrying a type,
//! a container (or list) holding children, or an RPC/action. Formatters read
//! the tree; nothing in this workspace mutates it after loading.

use crate::types::{TypeKind, YangType};
use indexmap::IndexMap;
use std::fmt;

/// Discriminant of an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    /// Leaf or leaf-list with its type.
    Leaf(YangType),
    /// Container, list or module.
    Container,
    /// RPC or action.
    Rpc,
}

/// List attributes of a `list` or `leaf-list` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListAttr {
    /// Key leaf names (space separated in YANG).
    pub key: Option<String>,
    /// Minimum number of instances.
    pub min_elements: u64,
    /// Maximum number of instances (`None` for unbounded).
    pub max_elements: Option<u64>,
    /// True for `ordered-by user`.
    pub ordered_by_user: bool,
}

/// Where an entry was defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Source file, if known.
    pub file: Option<String>,
    /// 1-based line.
    pub line: usize,
    /// 1-based column.
    pub column: usize,
}

impl SourceLocation {
    /// Creates a source location.
    #[must_use]
    pub fn new(file: Option<String>, line: usize, column: usize) -> Self {
        Self { file, line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{}:{}:{}", file, self.line, self.column),
            None => write!(f, "{}:{}", self.line, self.column),
        }
    }
}

/// One node of the schema tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Identifier, unique among siblings.
    pub name: String,
    /// Documentation string.
    pub description: Option<String>,
    /// Entry kind.
    pub kind: EntryKind,
    /// Set on lists and leaf-lists.
    pub list_attr: Option<ListAttr>,
    /// Children by name, in definition order.
    pub children: IndexMap<String, Entry>,
    /// Provenance, used for trailing comments.
    pub source: Option<SourceLocation>,
}

impl Entry {
    fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            description: None,
            kind,
            list_attr: None,
            children: IndexMap::new(),
            source: None,
        }
    }

    /// Creates an empty container entry.
    #[must_use]
    pub fn container(name: impl Into<String>) -> Self {
        Self::new(name, EntryKind::Container)
    }

    /// Creates a leaf entry of a built-in type.
    #[must_use]
    pub fn leaf(name: impl Into<String>, kind: TypeKind) -> Self {
        Self::new(name, EntryKind::Leaf(YangType::builtin(kind)))
    }

    /// Creates a leaf entry with an explicit type reference.
    #[must_use]
    pub fn leaf_with_type(name: impl Into<String>, ty: YangType) -> Self {
        Self::new(name, EntryKind::Leaf(ty))
    }

    /// Creates an RPC entry.
    #[must_use]
    pub fn rpc(name: impl Into<String>) -> Self {
        Self::new(name, EntryKind::Rpc)
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Marks the entry as a list (or leaf-list).
    #[must_use]
    pub fn with_list(mut self, list_attr: ListAttr) -> Self {
        self.list_attr = Some(list_attr);
        self
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: SourceLocation) -> Self {
        self.source = Some(source);
        self
    }

    /// Adds a child, returning the child previously stored under that name.
    pub fn add_child(&mut self, child: Entry) -> Option<Entry> {
        self.children.insert(child.name.clone(), child)
    }

    /// Adds a child and returns self.
    #[must_use]
    pub fn with_child(mut self, child: Entry) -> Self {
        self.add_child(child);
        self
    }

    /// Looks up a child by name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Entry> {
        self.children.get(name)
    }

    /// Returns the leaf type, if this is a leaf.
    #[must_use]
    pub fn leaf_type(&self) -> Option<&YangType> {
        match &self.kind {
            EntryKind::Leaf(ty) => Some(ty),
            _ => None,
        }
    }

    /// Returns true for a leaf with no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, EntryKind::Leaf(_)) && self.children.is_empty()
    }

    /// Returns true for an RPC or action.
    #[must_use]
    pub fn is_rpc(&self) -> bool {
        matches!(self.kind, EntryKind::Rpc)
    }

    /// Returns true for a list or leaf-list.
    #[must_use]
    pub fn is_list(&self) -> bool {
        self.list_attr.is_some()
    }

    /// Returns true if the entry has children.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        !self.children.is_empty()
    }

    /// Returns true if at least one child is not an RPC.
    #[must_use]
    pub fn has_renderable_children(&self) -> bool {
        self.children.values().any(|c| !c.is_rpc())
    }

    /// Returns the source location as text, empty when unknown.
    #[must_use]
    pub fn source_text(&self) -> String {
        self.source
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }
}
