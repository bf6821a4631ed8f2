//! Tree flattening.
//!
//! Generated structs reference each other by name, so the tree structure is
//! not needed once every container is known. Flattening turns a tree into the
//! ordered list of entries to render.

use ironyang_schema::Entry;

/// Returns `root` followed by all of its descendants in depth-first pre-order.
///
/// Children are visited in the order they were added to their parent. No
/// filtering happens here: leaves, RPCs and empty containers are included and
/// left to the renderer to skip.
#[must_use]
pub fn flatten(root: &Entry) -> Vec<&Entry> {
    let mut entries = Vec::new();
    let mut stack = vec![root];

    while let Some(entry) = stack.pop() {
        entries.push(entry);
        stack.extend(entry.children.values().rev());
    }

    entries
}
