//! Entry tree validation.
//!
//! Formatters tolerate malformed trees and degrade their output; this module
//! lets callers detect the malformation up front instead.

use crate::entry::{Entry, EntryKind};
use crate::error::SchemaError;

/// Validates that every entry in the tree is either a leaf or a container.
///
/// # Arguments
/// * `root` - Root of the tree to check
///
/// # Returns
/// Ok(()) if valid, or the first `SchemaError` found in pre-order.
///
/// # Errors
/// Returns `SchemaError` if a leaf or RPC has children, or a child is stored
/// under a key different from its name.
pub fn validate_entry(root: &Entry) -> Result<(), SchemaError> {
    let mut stack = vec![(root.name.clone(), root)];

    while let Some((path, entry)) = stack.pop() {
        validate_node(&path, entry)?;
        for (key, child) in entry.children.iter().rev() {
            if *key != child.name {
                return Err(SchemaError::MismatchedKey {
                    path,
                    key: key.clone(),
                    name: child.name.clone(),
                });
            }
            stack.push((format!("{}/{}", path, child.name), child));
        }
    }

    Ok(())
}

/// Validates a single entry.
fn validate_node(path: &str, entry: &Entry) -> Result<(), SchemaError> {
    let count = entry.children.len();
    if count == 0 {
        return Ok(());
    }

    match entry.kind {
        EntryKind::Leaf(_) => Err(SchemaError::LeafWithChildren {
            path: path.to_string(),
            count,
        }),
        EntryKind::Rpc => Err(SchemaError::RpcWithChildren {
            path: path.to_string(),
            count,
        }),
        EntryKind::Container => Ok(()),
    }
}
