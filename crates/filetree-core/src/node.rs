//! Owned tree of scanned entries.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::entry::Entry;

/// A node in the scanned tree: one [`Entry`] plus its children.
///
/// Ownership is strictly hierarchical. Each child is owned by exactly one
/// parent and dropping a node drops its whole subtree; there are no shared or
/// weak references. A node's children are replaced wholesale by each scan of
/// that node, never diffed against the previous contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeNode {
    entry: Entry,
    children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create a childless node wrapping the given entry.
    pub fn new(entry: Entry) -> Self {
        Self {
            entry,
            children: Vec::new(),
        }
    }

    /// The entry this node wraps.
    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    /// Children of this node, in the order the last scan produced.
    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Check if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Discard all children, dropping their subtrees.
    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    /// Append a child wrapping `entry` and return a mutable handle to it.
    pub fn push_child(&mut self, entry: Entry) -> &mut TreeNode {
        self.children.push(TreeNode::new(entry));
        self.children.last_mut().unwrap()
    }

    /// Find the descendant (or self) whose entry path equals `path`.
    pub fn find(&self, path: &Path) -> Option<&TreeNode> {
        if self.entry.path() == path {
            return Some(self);
        }
        // Only subtrees whose root path is a prefix can contain the target.
        self.children
            .iter()
            .filter(|child| path.starts_with(child.entry.path()))
            .find_map(|child| child.find(path))
    }

    /// Depth-first iterator over this node and every descendant.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    /// Total number of descendants, excluding self.
    pub fn descendant_count(&self) -> usize {
        self.walk().count() - 1
    }
}

/// Depth-first traversal over a [`TreeNode`] subtree.
pub struct Walk<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Reverse keeps children in scan order on the stack.
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
