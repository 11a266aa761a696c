//! Projection of the tree into the list of currently visible groups.

use crate::tree::{GroupId, Tree};

/// A group as it appears in the group pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleItem {
    pub group: GroupId,
    /// Recursion depth from the root (root = 0).
    pub depth: usize,
    /// Index in the flattened list.
    pub position: usize,
}

/// Flatten the expanded part of the tree in pre-order.
///
/// The root is always item 0. Children of a collapsed group are skipped
/// together with their whole subtree. Positions are only valid until the
/// next change of an expanded flag.
pub fn flatten(tree: &Tree) -> Vec<VisibleItem> {
    let mut items = Vec::new();
    let mut stack = vec![(tree.root(), 0)];

    while let Some((group, depth)) = stack.pop() {
        items.push(VisibleItem {
            group,
            depth,
            position: items.len(),
        });

        let node = tree.group(group);
        if node.is_expanded() {
            stack.extend(node.children().iter().rev().map(|&child| (child, depth + 1)));
        }
    }

    items
}

/// Position of `group` in a flattened list, if visible.
pub fn position_of(items: &[VisibleItem], group: GroupId) -> Option<usize> {
    items.iter().position(|item| item.group == group)
}
