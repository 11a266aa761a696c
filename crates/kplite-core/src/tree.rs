//! The group hierarchy, stored as an arena.
//!
//! Groups are addressed by [`GroupId`]. Children are owned by position in
//! the arena and referenced by id; the parent link is just another id, so
//! walking up the tree never fights the borrow checker. The shape is fixed
//! once [`Tree::build`] returns: only the `expanded` flags change afterwards.

use crate::models::{Entry, RawGroup};

/// Name given to the synthetic root that owns the vault's top-level groups.
pub const ROOT_NAME: &str = "Root";

/// Index of a group in the [`Tree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(usize);

impl GroupId {
    /// Position in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node of the tree.
#[derive(Debug, Clone)]
pub struct Group {
    name: String,
    entries: Vec<Entry>,
    children: Vec<GroupId>,
    parent: Option<GroupId>,
    expanded: bool,
}

impl Group {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entries in vault order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Subgroups in vault order.
    pub fn children(&self) -> &[GroupId] {
        &self.children
    }

    pub fn parent(&self) -> Option<GroupId> {
        self.parent
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Group hierarchy with a synthetic root at [`Tree::root`].
#[derive(Debug, Clone)]
pub struct Tree {
    groups: Vec<Group>,
}

impl Tree {
    /// Build the tree in one pass from the decoded top-level groups.
    ///
    /// The synthetic root starts expanded, every other group collapsed.
    pub fn build(top_level: Vec<RawGroup>) -> Self {
        let mut tree = Self {
            groups: vec![Group {
                name: ROOT_NAME.to_string(),
                entries: Vec::new(),
                children: Vec::new(),
                parent: None,
                expanded: true,
            }],
        };
        let root = tree.root();
        for raw in top_level {
            tree.insert(raw, root);
        }

        tracing::debug!(
            groups = tree.group_count(),
            entries = tree.entry_count(),
            "Built group tree"
        );
        tree
    }

    fn insert(&mut self, raw: RawGroup, parent: GroupId) -> GroupId {
        let id = GroupId(self.groups.len());
        self.groups.push(Group {
            name: raw.name,
            entries: raw.entries,
            children: Vec::with_capacity(raw.groups.len()),
            parent: Some(parent),
            expanded: false,
        });
        self.groups[parent.0].children.push(id);

        for child in raw.groups {
            self.insert(child, id);
        }
        id
    }

    /// The synthetic root.
    pub fn root(&self) -> GroupId {
        GroupId(0)
    }

    /// Look up a group.
    ///
    /// Ids are only ever produced by this tree, so lookups cannot miss.
    pub fn group(&self, id: GroupId) -> &Group {
        &self.groups[id.0]
    }

    /// Number of groups, including the synthetic root.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Number of entries across all groups.
    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }

    /// Iterate over the ancestors of `id`, nearest first, ending at the root.
    pub fn ancestors(&self, id: GroupId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.group(id).parent,
        }
    }

    /// Distance from the root (the root has depth 0).
    pub fn depth(&self, id: GroupId) -> usize {
        self.ancestors(id).count()
    }

    /// Pre-order traversal of every group regardless of expand flags.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder {
            tree: self,
            stack: vec![self.root()],
        }
    }

    /// Flip the expanded flag of `id` and return the new value.
    pub fn toggle(&mut self, id: GroupId) -> bool {
        let group = &mut self.groups[id.0];
        group.expanded = !group.expanded;
        group.expanded
    }

    /// Expand every ancestor of `id` so that `id` itself becomes reachable.
    ///
    /// The flag of `id` is left untouched.
    pub fn reveal(&mut self, id: GroupId) {
        let mut next = self.group(id).parent;
        while let Some(parent) = next {
            let group = &mut self.groups[parent.0];
            group.expanded = true;
            next = group.parent;
        }
    }

    /// Set the expanded flag of every group, the root included.
    pub fn set_all_expanded(&mut self, expanded: bool) {
        for group in &mut self.groups {
            group.expanded = expanded;
        }
    }
}

/// Iterator returned by [`Tree::ancestors`].
pub struct Ancestors<'a> {
    tree: &'a Tree,
    next: Option<GroupId>,
}

impl Iterator for Ancestors<'_> {
    type Item = GroupId;

    fn next(&mut self) -> Option<GroupId> {
        let current = self.next?;
        self.next = self.tree.group(current).parent;
        Some(current)
    }
}

/// Iterator returned by [`Tree::preorder`].
pub struct Preorder<'a> {
    tree: &'a Tree,
    stack: Vec<GroupId>,
}

impl Iterator for Preorder<'_> {
    type Item = GroupId;

    fn next(&mut self) -> Option<GroupId> {
        let current = self.stack.pop()?;
        self.stack
            .extend(self.tree.group(current).children.iter().rev().copied());
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tree {
        Tree::build(vec![
            RawGroup::new("Passwords")
                .with_group(RawGroup::new("Banking").with_group(RawGroup::new("Cards")))
                .with_group(RawGroup::new("Email")),
            RawGroup::new("Archive"),
        ])
    }

    fn names(tree: &Tree, ids: impl Iterator<Item = GroupId>) -> Vec<String> {
        ids.map(|id| tree.group(id).name().to_string()).collect()
    }

    #[test]
    fn root_is_synthetic_and_expanded() {
        let tree = sample();
        let root = tree.group(tree.root());
        assert_eq!(root.name(), ROOT_NAME);
        assert!(root.is_expanded());
        assert!(root.parent().is_none());
        assert_eq!(names(&tree, root.children().iter().copied()), ["Passwords", "Archive"]);
    }

    #[test]
    fn non_root_groups_start_collapsed() {
        let tree = sample();
        assert!(tree
            .preorder()
            .skip(1)
            .all(|id| !tree.group(id).is_expanded()));
    }

    #[test]
    fn parent_links_mirror_children() {
        let tree = sample();
        for id in tree.preorder() {
            for &child in tree.group(id).children() {
                assert_eq!(tree.group(child).parent(), Some(id));
            }
        }
    }

    #[test]
    fn preorder_visits_children_in_vault_order() {
        let tree = sample();
        assert_eq!(
            names(&tree, tree.preorder()),
            ["Root", "Passwords", "Banking", "Cards", "Email", "Archive"]
        );
    }

    #[test]
    fn ancestors_walk_up_to_root() {
        let tree = sample();
        let cards = tree
            .preorder()
            .find(|&id| tree.group(id).name() == "Cards")
            .unwrap();
        assert_eq!(names(&tree, tree.ancestors(cards)), ["Banking", "Passwords", "Root"]);
        assert_eq!(tree.depth(cards), 3);
        assert_eq!(tree.depth(tree.root()), 0);
    }

    #[test]
    fn reveal_expands_ancestors_only() {
        let mut tree = sample();
        let cards = tree
            .preorder()
            .find(|&id| tree.group(id).name() == "Cards")
            .unwrap();
        tree.reveal(cards);
        assert!(tree.ancestors(cards).all(|id| tree.group(id).is_expanded()));
        assert!(!tree.group(cards).is_expanded());
    }

    #[test]
    fn toggle_and_set_all() {
        let mut tree = sample();
        let root = tree.root();
        assert!(!tree.toggle(root));
        assert!(tree.toggle(root));

        tree.set_all_expanded(true);
        assert!(tree.preorder().all(|id| tree.group(id).is_expanded()));
        tree.set_all_expanded(false);
        assert!(tree.preorder().all(|id| !tree.group(id).is_expanded()));
    }

    #[test]
    fn empty_vault_has_only_root() {
        let tree = Tree::build(Vec::new());
        assert_eq!(tree.group_count(), 1);
        assert_eq!(tree.entry_count(), 0);
        assert!(!tree.group(tree.root()).has_children());
    }
}
