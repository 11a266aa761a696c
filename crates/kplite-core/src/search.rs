//! Case-insensitive substring search over the tree.
//!
//! Matches come out in pre-order; there is no ranking. A successful
//! [`search`] expands every ancestor of the matched group so the flattener
//! can reach it. A miss leaves the tree untouched.

use crate::models::Entry;
use crate::tree::{GroupId, Tree};

/// What a query is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    /// Group names.
    GroupName,
    /// Entry title, username, URL and notes. Never the password.
    Content,
}

/// A group found by a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub group: GroupId,
    /// Index of the first matching entry, for content searches.
    pub entry: Option<usize>,
}

/// First group, in pre-order, whose name contains `query`.
pub fn find_group(tree: &Tree, query: &str) -> Option<GroupId> {
    if query.is_empty() {
        return None;
    }
    let needle = query.to_lowercase();
    tree.preorder()
        .find(|&id| contains(tree.group(id).name(), &needle))
}

/// Every group owning at least one entry that matches `query`, in pre-order.
pub fn find_entries(tree: &Tree, query: &str) -> Vec<Match> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    tree.preorder()
        .filter_map(|id| {
            tree.group(id)
                .entries()
                .iter()
                .position(|entry| entry_matches(entry, &needle))
                .map(|index| Match {
                    group: id,
                    entry: Some(index),
                })
        })
        .collect()
}

/// Run a search and reveal the first match.
pub fn search(tree: &mut Tree, kind: SearchKind, query: &str) -> Option<Match> {
    let found = match kind {
        SearchKind::GroupName => find_group(tree, query).map(|group| Match { group, entry: None }),
        SearchKind::Content => find_entries(tree, query).into_iter().next(),
    };

    match found {
        Some(found) => {
            tree.reveal(found.group);
            tracing::debug!(?kind, query_len = query.len(), group = found.group.index(), "Search matched");
        }
        None => tracing::debug!(?kind, query_len = query.len(), "Search found nothing"),
    }
    found
}

fn entry_matches(entry: &Entry, needle: &str) -> bool {
    [&entry.title, &entry.username, &entry.url, &entry.notes]
        .into_iter()
        .any(|field| contains(field, needle))
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flatten::{flatten, position_of};
    use crate::models::RawGroup;

    fn sample() -> Tree {
        Tree::build(vec![
            RawGroup::new("Personal")
                .with_group(
                    RawGroup::new("Banking")
                        .with_entry(Entry::new("Bank A", "u1", "p1", "", ""))
                        .with_group(
                            RawGroup::new("Cards")
                                .with_entry(Entry::new("Visa", "card", "secret", "", "PIN in safe")),
                        ),
                )
                .with_group(
                    RawGroup::new("Email")
                        .with_entry(Entry::new("Mail", "me", "bankpass", "https://mail.example", "")),
                ),
            RawGroup::new("Shared Banking"),
        ])
    }

    fn find(tree: &Tree, name: &str) -> GroupId {
        tree.preorder()
            .find(|&id| tree.group(id).name() == name)
            .unwrap()
    }

    fn expanded_flags(tree: &Tree) -> Vec<bool> {
        tree.preorder().map(|id| tree.group(id).is_expanded()).collect()
    }

    #[test]
    fn group_search_is_case_insensitive_and_first_in_preorder() {
        let tree = sample();
        assert_eq!(find_group(&tree, "BANK"), Some(find(&tree, "Banking")));
        assert_eq!(find_group(&tree, "shared"), Some(find(&tree, "Shared Banking")));
    }

    #[test]
    fn empty_query_matches_nothing() {
        let mut tree = sample();
        let before = expanded_flags(&tree);
        assert_eq!(find_group(&tree, ""), None);
        assert!(find_entries(&tree, "").is_empty());
        assert_eq!(search(&mut tree, SearchKind::GroupName, ""), None);
        assert_eq!(expanded_flags(&tree), before);
    }

    #[test]
    fn miss_leaves_flags_unchanged() {
        let mut tree = sample();
        let before = expanded_flags(&tree);
        assert_eq!(search(&mut tree, SearchKind::GroupName, "zzz"), None);
        assert_eq!(search(&mut tree, SearchKind::Content, "zzz"), None);
        assert_eq!(expanded_flags(&tree), before);
    }

    #[test]
    fn empty_tree_is_not_found() {
        let mut tree = Tree::build(Vec::new());
        assert_eq!(search(&mut tree, SearchKind::GroupName, "bank"), None);
        assert_eq!(search(&mut tree, SearchKind::Content, "bank"), None);
    }

    #[test]
    fn hit_reveals_match() {
        let mut tree = sample();
        let cards = find(&tree, "Cards");
        assert!(position_of(&flatten(&tree), cards).is_none());

        let found = search(&mut tree, SearchKind::GroupName, "cards").unwrap();
        assert_eq!(found.group, cards);
        assert!(tree.ancestors(cards).all(|id| tree.group(id).is_expanded()));
        assert!(!tree.group(cards).is_expanded());
        assert!(position_of(&flatten(&tree), cards).is_some());
    }

    #[test]
    fn content_search_skips_passwords() {
        let tree = sample();
        // "bankpass" is only a password.
        assert!(find_entries(&tree, "bankpass").is_empty());
        assert!(find_entries(&tree, "secret").is_empty());
    }

    #[test]
    fn content_search_checks_each_field() {
        let tree = sample();
        let hits = |q: &str| -> Vec<GroupId> {
            find_entries(&tree, q).into_iter().map(|m| m.group).collect()
        };
        assert_eq!(hits("visa"), [find(&tree, "Cards")]);
        assert_eq!(hits("CARD"), [find(&tree, "Cards")]);
        assert_eq!(hits("mail.example"), [find(&tree, "Email")]);
        assert_eq!(hits("pin in"), [find(&tree, "Cards")]);
    }

    #[test]
    fn content_search_collects_every_group_in_order() {
        let tree = sample();
        let matches = find_entries(&tree, "a");
        let groups: Vec<&str> = matches.iter().map(|m| tree.group(m.group).name()).collect();
        assert_eq!(groups, ["Banking", "Cards", "Email"]);
        assert!(matches.iter().all(|m| m.entry == Some(0)));
    }

    #[test]
    fn content_search_reports_first_matching_entry() {
        let tree = Tree::build(vec![RawGroup::new("Web")
            .with_entry(Entry::new("Forum", "", "", "", ""))
            .with_entry(Entry::new("Shop", "", "", "", ""))]);
        let found = find_entries(&tree, "shop");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].entry, Some(1));
    }
}
