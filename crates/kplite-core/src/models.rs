//! Plain data types handed over by the vault decoder.

use std::fmt;

/// Represents a password entry.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Entry {
    pub title: String,
    pub username: String,
    pub password: String,
    pub url: String,
    pub notes: String,
}

impl Entry {
    /// Create an entry from its five standard fields.
    pub fn new(
        title: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        url: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            username: username.into(),
            password: password.into(),
            url: url.into(),
            notes: notes.into(),
        }
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("title", &self.title)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("url", &self.url)
            .field("notes", &self.notes)
            .finish()
    }
}

/// A group (folder) as decoded from the vault, before the tree is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawGroup {
    pub name: String,
    pub entries: Vec<Entry>,
    pub groups: Vec<RawGroup>,
}

impl RawGroup {
    /// Create an empty group.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder-style helper to append an entry.
    pub fn with_entry(mut self, entry: Entry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Builder-style helper to append a subgroup.
    pub fn with_group(mut self, group: RawGroup) -> Self {
        self.groups.push(group);
        self
    }

    /// Drop every subgroup (at any depth) whose name is listed in `hidden`.
    pub fn without_hidden(mut self, hidden: &[String]) -> Self {
        if hidden.is_empty() {
            return self;
        }
        self.groups = self
            .groups
            .into_iter()
            .filter(|group| !hidden.iter().any(|name| *name == group.name))
            .map(|group| group.without_hidden(hidden))
            .collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_password() {
        let entry = Entry::new("Bank A", "u1", "hunter2", "", "");
        let rendered = format!("{entry:?}");
        assert!(rendered.contains("Bank A"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn hidden_groups_are_dropped_recursively() {
        let root = RawGroup::new("Passwords")
            .with_group(RawGroup::new("Recycle Bin"))
            .with_group(RawGroup::new("Work").with_group(RawGroup::new("Recycle Bin")));

        let pruned = root.without_hidden(&["Recycle Bin".to_string()]);

        assert_eq!(pruned.groups.len(), 1);
        assert_eq!(pruned.groups[0].name, "Work");
        assert!(pruned.groups[0].groups.is_empty());
    }
}
