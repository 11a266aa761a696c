//! KeePass database decoding.
//!
//! This is the only module that touches the `keepass` crate. It turns a
//! decoded database into plain [`RawGroup`]/[`Entry`] values and then gets
//! out of the way.

use crate::error::{Result, VaultError};
use crate::models::{Entry, RawGroup};
use keepass::db::{Group, Node};
use keepass::{Database, DatabaseKey};
use std::fs::File;
use std::path::{Path, PathBuf};

/// An opened, still encrypted, database file.
pub struct VaultFile {
    path: PathBuf,
    file: File,
}

impl VaultFile {
    /// Open the database file without decoding it.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|source| VaultError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(Self { path, file })
    }

    /// Path the file was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decode the file with the given passphrase. Single attempt.
    pub fn unlock(mut self, password: &str) -> Result<KeepassDatabase> {
        let key = DatabaseKey::new().with_password(password);
        let db = Database::open(&mut self.file, key).map_err(|source| VaultError::Decode {
            path: self.path.clone(),
            source,
        })?;

        tracing::info!("Unlocked database {}", self.path.display());
        Ok(KeepassDatabase { db })
    }
}

/// Wrapper around a decoded KeePass database.
pub struct KeepassDatabase {
    db: Database,
}

impl KeepassDatabase {
    /// Open and unlock a KeePass database in one step.
    pub fn unlock(path: impl AsRef<Path>, password: &str) -> Result<Self> {
        VaultFile::open(path)?.unlock(password)
    }

    /// Consume the database and return its top-level groups.
    ///
    /// The KeePass root group is the single top-level group.
    pub fn into_groups(self) -> Vec<RawGroup> {
        let root = convert_group(&self.db.root);
        tracing::debug!(
            subgroups = root.groups.len(),
            entries = root.entries.len(),
            "Converted database root group"
        );
        vec![root]
    }
}

fn convert_group(kg: &Group) -> RawGroup {
    let mut group = RawGroup::new(kg.name.clone());
    for node in &kg.children {
        match node {
            Node::Group(g) => group.groups.push(convert_group(g)),
            Node::Entry(e) => group.entries.push(convert_entry(e)),
        }
    }
    group
}

fn convert_entry(ke: &keepass::db::Entry) -> Entry {
    Entry {
        title: ke.get_title().unwrap_or_default().to_string(),
        username: ke.get_username().unwrap_or_default().to_string(),
        password: ke.get_password().unwrap_or_default().to_string(),
        url: ke.get_url().unwrap_or_default().to_string(),
        notes: ke.get("Notes").unwrap_or_default().to_string(),
    }
}
