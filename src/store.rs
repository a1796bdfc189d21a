use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tempfile::NamedTempFile;

use crate::Result;

pub const ACTIVE_FILE: &str = "cl.json";
pub const STASHED_FILE: &str = "cl-stashes.json";

/// Active changelists: name to repo-relative paths, insertion-ordered on
/// both levels.
pub type ActiveStore = IndexMap<String, Vec<String>>;

/// Stashed changelists: name to the frozen entry recorded at stash time.
pub type StashedStore = IndexMap<String, StashEntry>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StashEntry {
    pub paths: Vec<String>,
    /// Stash commit SHA, empty when the changelist had nothing to save.
    pub stash_ref: String,
    pub created_at: String,
    pub file_count: usize,
}

/// The two JSON documents under `.git/`. Each save replaces the whole file
/// atomically via a sibling temp file, so a crash leaves either the old or
/// the new document, never a torn one.
#[derive(Debug)]
pub struct Store {
    git_dir: PathBuf,
}

impl Store {
    pub fn new(git_dir: &Path) -> Self {
        Self {
            git_dir: git_dir.to_path_buf(),
        }
    }

    pub fn load_active(&self) -> Result<ActiveStore> {
        self.load(ACTIVE_FILE)
    }

    pub fn save_active(&self, store: &ActiveStore) -> Result<()> {
        self.save(ACTIVE_FILE, store)
    }

    pub fn load_stashed(&self) -> Result<StashedStore> {
        self.load(STASHED_FILE)
    }

    pub fn save_stashed(&self, store: &StashedStore) -> Result<()> {
        self.save(STASHED_FILE, store)
    }

    fn load<T: DeserializeOwned + Default>(&self, file: &str) -> Result<T> {
        let path = self.git_dir.join(file);
        if !path.exists() {
            return Ok(T::default());
        }
        let raw = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn save<T: Serialize>(&self, file: &str, value: &T) -> Result<()> {
        let mut json = serde_json::to_string_pretty(value)?;
        json.push('\n');
        let mut tmp = NamedTempFile::new_in(&self.git_dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.persist(self.git_dir.join(file))?;
        Ok(())
    }
}

/// Insert `paths` into `store[name]`, creating the changelist if needed, and
/// take them away from every other changelist. Changelists emptied by the
/// move are kept; only `delete` discards a name.
pub fn reassign(store: &mut ActiveStore, name: &str, paths: &[String]) {
    for (other, owned) in store.iter_mut() {
        if other != name {
            owned.retain(|p| !paths.contains(p));
        }
    }
    let owned = store.entry(name.to_string()).or_default();
    for path in paths {
        if !owned.contains(path) {
            owned.push(path.clone());
        }
    }
}
