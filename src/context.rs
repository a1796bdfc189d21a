use std::fs;
use std::path::{Path, PathBuf};

use crate::Result;
use crate::git::Git;
use crate::paths;
use crate::store::Store;

/// Everything a command needs for one invocation: the repository, the store
/// handles, and the directory the user ran from (for path normalisation and
/// display).
#[derive(Debug)]
pub struct Context {
    pub git: Git,
    pub store: Store,
    pub cwd: PathBuf,
}

impl Context {
    pub fn new() -> Result<Self> {
        Self::at(&std::env::current_dir()?)
    }

    /// Build a context as if the command had been run from `cwd`. Tests use
    /// this to drive commands against sandbox repositories.
    pub fn at(cwd: &Path) -> Result<Self> {
        // git reports a symlink-resolved toplevel; canonicalise the cwd so
        // the two agree when computing relative paths
        let cwd = fs::canonicalize(cwd)?;
        let git = Git::discover(&cwd)?;
        let store = Store::new(git.git_dir());
        Ok(Self { git, store, cwd })
    }

    pub fn normalize(&self, input: &str) -> Result<String> {
        paths::normalize(self.git.root(), &self.cwd, input)
    }

    pub fn display(&self, rel: &str) -> String {
        paths::display(self.git.root(), &self.cwd, rel)
    }
}
