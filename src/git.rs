use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;

use itertools::Itertools;

use crate::Result;
use crate::error::Error;

/// Captured outcome of a git child process. A non-zero exit is data here,
/// not an error; callers decide whether it is fatal.
#[derive(Debug, Default, Clone)]
pub struct GitOutput {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl GitOutput {
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

/// One entry of `git status --porcelain`. Rename and copy entries carry the
/// pre-rename path so both sides are discoverable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    pub code: String,
    pub path: String,
    pub orig_path: Option<String>,
}

/// Thin wrapper around the `git` binary. All operations run with the
/// repository root as working directory, so repo-relative paths can be
/// passed straight through as pathspecs.
#[derive(Debug)]
pub struct Git {
    root: PathBuf,
    git_dir: PathBuf,
}

impl Git {
    /// Locate the repository containing `cwd`.
    pub fn discover(cwd: &Path) -> Result<Self> {
        let out = git_in(cwd, ["rev-parse", "--show-toplevel"])?;
        if !out.success() {
            return Err(Error::NotARepository.into());
        }
        let root = PathBuf::from(out.stdout.trim());
        let out = git_in(cwd, ["rev-parse", "--absolute-git-dir"])?;
        if !out.success() {
            return Err(Error::NotARepository.into());
        }
        let git_dir = PathBuf::from(out.stdout.trim());
        Ok(Self { root, git_dir })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn git_dir(&self) -> &Path {
        &self.git_dir
    }

    pub fn run<I, S>(&self, args: I) -> Result<GitOutput>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        git_in(&self.root, args)
    }

    /// Like `run`, but a non-zero exit becomes a `GitFailed` error carrying
    /// git's own stderr.
    fn read<I, S>(&self, args: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let args = args
            .into_iter()
            .map(|s| s.as_ref().to_string_lossy().to_string())
            .collect_vec();
        let out = self.run(&args)?;
        if !out.success() {
            return Err(Error::GitFailed {
                command: args.first().cloned().unwrap_or_default(),
                stderr: out.stderr,
            }
            .into());
        }
        Ok(out.stdout)
    }

    /// Whether HEAD resolves to a commit. False on a freshly-initialised
    /// repository with no commits yet.
    pub fn has_head(&self) -> Result<bool> {
        Ok(self.run(["rev-parse", "--verify", "-q", "HEAD"])?.success())
    }

    pub fn current_branch(&self) -> Result<Option<String>> {
        let out = self.read(["branch", "--show-current"])?;
        Ok(out.lines().next().map(|s| s.to_string()))
    }

    /// Working tree status, tracked and untracked, in the order git prints it.
    pub fn status_porcelain(&self) -> Result<Vec<StatusEntry>> {
        let out = self.read(["status", "--porcelain", "--untracked-files=all", "-z"])?;
        let mut entries = vec![];
        let mut tokens = out.split('\0').filter(|t| !t.is_empty());
        while let Some(token) = tokens.next() {
            if token.len() < 4 {
                continue;
            }
            let code = token[..2].to_string();
            let path = token[3..].to_string();
            let orig_path = if code.starts_with('R') || code.starts_with('C') {
                tokens.next().map(|t| t.to_string())
            } else {
                None
            };
            entries.push(StatusEntry {
                code,
                path,
                orig_path,
            });
        }
        Ok(entries)
    }

    pub fn staged_paths(&self) -> Result<Vec<String>> {
        let out = self.read(["diff", "--cached", "--name-only", "-z"])?;
        Ok(out
            .split('\0')
            .filter(|p| !p.is_empty())
            .map(|p| p.to_string())
            .collect())
    }

    pub fn add(&self, paths: &[String]) -> Result<()> {
        if paths.is_empty() {
            return Ok(());
        }
        let args = ["add", "--"].iter().map(|s| s.to_string()).chain(paths.iter().cloned());
        self.read(args)?;
        Ok(())
    }

    /// Unstage `paths`. On a repository with no commits there is no HEAD to
    /// reset against, so fall back to dropping the paths from the index.
    pub fn reset(&self, paths: &[String]) -> Result<()> {
        if paths.is_empty() {
            return Ok(());
        }
        if self.has_head()? {
            let args = ["reset", "-q", "HEAD", "--"]
                .iter()
                .map(|s| s.to_string())
                .chain(paths.iter().cloned());
            self.read(args)?;
        } else {
            let args = ["rm", "--cached", "-r", "-q", "--ignore-unmatch", "--"]
                .iter()
                .map(|s| s.to_string())
                .chain(paths.iter().cloned());
            self.read(args)?;
        }
        Ok(())
    }

    /// Revert tracked `paths` to their HEAD state, index and working tree.
    pub fn checkout_paths(&self, paths: &[String]) -> Result<()> {
        if paths.is_empty() {
            return Ok(());
        }
        let args = ["checkout", "-q", "HEAD", "--"]
            .iter()
            .map(|s| s.to_string())
            .chain(paths.iter().cloned());
        self.read(args)?;
        Ok(())
    }

    pub fn diff(&self, paths: &[String], staged: bool) -> Result<String> {
        let mut args = vec!["diff".to_string()];
        if staged {
            args.push("--staged".to_string());
        }
        args.push("--".to_string());
        args.extend(paths.iter().cloned());
        self.read(args)
    }

    pub fn commit(&self, message: &CommitMessage) -> Result<GitOutput> {
        let args: Vec<String> = match message {
            CommitMessage::Inline(msg) => {
                vec!["commit".into(), "-m".into(), msg.clone()]
            }
            CommitMessage::FromFile(path) => {
                vec!["commit".into(), "-F".into(), path.to_string_lossy().into_owned()]
            }
        };
        let out = self.run(&args)?;
        if !out.success() {
            return Err(Error::GitFailed {
                command: "commit".into(),
                stderr: if out.stderr.trim().is_empty() {
                    out.stdout
                } else {
                    out.stderr
                },
            }
            .into());
        }
        Ok(out)
    }

    /// Stash exactly `paths`, untracked files included, reverting them in the
    /// working tree. Returns the stash commit SHA, or `None` when git found
    /// nothing to save for those paths.
    pub fn stash_push(&self, name: &str, paths: &[String]) -> Result<Option<String>> {
        let before = self.stash_head()?;
        let message = format!("git-cl:{name}");
        let base_args = ["stash", "push", "--include-untracked", "-m", message.as_str(), "--"];
        let args = base_args
            .iter()
            .map(|s| s.to_string())
            .chain(paths.iter().cloned());
        self.read(args)?;
        let after = self.stash_head()?;
        if after.is_empty() || after == before {
            return Ok(None);
        }
        Ok(Some(after))
    }

    /// Pop the stash entry previously created for `name`. Returns the raw
    /// outcome so the caller can keep the stores untouched on a conflict.
    pub fn stash_pop(&self, stash_ref: &str, name: &str) -> Result<GitOutput> {
        let slot = self.find_stash(stash_ref, name)?;
        self.run(["stash", "pop", slot.as_str()])
    }

    fn stash_head(&self) -> Result<String> {
        let out = self.run(["rev-parse", "-q", "--verify", "refs/stash"])?;
        Ok(out.stdout.trim().to_string())
    }

    /// Resolve a stash commit SHA back to its current `stash@{n}` slot.
    /// Slots shift as other entries are pushed and popped, so the SHA is the
    /// durable identifier and the slot is computed at use time.
    fn find_stash(&self, stash_ref: &str, name: &str) -> Result<String> {
        let out = self.read(["stash", "list", "--format=%gd %H %gs"])?;
        for line in out.lines() {
            let mut fields = line.splitn(3, ' ');
            let (Some(slot), Some(sha)) = (fields.next(), fields.next()) else {
                continue;
            };
            if !stash_ref.is_empty() && sha == stash_ref {
                return Ok(slot.to_string());
            }
        }
        // The SHA can go stale if the user manipulated the stash directly;
        // fall back to the message we tagged the entry with.
        let needle = format!("git-cl:{name}");
        for line in out.lines() {
            let mut fields = line.splitn(3, ' ');
            let (Some(slot), Some(_), Some(subject)) =
                (fields.next(), fields.next(), fields.next())
            else {
                continue;
            };
            if subject.ends_with(&needle) {
                return Ok(slot.to_string());
            }
        }
        Err(Error::GitFailed {
            command: "stash".into(),
            stderr: format!("stash entry for '{name}' no longer exists"),
        }
        .into())
    }

    pub fn branch_create(&self, branch: &str, base: Option<&str>) -> Result<()> {
        let mut args = vec!["checkout", "-q", "-b", branch];
        if let Some(base) = base {
            args.push(base);
        }
        self.read(args)?;
        Ok(())
    }

    pub fn switch(&self, branch: &str) -> Result<()> {
        self.read(["checkout", "-q", branch])?;
        Ok(())
    }
}

fn git_in<I, S>(dir: &Path, args: I) -> Result<GitOutput>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let args = args
        .into_iter()
        .map(|s| s.as_ref().to_os_string())
        .collect_vec();
    debug!(
        "$ git {}",
        args.iter().map(|a| a.to_string_lossy()).join(" ")
    );
    let output = Command::new("git").args(&args).current_dir(dir).output()?;
    Ok(GitOutput {
        code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

#[derive(Debug, Clone)]
pub enum CommitMessage {
    Inline(String),
    FromFile(PathBuf),
}
