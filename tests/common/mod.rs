#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use git_cl::Result;
use git_cl::cli;
use git_cl::context::Context;
use git_cl::status::WorkingTree;
use git_cl::store::{ActiveStore, StashedStore};
use tempfile::TempDir;

/// A throwaway git repository with an initial commit, driven through the
/// same library API the binary uses.
pub struct TestRepo {
    _dir: TempDir,
    pub root: PathBuf,
}

impl TestRepo {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let root = dir.path().canonicalize().unwrap();
        let repo = Self { _dir: dir, root };
        repo.git(&["init", "--quiet"]);
        repo.git(&["config", "user.email", "test@git-cl.test"]);
        repo.git(&["config", "user.name", "git-cl test"]);
        repo.write(".gitkeep", "initial");
        repo.git(&["add", ".gitkeep"]);
        repo.git(&["commit", "--quiet", "-m", "Initial commit"]);
        repo
    }

    pub fn git(&self, args: &[&str]) -> String {
        let out = Command::new("git")
            .args(args)
            .current_dir(&self.root)
            .output()
            .unwrap();
        assert!(
            out.status.success(),
            "git {args:?} failed: {}",
            String::from_utf8_lossy(&out.stderr)
        );
        String::from_utf8_lossy(&out.stdout).into_owned()
    }

    pub fn write(&self, path: &str, content: &str) {
        let p = self.root.join(path);
        fs::create_dir_all(p.parent().unwrap()).unwrap();
        fs::write(p, format!("{content}\n")).unwrap();
    }

    pub fn delete(&self, path: &str) {
        fs::remove_file(self.root.join(path)).unwrap();
    }

    pub fn read(&self, path: &str) -> String {
        fs::read_to_string(self.root.join(path))
            .unwrap()
            .trim()
            .to_string()
    }

    pub fn exists(&self, path: &str) -> bool {
        self.root.join(path).exists()
    }

    /// Write, add and commit a file in one step.
    pub fn commit_file(&self, path: &str, content: &str) {
        self.write(path, content);
        self.git(&["add", path]);
        self.git(&["commit", "--quiet", "-m", &format!("Add {path}")]);
    }

    pub fn ctx(&self) -> Context {
        Context::at(&self.root).unwrap()
    }

    pub fn ctx_in(&self, subdir: &str) -> Context {
        Context::at(&self.root.join(subdir)).unwrap()
    }

    pub fn active(&self) -> ActiveStore {
        self.ctx().store.load_active().unwrap()
    }

    pub fn stashed(&self) -> StashedStore {
        self.ctx().store.load_stashed().unwrap()
    }

    pub fn staged(&self) -> Vec<String> {
        self.ctx().git.staged_paths().unwrap()
    }

    pub fn porcelain(&self, path: &str) -> String {
        self.git(&["status", "--porcelain", "--untracked-files=all", "--", path])
            .trim_end()
            .to_string()
    }

    pub fn current_branch(&self) -> String {
        self.git(&["branch", "--show-current"]).trim().to_string()
    }

    pub fn log_oneline(&self) -> String {
        self.git(&["log", "--oneline"])
    }
}

pub fn add(repo: &TestRepo, name: &str, paths: &[&str]) -> Result<()> {
    add_in(repo, "", name, paths)
}

pub fn add_in(repo: &TestRepo, subdir: &str, name: &str, paths: &[&str]) -> Result<()> {
    cli::add::Add {
        changelist: name.to_string(),
        paths: paths.iter().map(|p| p.to_string()).collect(),
    }
    .run(&repo.ctx_in(subdir))
}

pub fn remove(repo: &TestRepo, name: &str, paths: &[&str]) -> Result<()> {
    cli::remove::Remove {
        changelist: name.to_string(),
        paths: paths.iter().map(|p| p.to_string()).collect(),
    }
    .run(&repo.ctx())
}

pub fn delete(repo: &TestRepo, names: &[&str], all: bool) -> Result<()> {
    cli::delete::Delete {
        changelists: names.iter().map(|n| n.to_string()).collect(),
        all,
    }
    .run(&repo.ctx())
}

pub fn stage(repo: &TestRepo, name: &str, delete: bool) -> Result<()> {
    cli::stage::Stage {
        changelist: name.to_string(),
        delete,
    }
    .run(&repo.ctx())
}

pub fn unstage(repo: &TestRepo, name: &str, delete: bool) -> Result<()> {
    cli::unstage::Unstage {
        changelist: name.to_string(),
        delete,
    }
    .run(&repo.ctx())
}

pub fn commit(repo: &TestRepo, name: &str, message: &str, keep: bool) -> Result<()> {
    cli::commit::Commit {
        changelist: name.to_string(),
        message: Some(message.to_string()),
        message_file: None,
        keep,
    }
    .run(&repo.ctx())
}

pub fn checkout(repo: &TestRepo, names: &[&str], delete: bool) -> Result<()> {
    cli::checkout::Checkout {
        changelists: names.iter().map(|n| n.to_string()).collect(),
        force: true,
        delete,
    }
    .run(&repo.ctx())
}

pub fn stash(repo: &TestRepo, name: Option<&str>, all: bool) -> Result<()> {
    stash_in(repo, "", name, all)
}

pub fn stash_in(repo: &TestRepo, subdir: &str, name: Option<&str>, all: bool) -> Result<()> {
    cli::stash::Stash {
        changelist: name.map(|n| n.to_string()),
        all,
    }
    .run(&repo.ctx_in(subdir))
}

pub fn unstash(repo: &TestRepo, name: Option<&str>, all: bool) -> Result<()> {
    unstash_in(repo, "", name, all)
}

pub fn unstash_in(repo: &TestRepo, subdir: &str, name: Option<&str>, all: bool) -> Result<()> {
    cli::unstash::Unstash {
        changelist: name.map(|n| n.to_string()),
        all,
    }
    .run(&repo.ctx_in(subdir))
}

pub fn branch(repo: &TestRepo, name: &str, branch: Option<&str>, from: Option<&str>) -> Result<()> {
    cli::branch::Branch {
        changelist: name.to_string(),
        branch: branch.map(|b| b.to_string()),
        from: from.map(|f| f.to_string()),
    }
    .run(&repo.ctx())
}

/// The grouped status report as the user would see it, colours off.
pub fn status_output(repo: &TestRepo, subdir: &str, filter: &[&str], include_no_cl: bool) -> String {
    console::set_colors_enabled(false);
    let ctx = repo.ctx_in(subdir);
    let active = ctx.store.load_active().unwrap();
    let stashed = ctx.store.load_stashed().unwrap();
    let tree = WorkingTree::new(ctx.git.status_porcelain().unwrap());
    git_cl::status::render(
        &active,
        &stashed,
        &tree,
        ctx.git.root(),
        &ctx.cwd,
        &filter.iter().map(|f| f.to_string()).collect::<Vec<_>>(),
        include_no_cl,
    )
}
