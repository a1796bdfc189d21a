use std::fs;

use itertools::Itertools;

use crate::Result;
use crate::context::Context;
use crate::error::Error;
use crate::status::WorkingTree;

/// Reverts the changes of one or more changelists to HEAD
///
/// Destructive: modifications are discarded and untracked files in the
/// changelists are deleted. Asks for confirmation unless --force is given.
#[derive(Debug, clap::Args)]
#[clap(visible_alias = "co")]
pub struct Checkout {
    /// Changelists to revert
    #[clap(required = true)]
    pub changelists: Vec<String>,
    /// Skips the confirmation prompt
    #[clap(short, long)]
    pub force: bool,
    /// Deletes the changelists after reverting
    #[clap(long)]
    pub delete: bool,
}

impl Checkout {
    pub fn run(&self, ctx: &Context) -> Result<()> {
        self.run_with_confirm(ctx, prompt)
    }

    /// Runs with a caller-supplied confirmation instead of the TTY prompt.
    pub fn run_with_confirm(
        &self,
        ctx: &Context,
        confirm: impl FnOnce(&str) -> Result<bool>,
    ) -> Result<()> {
        let mut active = ctx.store.load_active()?;
        let mut targets: Vec<String> = vec![];
        for name in &self.changelists {
            let owned = active
                .get(name)
                .ok_or_else(|| Error::NotFound(name.clone()))?;
            for path in owned {
                if !targets.contains(path) {
                    targets.push(path.clone());
                }
            }
        }

        let tree = WorkingTree::new(ctx.git.status_porcelain()?);
        // clean paths and paths git knows nothing about have nothing to
        // revert; the rest split three ways: paths present in HEAD are
        // checked out, staged-but-never-committed paths ('A' in the index,
        // `git checkout HEAD` would refuse them) are unstaged and deleted,
        // untracked paths are deleted
        let mut tracked: Vec<String> = vec![];
        let mut added: Vec<String> = vec![];
        let mut untracked: Vec<String> = vec![];
        for path in &targets {
            match tree.code(path) {
                None => {}
                Some("??") => untracked.push(path.clone()),
                Some(code) if code.starts_with('A') => added.push(path.clone()),
                Some(_) => tracked.push(path.clone()),
            }
        }

        let reverting = tracked.len() + added.len() + untracked.len();
        if reverting > 0 && !self.force {
            let summary = format!(
                "This will revert {} file(s) to HEAD:\n{}",
                reverting,
                tracked
                    .iter()
                    .map(|p| format!("  {}", ctx.display(p)))
                    .chain(
                        added
                            .iter()
                            .chain(untracked.iter())
                            .map(|p| format!("  {} (will be deleted)", ctx.display(p)))
                    )
                    .join("\n")
            );
            if !confirm(&summary)? {
                println!("Aborted");
                return Ok(());
            }
        }

        ctx.git.checkout_paths(&tracked)?;
        ctx.git.reset(&added)?;
        for path in added.iter().chain(untracked.iter()) {
            let file = ctx.git.root().join(path);
            // an 'AD' path is already gone from the working tree
            if file.exists() {
                fs::remove_file(file)?;
            }
        }
        println!("Reverted {reverting} file(s)");

        if self.delete {
            for name in &self.changelists {
                active.shift_remove(name);
                println!("Deleted changelist '{name}'");
            }
            ctx.store.save_active(&active)?;
        }
        Ok(())
    }
}

fn prompt(summary: &str) -> Result<bool> {
    let answer = demand::Confirm::new("Revert changes?")
        .description(summary)
        .affirmative("Yes")
        .negative("No")
        .run()?;
    Ok(answer)
}
