use eyre::WrapErr;
use itertools::Itertools;

use crate::Result;
use crate::cli::stash::stash_one;
use crate::context::Context;
use crate::error::Error;

/// Creates a branch carrying exactly one changelist
///
/// Every other active changelist is stashed first, then the branch is
/// created and switched to, with the target changelist's modifications
/// travelling along. The stashed changelists can be restored with unstash.
#[derive(Debug, clap::Args)]
#[clap(visible_alias = "br")]
pub struct Branch {
    /// Changelist to isolate on the new branch
    pub changelist: String,
    /// Name for the new branch (defaults to the changelist name)
    pub branch: Option<String>,
    /// Base branch or commit for the new branch (defaults to HEAD)
    #[clap(long, value_name = "BASE")]
    pub from: Option<String>,
}

impl Branch {
    pub fn run(&self, ctx: &Context) -> Result<()> {
        let mut active = ctx.store.load_active()?;
        let mut stashed = ctx.store.load_stashed()?;
        if !active.contains_key(&self.changelist) {
            return Err(Error::NotFound(self.changelist.clone()).into());
        }
        let branch_name = self.branch.clone().unwrap_or_else(|| self.changelist.clone());

        // Stash everything else BEFORE creating the branch: their edits may
        // touch paths that conflict with the base, and a dirty tree would
        // make the checkout fail. The target changelist is never stashed.
        let others = active
            .keys()
            .filter(|n| *n != &self.changelist)
            .cloned()
            .collect_vec();
        for other in &others {
            println!("Stashing {other}…");
            stash_one(ctx, &mut active, &mut stashed, other).wrap_err_with(|| {
                format!("failed to stash '{other}'; run 'git cl unstash' to restore any already-stashed changelists")
            })?;
        }

        println!("Creating branch {branch_name}…");
        ctx.git
            .branch_create(&branch_name, self.from.as_deref())
            .wrap_err_with(|| match others.is_empty() {
                true => format!("could not create branch '{branch_name}'"),
                false => format!(
                    "could not create branch '{branch_name}'; these changelists are stashed and can be restored with 'git cl unstash': {}",
                    others.join(", ")
                ),
            })?;
        // our own progress line replaces git's "Switched to ..." stderr chatter
        println!("Switched to branch '{branch_name}'");
        println!("Restored changelist '{}'", self.changelist);
        println!("Ready to work on {}", self.changelist);
        Ok(())
    }
}
