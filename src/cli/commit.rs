use std::path::PathBuf;

use crate::Result;
use crate::cli::stage::tracked_paths;
use crate::context::Context;
use crate::error::Error;
use crate::git::CommitMessage;
use crate::status::WorkingTree;

/// Stages and commits a changelist's tracked files
///
/// Untracked files in the changelist are skipped. The changelist is deleted
/// after a successful commit; pass --keep to retain it.
#[derive(Debug, clap::Args)]
#[clap(visible_alias = "ci")]
pub struct Commit {
    /// Changelist to commit
    pub changelist: String,
    /// Commit message
    #[clap(short, long, required_unless_present = "message_file")]
    pub message: Option<String>,
    /// Takes the commit message from a file
    #[clap(short = 'F', long = "file", value_name = "FILE", conflicts_with = "message")]
    pub message_file: Option<PathBuf>,
    /// Keeps the changelist after committing
    #[clap(long)]
    pub keep: bool,
}

impl Commit {
    pub fn run(&self, ctx: &Context) -> Result<()> {
        let mut active = ctx.store.load_active()?;
        let owned = active
            .get(&self.changelist)
            .ok_or_else(|| Error::NotFound(self.changelist.clone()))?;

        let tree = WorkingTree::new(ctx.git.status_porcelain()?);
        let tracked = tracked_paths(ctx, &tree, owned);
        if tracked.is_empty() {
            println!("No tracked files to commit in '{}'", self.changelist);
            return Ok(());
        }

        ctx.git.add(&tracked)?;
        let message = match (&self.message, &self.message_file) {
            (Some(msg), _) => CommitMessage::Inline(msg.clone()),
            // git runs at the repo root; resolve the file against the
            // directory the user actually ran from
            (_, Some(file)) => CommitMessage::FromFile(ctx.cwd.join(file)),
            _ => unreachable!("clap requires -m or -F"),
        };
        let out = ctx.git.commit(&message)?;
        print!("{}", out.stdout);

        if !self.keep {
            active.shift_remove(&self.changelist);
            ctx.store.save_active(&active)?;
        }
        Ok(())
    }
}
