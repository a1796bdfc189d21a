use crate::Result;
use crate::context::Context;
use crate::error::Error;
use crate::status::WorkingTree;

/// Stages a changelist's tracked files
///
/// Untracked files stay untracked; the changelist is kept so work can
/// continue (commit has the opposite default).
#[derive(Debug, clap::Args)]
pub struct Stage {
    /// Changelist to stage
    pub changelist: String,
    /// Deletes the changelist after staging
    #[clap(long)]
    pub delete: bool,
}

impl Stage {
    pub fn run(&self, ctx: &Context) -> Result<()> {
        let mut active = ctx.store.load_active()?;
        let owned = active
            .get(&self.changelist)
            .ok_or_else(|| Error::NotFound(self.changelist.clone()))?;

        let tree = WorkingTree::new(ctx.git.status_porcelain()?);
        let tracked = tracked_paths(ctx, &tree, owned);
        ctx.git.add(&tracked)?;
        println!("Staged {} file(s) from '{}'", tracked.len(), self.changelist);

        if self.delete {
            active.shift_remove(&self.changelist);
            ctx.store.save_active(&active)?;
            println!("Deleted changelist '{}'", self.changelist);
        }
        Ok(())
    }
}

/// The subset of a changelist git can stage or commit: everything except
/// untracked files and paths git has never heard of that are also missing
/// from disk (a clean tracked file passes; adding it is a no-op).
pub(crate) fn tracked_paths(ctx: &Context, tree: &WorkingTree, owned: &[String]) -> Vec<String> {
    owned
        .iter()
        .filter(|p| !tree.is_untracked(p))
        .filter(|p| tree.code(p).is_some() || ctx.git.root().join(p).exists())
        .cloned()
        .collect()
}
