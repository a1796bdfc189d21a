use crate::Result;
use crate::context::Context;
use crate::error::Error;

/// Unstages a changelist's files
#[derive(Debug, clap::Args)]
pub struct Unstage {
    /// Changelist to unstage
    pub changelist: String,
    /// Deletes the changelist after unstaging
    #[clap(long)]
    pub delete: bool,
}

impl Unstage {
    pub fn run(&self, ctx: &Context) -> Result<()> {
        let mut active = ctx.store.load_active()?;
        let owned = active
            .get(&self.changelist)
            .ok_or_else(|| Error::NotFound(self.changelist.clone()))?;

        ctx.git.reset(owned)?;
        println!("Unstaged {} file(s) from '{}'", owned.len(), self.changelist);

        if self.delete {
            active.shift_remove(&self.changelist);
            ctx.store.save_active(&active)?;
            println!("Deleted changelist '{}'", self.changelist);
        }
        Ok(())
    }
}
