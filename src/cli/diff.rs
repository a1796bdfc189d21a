use crate::Result;
use crate::context::Context;
use crate::error::Error;

/// Shows the diff of one or more changelists
#[derive(Debug, clap::Args)]
pub struct Diff {
    /// Changelists to diff
    #[clap(required = true)]
    pub changelists: Vec<String>,
    /// Diffs the staged (index) state instead of the working tree
    #[clap(long)]
    pub staged: bool,
}

impl Diff {
    pub fn run(&self, ctx: &Context) -> Result<()> {
        let active = ctx.store.load_active()?;
        for name in &self.changelists {
            let owned = active
                .get(name)
                .ok_or_else(|| Error::NotFound(name.clone()))?;
            if owned.is_empty() {
                continue;
            }
            let out = ctx.git.diff(owned, self.staged)?;
            print!("{out}");
        }
        Ok(())
    }
}
