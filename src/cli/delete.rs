use eyre::eyre;

use crate::Result;
use crate::context::Context;

/// Deletes changelists
///
/// Only the grouping disappears; the files and their modifications stay.
#[derive(Debug, clap::Args)]
#[clap(visible_alias = "del")]
pub struct Delete {
    /// Changelists to delete
    #[clap(required_unless_present = "all")]
    pub changelists: Vec<String>,
    /// Deletes every active changelist
    #[clap(long, conflicts_with = "changelists")]
    pub all: bool,
}

impl Delete {
    pub fn run(&self, ctx: &Context) -> Result<()> {
        let mut active = ctx.store.load_active()?;

        if self.all {
            let count = active.len();
            active.clear();
            ctx.store.save_active(&active)?;
            println!("Deleted {count} changelist(s)");
            return Ok(());
        }

        let mut deleted = 0;
        for name in &self.changelists {
            if active.shift_remove(name).is_some() {
                println!("Deleted changelist '{name}'");
                deleted += 1;
            } else {
                error!("Changelist '{name}' not found");
            }
        }
        if deleted > 0 {
            ctx.store.save_active(&active)?;
        }
        if deleted == 0 {
            return Err(eyre!("no changelists deleted"));
        }
        Ok(())
    }
}
