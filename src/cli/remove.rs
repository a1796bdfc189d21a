use crate::Result;
use crate::context::Context;
use crate::error::Error;

/// Removes files from a changelist
///
/// The files themselves are untouched; they just stop being grouped. The
/// changelist is kept even when this empties it.
#[derive(Debug, clap::Args)]
#[clap(visible_aliases = ["rm", "r"])]
pub struct Remove {
    /// Changelist to remove the files from
    pub changelist: String,
    /// Files to remove
    #[clap(required = true)]
    pub paths: Vec<String>,
}

impl Remove {
    pub fn run(&self, ctx: &Context) -> Result<()> {
        let mut active = ctx.store.load_active()?;
        if !active.contains_key(&self.changelist) {
            return Err(Error::NotFound(self.changelist.clone()).into());
        }

        // paths not in the changelist are silently ignored
        let targets: Vec<String> = self
            .paths
            .iter()
            .filter_map(|p| ctx.normalize(p).ok())
            .collect();
        let owned = &mut active[&self.changelist];
        let before = owned.len();
        owned.retain(|p| !targets.contains(p));
        let removed = before - owned.len();

        ctx.store.save_active(&active)?;
        println!("Removed from '{}': {} file(s)", self.changelist, removed);
        Ok(())
    }
}
