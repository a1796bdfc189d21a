use crate::Result;
use crate::context::Context;
use crate::error::Error;
use crate::status::{self, WorkingTree};

/// Shows working tree status grouped by changelist
///
/// Unassigned changes appear under "No Changelist"; stashed changelists are
/// listed in a footer.
#[derive(Debug, clap::Args)]
#[clap(visible_alias = "st")]
pub struct Status {
    /// Only show these changelists
    pub changelists: Vec<String>,
    /// Also show unassigned files when filtering
    #[clap(long)]
    pub include_no_cl: bool,
}

impl Status {
    pub fn run(&self, ctx: &Context) -> Result<()> {
        let active = ctx.store.load_active()?;
        let stashed = ctx.store.load_stashed()?;
        for name in &self.changelists {
            if !active.contains_key(name) {
                return Err(Error::NotFound(name.clone()).into());
            }
        }
        let tree = WorkingTree::new(ctx.git.status_porcelain()?);
        let report = status::render(
            &active,
            &stashed,
            &tree,
            ctx.git.root(),
            &ctx.cwd,
            &self.changelists,
            self.include_no_cl,
        );
        print!("{report}");
        Ok(())
    }
}
