use crate::Result;
use crate::context::Context;
use crate::error::Error;
use crate::store::{ActiveStore, StashEntry, StashedStore};

/// Stashes a changelist: saves its changes and reverts the files
///
/// The changelist moves to the stashed store and can be restored later with
/// unstash, also on another branch.
#[derive(Debug, clap::Args)]
#[clap(visible_alias = "sh")]
pub struct Stash {
    /// Changelist to stash
    #[clap(required_unless_present = "all")]
    pub changelist: Option<String>,
    /// Stashes every active changelist
    #[clap(long, conflicts_with = "changelist")]
    pub all: bool,
}

impl Stash {
    pub fn run(&self, ctx: &Context) -> Result<()> {
        let mut active = ctx.store.load_active()?;
        let mut stashed = ctx.store.load_stashed()?;
        let names: Vec<String> = if self.all {
            active.keys().cloned().collect()
        } else {
            vec![self.changelist.clone().expect("clap requires a name")]
        };
        for name in &names {
            stash_one(ctx, &mut active, &mut stashed, name)?;
        }
        Ok(())
    }
}

/// Stash a single changelist and persist both stores. Shared with `branch`,
/// which stashes everything except its target. Each entry is durable the
/// moment this returns, so a failure mid-batch loses nothing already done.
pub fn stash_one(
    ctx: &Context,
    active: &mut ActiveStore,
    stashed: &mut StashedStore,
    name: &str,
) -> Result<()> {
    let owned = active
        .get(name)
        .ok_or_else(|| Error::NotFound(name.to_string()))?
        .clone();

    // a changelist with no saved-up modifications still migrates; there is
    // just no git stash entry to pop later
    let stash_ref = if owned.is_empty() {
        None
    } else {
        ctx.git.stash_push(name, &owned)?
    };

    let entry = StashEntry {
        file_count: owned.len(),
        paths: owned,
        stash_ref: stash_ref.unwrap_or_default(),
        created_at: chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
    };
    active.shift_remove(name);
    stashed.insert(name.to_string(), entry);
    ctx.store.save_active(active)?;
    ctx.store.save_stashed(stashed)?;
    println!(
        "Stashed changelist '{}' ({} file(s))",
        name,
        stashed[name].file_count
    );
    Ok(())
}
