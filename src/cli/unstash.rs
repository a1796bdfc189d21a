use crate::Result;
use crate::context::Context;
use crate::error::Error;
use crate::store;

/// Restores a stashed changelist
///
/// Pops the saved changes back into the working tree and moves the
/// changelist back to the active store.
#[derive(Debug, clap::Args)]
#[clap(visible_alias = "us")]
pub struct Unstash {
    /// Stashed changelist to restore
    #[clap(required_unless_present = "all")]
    pub changelist: Option<String>,
    /// Restores every stashed changelist
    #[clap(long, conflicts_with = "changelist")]
    pub all: bool,
}

impl Unstash {
    pub fn run(&self, ctx: &Context) -> Result<()> {
        let mut active = ctx.store.load_active()?;
        let mut stashed = ctx.store.load_stashed()?;
        let names: Vec<String> = if self.all {
            stashed.keys().cloned().collect()
        } else {
            vec![self.changelist.clone().expect("clap requires a name")]
        };
        for name in &names {
            let entry = stashed
                .get(name)
                .ok_or_else(|| Error::NotStashed(name.clone()))?;

            if !entry.stash_ref.is_empty() {
                let out = ctx.git.stash_pop(&entry.stash_ref, name)?;
                if !out.success() {
                    // a conflict leaves the stash entry in place; the stores
                    // stay untouched so the user can resolve and retry
                    return Err(Error::GitFailed {
                        command: "stash pop".into(),
                        stderr: format!("{}{}", out.stdout, out.stderr),
                    }
                    .into());
                }
            }

            let entry = stashed.shift_remove(name).expect("checked above");
            store::reassign(&mut active, name, &entry.paths);
            ctx.store.save_stashed(&stashed)?;
            ctx.store.save_active(&active)?;
            println!("Unstashed changelist '{name}' ({} file(s))", entry.file_count);
        }
        Ok(())
    }
}
