use crate::Result;
use crate::context::Context;
use crate::{name, store};

/// Adds files to a changelist, creating it if needed
///
/// A file belongs to at most one changelist; adding it to another moves it.
#[derive(Debug, clap::Args)]
pub struct Add {
    /// Changelist to add the files to
    pub changelist: String,
    /// Files to add, relative to the current directory
    #[clap(required = true)]
    pub paths: Vec<String>,
}

impl Add {
    pub fn run(&self, ctx: &Context) -> Result<()> {
        name::validate(&self.changelist)?;

        let mut resolved: Vec<String> = vec![];
        let mut rejected = vec![];
        for path in &self.paths {
            match ctx.normalize(path) {
                Ok(rel) => {
                    if !ctx.git.root().join(&rel).exists() {
                        warn!("'{path}' does not exist");
                    }
                    if !resolved.contains(&rel) {
                        resolved.push(rel);
                    }
                }
                Err(err) => rejected.push(err),
            }
        }
        if resolved.is_empty() {
            if let Some(err) = rejected.into_iter().next() {
                return Err(err);
            }
            return Ok(());
        }
        for err in rejected {
            warn!("{err}");
        }

        let mut active = ctx.store.load_active()?;
        store::reassign(&mut active, &self.changelist, &resolved);
        ctx.store.save_active(&active)?;
        println!("Added to '{}': {} file(s)", self.changelist, resolved.len());
        Ok(())
    }
}
