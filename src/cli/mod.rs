use clap::Parser;
use log::LevelFilter;

use crate::Result;
use crate::context::Context;
use crate::logger;

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod delete;
pub mod diff;
pub mod remove;
pub mod stage;
pub mod stash;
pub mod status;
pub mod unstage;
pub mod unstash;

#[derive(clap::Parser)]
#[clap(
    name = "git-cl",
    bin_name = "git cl",
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION")
)]
struct Cli {
    /// Enables verbose output
    #[clap(short, long, global = true, action = clap::ArgAction::Count, overrides_with = "quiet")]
    verbose: u8,
    /// Only shows errors
    #[clap(short, long, global = true, overrides_with = "verbose")]
    quiet: bool,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Add(Box<add::Add>),
    Branch(Box<branch::Branch>),
    Checkout(Box<checkout::Checkout>),
    Commit(Box<commit::Commit>),
    Delete(Box<delete::Delete>),
    Diff(Box<diff::Diff>),
    Remove(Box<remove::Remove>),
    Stage(Box<stage::Stage>),
    Stash(Box<stash::Stash>),
    Status(Box<status::Status>),
    Unstage(Box<unstage::Unstage>),
    Unstash(Box<unstash::Unstash>),
}

pub fn run() -> Result<()> {
    color_eyre::install()?;
    let args = Cli::parse();
    let mut level = None;
    if args.verbose == 1 {
        level = Some(LevelFilter::Debug);
    }
    if args.verbose > 1 {
        level = Some(LevelFilter::Trace);
    }
    if args.quiet {
        level = Some(LevelFilter::Error);
    }
    logger::init(level);
    let ctx = Context::new()?;
    match args.command {
        Commands::Add(cmd) => cmd.run(&ctx),
        Commands::Branch(cmd) => cmd.run(&ctx),
        Commands::Checkout(cmd) => cmd.run(&ctx),
        Commands::Commit(cmd) => cmd.run(&ctx),
        Commands::Delete(cmd) => cmd.run(&ctx),
        Commands::Diff(cmd) => cmd.run(&ctx),
        Commands::Remove(cmd) => cmd.run(&ctx),
        Commands::Stage(cmd) => cmd.run(&ctx),
        Commands::Stash(cmd) => cmd.run(&ctx),
        Commands::Status(cmd) => cmd.run(&ctx),
        Commands::Unstage(cmd) => cmd.run(&ctx),
        Commands::Unstash(cmd) => cmd.run(&ctx),
    }
}
