use std::process::exit;

use git_cl::ui::style;

fn main() {
    if let Err(err) = git_cl::cli::run() {
        eprintln!("{} {err:#}", style::ered("error:"));
        exit(1);
    }
}
