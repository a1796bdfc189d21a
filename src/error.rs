use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid changelist name: {0}")]
    InvalidName(String),

    #[error("invalid or unsafe path: {0}")]
    InvalidPath(String),

    #[error("Changelist '{0}' not found")]
    NotFound(String),

    #[error("No stashed changelist '{0}'")]
    NotStashed(String),

    #[error("not a git repository (or any of the parent directories)")]
    NotARepository,

    #[error("git {command} failed: {}", render_git_error(.stderr))]
    GitFailed { command: String, stderr: String },
}

fn render_git_error(stderr: &str) -> String {
    let msg = stderr.trim();
    if msg.is_empty() { "exited non-zero".into() } else { msg.to_string() }
}
