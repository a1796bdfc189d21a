pub use std::env::*;
use std::sync::LazyLock;

use log::LevelFilter;

/// Log level override, e.g. `GIT_CL_LOG=debug git cl st`.
pub static GIT_CL_LOG: LazyLock<Option<LevelFilter>> =
    LazyLock::new(|| var("GIT_CL_LOG").ok().and_then(|v| v.parse().ok()));
