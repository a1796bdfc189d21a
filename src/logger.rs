use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::env;
use crate::ui::style;

struct Logger {
    level: LevelFilter,
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        match record.level() {
            Level::Error => eprintln!("{} {}", style::ered("error:"), record.args()),
            Level::Warn => eprintln!("{} {}", style::eyellow("warning:"), record.args()),
            Level::Info => eprintln!("{}", record.args()),
            Level::Debug | Level::Trace => {
                eprintln!("{}", style::edim(format!("{}", record.args())))
            }
        }
    }

    fn flush(&self) {}
}

/// Install the global logger. CLI flags win over `GIT_CL_LOG`; the default
/// level is `Info` so warnings reach the user without any flags.
pub fn init(level: Option<LevelFilter>) {
    let level = level.or(*env::GIT_CL_LOG).unwrap_or(LevelFilter::Info);
    if log::set_boxed_logger(Box::new(Logger { level })).is_ok() {
        log::set_max_level(level);
    }
}
