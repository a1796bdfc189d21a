#[macro_use]
extern crate log;

pub mod cli;
pub mod context;
pub mod env;
pub mod error;
pub mod git;
pub mod logger;
pub mod name;
pub mod paths;
pub mod status;
pub mod store;
pub mod ui;

pub use error::Error;

pub type Result<T> = eyre::Result<T>;
