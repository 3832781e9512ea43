// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Parsing and validation for `autopack.toml`.

mod config;
mod error;
mod file;

pub use config::{BundlerConfig, Config, PacksConfig};
pub use error::{Error, Result, SourceContext};
pub use file::AutopackToml;

/// Default config filename looked up by the CLI.
pub const CONFIG_FILE: &str = "autopack.toml";
