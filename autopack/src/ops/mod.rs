//! Core operations.
//!
//! This module contains the business logic for autopack commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod clean;
pub mod generate;
pub mod list;

use std::path::Path;

pub use check::check;
pub use clean::clean;
pub use generate::generate;
pub use list::list;

/// Display `path` relative to the project root when it lives inside it.
pub(crate) fn display_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
