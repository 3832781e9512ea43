//! Clean operation - remove generated output.

use std::path::Path;

use autopack_codegen::{Generator, Result};
use autopack_config::Config;
use autopack_core::LocalFs;

use super::display_path;
use crate::reports::CleanReport;

/// Options for the clean operation.
pub struct CleanOptions<'a> {
    /// Project root all configured paths are relative to.
    pub root: &'a Path,
    /// Whether to preview without deleting.
    pub dry_run: bool,
}

/// Execute the clean operation.
///
/// Removes the generated packs directory and the generated server bundle.
/// The host entry file is left alone.
pub fn clean(config: &Config, opts: CleanOptions) -> Result<CleanReport> {
    let fs = LocalFs::new();
    let generator = Generator::new(&fs, config, opts.root);

    let result = if opts.dry_run {
        generator.preview_clean()
    } else {
        generator.clean()?
    };

    Ok(CleanReport {
        dry_run: opts.dry_run,
        removed: result
            .removed
            .iter()
            .map(|p| display_path(opts.root, p))
            .collect(),
    })
}
