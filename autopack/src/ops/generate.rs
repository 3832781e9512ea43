//! Generate operation - write component packs and the server bundle.

use std::path::Path;

use autopack_codegen::{GenerateStatus, Generator, Result};
use autopack_config::Config;
use autopack_core::LocalFs;

use super::display_path;
use crate::reports::{GenerateReport, PreviewFile, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Project root all configured paths are relative to.
    pub root: &'a Path,
    /// Whether to regenerate fresh output.
    pub force: bool,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
pub fn generate(config: &Config, opts: GenerateOptions) -> Result<GenerateReport> {
    let fs = LocalFs::new();
    let generator = Generator::new(&fs, config, opts.root);

    if !generator.is_enabled() {
        return Ok(GenerateReport::Disabled);
    }

    if opts.dry_run {
        let files = generator
            .preview()?
            .into_iter()
            .map(|f| PreviewFile {
                path: display_path(opts.root, &f.path),
                content: f.content,
            })
            .collect();
        return Ok(GenerateReport::Preview(files));
    }

    let result = generator.generate(autopack_codegen::GenerateOptions { force: opts.force })?;

    Ok(match result.status {
        GenerateStatus::Disabled => GenerateReport::Disabled,
        GenerateStatus::UpToDate => GenerateReport::UpToDate {
            entry_import_added: result.entry_import_added,
        },
        GenerateStatus::Generated => GenerateReport::Written(WrittenResult {
            packs: result
                .packs
                .iter()
                .map(|p| display_path(opts.root, p))
                .collect(),
            server_bundle: result
                .server_bundle
                .as_deref()
                .map(|p| display_path(opts.root, p)),
            entry_import_added: result.entry_import_added,
        }),
    })
}
