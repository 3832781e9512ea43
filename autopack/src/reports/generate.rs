//! Generate command report data structures.

use super::output::{Output, Report};

/// Report data from pack generation.
#[derive(Debug)]
pub enum GenerateReport {
    /// `auto_load_bundle` is off.
    Disabled,
    /// Nothing needed regenerating.
    UpToDate { entry_import_added: bool },
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Generated packs.
    pub packs: Vec<String>,
    /// Generated server bundle, if configured.
    pub server_bundle: Option<String>,
    /// Whether the server entry gained the bundle import.
    pub entry_import_added: bool,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match self {
            Self::Disabled => {
                out.preformatted("auto_load_bundle is disabled, nothing to generate.");
            }
            Self::UpToDate { entry_import_added } => {
                if *entry_import_added {
                    out.section("Updated");
                    out.added_item("server bundle import");
                    out.newline();
                }
                out.preformatted("Generated packs are up to date.");
            }
            Self::Written(written) => render_written(out, written),
            Self::Preview(files) => render_preview(out, files),
        }
    }
}

fn render_written(out: &mut dyn Output, written: &WrittenResult) {
    out.section(&format!("Generated packs ({})", written.packs.len()));
    for pack in &written.packs {
        out.added_item(pack);
    }

    if let Some(bundle) = &written.server_bundle {
        out.newline();
        out.key_value("Generated server bundle", bundle);
    }

    if written.entry_import_added {
        out.key_value("Updated", "server bundle import added to the entry file");
    }
}

fn render_preview(out: &mut dyn Output, files: &[PreviewFile]) {
    for file in files {
        out.divider(&file.path);
        out.preformatted(&file.content);
    }

    out.divider("Summary");
    out.preformatted(&format!("{} files would be generated", files.len()));
}
