//! Clean command report data structures.

use super::output::{Output, Report};

/// Report data from removing generated output.
#[derive(Debug)]
pub struct CleanReport {
    /// Whether this was a dry run.
    pub dry_run: bool,
    /// Removed paths.
    pub removed: Vec<String>,
}

impl Report for CleanReport {
    fn render(&self, out: &mut dyn Output) {
        if self.removed.is_empty() {
            out.preformatted("No generated files found.");
            return;
        }

        if self.dry_run {
            out.section("Would delete");
        } else {
            out.section("Deleted");
        }
        for path in &self.removed {
            out.removed_item(path);
        }
    }
}
