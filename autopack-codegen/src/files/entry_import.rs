use std::{io, path::Path};

use autopack_core::{FileSystem, relative_path};
use regex::Regex;
use tracing::{debug, info};

/// The side-effect import that pulls the generated server bundle into the
/// host's own server entry file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryImport {
    relative_path: String,
}

impl EntryImport {
    /// Import of `bundle` as seen from `entrypoint`.
    pub fn new(entrypoint: &Path, bundle: &Path) -> Self {
        Self {
            relative_path: relative_path(entrypoint, bundle),
        }
    }

    pub fn line(&self) -> String {
        format!("import \"./{}\"\n", self.relative_path)
    }

    /// Matches an existing import of the bundle with either quote style.
    fn pattern(&self) -> io::Result<Regex> {
        let pattern = format!(r#"import ['"]\./{}['"]"#, regex::escape(&self.relative_path));
        Regex::new(&pattern).map_err(io::Error::other)
    }

    /// Whether `content` already imports the bundle.
    pub fn is_present_in(&self, content: &str) -> io::Result<bool> {
        Ok(self.pattern()?.is_match(content))
    }

    /// Prepend the import to `entrypoint` unless it is already there.
    ///
    /// A missing entry file is created with only the import. Returns whether
    /// the file was changed.
    pub fn prepend_to(&self, fs: &dyn FileSystem, entrypoint: &Path) -> io::Result<bool> {
        let existing = if fs.exists(entrypoint) {
            fs.read_to_string(entrypoint)?
        } else {
            String::new()
        };

        if self.is_present_in(&existing)? {
            debug!(entry = %entrypoint.display(), "server bundle import already present");
            return Ok(false);
        }

        fs.write(entrypoint, &format!("{}{existing}", self.line()))?;
        info!(entry = %entrypoint.display(), "added generated server bundle import");
        Ok(true)
    }
}
