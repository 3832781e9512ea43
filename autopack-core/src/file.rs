use std::path::PathBuf;

/// Trait for types that represent a generated file.
///
/// Generated files only know their own name and content; the directory they
/// land in is decided by whoever emits them.
pub trait GeneratedFile {
    /// File name inside the directory the file is emitted into
    fn file_name(&self) -> String;

    /// Render the file content
    fn render(&self) -> String;
}

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Path the file would be written to
    pub path: PathBuf,
    /// File content
    pub content: String,
}

impl PreviewFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Preview a [`GeneratedFile`] placed in `dir`.
    pub fn of(dir: impl Into<PathBuf>, file: &impl GeneratedFile) -> Self {
        let mut path = dir.into();
        path.push(file.file_name());
        Self::new(path, file.render())
    }
}
