//! Generated artifact storage.
//!
//! The generated directory doubles as the cache: file presence and
//! modification times decide whether a run has anything to do.

use std::{
    io,
    path::{Path, PathBuf},
};

use autopack_core::{FileSystem, GeneratedFile, unix_seconds};
use tracing::debug;

/// A directory of generated files addressed by file name.
pub struct ArtifactStore<'a> {
    fs: &'a dyn FileSystem,
    dir: PathBuf,
}

impl<'a> ArtifactStore<'a> {
    pub fn new(fs: &'a dyn FileSystem, dir: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            dir: dir.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Whether the directory itself exists.
    pub fn is_present(&self) -> bool {
        self.fs.is_dir(&self.dir)
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.fs.exists(&self.path(name))
    }

    /// Modification time in whole seconds since the Unix epoch.
    pub fn modified(&self, name: &str) -> io::Result<u64> {
        self.fs.modified(&self.path(name)).map(unix_seconds)
    }

    pub fn write(&self, name: &str, content: &str) -> io::Result<PathBuf> {
        let path = self.path(name);
        self.fs.write(&path, content)?;
        Ok(path)
    }

    /// Render and write a generated file.
    pub fn emit(&self, file: &impl GeneratedFile) -> io::Result<PathBuf> {
        self.write(&file.file_name(), &file.render())
    }

    /// Wipe the directory and recreate it empty.
    pub fn clear(&self) -> io::Result<()> {
        if self.is_present() {
            debug!(dir = %self.dir.display(), "removing generated directory");
            self.fs.remove_dir_all(&self.dir)?;
        }
        self.fs.create_dir_all(&self.dir)
    }
}
