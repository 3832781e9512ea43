//! Core utilities and types for autopack.
//!
//! This crate provides the filesystem collaborator used by the generator,
//! the [`GeneratedFile`] abstraction and path helpers shared across the
//! autopack crates.

mod file;
mod fs;
#[cfg(any(test, feature = "testing"))]
mod memory;
mod paths;

// File abstractions
pub use file::{GeneratedFile, PreviewFile};
// Filesystem collaborator
pub use fs::{FileSystem, LocalFs, unix_seconds};
#[cfg(any(test, feature = "testing"))]
pub use memory::MemoryFs;
// Path helpers
pub use paths::{normalize, relative_path};
