use std::{fmt, path::PathBuf};

use miette::Diagnostic;
use thiserror::Error;

/// Result type for generation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Which specific variant collides with a common definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideKind {
    ClientOverridesCommon,
    ServerOverridesCommon,
}

impl fmt::Display for OverrideKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClientOverridesCommon => write!(f, "client"),
            Self::ServerOverridesCommon => write!(f, "server"),
        }
    }
}

/// Invalid component layout. Detected before anything is written.
#[derive(Debug, Error, Diagnostic)]
pub enum CatalogError {
    #[error("{kind} specific definition for component '{name}' overrides the common definition")]
    #[diagnostic(
        code(autopack::override_common),
        help(
            "delete the common definition of '{name}' and keep separate server and client files"
        )
    )]
    Override {
        kind: OverrideKind,
        name: String,
        common: PathBuf,
        specific: PathBuf,
    },

    #[error("component '{name}' is missing a client specific file")]
    #[diagnostic(
        code(autopack::missing_client),
        help("every server specific component needs a '{name}.client' file next to it")
    )]
    MissingCounterpart { name: String, server: PathBuf },
}

impl CatalogError {
    /// Name of the offending component.
    pub fn component(&self) -> &str {
        match self {
            Self::Override { name, .. } | Self::MissingCounterpart { name, .. } => name,
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
