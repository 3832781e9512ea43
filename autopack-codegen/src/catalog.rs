//! Component discovery, classification and validation.
//!
//! Components live in directories named after the configured components
//! subdirectory. A file is client specific when its name contains `.client.`,
//! server specific when it contains `.server.`, and common otherwise.

use std::{
    fmt, io,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use autopack_core::FileSystem;
use indexmap::IndexMap;
use regex::Regex;
use tracing::debug;

use crate::error::{CatalogError, OverrideKind};

static CLIENT_OR_SERVER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(server|client)($|\.)").expect("valid regex"));

/// Which bundle(s) a component file is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Shared between the client and the server bundle
    Common,
    /// `*.client.*`
    Client,
    /// `*.server.*`
    Server,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Common => write!(f, "common"),
            Self::Client => write!(f, "client"),
            Self::Server => write!(f, "server"),
        }
    }
}

/// A discovered component source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentFile {
    /// Registration name derived from the file name
    pub name: String,
    /// Source path
    pub path: PathBuf,
    pub category: Category,
}

impl ComponentFile {
    /// Classify a path. Returns `None` for names carrying a bare
    /// `.client`/`.server` suffix with no extension after it.
    pub fn classify(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let file_name = path.file_name()?.to_string_lossy().into_owned();

        let category = if file_name.contains(".client.") {
            Category::Client
        } else if file_name.contains(".server.") {
            Category::Server
        } else if CLIENT_OR_SERVER.is_match(&file_name) {
            return None;
        } else {
            Category::Common
        };

        Some(Self {
            name: component_name(&path),
            path,
            category,
        })
    }
}

/// Derive the registration name of a component file: the file name without
/// its extension and without the first `.client`/`.server` token.
///
/// ```
/// use autopack_codegen::component_name;
///
/// assert_eq!(component_name("ror_components/Hello.client.jsx".as_ref()), "Hello");
/// assert_eq!(component_name("ror_components/Hello.jsx".as_ref()), "Hello");
/// ```
pub fn component_name(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    CLIENT_OR_SERVER.replacen(&stem, 1, "").into_owned()
}

/// List candidate component files: every file directly inside a directory
/// named `subdirectory` anywhere below `search_root`.
pub fn discover(
    fs: &dyn FileSystem,
    search_root: &Path,
    subdirectory: &str,
) -> io::Result<Vec<PathBuf>> {
    fs.files_in_dirs_named(search_root, subdirectory)
}

/// Name → component mappings for each category, in discovery order.
///
/// When two files produce the same name within a category the later one
/// replaces the earlier, keeping the original position.
#[derive(Debug, Clone, Default)]
pub struct ComponentCatalog {
    common: IndexMap<String, ComponentFile>,
    client: IndexMap<String, ComponentFile>,
    server: IndexMap<String, ComponentFile>,
}

impl ComponentCatalog {
    /// Partition paths by category. The result is not validated yet.
    pub fn classify(paths: impl IntoIterator<Item = PathBuf>) -> Self {
        let mut catalog = Self::default();
        for path in paths {
            match ComponentFile::classify(path.clone()) {
                Some(file) => {
                    debug!(
                        name = %file.name,
                        category = %file.category,
                        path = %path.display(),
                        "classified component"
                    );
                    catalog.insert(file);
                }
                None => {
                    debug!(
                        path = %path.display(),
                        "ignoring file with a bare .client/.server suffix"
                    );
                }
            }
        }
        catalog
    }

    fn insert(&mut self, file: ComponentFile) {
        let map = match file.category {
            Category::Common => &mut self.common,
            Category::Client => &mut self.client,
            Category::Server => &mut self.server,
        };
        if let Some(previous) = map.insert(file.name.clone(), file) {
            debug!(
                name = %previous.name,
                path = %previous.path.display(),
                "component replaced by a later file with the same name"
            );
        }
    }

    /// Check the override rules, failing on the first violation.
    ///
    /// Client-vs-common and server-vs-common collisions are checked before
    /// missing client counterparts.
    pub fn validate(self) -> Result<Self, CatalogError> {
        for (name, client) in &self.client {
            if let Some(common) = self.common.get(name) {
                return Err(CatalogError::Override {
                    kind: OverrideKind::ClientOverridesCommon,
                    name: name.clone(),
                    common: common.path.clone(),
                    specific: client.path.clone(),
                });
            }
        }

        for (name, server) in &self.server {
            if let Some(common) = self.common.get(name) {
                return Err(CatalogError::Override {
                    kind: OverrideKind::ServerOverridesCommon,
                    name: name.clone(),
                    common: common.path.clone(),
                    specific: server.path.clone(),
                });
            }
        }

        for (name, server) in &self.server {
            if !self.client.contains_key(name) {
                return Err(CatalogError::MissingCounterpart {
                    name: name.clone(),
                    server: server.path.clone(),
                });
            }
        }

        Ok(self)
    }

    pub fn common(&self) -> &IndexMap<String, ComponentFile> {
        &self.common
    }

    pub fn client(&self) -> &IndexMap<String, ComponentFile> {
        &self.client
    }

    pub fn server(&self) -> &IndexMap<String, ComponentFile> {
        &self.server
    }

    /// Components that get their own generated pack: common, then client.
    pub fn pack_components(&self) -> impl Iterator<Item = &ComponentFile> {
        self.common.values().chain(self.client.values())
    }

    /// Components registered by the server bundle: common entries not
    /// shadowed by a server variant, followed by the server variants.
    pub fn server_bundle_components(&self) -> IndexMap<String, &ComponentFile> {
        let mut merged: IndexMap<String, &ComponentFile> = self
            .common
            .iter()
            .filter(|(name, _)| !self.server.contains_key(*name))
            .map(|(name, file)| (name.clone(), file))
            .collect();
        for (name, file) in &self.server {
            merged.insert(name.clone(), file);
        }
        merged
    }

    /// Total number of classified files.
    pub fn len(&self) -> usize {
        self.common.len() + self.client.len() + self.server.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
