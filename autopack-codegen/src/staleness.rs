//! Freshness of generated packs.

use std::io;

use autopack_core::{FileSystem, unix_seconds};
use tracing::debug;

use crate::{catalog::ComponentCatalog, layout::Layout, store::ArtifactStore};

/// Whether any generated pack is missing or older than the newest pack
/// source.
///
/// Only common and client sources count. Times are compared in whole
/// seconds, so a pack written in the same second as its source is fresh.
pub fn is_stale(
    fs: &dyn FileSystem,
    catalog: &ComponentCatalog,
    store: &ArtifactStore<'_>,
) -> io::Result<bool> {
    let mut most_recent = None;
    for component in catalog.pack_components() {
        let modified = unix_seconds(fs.modified(&component.path)?);
        most_recent = most_recent.max(Some(modified));
    }

    let Some(most_recent) = most_recent else {
        return Ok(false);
    };

    for component in catalog.pack_components() {
        let file_name = Layout::pack_file_name(&component.name);
        if !store.exists(&file_name) {
            debug!(pack = %file_name, "generated pack is missing");
            return Ok(true);
        }
        if store.modified(&file_name)? < most_recent {
            debug!(pack = %file_name, "generated pack is older than its sources");
            return Ok(true);
        }
    }

    Ok(false)
}
