//! List operation - discovered components grouped by category.

use std::path::Path;

use autopack_codegen::{ComponentFile, Generator, Result};
use autopack_config::Config;
use autopack_core::LocalFs;
use indexmap::IndexMap;

use super::display_path;
use crate::reports::{ComponentEntry, ListReport};

/// Execute the list operation.
///
/// The catalog is validated, so an invalid layout fails here just like it
/// would during generation.
pub fn list(config: &Config, root: &Path) -> Result<ListReport> {
    let fs = LocalFs::new();
    let generator = Generator::new(&fs, config, root);
    let catalog = generator.load_catalog()?;

    let entries = |components: &IndexMap<String, ComponentFile>| -> Vec<ComponentEntry> {
        components
            .values()
            .map(|c| ComponentEntry {
                name: c.name.clone(),
                path: display_path(root, &c.path),
            })
            .collect()
    };

    Ok(ListReport {
        enabled: generator.is_enabled(),
        common: entries(catalog.common()),
        client: entries(catalog.client()),
        server: entries(catalog.server()),
    })
}
