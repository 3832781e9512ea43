//! Where generated files go.

use std::path::{Path, PathBuf};

use autopack_config::Config;

use crate::catalog::component_name;

/// Name of the directories generated files are written into.
pub const GENERATED_DIR: &str = "generated";

/// Resolved locations of sources and generated output for one project.
#[derive(Debug, Clone)]
pub struct Layout {
    source_path: PathBuf,
    source_entry_path: PathBuf,
    components_subdirectory: String,
    server_bundle_js_file: Option<String>,
    bundle_is_entrypoint: bool,
}

impl Layout {
    /// Resolve the config's paths against the project root.
    pub fn new(root: &Path, config: &Config) -> Self {
        Self {
            source_path: root.join(&config.bundler.source_path),
            source_entry_path: root.join(&config.bundler.source_entry_path),
            components_subdirectory: config.components_subdirectory().to_string(),
            server_bundle_js_file: config.packs.server_bundle_js_file.clone(),
            bundle_is_entrypoint: config.packs.make_generated_server_bundle_the_entrypoint,
        }
    }

    /// Root of the component search.
    pub fn search_root(&self) -> &Path {
        &self.source_path
    }

    pub fn components_subdirectory(&self) -> &str {
        &self.components_subdirectory
    }

    /// Directory holding one generated pack per component.
    pub fn generated_packs_dir(&self) -> PathBuf {
        self.source_entry_path.join(GENERATED_DIR)
    }

    /// File name of the pack generated for component `name`.
    pub fn pack_file_name(name: &str) -> String {
        format!("{name}.js")
    }

    pub fn pack_path(&self, name: &str) -> PathBuf {
        self.generated_packs_dir().join(Self::pack_file_name(name))
    }

    /// Whether the generated server bundle replaces the entry file.
    pub fn bundle_is_entrypoint(&self) -> bool {
        self.bundle_is_entrypoint
    }

    /// The host's server bundle entry file, when one is configured.
    pub fn server_bundle_entrypoint(&self) -> Option<PathBuf> {
        self.server_bundle_js_file
            .as_ref()
            .map(|file| self.source_entry_path.join(file))
    }

    /// Where the composed server bundle is written.
    ///
    /// Either the entry file itself, or `<name>-generated.js` in a
    /// `generated` directory next to the source entry directory.
    pub fn generated_server_bundle_path(&self) -> Option<PathBuf> {
        let entrypoint = self.server_bundle_entrypoint()?;
        if self.bundle_is_entrypoint {
            return Some(entrypoint);
        }

        let entry_name = entrypoint
            .file_name()
            .map(|n| n.to_string_lossy().replacen(".js", "-generated.js", 1))
            .unwrap_or_default();
        let name = component_name(Path::new(&entry_name));
        let parent = self
            .source_entry_path
            .parent()
            .unwrap_or(&self.source_entry_path);

        Some(parent.join(GENERATED_DIR).join(format!("{name}.js")))
    }
}
