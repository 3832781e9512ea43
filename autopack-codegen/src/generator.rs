//! Pack generation entry point.

use std::path::{Path, PathBuf};

use autopack_config::Config;
use autopack_core::{FileSystem, GeneratedFile, PreviewFile};
use tracing::{debug, info};

use crate::{
    Result,
    catalog::{ComponentCatalog, discover},
    files::{EntryImport, Pack, ServerBundle},
    layout::Layout,
    staleness::is_stale,
    store::ArtifactStore,
};

/// Options for [`Generator::generate`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Regenerate even when every pack is fresh
    pub force: bool,
}

/// What a generation run ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateStatus {
    /// `auto_load_bundle` is off
    Disabled,
    /// Everything was fresh, nothing regenerated
    UpToDate,
    /// The generated directory was rebuilt
    Generated,
}

/// Result of a generation run
#[derive(Debug)]
pub struct GenerateResult {
    pub status: GenerateStatus,
    /// Packs written, in emission order
    pub packs: Vec<PathBuf>,
    /// The composed server bundle, when one was written
    pub server_bundle: Option<PathBuf>,
    /// Whether the host entry file gained the bundle import
    pub entry_import_added: bool,
}

impl GenerateResult {
    fn new(status: GenerateStatus) -> Self {
        Self {
            status,
            packs: Vec::new(),
            server_bundle: None,
            entry_import_added: false,
        }
    }
}

/// Result of a freshness check
#[derive(Debug)]
pub struct CheckResult {
    pub catalog: ComponentCatalog,
    pub up_to_date: bool,
}

/// Result of cleaning generated output
#[derive(Debug, Default)]
pub struct CleanResult {
    /// Paths that were (or would be) removed
    pub removed: Vec<PathBuf>,
}

/// Generates one pack per component plus the composed server bundle.
pub struct Generator<'a> {
    fs: &'a dyn FileSystem,
    config: &'a Config,
    layout: Layout,
}

impl<'a> Generator<'a> {
    pub fn new(fs: &'a dyn FileSystem, config: &'a Config, root: &Path) -> Self {
        Self {
            fs,
            config,
            layout: Layout::new(root, config),
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn is_enabled(&self) -> bool {
        self.config.packs.auto_load_bundle
    }

    fn server_components(&self) -> bool {
        self.config.packs.server_components
    }

    fn pack_store(&self) -> ArtifactStore<'a> {
        ArtifactStore::new(self.fs, self.layout.generated_packs_dir())
    }

    /// Discover, classify and validate the components.
    pub fn load_catalog(&self) -> Result<ComponentCatalog> {
        let paths = discover(
            self.fs,
            self.layout.search_root(),
            self.layout.components_subdirectory(),
        )?;
        debug!(
            root = %self.layout.search_root().display(),
            files = paths.len(),
            "discovered component files"
        );
        Ok(ComponentCatalog::classify(paths).validate()?)
    }

    /// Whether the generated output exists and no pack is stale.
    pub fn is_up_to_date(&self, catalog: &ComponentCatalog) -> Result<bool> {
        let store = self.pack_store();
        if !store.is_present() {
            debug!(dir = %store.dir().display(), "generated packs directory is missing");
            return Ok(false);
        }

        let missing_bundle = self
            .layout
            .generated_server_bundle_path()
            .filter(|bundle| !self.fs.exists(bundle));
        if let Some(bundle) = missing_bundle {
            debug!(path = %bundle.display(), "generated server bundle is missing");
            return Ok(false);
        }

        Ok(!is_stale(self.fs, catalog, &store)?)
    }

    /// Validate the components and report whether generation has work to do.
    /// Nothing is written.
    pub fn check(&self) -> Result<CheckResult> {
        let catalog = self.load_catalog()?;
        let up_to_date = self.is_up_to_date(&catalog)?;
        Ok(CheckResult {
            catalog,
            up_to_date,
        })
    }

    /// Make sure the host server entry imports the generated bundle.
    ///
    /// Nothing to do without a configured server bundle, or when the bundle
    /// is written over the entry file itself.
    pub fn ensure_entry_import(&self) -> Result<bool> {
        if self.layout.bundle_is_entrypoint() {
            return Ok(false);
        }
        let (Some(entrypoint), Some(bundle)) = (
            self.layout.server_bundle_entrypoint(),
            self.layout.generated_server_bundle_path(),
        ) else {
            return Ok(false);
        };

        Ok(EntryImport::new(&entrypoint, &bundle).prepend_to(self.fs, &entrypoint)?)
    }

    /// Run generation.
    ///
    /// The catalog is validated before anything is written. The entry
    /// import is ensured on every enabled run; the generated directory is
    /// only rebuilt when something is missing or stale, or when forced.
    pub fn generate(&self, options: GenerateOptions) -> Result<GenerateResult> {
        if !self.is_enabled() {
            debug!("auto_load_bundle is disabled, skipping pack generation");
            return Ok(GenerateResult::new(GenerateStatus::Disabled));
        }

        let catalog = self.load_catalog()?;
        let entry_import_added = self.ensure_entry_import()?;

        if !options.force && self.is_up_to_date(&catalog)? {
            info!("generated packs are up to date");
            return Ok(GenerateResult {
                entry_import_added,
                ..GenerateResult::new(GenerateStatus::UpToDate)
            });
        }

        let store = self.pack_store();
        store.clear()?;

        let mut packs = Vec::new();
        for component in catalog.pack_components() {
            let pack = Pack::for_component(
                self.fs,
                &self.layout,
                component,
                self.server_components(),
            )?;
            let path = store.emit(&pack)?;
            info!(path = %path.display(), "generated pack");
            packs.push(path);
        }

        let server_bundle = match self.server_bundle(&catalog)? {
            Some(bundle) => {
                self.fs.write(bundle.path(), &bundle.render())?;
                info!(path = %bundle.path().display(), "generated server bundle");
                Some(bundle.path().to_path_buf())
            }
            None => None,
        };

        Ok(GenerateResult {
            status: GenerateStatus::Generated,
            packs,
            server_bundle,
            entry_import_added,
        })
    }

    fn server_bundle(&self, catalog: &ComponentCatalog) -> Result<Option<ServerBundle>> {
        let Some(path) = self.layout.generated_server_bundle_path() else {
            return Ok(None);
        };
        Ok(Some(ServerBundle::compose(
            self.fs,
            catalog,
            path,
            self.server_components(),
        )?))
    }

    /// Render every file a forced run would write, without writing.
    pub fn preview(&self) -> Result<Vec<PreviewFile>> {
        if !self.is_enabled() {
            return Ok(Vec::new());
        }

        let catalog = self.load_catalog()?;
        let dir = self.layout.generated_packs_dir();

        let mut files = Vec::new();
        for component in catalog.pack_components() {
            let pack = Pack::for_component(
                self.fs,
                &self.layout,
                component,
                self.server_components(),
            )?;
            files.push(PreviewFile::of(&dir, &pack));
        }
        if let Some(bundle) = self.server_bundle(&catalog)? {
            files.push(PreviewFile::new(bundle.path(), bundle.render()));
        }

        Ok(files)
    }

    /// Generated output that exists on disk.
    ///
    /// The host entry file is never included, and neither is the bundle
    /// when it doubles as the entry file.
    fn generated_output(&self) -> Vec<PathBuf> {
        let mut paths = Vec::new();

        let packs_dir = self.layout.generated_packs_dir();
        if self.fs.is_dir(&packs_dir) {
            paths.push(packs_dir);
        }

        let bundle = self
            .layout
            .generated_server_bundle_path()
            .filter(|bundle| !self.layout.bundle_is_entrypoint() && self.fs.exists(bundle));
        paths.extend(bundle);

        paths
    }

    /// Remove the generated packs directory and the generated server bundle.
    pub fn clean(&self) -> Result<CleanResult> {
        let removed = self.generated_output();
        for path in &removed {
            if self.fs.is_dir(path) {
                self.fs.remove_dir_all(path)?;
            } else {
                self.fs.remove_file(path)?;
            }
            info!(path = %path.display(), "removed");
        }
        Ok(CleanResult { removed })
    }

    /// What [`clean`](Self::clean) would remove.
    pub fn preview_clean(&self) -> CleanResult {
        CleanResult {
            removed: self.generated_output(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use autopack_core::MemoryFs;

    use super::*;
    use crate::{Error, error::CatalogError};

    const COMPONENTS: &str = "/app/app/javascript/bundles/ror_components";
    const ENTRY: &str = "/app/app/javascript/packs/server-bundle.js";
    const BUNDLE: &str = "/app/app/javascript/generated/server-bundle-generated.js";
    const PACKS: &str = "/app/app/javascript/packs/generated";

    fn config(extra: &str) -> Config {
        Config::from_str(&format!(
            "[packs]\nauto_load_bundle = true\ncomponents_subdirectory = \"ror_components\"\nserver_bundle_js_file = \"server-bundle.js\"\n{extra}"
        ))
        .unwrap()
    }

    fn project() -> MemoryFs {
        MemoryFs::new()
            .with_file(format!("{COMPONENTS}/Hello.jsx"), "export default 1;")
            .with_file(format!("{COMPONENTS}/Nav.client.jsx"), "'use client';")
            .with_file(format!("{COMPONENTS}/Nav.server.jsx"), "export default 2;")
            .with_file(ENTRY, "import './polyfills';\n")
    }

    #[test]
    fn test_disabled_is_a_noop() {
        let fs = project();
        let config = Config::from_str("").unwrap();

        let result = Generator::new(&fs, &config, Path::new("/app"))
            .generate(GenerateOptions { force: true })
            .unwrap();

        assert_eq!(result.status, GenerateStatus::Disabled);
        assert_eq!(fs.write_count(), 0);
    }

    #[test]
    fn test_generate_writes_packs_bundle_and_entry_import() {
        let fs = project();
        let config = config("");

        let result = Generator::new(&fs, &config, Path::new("/app"))
            .generate(GenerateOptions::default())
            .unwrap();

        assert_eq!(result.status, GenerateStatus::Generated);
        assert_eq!(
            result.packs,
            vec![
                PathBuf::from(format!("{PACKS}/Hello.js")),
                PathBuf::from(format!("{PACKS}/Nav.js")),
            ]
        );
        assert_eq!(result.server_bundle, Some(PathBuf::from(BUNDLE)));
        assert!(result.entry_import_added);

        let bundle = fs.contents(BUNDLE).unwrap();
        assert!(bundle.contains("import Nav from '../bundles/ror_components/Nav.server.jsx';"));
        assert!(bundle.ends_with("ReactOnRails.register({Hello,\nNav});"));

        assert_eq!(
            fs.contents(ENTRY).unwrap(),
            "import \"./../generated/server-bundle-generated.js\"\nimport './polyfills';\n"
        );
    }

    #[test]
    fn test_second_run_writes_nothing() {
        let fs = project();
        let config = config("");
        let generator = Generator::new(&fs, &config, Path::new("/app"));

        generator.generate(GenerateOptions::default()).unwrap();
        let writes = fs.write_count();

        let result = generator.generate(GenerateOptions::default()).unwrap();

        assert_eq!(result.status, GenerateStatus::UpToDate);
        assert!(!result.entry_import_added);
        assert_eq!(fs.write_count(), writes);
    }

    #[test]
    fn test_touched_source_regenerates() {
        let fs = project();
        let config = config("");
        let generator = Generator::new(&fs, &config, Path::new("/app"));
        generator.generate(GenerateOptions::default()).unwrap();

        fs.advance(5);
        fs.touch(format!("{COMPONENTS}/Hello.jsx"));

        let result = generator.generate(GenerateOptions::default()).unwrap();
        assert_eq!(result.status, GenerateStatus::Generated);
    }

    #[test]
    fn test_missing_bundle_regenerates() {
        let fs = project();
        let config = config("");
        let generator = Generator::new(&fs, &config, Path::new("/app"));
        generator.generate(GenerateOptions::default()).unwrap();

        fs.remove_file(Path::new(BUNDLE)).unwrap();

        let result = generator.generate(GenerateOptions::default()).unwrap();
        assert_eq!(result.status, GenerateStatus::Generated);
        assert!(fs.exists(Path::new(BUNDLE)));
    }

    #[test]
    fn test_force_regenerates_fresh_output() {
        let fs = project();
        let config = config("");
        let generator = Generator::new(&fs, &config, Path::new("/app"));
        generator.generate(GenerateOptions::default()).unwrap();

        let result = generator
            .generate(GenerateOptions { force: true })
            .unwrap();
        assert_eq!(result.status, GenerateStatus::Generated);
    }

    #[test]
    fn test_stale_pack_is_removed_on_regeneration() {
        let fs = project().with_file(format!("{PACKS}/Gone.js"), "old");
        let config = config("");

        Generator::new(&fs, &config, Path::new("/app"))
            .generate(GenerateOptions::default())
            .unwrap();

        assert!(!fs.exists(Path::new(&format!("{PACKS}/Gone.js"))));
    }

    #[test]
    fn test_invalid_catalog_writes_nothing() {
        let fs = project().with_file(format!("{COMPONENTS}/Hello.client.jsx"), "");
        let config = config("");

        let err = Generator::new(&fs, &config, Path::new("/app"))
            .generate(GenerateOptions::default())
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Catalog(CatalogError::Override { ref name, .. }) if name == "Hello"
        ));
        assert_eq!(fs.write_count(), 0);
        assert_eq!(fs.contents(ENTRY).unwrap(), "import './polyfills';\n");
    }

    #[test]
    fn test_bundle_as_entrypoint() {
        let fs = project();
        let config = config("make_generated_server_bundle_the_entrypoint = true\n");

        let result = Generator::new(&fs, &config, Path::new("/app"))
            .generate(GenerateOptions::default())
            .unwrap();

        assert!(!result.entry_import_added);
        assert_eq!(result.server_bundle, Some(PathBuf::from(ENTRY)));
        assert!(
            fs.contents(ENTRY)
                .unwrap()
                .starts_with("import ReactOnRails from 'react-on-rails';")
        );
    }

    #[test]
    fn test_server_components_packs() {
        let fs = project();
        let config = config("server_components = true\n");

        Generator::new(&fs, &config, Path::new("/app"))
            .generate(GenerateOptions::default())
            .unwrap();

        assert!(
            fs.contents(format!("{PACKS}/Hello.js"))
                .unwrap()
                .contains("registerServerComponent(\"Hello\");")
        );
        assert!(
            fs.contents(format!("{PACKS}/Nav.js"))
                .unwrap()
                .contains("ReactOnRails.register({Nav});")
        );
    }

    #[test]
    fn test_preview_writes_nothing() {
        let fs = project();
        let config = config("");

        let files = Generator::new(&fs, &config, Path::new("/app"))
            .preview()
            .unwrap();

        let paths: Vec<_> = files.iter().map(|f| f.path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from(format!("{PACKS}/Hello.js")),
                PathBuf::from(format!("{PACKS}/Nav.js")),
                PathBuf::from(BUNDLE),
            ]
        );
        assert_eq!(fs.write_count(), 0);
    }

    #[test]
    fn test_clean_removes_generated_output_only() {
        let fs = project();
        let config = config("");
        let generator = Generator::new(&fs, &config, Path::new("/app"));
        generator.generate(GenerateOptions::default()).unwrap();

        assert_eq!(generator.preview_clean().removed.len(), 2);
        let result = generator.clean().unwrap();

        assert_eq!(
            result.removed,
            vec![PathBuf::from(PACKS), PathBuf::from(BUNDLE)]
        );
        assert!(!fs.exists(Path::new(PACKS)));
        assert!(!fs.exists(Path::new(BUNDLE)));
        assert!(fs.exists(Path::new(ENTRY)));
    }

    #[test]
    fn test_check_reports_freshness() {
        let fs = project();
        let config = config("");
        let generator = Generator::new(&fs, &config, Path::new("/app"));

        let before = generator.check().unwrap();
        assert!(!before.up_to_date);
        assert_eq!(before.catalog.len(), 3);

        generator.generate(GenerateOptions::default()).unwrap();
        let writes = fs.write_count();

        assert!(generator.check().unwrap().up_to_date);
        assert_eq!(fs.write_count(), writes);
    }
}
