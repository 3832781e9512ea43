use std::{
    io,
    path::{Path, PathBuf},
};

use autopack_core::{FileSystem, GeneratedFile, relative_path};

use super::{REGISTER_SERVER_COMPONENT_SERVER, SERVER_RUNTIME};
use crate::{
    builder::CodeBuilder,
    catalog::ComponentCatalog,
    directive::is_client_directive,
    js::{Import, shorthand_object},
};

/// The composed server bundle: every server-side component imported and
/// registered in one module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerBundle {
    path: PathBuf,
    /// `(name, import path)` in registration order
    pub imports: Vec<(String, String)>,
    /// Registered with `registerServerComponent`
    pub server_names: Vec<String>,
    /// Registered with `ReactOnRails.register`
    pub client_names: Vec<String>,
}

impl ServerBundle {
    /// Compose the bundle written to `path` from a validated catalog.
    ///
    /// Common components not shadowed by a server variant come first, then
    /// the server variants. With `server_components` on, a component is
    /// registered as a server component unless its source opens with
    /// `"use client"`.
    pub fn compose(
        fs: &dyn FileSystem,
        catalog: &ComponentCatalog,
        path: impl Into<PathBuf>,
        server_components: bool,
    ) -> io::Result<Self> {
        let path = path.into();
        let mut bundle = Self {
            imports: Vec::new(),
            server_names: Vec::new(),
            client_names: Vec::new(),
            path,
        };

        for (name, component) in catalog.server_bundle_components() {
            bundle
                .imports
                .push((name.clone(), relative_path(&bundle.path, &component.path)));

            if server_components && !is_client_directive(&fs.read_to_string(&component.path)?) {
                bundle.server_names.push(name);
            } else {
                bundle.client_names.push(name);
            }
        }

        Ok(bundle)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GeneratedFile for ServerBundle {
    fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    fn render(&self) -> String {
        let imports: Vec<String> = self
            .imports
            .iter()
            .map(|(name, from)| Import::new(from).default(name).single_quoted().statement())
            .collect();

        let mut builder = CodeBuilder::new();
        builder
            .push_line(
                &Import::new(SERVER_RUNTIME)
                    .default("ReactOnRails")
                    .single_quoted()
                    .statement(),
            )
            .push_blank()
            .push_raw(&imports.join("\n"))
            .push_blank()
            .push_blank();

        if !self.server_names.is_empty() {
            builder
                .push_line(
                    &Import::new(REGISTER_SERVER_COMPONENT_SERVER)
                        .default("registerServerComponent")
                        .single_quoted()
                        .statement(),
                )
                .push_line(&format!(
                    "registerServerComponent({});",
                    shorthand_object(&self.server_names)
                ))
                .push_blank();
        }

        builder.push_raw(&format!(
            "ReactOnRails.register({});",
            shorthand_object(&self.client_names)
        ));
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use autopack_core::MemoryFs;

    use super::*;

    const BUNDLE: &str = "/app/js/generated/server-bundle-generated.js";

    fn catalog(fs: &MemoryFs) -> ComponentCatalog {
        ComponentCatalog::classify(fs.paths())
    }

    #[test]
    fn test_compose_without_server_components() {
        let fs = MemoryFs::new()
            .with_file("/app/js/c/ror_components/A.jsx", "")
            .with_file("/app/js/c/ror_components/B.client.jsx", "")
            .with_file("/app/js/c/ror_components/B.server.jsx", "");

        let bundle = ServerBundle::compose(&fs, &catalog(&fs), BUNDLE, false).unwrap();

        assert_eq!(bundle.file_name(), "server-bundle-generated.js");
        assert_eq!(
            bundle.imports,
            vec![
                ("A".to_string(), "../c/ror_components/A.jsx".to_string()),
                ("B".to_string(), "../c/ror_components/B.server.jsx".to_string()),
            ]
        );
        assert!(bundle.server_names.is_empty());
        assert_eq!(bundle.client_names, ["A", "B"]);
    }

    #[test]
    fn test_compose_partitions_by_directive() {
        let fs = MemoryFs::new()
            .with_file("/app/js/c/ror_components/Feed.jsx", "export default 1;")
            .with_file("/app/js/c/ror_components/Like.jsx", "\"use client\";\n");

        let bundle = ServerBundle::compose(&fs, &catalog(&fs), BUNDLE, true).unwrap();

        assert_eq!(bundle.server_names, ["Feed"]);
        assert_eq!(bundle.client_names, ["Like"]);
    }

    #[test]
    fn test_render_empty_bundle() {
        let bundle = ServerBundle {
            path: PathBuf::from(BUNDLE),
            imports: Vec::new(),
            server_names: Vec::new(),
            client_names: Vec::new(),
        };
        assert_eq!(
            bundle.render(),
            "import ReactOnRails from 'react-on-rails';\n\n\n\nReactOnRails.register({});"
        );
    }
}
