//! Config types and parsing for autopack.toml files.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;

use crate::{Error, Result, SourceContext};

/// Root config for autopack.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Where the bundler reads sources and entry points from
    #[serde(default)]
    pub bundler: BundlerConfig,

    /// Pack generation settings
    #[serde(default)]
    pub packs: PacksConfig,
}

/// Bundler source layout, relative to the project root
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BundlerConfig {
    /// Root of all bundler sources
    #[serde(default = "default_source_path")]
    pub source_path: PathBuf,

    /// Directory holding the bundler entry points
    #[serde(default = "default_source_entry_path")]
    pub source_entry_path: PathBuf,
}

impl Default for BundlerConfig {
    fn default() -> Self {
        Self {
            source_path: default_source_path(),
            source_entry_path: default_source_entry_path(),
        }
    }
}

fn default_source_path() -> PathBuf {
    PathBuf::from("app/javascript")
}

fn default_source_entry_path() -> PathBuf {
    PathBuf::from("app/javascript/packs")
}

/// Pack generation settings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PacksConfig {
    /// Enables pack generation; everything is a no-op when false
    #[serde(default)]
    pub auto_load_bundle: bool,

    /// Name of the directories that hold registrable components
    pub components_subdirectory: Option<String>,

    /// Server bundle entry file inside `source_entry_path`
    pub server_bundle_js_file: Option<String>,

    /// Write the generated server bundle over the entry file itself
    #[serde(default)]
    pub make_generated_server_bundle_the_entrypoint: bool,

    /// Register components without a "use client" directive as server components
    #[serde(default)]
    pub server_components: bool,
}

impl Config {
    /// Parse an autopack.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_config(&content, &path.display().to_string())
    }

    /// Parse an autopack.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_config(content, filename)
    }

    /// Components subdirectory name, empty when unset.
    pub fn components_subdirectory(&self) -> &str {
        self.packs.components_subdirectory.as_deref().unwrap_or("")
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, crate::CONFIG_FILE)
    }
}

/// Parse a config from content with the given filename for error reporting.
fn parse_config(content: &str, filename: &str) -> Result<Config> {
    let ctx = SourceContext::new(content, filename);
    let config: Config = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    validate_config(&config, &ctx)?;
    Ok(config)
}

/// Validate the config after parsing.
fn validate_config(config: &Config, ctx: &SourceContext) -> Result<()> {
    let packs = &config.packs;

    match packs.components_subdirectory.as_deref() {
        None | Some("") if packs.auto_load_bundle => {
            return Err(ctx.validation_error(
                "components_subdirectory must be set when auto_load_bundle is enabled",
                "auto_load_bundle",
            ));
        }
        Some(dir) if dir.contains(['/', '\\']) => {
            return Err(ctx.validation_error(
                format!("components_subdirectory '{dir}' must be a single directory name"),
                "components_subdirectory",
            ));
        }
        _ => {}
    }

    if packs.server_bundle_js_file.as_deref() == Some("") {
        return Err(ctx.validation_error(
            "server_bundle_js_file must not be empty",
            "server_bundle_js_file",
        ));
    }

    Ok(())
}
