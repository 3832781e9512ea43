use autopack_core::GeneratedFile;

use super::CLIENT_RUNTIME;
use crate::{
    js::{CodeFile, Import, RawCode, shorthand_object},
    layout::Layout,
};

/// Pack that imports one component and registers it on the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientPack {
    pub name: String,
    /// Component import path relative to the pack
    pub import_path: String,
}

impl ClientPack {
    pub fn new(name: impl Into<String>, import_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            import_path: import_path.into(),
        }
    }
}

impl GeneratedFile for ClientPack {
    fn file_name(&self) -> String {
        Layout::pack_file_name(&self.name)
    }

    fn render(&self) -> String {
        CodeFile::new()
            .import(
                Import::new(CLIENT_RUNTIME)
                    .default("ReactOnRails")
                    .single_quoted(),
            )
            .import(
                Import::new(&self.import_path)
                    .default(&self.name)
                    .single_quoted(),
            )
            .add(RawCode::new(format!(
                "ReactOnRails.register({});",
                shorthand_object(&[&self.name])
            )))
            .render()
    }
}
