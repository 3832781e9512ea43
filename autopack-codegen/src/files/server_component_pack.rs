use autopack_core::GeneratedFile;

use super::REGISTER_SERVER_COMPONENT_CLIENT;
use crate::{
    builder::{CodeBuilder, CodeFragment, Renderable},
    js::Import,
    layout::Layout,
};

/// Pack that registers a server component by name only.
///
/// The component itself is never imported into the client pack; the
/// runtime fetches its rendered payload from the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerComponentPack {
    pub name: String,
}

impl ServerComponentPack {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Renderable for ServerComponentPack {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let import = Import::new(REGISTER_SERVER_COMPONENT_CLIENT)
            .default("registerServerComponent")
            .single_quoted();
        vec![
            CodeFragment::line(import.statement()),
            CodeFragment::blank(),
            CodeFragment::raw(format!("registerServerComponent(\"{}\");", self.name)),
        ]
    }
}

impl GeneratedFile for ServerComponentPack {
    fn file_name(&self) -> String {
        Layout::pack_file_name(&self.name)
    }

    fn render(&self) -> String {
        let mut builder = CodeBuilder::new();
        builder.emit(self);
        builder.build()
    }
}
