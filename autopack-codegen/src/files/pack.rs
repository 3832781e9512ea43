use std::io;

use autopack_core::{FileSystem, GeneratedFile, relative_path};

use super::{ClientPack, ServerComponentPack};
use crate::{catalog::ComponentFile, directive::is_client_directive, layout::Layout};

/// The generated pack for one component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pack {
    Client(ClientPack),
    ServerComponent(ServerComponentPack),
}

impl Pack {
    /// Choose and build the pack for `component`.
    ///
    /// With server components enabled, sources that do not start with a
    /// `"use client"` directive get a server component pack. The source is
    /// only read in that case.
    pub fn for_component(
        fs: &dyn FileSystem,
        layout: &Layout,
        component: &ComponentFile,
        server_components: bool,
    ) -> io::Result<Self> {
        if server_components && !is_client_directive(&fs.read_to_string(&component.path)?) {
            return Ok(Self::ServerComponent(ServerComponentPack::new(
                &component.name,
            )));
        }

        let import_path = relative_path(&layout.pack_path(&component.name), &component.path);
        Ok(Self::Client(ClientPack::new(&component.name, import_path)))
    }
}

impl GeneratedFile for Pack {
    fn file_name(&self) -> String {
        match self {
            Self::Client(pack) => pack.file_name(),
            Self::ServerComponent(pack) => pack.file_name(),
        }
    }

    fn render(&self) -> String {
        match self {
            Self::Client(pack) => pack.render(),
            Self::ServerComponent(pack) => pack.render(),
        }
    }
}
