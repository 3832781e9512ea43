//! The files autopack writes.

mod client_pack;
mod entry_import;
mod pack;
mod server_bundle;
mod server_component_pack;

pub use client_pack::ClientPack;
pub use entry_import::EntryImport;
pub use pack::Pack;
pub use server_bundle::ServerBundle;
pub use server_component_pack::ServerComponentPack;

/// Client side registration runtime.
pub const CLIENT_RUNTIME: &str = "react-on-rails/client";
/// Server side registration runtime.
pub const SERVER_RUNTIME: &str = "react-on-rails";
pub const REGISTER_SERVER_COMPONENT_CLIENT: &str = "react-on-rails/registerServerComponent/client";
pub const REGISTER_SERVER_COMPONENT_SERVER: &str = "react-on-rails/registerServerComponent/server";
