//! Component pack and server bundle generation.
//!
//! Components are discovered in directories named after the configured
//! components subdirectory, classified by file name into common, client and
//! server variants, validated, and turned into:
//!
//! - one pack per common or client component, registering it on the client
//! - one composed server bundle registering every server-side component
//!
//! [`Generator`] ties the steps together and skips work when the generated
//! output is already newer than every pack source.

#![allow(unused_assignments)]

pub mod builder;
mod catalog;
mod directive;
mod error;
pub mod files;
mod generator;
pub mod js;
mod layout;
mod staleness;
mod store;

pub use catalog::{Category, ComponentCatalog, ComponentFile, component_name, discover};
pub use directive::{first_statement, is_client_directive};
pub use error::{CatalogError, Error, OverrideKind, Result};
pub use generator::{
    CheckResult, CleanResult, GenerateOptions, GenerateResult, GenerateStatus, Generator,
};
pub use layout::{GENERATED_DIR, Layout};
pub use staleness::is_stale;
pub use store::ArtifactStore;
