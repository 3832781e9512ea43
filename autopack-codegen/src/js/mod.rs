//! JavaScript syntax builders for generated modules.

mod code_file;
mod import;
mod object;

pub use code_file::{CodeFile, RawCode};
pub use import::Import;
pub use object::shorthand_object;
