//! Code builder utility for assembling generated modules.

use super::{CodeFragment, Renderable};

/// Mutable buffer for building generated code line by line.
///
/// # Example
///
/// ```
/// use autopack_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::new();
/// builder
///     .push_line("import ReactOnRails from 'react-on-rails/client';")
///     .push_blank()
///     .push_raw("ReactOnRails.register({Hello});");
///
/// assert_eq!(
///     builder.build(),
///     "import ReactOnRails from 'react-on-rails/client';\n\nReactOnRails.register({Hello});"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    buffer: String,
}

impl CodeBuilder {
    /// Create a new, empty CodeBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line of code.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without a newline.
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Raw(s) => {
                self.push_raw(&s);
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }
}
