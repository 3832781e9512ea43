//! CodeFile abstraction for structured JavaScript module generation.

use crate::{
    builder::{CodeBuilder, CodeFragment, Renderable},
    js::Import,
};

/// A structured representation of a generated JavaScript module.
///
/// Imports come first, then a blank line, then body elements separated by
/// blank lines. Trailing whitespace is stripped from the rendered module.
///
/// # Example
///
/// ```
/// use autopack_codegen::js::{CodeFile, Import, RawCode};
///
/// let code = CodeFile::new()
///     .import(Import::new("react-on-rails/client").default("ReactOnRails").single_quoted())
///     .add(RawCode::new("ReactOnRails.register({});"))
///     .render();
///
/// assert_eq!(
///     code,
///     "import ReactOnRails from 'react-on-rails/client';\n\nReactOnRails.register({});"
/// );
/// ```
#[derive(Default)]
pub struct CodeFile {
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    /// Create a new empty CodeFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import statement.
    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Render the module.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::new();

        for import in &self.imports {
            builder.emit(import);
        }

        if !self.imports.is_empty() && !self.body.is_empty() {
            builder.push_blank();
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        let mut code = builder.build();
        code.truncate(code.trim_end().len());
        code
    }
}

/// A raw code fragment that implements Renderable.
#[derive(Debug, Clone)]
pub struct RawCode(String);

impl RawCode {
    /// Create a new raw code fragment.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }
}

impl Renderable for RawCode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.0
            .lines()
            .map(|line| CodeFragment::Line(line.to_string()))
            .collect()
    }
}
