//! JavaScript import builder.

use crate::builder::{CodeFragment, Renderable};

/// Builder for JavaScript import statements.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    default: Option<String>,
    quote: char,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            default: None,
            quote: '"',
        }
    }

    /// Import a default export.
    pub fn default(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    /// Quote the module specifier with `'` instead of `"`.
    pub fn single_quoted(mut self) -> Self {
        self.quote = '\'';
        self
    }

    /// The import statement without a trailing newline.
    pub fn statement(&self) -> String {
        let q = self.quote;
        let from = &self.from;

        match &self.default {
            Some(def) => format!("import {def} from {q}{from}{q};"),
            None => format!("import {q}{from}{q};"),
        }
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.statement())]
    }
}
