//! List command report data structures.

use super::output::{Output, Report};

/// A component and where it was found.
#[derive(Debug)]
pub struct ComponentEntry {
    pub name: String,
    pub path: String,
}

/// Discovered components grouped by category.
#[derive(Debug)]
pub struct ListReport {
    /// Whether pack generation is enabled.
    pub enabled: bool,
    pub common: Vec<ComponentEntry>,
    pub client: Vec<ComponentEntry>,
    pub server: Vec<ComponentEntry>,
}

impl ListReport {
    fn is_empty(&self) -> bool {
        self.common.is_empty() && self.client.is_empty() && self.server.is_empty()
    }
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        if !self.enabled {
            out.warning("auto_load_bundle is disabled, components are not registered");
        }

        if self.is_empty() {
            out.preformatted("No components found");
            return;
        }

        let groups = [
            ("Common", &self.common),
            ("Client", &self.client),
            ("Server", &self.server),
        ];
        let mut first = true;
        for (label, entries) in groups {
            if entries.is_empty() {
                continue;
            }
            if !first {
                out.newline();
            }
            first = false;

            out.section(label);
            for entry in entries {
                out.list_item(&format!("{} ({})", entry.name, entry.path));
            }
        }
    }
}
