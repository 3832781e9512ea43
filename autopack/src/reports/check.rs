//! Check command report data structures.

use super::output::{Output, Report};

/// Report data from checking a project.
#[derive(Debug)]
pub struct CheckReport {
    /// Config file that was checked.
    pub config_path: String,
    /// Whether pack generation is enabled.
    pub enabled: bool,
    /// Number of common components.
    pub common: usize,
    /// Number of client specific components.
    pub client: usize,
    /// Number of server specific components.
    pub server: usize,
    /// Whether generated output is fresh.
    pub up_to_date: bool,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.config_path));

        if !self.enabled {
            out.preformatted("auto_load_bundle is disabled");
            return;
        }

        out.newline();
        out.key_value("Common components", &self.common.to_string());
        out.key_value("Client components", &self.client.to_string());
        out.key_value("Server components", &self.server.to_string());
        out.newline();

        if self.up_to_date {
            out.preformatted("Generated packs are up to date.");
        } else {
            out.warning("generated packs are stale, run `autopack generate`");
        }
    }
}
