//! Check operation - validate components and report freshness.

use std::path::Path;

use autopack_codegen::{Generator, Result};
use autopack_config::Config;
use autopack_core::LocalFs;

use crate::reports::CheckReport;

/// Execute the check operation. Nothing is written.
pub fn check(config_path: &Path, config: &Config, root: &Path) -> Result<CheckReport> {
    let fs = LocalFs::new();
    let generator = Generator::new(&fs, config, root);

    let mut report = CheckReport {
        config_path: config_path.display().to_string(),
        enabled: generator.is_enabled(),
        common: 0,
        client: 0,
        server: 0,
        up_to_date: true,
    };
    if !report.enabled {
        return Ok(report);
    }

    let result = generator.check()?;
    report.common = result.catalog.common().len();
    report.client = result.catalog.client().len();
    report.server = result.catalog.server().len();
    report.up_to_date = result.up_to_date;
    Ok(report)
}
