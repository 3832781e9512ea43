use clap::Args;
use eyre::Result;

use super::{ProjectArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub project: ProjectArgs,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let (autopack_toml, root) = self.project.open();

        let report =
            ops::check(autopack_toml.path(), autopack_toml.config(), &root).unwrap_or_exit();

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
