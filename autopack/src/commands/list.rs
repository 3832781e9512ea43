use clap::Args;
use eyre::Result;

use super::{ProjectArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    #[command(flatten)]
    pub project: ProjectArgs,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let (autopack_toml, root) = self.project.open();

        let report = ops::list(autopack_toml.config(), &root).unwrap_or_exit();

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
