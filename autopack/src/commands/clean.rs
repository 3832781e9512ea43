use clap::Args;
use eyre::Result;

use super::{ProjectArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CleanCommand {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Preview what would be deleted without actually deleting
    #[arg(long)]
    pub dry_run: bool,
}

impl CleanCommand {
    pub fn run(&self) -> Result<()> {
        let (autopack_toml, root) = self.project.open();

        let report = ops::clean(
            autopack_toml.config(),
            ops::clean::CleanOptions {
                root: &root,
                dry_run: self.dry_run,
            },
        )
        .unwrap_or_exit();

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
