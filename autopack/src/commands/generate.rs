use clap::Args;
use eyre::Result;

use super::{ProjectArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Regenerate even when every pack is up to date
    #[arg(short, long)]
    pub force: bool,

    /// Print the files that would be generated without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let (autopack_toml, root) = self.project.open();

        let report = ops::generate(
            autopack_toml.config(),
            ops::generate::GenerateOptions {
                root: &root,
                force: self.force,
                dry_run: self.dry_run,
            },
        )
        .unwrap_or_exit();

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
