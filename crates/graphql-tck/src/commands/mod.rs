mod check;
mod fixture_args;
mod list;

use crate::Cli;
use crate::CommandResult;
use check::CheckCmd;
use list::ListCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-tck")]
pub(crate) enum CommandEnum {
    /// Evaluate every fixture case against a schema document.
    Check(Box<CheckCmd>),

    /// Print the cases loaded from the fixture directories.
    List(Box<ListCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: &Cli) -> CommandResult {
        match self {
            Self::Check(cmd) => cmd.run(cli).await,
            Self::List(cmd) => cmd.run(cli).await,
        }
    }
}
