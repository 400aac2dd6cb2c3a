use crate::Cli;
use crate::CommandResult;

/// A subcommand of the `graphql-tck` CLI.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: &Cli) -> CommandResult;
}
