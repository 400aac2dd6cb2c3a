use crate::commands::fixture_args::FixtureArgs;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_tck::SchemaDocument;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct CheckCmd {
    #[command(flatten)]
    fixtures: FixtureArgs,

    #[arg(
        help="Path to the schema document produced by the implementation \
             under test.",
        long,
        value_name="FILE",
    )]
    schema: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for CheckCmd {
    pub async fn run(self, _cli: &Cli) -> CommandResult {
        let schema_text = match tokio::fs::read_to_string(&self.schema).await {
            Ok(text) => text,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Could not read schema {:#?}: {e}",
                output_utils::RED_X,
                self.schema,
            )),
        };
        log::debug!(
            "Read {} bytes of schema text from {:#?}.",
            schema_text.len(),
            self.schema,
        );

        let matrix = match self.fixtures.load_case_matrix().await {
            Ok(matrix) => matrix,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Failed to load fixtures: {e:#}",
                output_utils::RED_X,
            )),
        };

        if matrix.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} No schema snippet cases were found.",
                output_utils::RED_X,
            ));
        }

        let schema = SchemaDocument::new(schema_text);
        let results = tokio::task::spawn_blocking(move || {
            libgraphql_tck::run_cases(&matrix, &schema)
        }).await;

        match results {
            Ok(results) if results.all_passed() => {
                CommandResult::stdout(format_args!("{}", results.summary()))
            },

            Ok(results) => CommandResult::stderr(format_args!(
                "{}\n\n{}",
                results.failure_report(),
                results.summary(),
            )),

            Err(e) => CommandResult::stderr(format_args!(
                "{} Schema snippet evaluation did not complete: {e}",
                output_utils::RED_X,
            )),
        }
    }
}
