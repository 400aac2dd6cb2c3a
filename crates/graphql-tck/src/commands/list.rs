use crate::commands::fixture_args::FixtureArgs;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_tck::CaseMatrix;

#[derive(Debug, clap::Args)]
pub(crate) struct ListCmd {
    #[command(flatten)]
    fixtures: FixtureArgs,
}

#[inherent::inherent]
impl RunnableCommand for ListCmd {
    pub async fn run(self, _cli: &Cli) -> CommandResult {
        let matrix = match self.fixtures.load_case_matrix().await {
            Ok(matrix) => matrix,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Failed to load fixtures: {e:#}",
                output_utils::RED_X,
            )),
        };

        CommandResult::stdout(format_args!("{}", render_matrix(&matrix)))
    }
}

fn render_matrix(matrix: &CaseMatrix) -> String {
    let mut output = String::new();
    for case in matrix {
        output.push_str(&format!("{case}\n"));
        output.push_str(&format!(
            "    search: {}\n",
            case.search_term().unwrap_or("<whole document>"),
        ));
        output.push_str(&format!("    expect: {}\n", case.expected_fragments()));
    }

    let num_failed_files = matrix.load_failures().count();
    let icon =
        if num_failed_files == 0 {
            output_utils::GREEN_CHECK
        } else {
            output_utils::RED_X
        };
    output.push_str(&format!(
        concat!(
            "{} `{}`: {} cases\n",
            "  * Loaded {} fixture files.\n",
            "  * Failed to load {} fixture files.\n",
            "  * Skipped {} malformed rows.\n",
            "  * Raised {} fixture warnings.",
        ),
        icon,
        matrix.name(),
        matrix.len(),
        matrix.load_reports().len() - num_failed_files,
        num_failed_files,
        matrix.malformed_rows().count(),
        matrix.warnings().count(),
    ));
    output
}
