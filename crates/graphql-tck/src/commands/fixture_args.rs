use libgraphql_tck::CaseMatrix;
use libgraphql_tck::CaseMatrixBuilder;
use libgraphql_tck::DirectoryFixtureRoot;
use libgraphql_tck::TckConfig;
use std::path::PathBuf;

/// Fixture-loading options shared by every subcommand.
#[derive(Debug, clap::Args)]
pub(crate) struct FixtureArgs {
    #[arg(
        help="Directory of specification-wide fixture (`.csv`) files.",
        long,
        value_name="DIR",
    )]
    spec_fixtures: PathBuf,

    #[arg(
        help="Directory of implementation-specific fixture (`.csv`) files. \
             A missing directory is not an error.",
        long,
        value_name="DIR",
    )]
    impl_fixtures: Option<PathBuf>,

    #[arg(
        help="Only load implementation-specific fixtures. Can also be set with \
             the `DISABLE_SPECIFICATION_TESTS` environment variable.",
        long,
    )]
    disable_specification_tests: bool,
}

impl FixtureArgs {
    pub(crate) fn tck_config(&self) -> TckConfig {
        let disabled =
            self.disable_specification_tests
            || specification_tests_disabled_by_env();
        TckConfig::new().with_specification_tests_disabled(disabled)
    }

    /// Loads the case matrix on a blocking thread; fixture loading is plain
    /// synchronous file I/O.
    pub(crate) async fn load_case_matrix(&self) -> anyhow::Result<CaseMatrix> {
        let config = self.tck_config();
        let spec_dir = self.spec_fixtures.clone();
        let impl_dir = self.impl_fixtures.clone();

        log::debug!(
            "Loading fixtures (specification: {spec_dir:#?}, implementation: \
            {impl_dir:#?}, specification tests disabled: {}).",
            config.specification_tests_disabled(),
        );

        let matrix = tokio::task::spawn_blocking(move || {
            let specification = DirectoryFixtureRoot::new(spec_dir);
            let implementation = impl_dir.map(DirectoryFixtureRoot::new);

            let mut builder =
                CaseMatrixBuilder::new(config)
                    .specification_root(&specification);
            if let Some(implementation) = &implementation {
                builder = builder.implementation_root(implementation);
            }
            builder.build()
        }).await?;

        Ok(matrix)
    }
}

fn specification_tests_disabled_by_env() -> bool {
    let var_name = TckConfig::DISABLE_SPECIFICATION_TESTS_ENV_VAR;
    match std::env::var(var_name) {
        Ok(value) => TckConfig::parse_flag(&value).unwrap_or_else(|err| {
            log::warn!("Ignoring `{var_name}` environment variable: {err}");
            false
        }),
        Err(_) => false,
    }
}
