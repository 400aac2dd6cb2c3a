use crate::fixture_locator;
use crate::fixture_locator::LocatedFixture;
use crate::fixture_parser;
use crate::Assertion;
use crate::FixtureLoadError;
use crate::FixtureRoot;
use crate::FixtureSource;
use crate::FixtureWarning;
use crate::MalformedRow;
use crate::TckConfig;

/// Name under which the case matrix is exposed to data-driven runners.
pub const SCHEMA_SNIPPETS_DATA_SOURCE: &str = "schemaSnippets";

/// What happened when one fixture file was loaded.
#[derive(Debug, PartialEq)]
pub struct FixtureLoadReport {
    pub file_name: String,
    pub source: FixtureSource,
    /// Number of assertions contributed, or the error that excluded the file.
    pub outcome: Result<usize, FixtureLoadError>,
    pub malformed_rows: Vec<MalformedRow>,
    pub warnings: Vec<FixtureWarning>,
}

impl FixtureLoadReport {
    pub fn is_failure(&self) -> bool {
        self.outcome.is_err()
    }
}

/// Builder that loads every eligible fixture from up to two roots into a
/// [`CaseMatrix`].
///
/// ```
/// use libgraphql_tck::CaseMatrixBuilder;
/// use libgraphql_tck::InMemoryFixtureRoot;
/// use libgraphql_tck::TckConfig;
///
/// let spec = InMemoryFixtureRoot::new("spec").with_file(
///     "basic.csv",
///     "# Basic Query\n3|hero|id|Query must expose hero.id\n",
/// );
///
/// let matrix = CaseMatrixBuilder::new(TckConfig::default())
///     .specification_root(&spec)
///     .build();
///
/// assert_eq!(matrix.len(), 1);
/// assert_eq!(matrix.cases()[0].section_header(), "Basic Query");
/// ```
#[derive(Debug)]
pub struct CaseMatrixBuilder<'r> {
    config: TckConfig,
    implementation_root: Option<&'r dyn FixtureRoot>,
    specification_root: Option<&'r dyn FixtureRoot>,
}

impl<'r> CaseMatrixBuilder<'r> {
    pub fn new(config: TckConfig) -> Self {
        Self {
            config,
            implementation_root: None,
            specification_root: None,
        }
    }

    pub fn implementation_root(mut self, root: &'r dyn FixtureRoot) -> Self {
        self.implementation_root = Some(root);
        self
    }

    pub fn specification_root(mut self, root: &'r dyn FixtureRoot) -> Self {
        self.specification_root = Some(root);
        self
    }

    /// Locates, reads and parses every fixture file.
    ///
    /// This never fails. Files that cannot be read or parsed are logged,
    /// recorded in [`CaseMatrix::load_reports()`] and contribute no cases.
    pub fn build(self) -> CaseMatrix {
        let located = fixture_locator::locate_fixtures(
            &self.config,
            self.implementation_root,
            self.specification_root,
        );

        let mut cases = vec![];
        let mut load_reports = Vec::with_capacity(located.len());
        for fixture in &located {
            let (assertions, report) = load_fixture(fixture);
            cases.extend(assertions);
            load_reports.push(report);
        }

        log::info!(
            "Loaded {} schema snippet cases from {} fixture files.",
            cases.len(),
            load_reports.len(),
        );

        CaseMatrix {
            cases,
            load_reports,
        }
    }
}

fn load_fixture(fixture: &LocatedFixture<'_>) -> (Vec<Assertion>, FixtureLoadReport) {
    let file_name = fixture.file_name();
    let parsed =
        fixture.read()
            .map_err(|source| FixtureLoadError::Read {
                file_name: file_name.clone(),
                source,
            })
            .and_then(|content| fixture_parser::parse_fixture_str(&file_name, &content));

    match parsed {
        Ok(parsed) => {
            let report = FixtureLoadReport {
                file_name,
                source: fixture.source(),
                outcome: Ok(parsed.assertions.len()),
                malformed_rows: parsed.malformed_rows,
                warnings: parsed.warnings,
            };
            (parsed.assertions, report)
        },

        Err(err) => {
            log::error!("Could not add test case {file_name} - {err}");
            let report = FixtureLoadReport {
                file_name,
                source: fixture.source(),
                outcome: Err(err),
                malformed_rows: vec![],
                warnings: vec![],
            };
            (vec![], report)
        },
    }
}

/// The ordered, immutable list of schema snippet cases for one run.
///
/// Cases appear in fixture order (implementation fixtures first), and in line
/// order within each fixture.
#[derive(Debug, Default)]
pub struct CaseMatrix {
    cases: Vec<Assertion>,
    load_reports: Vec<FixtureLoadReport>,
}

impl CaseMatrix {
    pub fn name(&self) -> &'static str {
        SCHEMA_SNIPPETS_DATA_SOURCE
    }

    pub fn cases(&self) -> &[Assertion] {
        &self.cases
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Assertion> {
        self.cases.iter()
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// The cases as a parameter table: one row per case, a single column
    /// holding the case.
    pub fn parameter_rows(&self) -> Vec<[&Assertion; 1]> {
        self.cases.iter().map(|case| [case]).collect()
    }

    /// One report per located fixture file, in load order.
    pub fn load_reports(&self) -> &[FixtureLoadReport] {
        &self.load_reports
    }

    pub fn load_failures(&self) -> impl Iterator<Item = &FixtureLoadReport> {
        self.load_reports.iter().filter(|report| report.is_failure())
    }

    pub fn malformed_rows(&self) -> impl Iterator<Item = &MalformedRow> {
        self.load_reports.iter().flat_map(|report| report.malformed_rows.iter())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &FixtureWarning> {
        self.load_reports.iter().flat_map(|report| report.warnings.iter())
    }
}

impl<'a> IntoIterator for &'a CaseMatrix {
    type Item = &'a Assertion;
    type IntoIter = std::slice::Iter<'a, Assertion>;

    fn into_iter(self) -> Self::IntoIter {
        self.cases.iter()
    }
}
