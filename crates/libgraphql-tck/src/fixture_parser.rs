use crate::fixture_line::FixtureLine;
use crate::text_file;
use crate::Assertion;
use crate::ExpectedFragments;
use crate::FixtureLoadError;
use crate::FixtureWarning;
use crate::MalformedRow;
use std::path::Path;

type Result<T> = std::result::Result<T, FixtureLoadError>;

const FIELDS_PER_ROW: usize = 4;

/// Everything recovered from a single fixture file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParsedFixture {
    pub assertions: Vec<Assertion>,
    pub malformed_rows: Vec<MalformedRow>,
    /// Rows that were kept but contain an authoring mistake.
    pub warnings: Vec<FixtureWarning>,
}

/// Reads and parses the fixture file at `path`.
///
/// The file's name (its final path component) is recorded as the
/// [`Assertion::source_name()`] of every assertion produced.
pub fn parse_fixture_file(path: &Path) -> Result<ParsedFixture> {
    let file_name = fixture_file_name(path);
    let content = text_file::read_text_file(path)
        .map_err(|source| FixtureLoadError::Read {
            file_name: file_name.clone(),
            source,
        })?;

    parse_fixture_str(&file_name, &content)
}

/// Parses fixture text that has already been loaded.
///
/// Malformed rows are logged, collected into
/// [`ParsedFixture::malformed_rows`] and skipped. A row whose sequence number
/// is not an integer aborts the whole file.
pub fn parse_fixture_str(file_name: &str, content: &str) -> Result<ParsedFixture> {
    let state =
        content.lines()
            .enumerate()
            .try_fold(
                FixtureParseState::default(),
                |state, (idx, line)| state.accept_line(file_name, idx + 1, line),
            )?;

    log::debug!(
        "Parsed {} assertions from fixture `{file_name}` ({} malformed rows).",
        state.parsed.assertions.len(),
        state.parsed.malformed_rows.len(),
    );
    Ok(state.parsed)
}

pub(crate) fn fixture_file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Per-file fold state. The header never leaks across files because every
/// parse starts from `default()`.
#[derive(Debug, Default)]
struct FixtureParseState {
    current_header: String,
    parsed: ParsedFixture,
}

impl FixtureParseState {
    fn accept_line(
        mut self,
        file_name: &str,
        line_number: usize,
        line: &str,
    ) -> Result<Self> {
        match FixtureLine::classify(line) {
            FixtureLine::Header(header) => {
                log::trace!("`{file_name}` line {line_number}: header `{header}`.");
                self.current_header = header.to_string();
            },

            FixtureLine::Data(fields) if fields.len() == FIELDS_PER_ROW => {
                match build_assertion(
                    &self.current_header,
                    file_name,
                    line_number,
                    &fields,
                )? {
                    Ok(assertion) => {
                        let dropped = ExpectedFragments::count_empty_alternatives(fields[2]);
                        if dropped > 0 {
                            self.warn(FixtureWarning::EmptyAlternatives {
                                file_name: file_name.to_string(),
                                line_number,
                                dropped,
                            });
                        }
                        self.parsed.assertions.push(assertion)
                    },
                    Err(malformed) => self.reject(malformed),
                }
            },

            FixtureLine::Data(fields) => {
                self.reject(MalformedRow::WrongFieldCount {
                    file_name: file_name.to_string(),
                    line_number,
                    field_count: fields.len(),
                });
            },

            FixtureLine::Ignored => (),
        }
        Ok(self)
    }

    fn warn(&mut self, warning: FixtureWarning) {
        log::warn!("{warning}");
        self.parsed.warnings.push(warning);
    }

    fn reject(&mut self, malformed: MalformedRow) {
        log::error!("Could not add test case: {malformed}");
        self.parsed.malformed_rows.push(malformed);
    }
}

/// Maps `[count, search_term, contains, description]` onto an [`Assertion`].
///
/// The outer `Result` carries file-fatal errors; the inner one carries
/// row-level rejections.
fn build_assertion(
    header: &str,
    file_name: &str,
    line_number: usize,
    fields: &[&str],
) -> Result<std::result::Result<Assertion, MalformedRow>> {
    let [count, search_term, contains, description] = fields else {
        return Ok(Err(MalformedRow::WrongFieldCount {
            file_name: file_name.to_string(),
            line_number,
            field_count: fields.len(),
        }));
    };

    let sequence_number = count.parse::<i32>()
        .map_err(|err| FixtureLoadError::InvalidSequenceNumber {
            file_name: file_name.to_string(),
            line_number,
            value: count.to_string(),
            err,
        })?;
    let count = count.trim();

    let search_term = search_term.trim();
    let search_term =
        if search_term.is_empty() {
            None
        } else {
            Some(search_term.to_string())
        };

    let Some(expected_fragments) = ExpectedFragments::from_contains_field(contains) else {
        return Ok(Err(MalformedRow::NoExpectedFragments {
            file_name: file_name.to_string(),
            line_number,
        }));
    };

    Ok(Ok(Assertion::new(
        sequence_number,
        header,
        file_name,
        search_term,
        expected_fragments,
        format!("({count}) - {}", description.trim()),
    )))
}
