use crate::TextFileError;

/// A failure that excludes an entire fixture file from the case matrix.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum FixtureLoadError {
    #[error("could not read fixture `{file_name}`: {source}")]
    Read {
        file_name: String,
        source: TextFileError,
    },

    #[error(
        "fixture `{file_name}` line {line_number}: sequence number `{value}` \
        is not an integer ({err})"
    )]
    InvalidSequenceNumber {
        file_name: String,
        line_number: usize,
        value: String,
        err: std::num::ParseIntError,
    },
}

impl FixtureLoadError {
    pub fn file_name(&self) -> &str {
        match self {
            Self::Read { file_name, .. } => file_name,
            Self::InvalidSequenceNumber { file_name, .. } => file_name,
        }
    }
}

/// A single data row that was dropped. The rest of the file still loads.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum MalformedRow {
    #[error(
        "fixture `{file_name}` line {line_number}: expected 4 `|`-delimited \
        fields, found {field_count}"
    )]
    WrongFieldCount {
        file_name: String,
        line_number: usize,
        field_count: usize,
    },

    #[error("fixture `{file_name}` line {line_number}: no expected fragment")]
    NoExpectedFragments {
        file_name: String,
        line_number: usize,
    },
}

impl MalformedRow {
    /// 1-based line number of the dropped row.
    pub fn line_number(&self) -> usize {
        match self {
            Self::WrongFieldCount { line_number, .. } => *line_number,
            Self::NoExpectedFragments { line_number, .. } => *line_number,
        }
    }
}

/// An authoring mistake in a row that still produced an assertion.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum FixtureWarning {
    #[error(
        "fixture `{file_name}` line {line_number}: dropped {dropped} empty \
        `'OR'` alternative(s)"
    )]
    EmptyAlternatives {
        file_name: String,
        line_number: usize,
        dropped: usize,
    },
}
