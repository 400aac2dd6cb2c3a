pub(crate) const COMMENT_MARKER: char = '#';
pub(crate) const FIELD_DELIMITER: char = '|';

/// The three shapes a line of a fixture file can take.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum FixtureLine<'a> {
    /// `# Some Section` -- carries the trimmed text after the first `#`.
    Header(&'a str),

    /// A pipe-delimited row, split into its fields.
    Data(Vec<&'a str>),

    /// Blank lines and free text without a delimiter.
    Ignored,
}

impl<'a> FixtureLine<'a> {
    pub(crate) fn classify(line: &'a str) -> Self {
        let trimmed = line.trim();
        if trimmed.starts_with(COMMENT_MARKER) {
            let after_marker = match line.find(COMMENT_MARKER) {
                Some(idx) => &line[idx + COMMENT_MARKER.len_utf8()..],
                None => "",
            };
            return Self::Header(after_marker.trim());
        }

        if !line.is_empty() && trimmed.contains(FIELD_DELIMITER) {
            return Self::Data(split_fields(line));
        }

        Self::Ignored
    }
}

/// Splits a data row on every `|`.
///
/// Trailing empty fields are dropped, so `1|a|b|` has three fields and is
/// rejected as a malformed row rather than accepted with an empty
/// description.
pub(crate) fn split_fields(line: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    while fields.len() > 1 && fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    fields
}
