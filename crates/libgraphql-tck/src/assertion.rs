/// Token that separates alternative fragments inside the "contains" field of
/// a fixture row (the single quotes are part of the token).
pub const ALTERNATION_TOKEN: &str = "'OR'";

/// One expected structural fact about a schema document.
///
/// An `Assertion` is built once from a single fixture row and is never
/// mutated afterwards. It is satisfied when the schema text (restricted to the
/// scope selected by [`Assertion::search_term()`], if any) contains at least
/// one of its [`Assertion::expected_fragments()`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Assertion {
    sequence_number: i32,
    section_header: String,
    source_name: String,
    search_term: Option<String>,
    expected_fragments: ExpectedFragments,
    failure_message: String,
}

impl Assertion {
    pub fn new(
        sequence_number: i32,
        section_header: impl Into<String>,
        source_name: impl Into<String>,
        search_term: Option<String>,
        expected_fragments: ExpectedFragments,
        failure_message: impl Into<String>,
    ) -> Self {
        Self {
            sequence_number,
            section_header: section_header.into(),
            source_name: source_name.into(),
            search_term,
            expected_fragments,
            failure_message: failure_message.into(),
        }
    }

    /// The count marker declared in the fixture row. Only used for labeling.
    pub fn sequence_number(&self) -> i32 {
        self.sequence_number
    }

    /// The most recent header line above this row in its fixture file, or
    /// `""` if no header preceded it.
    pub fn section_header(&self) -> &str {
        &self.section_header
    }

    /// File name of the fixture this assertion was read from.
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Selects the part of the schema document to search. `None` means the
    /// whole document.
    pub fn search_term(&self) -> Option<&str> {
        self.search_term.as_deref()
    }

    pub fn expected_fragments(&self) -> &ExpectedFragments {
        &self.expected_fragments
    }

    /// `"(<count>) - <description>"`
    pub fn failure_message(&self) -> &str {
        &self.failure_message
    }

    /// A single-line label identifying this assertion in reports.
    pub fn display_name(&self) -> String {
        if self.section_header.is_empty() {
            format!("{} {}", self.source_name, self.failure_message)
        } else {
            format!(
                "{} [{}] {}",
                self.source_name,
                self.section_header,
                self.failure_message,
            )
        }
    }
}

impl std::fmt::Display for Assertion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_name())
    }
}

/// A non-empty, ordered list of alternative text fragments.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExpectedFragments(Vec<String>);

impl ExpectedFragments {
    /// Builds the fragment list from the trimmed "contains" field of a fixture
    /// row.
    ///
    /// If the field contains [`ALTERNATION_TOKEN`] it is split on the token
    /// and every trimmed piece becomes one alternative, left to right. Pieces
    /// that are empty after trimming are dropped. Returns `None` when no
    /// fragment remains.
    pub fn from_contains_field(contains: &str) -> Option<Self> {
        let contains = contains.trim();
        if contains.contains(ALTERNATION_TOKEN) {
            Self::from_fragments(
                contains
                    .split(ALTERNATION_TOKEN)
                    .map(str::trim)
                    .filter(|piece| !piece.is_empty()),
            )
        } else {
            Self::from_fragments([contains])
        }
    }

    /// Number of `'OR'`-separated pieces of `contains` that are empty after
    /// trimming. Always `0` when the field has no alternation token.
    pub fn count_empty_alternatives(contains: &str) -> usize {
        let contains = contains.trim();
        if !contains.contains(ALTERNATION_TOKEN) {
            return 0;
        }
        contains
            .split(ALTERNATION_TOKEN)
            .filter(|piece| piece.trim().is_empty())
            .count()
    }

    /// Returns `None` if `fragments` yields nothing or only empty strings.
    pub fn from_fragments<I, S>(fragments: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fragments: Vec<String> =
            fragments.into_iter()
                .map(Into::into)
                .filter(|fragment: &String| !fragment.is_empty())
                .collect();

        if fragments.is_empty() {
            None
        } else {
            Some(Self(fragments))
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API symmetry with `len()`.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn is_alternation(&self) -> bool {
        self.0.len() > 1
    }
}

impl<'a> IntoIterator for &'a ExpectedFragments {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::fmt::Display for ExpectedFragments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let quoted = self.0.iter()
            .map(|fragment| format!("`{fragment}`"))
            .collect::<Vec<_>>()
            .join(" OR ");
        f.write_str(&quoted)
    }
}
