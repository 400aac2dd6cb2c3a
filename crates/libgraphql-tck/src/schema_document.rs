use crate::Assertion;

const SCOPE_TERMINATOR: char = '}';
const EXCERPT_MAX_CHARS: usize = 200;

/// The schema text produced by the implementation under test.
///
/// The text is never parsed as GraphQL. Assertions are checked with plain,
/// case-sensitive substring containment.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SchemaDocument {
    text: String,
}

impl SchemaDocument {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the part of the document an assertion with `search_term`
    /// applies to.
    ///
    /// Without a search term this is the whole document. Otherwise it starts
    /// at the first occurrence of the term and runs through the next `}`
    /// (inclusive), or to the end of the document when no `}` follows.
    /// Returns `None` if the term does not occur.
    pub fn scope(&self, search_term: Option<&str>) -> Option<&str> {
        let Some(search_term) = search_term else {
            return Some(&self.text);
        };

        let start = self.text.find(search_term)?;
        let rest = &self.text[start..];
        let end = rest.find(SCOPE_TERMINATOR)
            .map(|idx| idx + SCOPE_TERMINATOR.len_utf8())
            .unwrap_or(rest.len());
        Some(&rest[..end])
    }

    pub fn evaluate(&self, assertion: &Assertion) -> AssertionOutcome {
        let Some(scope) = self.scope(assertion.search_term()) else {
            return AssertionOutcome::Failed(AssertionFailure::SearchTermNotFound {
                search_term: assertion.search_term().unwrap_or_default().to_string(),
            });
        };

        let matched =
            assertion.expected_fragments()
                .iter()
                .find(|fragment| scope.contains(fragment.as_str()));

        match matched {
            Some(fragment) => AssertionOutcome::Passed {
                matched_fragment: fragment.clone(),
            },
            None => AssertionOutcome::Failed(AssertionFailure::NoFragmentMatched {
                expected: assertion.expected_fragments().to_string(),
                scope_excerpt: excerpt(scope),
            }),
        }
    }
}

fn excerpt(scope: &str) -> String {
    let scope = scope.trim();
    match scope.char_indices().nth(EXCERPT_MAX_CHARS) {
        Some((idx, _)) => format!("{}…", &scope[..idx]),
        None => scope.to_string(),
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AssertionOutcome {
    Passed {
        matched_fragment: String,
    },
    Failed(AssertionFailure),
}

impl AssertionOutcome {
    pub fn passed(&self) -> bool {
        matches!(self, Self::Passed { .. })
    }
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum AssertionFailure {
    #[error("search term `{search_term}` not found in schema")]
    SearchTermNotFound {
        search_term: String,
    },

    #[error("expected {expected} in schema snippet:\n{scope_excerpt}")]
    NoFragmentMatched {
        expected: String,
        scope_excerpt: String,
    },
}
