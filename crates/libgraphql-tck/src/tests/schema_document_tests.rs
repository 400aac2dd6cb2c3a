use crate::fixture_parser::parse_fixture_str;
use crate::Assertion;
use crate::AssertionFailure;
use crate::AssertionOutcome;
use crate::SchemaDocument;

const SCHEMA: &str = "\
type Hero {
  id: ID!
  name: String
}

type Query {
  hero: Hero
}

scalar DateTime
";

fn assertion(row: &str) -> Assertion {
    parse_fixture_str("t.csv", row).unwrap().assertions.remove(0)
}

#[test]
fn scope_without_search_term_is_whole_document() {
    let schema = SchemaDocument::new(SCHEMA);
    assert_eq!(schema.scope(None), Some(SCHEMA));
}

#[test]
fn scope_runs_through_next_closing_brace() {
    let schema = SchemaDocument::new(SCHEMA);
    assert_eq!(
        schema.scope(Some("type Query")),
        Some("type Query {\n  hero: Hero\n}"),
    );
}

#[test]
fn scope_without_closing_brace_runs_to_end() {
    let schema = SchemaDocument::new(SCHEMA);
    assert_eq!(schema.scope(Some("scalar")), Some("scalar DateTime\n"));
}

#[test]
fn scope_of_unknown_term_is_none() {
    let schema = SchemaDocument::new(SCHEMA);
    assert_eq!(schema.scope(Some("type Mutation")), None);
}

#[test]
fn passes_on_any_alternative() {
    let schema = SchemaDocument::new(SCHEMA);
    let outcome = schema.evaluate(&assertion("1|type Hero|name: String!'OR'name: String|d"));

    assert_eq!(
        outcome,
        AssertionOutcome::Passed {
            matched_fragment: "name: String".to_string(),
        },
    );
}

#[test]
fn fragment_outside_scope_fails() {
    let schema = SchemaDocument::new(SCHEMA);
    let outcome = schema.evaluate(&assertion("1|type Query|id: ID!|d"));

    match outcome {
        AssertionOutcome::Failed(AssertionFailure::NoFragmentMatched {
            expected,
            scope_excerpt,
        }) => {
            assert_eq!(expected, "`id: ID!`");
            assert_eq!(scope_excerpt, "type Query {\n  hero: Hero\n}");
        },
        other => panic!("Unexpected outcome: {other:?}"),
    }
}

#[test]
fn missing_search_term_fails() {
    let schema = SchemaDocument::new(SCHEMA);
    assert_eq!(
        schema.evaluate(&assertion("1|type Mutation|x|d")),
        AssertionOutcome::Failed(AssertionFailure::SearchTermNotFound {
            search_term: "type Mutation".to_string(),
        }),
    );
}

#[test]
fn matching_is_case_sensitive() {
    let schema = SchemaDocument::new(SCHEMA);
    assert!(!schema.evaluate(&assertion("1||DATETIME|d")).passed());
    assert!(schema.evaluate(&assertion("1||DateTime|d")).passed());
}
