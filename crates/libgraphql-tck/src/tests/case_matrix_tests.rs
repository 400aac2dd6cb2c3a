use crate::tests::utils;
use crate::CaseMatrixBuilder;
use crate::DirectoryFixtureRoot;
use crate::FixtureLoadError;
use crate::FixtureSource;
use crate::InMemoryFixtureRoot;
use crate::TckConfig;
use crate::SCHEMA_SNIPPETS_DATA_SOURCE;

fn case_labels(matrix: &crate::CaseMatrix) -> Vec<String> {
    matrix.iter()
        .map(|case| format!("{}:{}", case.source_name(), case.sequence_number()))
        .collect()
}

#[test]
fn concatenates_files_in_located_order() {
    let implementation = InMemoryFixtureRoot::new("impl")
        .with_file("ext.csv", "# Ext\n10|a|x|ext one\n11|a|y|ext two");
    let specification = InMemoryFixtureRoot::new("spec")
        .with_file("second.csv", "2|a|x|second")
        .with_file("first.csv", "1|a|x|first\n3|a|x|third");

    let matrix = CaseMatrixBuilder::new(TckConfig::default())
        .implementation_root(&implementation)
        .specification_root(&specification)
        .build();

    assert_eq!(matrix.name(), SCHEMA_SNIPPETS_DATA_SOURCE);
    assert_eq!(
        case_labels(&matrix),
        vec!["ext.csv:10", "ext.csv:11", "second.csv:2", "first.csv:1", "first.csv:3"],
    );
}

#[test]
fn parameter_rows_hold_one_case_each() {
    let specification = InMemoryFixtureRoot::new("spec")
        .with_file("a.csv", "1|a|x|one\n2|a|y|two");

    let matrix = CaseMatrixBuilder::new(TckConfig::default())
        .specification_root(&specification)
        .build();

    let rows = matrix.parameter_rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][0], &matrix.cases()[0]);
    assert_eq!(rows[1][0].failure_message(), "(2) - two");
}

#[test]
fn disabling_specification_tests_keeps_implementation_cases() {
    let implementation = InMemoryFixtureRoot::new("impl")
        .with_file("ext.csv", "1|a|x|ext");
    let specification = InMemoryFixtureRoot::new("spec")
        .with_file("spec.csv", "1|a|x|spec\n2|a|x|spec");

    let matrix = CaseMatrixBuilder::new(
        TckConfig::new().with_specification_tests_disabled(true),
    )
        .implementation_root(&implementation)
        .specification_root(&specification)
        .build();

    assert_eq!(case_labels(&matrix), vec!["ext.csv:1"]);
    assert!(matrix.load_reports().iter().all(|r| r.source == FixtureSource::Implementation));
}

#[test]
fn failing_files_are_isolated() {
    let specification = InMemoryFixtureRoot::new("spec")
        .with_file("good.csv", "1|a|x|good")
        .with_unreadable_file("locked.csv")
        .with_file("bad_count.csv", "1|a|x|fine\nNaN|a|x|broken")
        .with_file("also_good.csv", "2|a|x|also good");

    let matrix = CaseMatrixBuilder::new(TckConfig::default())
        .specification_root(&specification)
        .build();

    assert_eq!(case_labels(&matrix), vec!["good.csv:1", "also_good.csv:2"]);

    let failures: Vec<&str> =
        matrix.load_failures()
            .map(|report| report.file_name.as_str())
            .collect();
    assert_eq!(failures, vec!["locked.csv", "bad_count.csv"]);

    let bad_count = &matrix.load_reports()[2];
    assert!(matches!(
        &bad_count.outcome,
        Err(FixtureLoadError::InvalidSequenceNumber { line_number: 2, .. }),
    ));
    assert!(matches!(
        &matrix.load_reports()[1].outcome,
        Err(FixtureLoadError::Read { .. }),
    ));
}

#[test]
fn malformed_rows_are_reported_per_file() {
    let specification = InMemoryFixtureRoot::new("spec")
        .with_file("mixed.csv", "1|a|x|valid\n2|a|three fields");

    let matrix = CaseMatrixBuilder::new(TckConfig::default())
        .specification_root(&specification)
        .build();

    assert_eq!(matrix.len(), 1);
    assert_eq!(matrix.malformed_rows().count(), 1);
    assert_eq!(matrix.load_reports()[0].outcome, Ok(1));
}

#[test]
fn no_roots_yield_an_empty_matrix() {
    let matrix = CaseMatrixBuilder::new(TckConfig::default()).build();
    assert!(matrix.is_empty());
    assert!(matrix.load_reports().is_empty());
}

#[test]
fn loads_fixture_directories_from_disk() {
    let implementation = DirectoryFixtureRoot::new(utils::implementation_fixtures_dir());
    let specification = DirectoryFixtureRoot::new(utils::specification_fixtures_dir());

    let matrix = CaseMatrixBuilder::new(TckConfig::default())
        .implementation_root(&implementation)
        .specification_root(&specification)
        .build();

    assert_eq!(matrix.len(), 6);
    assert_eq!(matrix.cases()[0].source_name(), "extensions.csv");
    assert_eq!(
        utils::sorted_names(
            matrix.load_reports().iter().map(|r| r.file_name.clone()),
        ),
        vec![
            "bad_sequence.csv",
            "basic.csv",
            "enums.csv",
            "extensions.csv",
            "malformed.csv",
        ],
    );

    let failures: Vec<&str> =
        matrix.load_failures()
            .map(|report| report.file_name.as_str())
            .collect();
    assert_eq!(failures, vec!["bad_sequence.csv"]);
    assert_eq!(matrix.malformed_rows().count(), 2);
}

#[test]
fn disabled_specification_directory_is_skipped() {
    let implementation = DirectoryFixtureRoot::new(utils::implementation_fixtures_dir());
    let specification = DirectoryFixtureRoot::new(utils::specification_fixtures_dir());

    let matrix = CaseMatrixBuilder::new(
        TckConfig::new().with_specification_tests_disabled(true),
    )
        .implementation_root(&implementation)
        .specification_root(&specification)
        .build();

    assert_eq!(matrix.len(), 1);
    assert!(matrix.iter().all(|case| case.source_name() == "extensions.csv"));
}

#[test]
fn warnings_are_reported_per_fixture() {
    let spec = InMemoryFixtureRoot::new("spec")
        .with_file("clean.csv", "1|hero|id|clean\n")
        .with_file("sloppy.csv", "1||NAME'OR''OR'name|sloppy\n");

    let matrix = CaseMatrixBuilder::new(TckConfig::default())
        .specification_root(&spec)
        .build();

    assert_eq!(matrix.len(), 2);
    let warned: Vec<&str> =
        matrix.load_reports().iter()
            .filter(|report| !report.warnings.is_empty())
            .map(|report| report.file_name.as_str())
            .collect();
    assert_eq!(warned, vec!["sloppy.csv"]);
    assert_eq!(matrix.warnings().count(), 1);
}
