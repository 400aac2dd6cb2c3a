use crate::fixture_line::split_fields;
use crate::fixture_line::FixtureLine;

#[test]
fn header_line_takes_text_after_first_marker() {
    assert_eq!(
        FixtureLine::classify("# Basic Query"),
        FixtureLine::Header("Basic Query"),
    );
    assert_eq!(
        FixtureLine::classify("   #  Indented Header  "),
        FixtureLine::Header("Indented Header"),
    );
    assert_eq!(
        FixtureLine::classify("## Two # markers"),
        FixtureLine::Header("# Two # markers"),
    );
}

#[test]
fn header_line_with_pipes_is_still_a_header() {
    assert_eq!(
        FixtureLine::classify("# 1|a|b|c"),
        FixtureLine::Header("1|a|b|c"),
    );
}

#[test]
fn bare_marker_is_an_empty_header() {
    assert_eq!(FixtureLine::classify("#"), FixtureLine::Header(""));
}

#[test]
fn data_line_splits_on_every_pipe() {
    assert_eq!(
        FixtureLine::classify("3|hero|id|Query must expose hero.id"),
        FixtureLine::Data(vec!["3", "hero", "id", "Query must expose hero.id"]),
    );
}

#[test]
fn data_line_keeps_untrimmed_fields() {
    assert_eq!(
        FixtureLine::classify(" 3 | hero |id|desc "),
        FixtureLine::Data(vec![" 3 ", " hero ", "id", "desc "]),
    );
}

#[test]
fn blank_and_free_text_lines_are_ignored() {
    assert_eq!(FixtureLine::classify(""), FixtureLine::Ignored);
    assert_eq!(FixtureLine::classify("    "), FixtureLine::Ignored);
    assert_eq!(FixtureLine::classify("just some notes"), FixtureLine::Ignored);
}

#[test]
fn trailing_empty_fields_are_dropped() {
    assert_eq!(split_fields("1|a|b|"), vec!["1", "a", "b"]);
    assert_eq!(split_fields("1|a|b|c|"), vec!["1", "a", "b", "c"]);
    assert_eq!(split_fields("3|type Query|||"), vec!["3", "type Query"]);
}

#[test]
fn inner_empty_fields_are_kept() {
    assert_eq!(split_fields("5||NAME|d"), vec!["5", "", "NAME", "d"]);
}
