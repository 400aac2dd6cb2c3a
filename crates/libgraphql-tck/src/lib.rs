//! Fixture loading and assertion matching for GraphQL schema compliance
//! suites.
//!
//! Fixture files are pipe-delimited text files describing fragments that must
//! appear in a schema document. This crate locates them in a specification
//! root and an optional implementation-specific root, parses them into
//! [`Assertion`]s, and aggregates them into a [`CaseMatrix`] that can be
//! evaluated against a [`SchemaDocument`].
//!
//! ```text
//! # Basic Query
//! 3|hero|id|Query must expose hero.id
//! 5||NAME'OR'name|Field name must exist
//! ```

mod assertion;
mod case_matrix;
mod case_runner;
mod directory_fixture_root;
mod fixture_line;
mod fixture_load_error;
pub mod fixture_locator;
pub mod fixture_parser;
mod fixture_root;
mod in_memory_fixture_root;
mod schema_document;
mod tck_config;
pub mod text_file;

pub use assertion::Assertion;
pub use assertion::ExpectedFragments;
pub use assertion::ALTERNATION_TOKEN;
pub use case_matrix::CaseMatrix;
pub use case_matrix::CaseMatrixBuilder;
pub use case_matrix::FixtureLoadReport;
pub use case_matrix::SCHEMA_SNIPPETS_DATA_SOURCE;
pub use case_runner::run_cases;
pub use case_runner::SchemaSnippetResult;
pub use case_runner::SchemaSnippetResults;
pub use directory_fixture_root::DirectoryFixtureRoot;
pub use fixture_load_error::FixtureLoadError;
pub use fixture_load_error::FixtureWarning;
pub use fixture_load_error::MalformedRow;
pub use fixture_locator::FixtureSource;
pub use fixture_parser::ParsedFixture;
pub use fixture_root::FixtureEntry;
pub use fixture_root::FixtureRoot;
pub use fixture_root::FixtureRootError;
pub use in_memory_fixture_root::InMemoryFixtureRoot;
pub use schema_document::AssertionFailure;
pub use schema_document::AssertionOutcome;
pub use schema_document::SchemaDocument;
pub use tck_config::TckConfig;
pub use tck_config::TckConfigError;
pub use text_file::TextFileError;

#[cfg(test)]
mod tests;
