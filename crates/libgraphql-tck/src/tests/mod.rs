mod case_matrix_tests;
mod fixture_line_tests;
mod schema_document_tests;
mod utils;
