use crate::AssertionOutcome;
use crate::CaseMatrix;
use crate::SchemaDocument;
use rayon::prelude::IntoParallelRefIterator;
use rayon::prelude::ParallelIterator;

/// Result of evaluating one case against a schema document.
#[derive(Debug)]
pub struct SchemaSnippetResult {
    pub test_name: String,
    pub source_name: String,
    pub search_term: Option<String>,
    pub outcome: AssertionOutcome,
}

impl SchemaSnippetResult {
    pub fn passed(&self) -> bool {
        self.outcome.passed()
    }
}

/// Results of a full run, in case-matrix order.
#[derive(Debug, Default)]
pub struct SchemaSnippetResults {
    pub results: Vec<SchemaSnippetResult>,
}

impl SchemaSnippetResults {
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.passed())
    }

    pub fn failures(&self) -> impl Iterator<Item = &SchemaSnippetResult> {
        self.results.iter().filter(|r| !r.passed())
    }

    pub fn failure_report(&self) -> String {
        let failures: Vec<_> = self.failures().collect();
        let failures_len = failures.len();
        let results_len = self.results.len();
        let failures_text = failures
            .iter()
            .map(|r| format_detailed_failure(r))
            .collect::<Vec<_>>()
            .join("\n\n");

        format!("{failures_len} of {results_len} schema snippet tests failed:\n\n{failures_text}")
    }

    pub fn summary(&self) -> String {
        let all_passed = self.all_passed();
        let emoji = if all_passed { "✅" } else { "❌" };
        let banner = format!("{emoji} ========================================");
        let header = format!("{emoji} SCHEMA SNIPPET SUMMARY");
        let total = self.results.len();

        if all_passed {
            format!("{banner}\n{header}\n{banner}\nTotal tests: {total}\nPassed: {total}\nFailed: 0\n\nAll schema snippet tests passed!\n{banner}")
        } else {
            let failures: Vec<_> = self.failures().collect();
            let failures_len = failures.len();
            let passed = total - failures_len;
            let failed_list = failures
                .iter()
                .map(|r| format!("  - {}", r.test_name))
                .collect::<Vec<_>>()
                .join("\n");

            format!("{banner}\n{header}\n{banner}\nTotal tests: {total}\nPassed: {passed}\nFailed: {failures_len}\n\nFailed schema snippet tests:\n{failed_list}\n\nSee details above for each failure.\n{banner}")
        }
    }
}

fn format_detailed_failure(result: &SchemaSnippetResult) -> String {
    let mut output = format!("❌ {}\n   Fixture: {}\n", result.test_name, result.source_name);

    if let Some(search_term) = &result.search_term {
        output.push_str(&format!("   Search term: {search_term}\n"));
    }

    if let AssertionOutcome::Failed(failure) = &result.outcome {
        for line in failure.to_string().lines() {
            output.push_str(&format!("   {line}\n"));
        }
    }

    output
}

/// Evaluates every case of `matrix` against `schema`.
///
/// Cases are independent and are evaluated in parallel; results keep the
/// matrix order.
pub fn run_cases(matrix: &CaseMatrix, schema: &SchemaDocument) -> SchemaSnippetResults {
    let results = matrix.cases()
        .par_iter()
        .map(|case| {
            let outcome = schema.evaluate(case);
            log::trace!("{case}: {outcome:?}");
            SchemaSnippetResult {
                test_name: case.display_name(),
                source_name: case.source_name().to_string(),
                search_term: case.search_term().map(str::to_string),
                outcome,
            }
        })
        .collect();

    SchemaSnippetResults { results }
}
