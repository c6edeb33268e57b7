/// Suite Executor - High-Level Orchestration
///
/// **Responsibility:**
/// Load the suite, then for each case: print its header, run it through the
/// engine, evaluate the exit code, and print the verdict. Finish with the
/// summary and hand back a `RunReport`.
///
/// Cases run strictly one after another; the next child is not spawned
/// until the previous one has exited.

use crate::console::Console;
use crate::engine::ProcessEngine;
use crate::evaluator;
use anyhow::{Context, Result};
use chrono::Utc;
use exitcheck_common::config::HarnessConfig;
use exitcheck_common::suite::load_suite;
use exitcheck_common::types::{RunReport, TestCase, TestResult};
use std::io::Write;
use tracing::{debug, info};
use uuid::Uuid;

/// Run `cases` in order, skipping any whose name does not contain `filter`.
pub async fn run_cases<W: Write>(
    cases: &[TestCase],
    filter: Option<&str>,
    engine: &ProcessEngine,
    console: &mut Console<W>,
) -> Result<Vec<TestResult>> {
    let mut results = Vec::with_capacity(cases.len());

    for test_case in cases {
        if let Some(pattern) = filter {
            if !test_case.name.contains(pattern) {
                info!(case = %test_case.name, filter = pattern, "Skipping filtered test case");
                continue;
            }
        }

        console.case_started(test_case)?;

        let output = engine
            .execute(test_case)
            .await
            .with_context(|| format!("Test case '{}' could not be executed", test_case.name))?;

        let result = evaluator::evaluate_test(&output, test_case);
        if !result.passed() {
            debug!(
                case = %result.name,
                expected = result.expected_exit_code,
                actual = ?result.actual_exit_code,
                signal = ?result.signal,
                "Exit code mismatch"
            );
        }

        console.case_finished(&result)?;
        results.push(result);
    }

    Ok(results)
}

/// Execute a whole run as described by `config`, printing to `console`.
pub async fn execute_run<W: Write>(config: &HarnessConfig, console: &mut Console<W>) -> Result<RunReport> {
    let run_id = Uuid::new_v4();
    let format = config.suite_format()?;
    let working_dir = config.resolve_working_dir()?;

    let cases = load_suite(&config.suite, &format)
        .with_context(|| format!("Failed to load test suite {}", config.suite.display()))?;

    info!(
        run_id = %run_id,
        suite = %config.suite.display(),
        working_dir = %working_dir.display(),
        test_cases = cases.len(),
        "Starting run"
    );

    let engine = ProcessEngine::new(working_dir);
    let started_at = Utc::now();

    console.banner(&config.title)?;
    let results = run_cases(&cases, config.filter.as_deref(), &engine, console).await?;
    let summary = evaluator::summarize(&results);
    console.summary(&summary)?;

    let finished_at = Utc::now();
    info!(
        run_id = %run_id,
        passed = summary.passed,
        failed = summary.failed,
        total = summary.total(),
        "Run completed"
    );

    Ok(RunReport {
        run_id,
        suite: config.suite.clone(),
        started_at,
        finished_at,
        summary,
        results,
    })
}
