/// Exit Code Evaluator
///
/// **Core Responsibility:**
/// Compare the raw termination data from the engine against the expected
/// exit code of a test case.
///
/// **Critical Properties:**
/// - Knows nothing about spawning processes
/// - Pure function: (execution output, test case) → test result
///
/// **Rules:**
/// - Passed iff the child's effective exit code equals the expected code
/// - A child killed by signal N has effective exit code -N, so a row
///   expecting -11 passes when the program segfaults
/// - Every evaluated case increments exactly one counter

use crate::engine::ExecutionOutput;
use exitcheck_common::types::{RunSummary, TestCase, TestResult, TestStatus};

/// Evaluate a single test case execution output
pub fn evaluate_test(output: &ExecutionOutput, test_case: &TestCase) -> TestResult {
    let actual_exit_code = output.effective_exit_code();
    let status = match actual_exit_code {
        Some(code) if code == test_case.expected_exit_code => TestStatus::Passed,
        _ => TestStatus::Failed,
    };

    TestResult {
        name: test_case.name.clone(),
        arguments: test_case.arguments.clone(),
        expected_exit_code: test_case.expected_exit_code,
        actual_exit_code,
        signal: output.signal,
        status,
        execution_time_ms: output.execution_time_ms,
    }
}

/// Tally evaluated results into pass/fail counters
pub fn summarize(results: &[TestResult]) -> RunSummary {
    let mut summary = RunSummary::default();
    for result in results {
        summary.record(result.status);
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_output(exit_code: Option<i32>) -> ExecutionOutput {
        ExecutionOutput {
            exit_code,
            signal: if exit_code.is_none() { Some(9) } else { None },
            execution_time_ms: 3,
        }
    }

    #[test]
    fn test_matching_code_passes() {
        let test_case = TestCase::new("Echo test", "bin/echo_ok", 0);
        let result = evaluate_test(&make_output(Some(0)), &test_case);

        assert_eq!(result.status, TestStatus::Passed);
        assert_eq!(result.actual_exit_code, Some(0));
        assert_eq!(result.execution_time_ms, 3);
    }

    #[test]
    fn test_mismatched_code_fails() {
        let test_case = TestCase::new("Bad args", "bin/fail 1 2", 2);
        let result = evaluate_test(&make_output(Some(1)), &test_case);

        assert_eq!(result.status, TestStatus::Failed);
        assert_eq!(result.expected_exit_code, 2);
        assert_eq!(result.actual_exit_code, Some(1));
    }

    #[test]
    fn test_nonzero_expected_code_passes() {
        let test_case = TestCase::new("usage error", "./ipkcpc", 1);
        let result = evaluate_test(&make_output(Some(1)), &test_case);
        assert!(result.passed());
    }

    #[test]
    fn test_signal_termination_fails_when_zero_expected() {
        let test_case = TestCase::new("crash", "bin/crash", 0);
        let result = evaluate_test(&make_output(None), &test_case);

        assert_eq!(result.status, TestStatus::Failed);
        assert_eq!(result.actual_exit_code, Some(-9));
        assert_eq!(result.signal, Some(9));
    }

    #[test]
    fn test_signal_termination_matches_negative_expected_code() {
        let test_case = TestCase::new("crash", "bin/crash", -9);
        let result = evaluate_test(&make_output(None), &test_case);

        assert_eq!(result.status, TestStatus::Passed);
        assert_eq!(result.actual_exit_code, Some(-9));
    }

    #[test]
    fn test_no_code_and_no_signal_fails() {
        let test_case = TestCase::new("odd", "bin/odd", 0);
        let output = ExecutionOutput {
            exit_code: None,
            signal: None,
            execution_time_ms: 0,
        };
        let result = evaluate_test(&output, &test_case);

        assert_eq!(result.status, TestStatus::Failed);
        assert_eq!(result.actual_exit_code, None);
    }

    #[test]
    fn test_summarize_counts_every_result_once() {
        let cases = [
            (TestCase::new("a", "bin/a", 0), Some(0)),
            (TestCase::new("b", "bin/b", 2), Some(1)),
            (TestCase::new("c", "bin/c", 0), None),
            (TestCase::new("d", "bin/d", 3), Some(3)),
        ];
        let results: Vec<TestResult> = cases
            .iter()
            .map(|(tc, code)| evaluate_test(&make_output(*code), tc))
            .collect();

        let summary = summarize(&results);
        assert_eq!(summary.passed, 2);
        assert_eq!(summary.failed, 2);
        assert_eq!(summary.total() as usize, results.len());
    }

    #[test]
    fn test_summarize_empty() {
        assert_eq!(summarize(&[]), RunSummary::default());
    }
}
