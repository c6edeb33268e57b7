use crate::error::{HarnessError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

/// One row of the suite: a program invocation and the exit code it should produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub name: String,
    pub arguments: String,
    pub expected_exit_code: i32,
}

impl TestCase {
    pub fn new(name: impl Into<String>, arguments: impl Into<String>, expected_exit_code: i32) -> Self {
        Self {
            name: name.into(),
            arguments: arguments.into(),
            expected_exit_code,
        }
    }

    /// Split the argument string on whitespace into (program, args).
    ///
    /// The program token is returned as written; resolving it against a
    /// working directory is the engine's job.
    pub fn command_line(&self) -> Result<(&str, Vec<&str>)> {
        let mut tokens = self.arguments.split_whitespace();
        let program = tokens.next().ok_or_else(|| HarnessError::EmptyCommand {
            name: self.name.clone(),
        })?;
        Ok((program, tokens.collect()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestStatus {
    Passed,
    Failed,
}

/// Outcome of a single test case after evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResult {
    pub name: String,
    pub arguments: String,
    pub expected_exit_code: i32,
    /// `-N` when the child was killed by signal N
    pub actual_exit_code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signal: Option<i32>,
    pub status: TestStatus,
    pub execution_time_ms: u64,
}

impl TestResult {
    pub fn passed(&self) -> bool {
        self.status == TestStatus::Passed
    }
}

/// Pass/fail counters for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub passed: u32,
    pub failed: u32,
}

impl RunSummary {
    pub fn record(&mut self, status: TestStatus) {
        match status {
            TestStatus::Passed => self.passed += 1,
            TestStatus::Failed => self.failed += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.passed + self.failed
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Everything a finished run produced, in suite order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub run_id: Uuid,
    pub suite: PathBuf,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub summary: RunSummary,
    pub results: Vec<TestResult>,
}
