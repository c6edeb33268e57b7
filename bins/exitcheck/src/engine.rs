/// Process Engine - Spawns the Program Under Test
///
/// **Core Responsibility:**
/// Run one test case's command line and report how the child terminated.
///
/// **Boundary:**
/// - Engine knows HOW to execute (path resolution, spawning, waiting)
/// - Engine does NOT compare exit codes
/// - Engine returns raw termination data for the Evaluator to judge
///
/// The child inherits stdin/stdout/stderr. Nothing it prints is captured.

use exitcheck_common::types::TestCase;
use exitcheck_common::HarnessError;
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};
use std::time::Instant;
use tokio::process::Command;
use tracing::debug;

/// How a single child process terminated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOutput {
    /// `None` if the child was terminated by a signal
    pub exit_code: Option<i32>,
    pub signal: Option<i32>,
    pub execution_time_ms: u64,
}

impl ExecutionOutput {
    fn from_status(status: ExitStatus, execution_time_ms: u64) -> Self {
        Self {
            exit_code: status.code(),
            signal: termination_signal(&status),
            execution_time_ms,
        }
    }

    /// The code compared against a test case's expectation. A child killed
    /// by signal N reports `-N`.
    pub fn effective_exit_code(&self) -> Option<i32> {
        self.exit_code.or(self.signal.map(|signal| -signal))
    }
}

#[cfg(unix)]
fn termination_signal(status: &ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn termination_signal(_status: &ExitStatus) -> Option<i32> {
    None
}

/// Spawns test programs relative to a fixed working directory, one at a time.
pub struct ProcessEngine {
    working_dir: PathBuf,
}

impl ProcessEngine {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
        }
    }

    /// Resolve the program token against the working directory.
    /// Absolute tokens are left as they are.
    pub fn resolve_program(&self, token: &str) -> PathBuf {
        self.working_dir.join(token)
    }

    /// Execute a test case and wait for the child to exit.
    pub async fn execute(&self, test_case: &TestCase) -> Result<ExecutionOutput, HarnessError> {
        let (token, args) = test_case.command_line()?;
        let program = self.resolve_program(token);

        debug!(
            case = %test_case.name,
            program = %program.display(),
            args = ?args,
            "Spawning test program"
        );

        let start_time = Instant::now();
        let mut child = Command::new(&program)
            .args(&args)
            .current_dir(&self.working_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| HarnessError::Spawn {
                program: program.clone(),
                source,
            })?;

        let status = child.wait().await.map_err(|source| HarnessError::Spawn {
            program: program.clone(),
            source,
        })?;
        let execution_time_ms = start_time.elapsed().as_millis() as u64;

        let output = ExecutionOutput::from_status(status, execution_time_ms);
        debug!(
            case = %test_case.name,
            exit_code = ?output.exit_code,
            signal = ?output.signal,
            execution_time_ms,
            "Test program exited"
        );

        Ok(output)
    }
}
