// Console report: per-case blocks and the closing summary
use exitcheck_common::types::{RunSummary, TestCase, TestResult};
use std::io::{self, Write};

const SEPARATOR: &str = "---------------------------------";

pub struct Console<W: Write> {
    out: W,
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn banner(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out, "-------{} tests----------", title)
    }

    /// Print everything up to the `output: ` prefix and flush, so the
    /// child's inherited output appears right after it.
    pub fn case_started(&mut self, test_case: &TestCase) -> io::Result<()> {
        writeln!(self.out, "Test: {}", test_case.name)?;
        writeln!(self.out)?;
        writeln!(self.out, "arguments: {}", test_case.arguments)?;
        write!(self.out, "output: ")?;
        self.out.flush()
    }

    pub fn case_finished(&mut self, result: &TestResult) -> io::Result<()> {
        writeln!(self.out)?;
        if result.passed() {
            writeln!(self.out, "Test passed")?;
        } else {
            writeln!(self.out, "Test failed")?;
            match (result.actual_exit_code, result.signal) {
                (Some(code), Some(signal)) => writeln!(
                    self.out,
                    "expected exit code {}, terminated by signal {} (code {})",
                    result.expected_exit_code, signal, code
                )?,
                (Some(code), None) => writeln!(
                    self.out,
                    "expected exit code {}, got {}",
                    result.expected_exit_code, code
                )?,
                (None, Some(signal)) => writeln!(
                    self.out,
                    "expected exit code {}, terminated by signal {}",
                    result.expected_exit_code, signal
                )?,
                (None, None) => writeln!(
                    self.out,
                    "expected exit code {}, no exit code reported",
                    result.expected_exit_code
                )?,
            }
        }
        writeln!(self.out, "{}", SEPARATOR)
    }

    pub fn summary(&mut self, summary: &RunSummary) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Passed: {}", summary.passed)?;
        writeln!(self.out, "Failed: {}", summary.failed)?;
        writeln!(self.out, "Total: {}", summary.total())?;
        self.out.flush()
    }
}
