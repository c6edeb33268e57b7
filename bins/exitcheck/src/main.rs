mod console;
mod engine;
mod evaluator;
mod executor;
mod report;
#[cfg(test)]
mod testutil;

use anyhow::Result;
use clap::Parser;
use console::Console;
use exitcheck_common::config::HarnessConfig;
use exitcheck_common::types::RunReport;
use std::path::PathBuf;
use tracing::{debug, error, info};

#[derive(Parser, Debug)]
#[command(name = "exitcheck")]
#[command(about = "Run programs listed in a CSV table and check their exit codes", long_about = None)]
struct Cli {
    /// Test table: name, argument string, expected exit code
    #[arg(env = "EXITCHECK_SUITE")]
    suite: Option<PathBuf>,

    /// JSON config file; command-line options override its values
    #[arg(short, long, env = "EXITCHECK_CONFIG")]
    config: Option<PathBuf>,

    /// Directory programs are resolved against and run in (defaults to cwd)
    #[arg(short = 'C', long)]
    working_dir: Option<PathBuf>,

    /// Field delimiter
    #[arg(short, long)]
    delimiter: Option<char>,

    /// Treat the first row as a header
    #[arg(long, overrides_with = "no_has_headers")]
    has_headers: bool,

    /// Run the first row as a test case, even if the config file sets a header
    #[arg(long, overrides_with = "has_headers")]
    no_has_headers: bool,

    /// Banner title
    #[arg(short, long)]
    title: Option<String>,

    /// Only run cases whose name contains this pattern
    #[arg(short, long)]
    filter: Option<String>,

    /// Write a JSON report of the run to this file
    #[arg(long)]
    report: Option<PathBuf>,

    /// Exit with status 1 when any case fails
    #[arg(long, overrides_with = "no_fail_on_mismatch")]
    fail_on_mismatch: bool,

    /// Exit with status 0 after a completed run, even if the config file says otherwise
    #[arg(long, overrides_with = "fail_on_mismatch")]
    no_fail_on_mismatch: bool,
}

/// Collapse a `--flag` / `--no-flag` pair; `None` leaves the config value alone.
fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

impl Cli {
    /// Build the effective configuration: defaults, then the config file, then flags.
    fn into_config(self) -> Result<HarnessConfig> {
        let mut config = match &self.config {
            Some(path) => HarnessConfig::load(path)?,
            None => HarnessConfig::default(),
        };

        if let Some(suite) = self.suite {
            config.suite = suite;
        }
        if let Some(dir) = self.working_dir {
            config.working_dir = Some(dir);
        }
        if let Some(delimiter) = self.delimiter {
            config.delimiter = delimiter;
        }
        if let Some(title) = self.title {
            config.title = title;
        }
        if let Some(filter) = self.filter {
            config.filter = Some(filter);
        }
        if let Some(report) = self.report {
            config.report = Some(report);
        }
        if let Some(has_headers) = flag_pair(self.has_headers, self.no_has_headers) {
            config.has_headers = has_headers;
        }
        if let Some(fail) = flag_pair(self.fail_on_mismatch, self.no_fail_on_mismatch) {
            config.fail_on_mismatch = fail;
        }

        Ok(config)
    }
}

/// Write the report if one was requested and decide the process exit status.
fn finish_run(config: &HarnessConfig, report: &RunReport) -> Result<i32> {
    if let Some(path) = &config.report {
        report::write_report(report, path)?;
        info!(path = %path.display(), "Report written");
    }

    if config.fail_on_mismatch && report.summary.has_failures() {
        Ok(1)
    } else {
        Ok(0)
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    let json = std::env::var("EXITCHECK_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    // stdout belongs to the report and the children
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();

    let config = Cli::parse().into_config().map_err(|e| {
        error!("Invalid configuration: {:#}", e);
        e
    })?;
    debug!(?config, "Effective configuration");

    let mut console = Console::new(std::io::stdout());
    let report = executor::execute_run(&config, &mut console).await.map_err(|e| {
        error!("Run aborted: {:#}", e);
        e
    })?;

    let status = finish_run(&config, &report)?;
    if status != 0 {
        std::process::exit(status);
    }

    Ok(())
}
