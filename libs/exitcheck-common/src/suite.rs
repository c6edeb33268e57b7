//! Suite loading: turns a delimited table into `TestCase` records.
//!
//! Each record has exactly three fields: name, argument string, expected exit
//! code. Quoted fields are honoured so a name may contain the delimiter.
//! Blank lines are ignored.

use crate::error::{HarnessError, Result};
use crate::types::TestCase;
use std::fs::File;
use std::io::Read;
use std::path::Path;

const FIELDS_PER_ROW: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuiteFormat {
    pub delimiter: u8,
    pub has_headers: bool,
}

impl Default for SuiteFormat {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_headers: false,
        }
    }
}

/// Load every test case from `path`, in file order.
pub fn load_suite(path: &Path, format: &SuiteFormat) -> Result<Vec<TestCase>> {
    if !path.is_file() {
        return Err(HarnessError::SuiteNotFound(path.to_path_buf()));
    }
    let file = File::open(path).map_err(csv::Error::from)?;
    parse_suite(file, format)
}

/// Parse test cases from any reader. The whole table is validated before
/// anything is returned, so a bad row aborts the run before a single case executes.
pub fn parse_suite<R: Read>(reader: R, format: &SuiteFormat) -> Result<Vec<TestCase>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(format.delimiter)
        .has_headers(format.has_headers)
        .flexible(true)
        .from_reader(reader);

    let mut cases = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        if record.len() != FIELDS_PER_ROW {
            return Err(HarnessError::MalformedRow {
                line,
                reason: format!("expected {} fields, found {}", FIELDS_PER_ROW, record.len()),
            });
        }

        let name = &record[0];
        let arguments = &record[1];
        let raw_code = record[2].trim();

        if arguments.split_whitespace().next().is_none() {
            return Err(HarnessError::MalformedRow {
                line,
                reason: format!("test '{}' has an empty argument string", name),
            });
        }

        let expected_exit_code = raw_code.parse::<i32>().map_err(|_| HarnessError::MalformedRow {
            line,
            reason: format!("expected exit code '{}' is not an integer", raw_code),
        })?;

        cases.push(TestCase::new(name, arguments, expected_exit_code));
    }

    Ok(cases)
}
