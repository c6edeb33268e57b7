// JSON run report
use exitcheck_common::types::RunReport;
use exitcheck_common::HarnessError;
use std::fs;
use std::path::Path;

/// Write `report` as pretty-printed JSON, creating parent directories as needed.
pub fn write_report(report: &RunReport, path: &Path) -> Result<(), HarnessError> {
    let to_report_error = |reason: String| HarnessError::Report {
        path: path.to_path_buf(),
        reason,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| to_report_error(e.to_string()))?;
    }

    let json = serde_json::to_string_pretty(report).map_err(|e| to_report_error(e.to_string()))?;
    fs::write(path, json).map_err(|e| to_report_error(e.to_string()))
}
