use crate::report::Report;
use crate::Result;
use std::fs;
use std::path::Path;

/// Dump every result, in input order, as pretty JSON
pub fn save_results_json<P: AsRef<Path>>(report: &Report, path: P) -> Result<()> {
    let json = serde_json::to_string_pretty(report.rows())?;
    fs::write(path, json)?;
    Ok(())
}
