use anyhow::{Context, Result};
use reportcfg_types::Report;
use serde_json::Value;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Read a report document from a file, or stdin when `source` is `-`.
pub fn read_report(source: &str) -> Result<Report> {
    let content = if source == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read report from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(source).with_context(|| format!("Failed to read report {}", source))?
    };

    let report: Report =
        serde_json::from_str(&content).with_context(|| format!("Invalid report {}", source))?;
    debug!(source, subject = %report.report_type, "loaded report");
    Ok(report)
}

pub fn write_report(path: &Path, report: &Report) -> Result<()> {
    let content = serde_json::to_string_pretty(report)?;
    std::fs::write(path, content + "\n")
        .with_context(|| format!("Failed to write report {}", path.display()))?;
    debug!(path = %path.display(), "wrote report");
    Ok(())
}

/// Parse a `--value` argument. Anything that is not valid JSON is taken as
/// a bare string, so `--value bar` and `--value '"bar"'` mean the same.
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
