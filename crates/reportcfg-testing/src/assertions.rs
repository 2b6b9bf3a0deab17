//! Custom assertions for reportcfg JSON output.
//!
//! - `$set` patch document checks
//! - CLI envelope (`content`) access

use anyhow::{Context, Result};
use serde_json::Value;

/// Value assigned to `path` (e.g. `configuration.xLabel`) by a `$set` document.
pub fn set_value<'a>(patch: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(patch, |node, segment| node.get(segment))
        .and_then(|node| node.get("$set"))
}

/// Assert that a `$set` document assigns `expected` at `path`.
pub fn assert_set(patch: &Value, path: &str, expected: &Value) -> Result<()> {
    let actual = set_value(patch, path).with_context(|| format!("No $set at '{}'", path))?;

    if actual != expected {
        anyhow::bail!("Expected {} at '{}', got {}", expected, path, actual);
    }

    Ok(())
}

/// Assert that a `$set` document does not touch `path`.
pub fn assert_untouched(patch: &Value, path: &str) -> Result<()> {
    if let Some(value) = set_value(patch, path) {
        anyhow::bail!("Expected '{}' untouched, but it is set to {}", path, value);
    }
    Ok(())
}

/// The `content` payload of a CLI JSON response.
pub fn content(json: &Value) -> Result<&Value> {
    json.get("content")
        .context("Expected 'content' object in JSON output")
}
