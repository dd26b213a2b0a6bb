use crate::domain::checks::builtin_checks;
use crate::domain::models::CheckEntry;
use std::path::Path;

/// Load the check catalog: the built-in list, or a JSON array of entries
/// from an override file. An empty array is a valid degenerate catalog.
pub fn load_checks(path: Option<&Path>) -> anyhow::Result<Vec<CheckEntry>> {
    let Some(path) = path else {
        return Ok(builtin_checks());
    };
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
