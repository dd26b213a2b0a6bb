use crate::domain::models::{CheckEntry, CheckOutcome};
use crate::services::firmware::FirmwareQuery;

/// Execute one check, absorbing any invocation failure into the outcome.
/// The trailing line break is trimmed; renderers add their own.
pub fn run_check(fw: &dyn FirmwareQuery, check: &CheckEntry) -> CheckOutcome {
    match fw.query(&check.args) {
        Ok(raw) => CheckOutcome {
            name: check.name.clone(),
            label: check.label.clone(),
            output: raw.trim_end_matches(['\r', '\n']).to_string(),
            status: "ok".to_string(),
        },
        Err(err) => {
            tracing::warn!(check = %check.name, error = %err, "firmware query failed");
            CheckOutcome {
                name: check.name.clone(),
                label: check.label.clone(),
                output: err.to_string(),
                status: "failed".to_string(),
            }
        }
    }
}

/// Execute every check in catalog order, one at a time. A failed step is
/// recorded and never stops the sweep; there is no aggregate verdict.
pub fn run_sweep(fw: &dyn FirmwareQuery, checks: &[CheckEntry]) -> Vec<CheckOutcome> {
    checks.iter().map(|c| run_check(fw, c)).collect()
}
