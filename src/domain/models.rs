use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// One configured diagnostic step: the expectation label printed before the
/// query runs, plus the argument vector handed to the firmware utility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckEntry {
    pub name: String,
    pub label: String,
    pub args: Vec<String>,
}

/// Result of running one check. `status` reflects whether the invocation
/// itself succeeded, never whether the reported value matches the label.
#[derive(Debug, Serialize)]
pub struct CheckOutcome {
    pub name: String,
    pub label: String,
    pub output: String,
    pub status: String,
}
