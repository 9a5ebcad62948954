use serde::Serialize;

mod align;
mod classify;
mod compose;

pub use classify::diff_phone_numbers;
pub use compose::{diff_values, FieldDiff};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Unchanged,
    Removed,
    Added,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffRun {
    pub value: String,
    pub status: RunStatus,
}

impl DiffRun {
    pub fn unchanged(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            status: RunStatus::Unchanged,
        }
    }

    pub fn removed(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            status: RunStatus::Removed,
        }
    }

    pub fn added(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            status: RunStatus::Added,
        }
    }
}

pub fn merge_runs(runs: Vec<DiffRun>) -> Vec<DiffRun> {
    let mut merged: Vec<DiffRun> = Vec::new();
    for run in runs {
        if run.value.is_empty() {
            continue;
        }
        match merged.last_mut() {
            Some(last) if last.status == run.status => last.value.push_str(&run.value),
            _ => merged.push(run),
        }
    }
    merged
}
