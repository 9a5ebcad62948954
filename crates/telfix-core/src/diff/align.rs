use similar::{capture_diff_slices, Algorithm, DiffOp};

use crate::diff::DiffRun;
use crate::normalize::normalize_digits;

/// Digits present, in order, in both strings, as picked by a minimal-edit
/// character diff over the digit-only projections.
pub(crate) fn common_digits(original: &str, suggested: &str) -> Vec<char> {
    let old: Vec<char> = normalize_digits(original).chars().collect();
    let new: Vec<char> = normalize_digits(suggested).chars().collect();

    let mut common = Vec::new();
    for op in capture_diff_slices(Algorithm::Myers, &old, &new) {
        if let DiffOp::Equal { old_index, len, .. } = op {
            common.extend_from_slice(&old[old_index..old_index + len]);
        }
    }
    common
}

/// Plain character diff used for separator segments, where digit alignment
/// does not apply.
pub(crate) fn diff_chars(old_text: &str, new_text: &str) -> (Vec<DiffRun>, Vec<DiffRun>) {
    let old: Vec<char> = old_text.chars().collect();
    let new: Vec<char> = new_text.chars().collect();

    let mut old_runs = Vec::new();
    let mut new_runs = Vec::new();
    for op in capture_diff_slices(Algorithm::Myers, &old, &new) {
        match op {
            DiffOp::Equal { old_index, len, .. } => {
                let value: String = old[old_index..old_index + len].iter().collect();
                old_runs.push(DiffRun::unchanged(value.clone()));
                new_runs.push(DiffRun::unchanged(value));
            }
            DiffOp::Delete {
                old_index, old_len, ..
            } => {
                let value: String = old[old_index..old_index + old_len].iter().collect();
                old_runs.push(DiffRun::removed(value));
            }
            DiffOp::Insert {
                new_index, new_len, ..
            } => {
                let value: String = new[new_index..new_index + new_len].iter().collect();
                new_runs.push(DiffRun::added(value));
            }
            DiffOp::Replace {
                old_index,
                old_len,
                new_index,
                new_len,
            } => {
                let removed: String = old[old_index..old_index + old_len].iter().collect();
                let added: String = new[new_index..new_index + new_len].iter().collect();
                old_runs.push(DiffRun::removed(removed));
                new_runs.push(DiffRun::added(added));
            }
        }
    }
    (old_runs, new_runs)
}
