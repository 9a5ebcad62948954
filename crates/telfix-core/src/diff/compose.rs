use serde::Serialize;

use crate::diff::align::diff_chars;
use crate::diff::classify::diff_phone_numbers;
use crate::diff::{merge_runs, DiffRun};
use crate::normalize::sanitize_invisible;
use crate::segment::{split_values, SegmentKind, SeparatorProfile};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDiff {
    pub old: Option<Vec<DiffRun>>,
    pub new: Option<Vec<DiffRun>>,
}

pub fn diff_values(
    original: Option<&str>,
    suggested: Option<&str>,
    profile: SeparatorProfile,
) -> FieldDiff {
    let original = original.filter(|value| !value.trim().is_empty());
    let suggested = suggested.filter(|value| !value.trim().is_empty());

    match (original, suggested) {
        (None, None) => FieldDiff {
            old: None,
            new: None,
        },
        (Some(original), None) => FieldDiff {
            old: Some(vec![DiffRun::removed(sanitize_invisible(original))]),
            new: None,
        },
        (None, Some(suggested)) => FieldDiff {
            old: None,
            new: Some(vec![DiffRun::added(sanitize_invisible(suggested))]),
        },
        (Some(original), Some(suggested)) => diff_both(original, suggested, profile),
    }
}

fn diff_both(original: &str, suggested: &str, profile: SeparatorProfile) -> FieldDiff {
    let original = sanitize_invisible(original);
    let suggested = sanitize_invisible(suggested);
    let old_segments = split_values(&original, profile);
    let new_segments = split_values(&suggested, profile);

    let mut old_runs = Vec::new();
    let mut new_runs = Vec::new();
    let paired = old_segments.len().min(new_segments.len());
    for position in 0..paired {
        let old_segment = &old_segments[position];
        let new_segment = &new_segments[position];
        let (old_part, new_part) = if old_segment.kind == SegmentKind::Number {
            diff_phone_numbers(&old_segment.text, &new_segment.text)
        } else {
            diff_chars(&old_segment.text, &new_segment.text)
        };
        old_runs.extend(old_part);
        new_runs.extend(new_part);
    }

    // Mismatched counts mean a whole number was dropped or introduced; no
    // alignment is attempted for the overhang.
    if old_segments.len() > paired {
        let trailing: String = old_segments[paired..]
            .iter()
            .map(|segment| segment.text.as_str())
            .collect();
        old_runs.push(DiffRun::removed(trailing));
    }
    if new_segments.len() > paired {
        let trailing: String = new_segments[paired..]
            .iter()
            .map(|segment| segment.text.as_str())
            .collect();
        new_runs.push(DiffRun::added(trailing));
    }

    FieldDiff {
        old: Some(merge_runs(old_runs)),
        new: Some(merge_runs(new_runs)),
    }
}
