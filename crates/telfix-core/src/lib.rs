pub mod diff;
pub mod dto;
pub mod error;
pub mod normalize;
pub mod render;
pub mod segment;

pub use diff::{diff_phone_numbers, diff_values, merge_runs, DiffRun, FieldDiff, RunStatus};
pub use dto::{FieldRecordDto, RenderedRecordDto, ReportOutputDto};
pub use error::CoreError;
pub use normalize::{normalize_digits, sanitize_invisible, INVISIBLE_PLACEHOLDER};
pub use render::{diff_tag_keys_html, diff_values_html, render_runs};
pub use segment::{split_values, validate_locale, Segment, SegmentKind, SeparatorProfile};
