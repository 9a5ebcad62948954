use crate::diff::{diff_values, DiffRun, RunStatus};
use crate::segment::SeparatorProfile;

// Downstream templates inline these snippets as-is and must not re-escape
// them.
const SHARED_KEY_PREFIX: &str = "contact:";

pub fn render_runs(runs: &[DiffRun]) -> String {
    let mut html = String::new();
    for run in runs {
        let class = match run.status {
            RunStatus::Unchanged => "diff-unchanged",
            RunStatus::Removed => "diff-removed",
            RunStatus::Added => "diff-added",
        };
        html.push_str("<span class=\"");
        html.push_str(class);
        html.push_str("\">");
        push_escaped(&mut html, &run.value);
        html.push_str("</span>");
    }
    html
}

// Spaces become non-breaking so whitespace-only changes stay visible.
fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            ' ' => out.push_str("&nbsp;"),
            _ => out.push(ch),
        }
    }
}

pub fn diff_values_html(
    original: Option<&str>,
    suggested: Option<&str>,
    profile: SeparatorProfile,
) -> (Option<String>, Option<String>) {
    let field = diff_values(original, suggested, profile);
    (
        field.old.as_deref().map(render_runs),
        field.new.as_deref().map(render_runs),
    )
}

pub fn diff_tag_keys_html(old_key: &str, new_key: &str) -> (String, String) {
    if old_key.starts_with(SHARED_KEY_PREFIX) && new_key.starts_with(SHARED_KEY_PREFIX) {
        let old_runs = [
            DiffRun::unchanged(SHARED_KEY_PREFIX),
            DiffRun::removed(&old_key[SHARED_KEY_PREFIX.len()..]),
        ];
        let new_runs = [
            DiffRun::unchanged(SHARED_KEY_PREFIX),
            DiffRun::added(&new_key[SHARED_KEY_PREFIX.len()..]),
        ];
        (render_runs(&old_runs), render_runs(&new_runs))
    } else {
        (
            render_runs(&[DiffRun::removed(old_key)]),
            render_runs(&[DiffRun::added(new_key)]),
        )
    }
}
