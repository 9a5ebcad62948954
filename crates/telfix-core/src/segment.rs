use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

// `ext` after a comma and `\;` mark extension syntax inside a single number,
// so both stay unsplit. The regex crate has no lookaround; candidates are
// matched first and vetoed in `splits_at`.
static STANDARD_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*[;,/]\s*|\s+(?:and|oder|or|y)\s+").expect("separator pattern")
});

static NO_SLASH_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*[;,]\s*|\s+(?:and|oder|or|y)\s+").expect("separator pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeparatorProfile {
    Standard,
    /// `/` is part of a well-formed number in some locales and must not split.
    NoSlash,
}

impl SeparatorProfile {
    pub fn for_locale(locale: &str) -> Self {
        let primary = locale.split(['-', '_']).next().unwrap_or("");
        if primary.eq_ignore_ascii_case("de") {
            SeparatorProfile::NoSlash
        } else {
            SeparatorProfile::Standard
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            SeparatorProfile::Standard => &STANDARD_SEPARATORS,
            SeparatorProfile::NoSlash => &NO_SLASH_SEPARATORS,
        }
    }
}

pub fn validate_locale(raw: &str) -> Result<String, CoreError> {
    let trimmed = raw.trim();
    let well_formed = !trimmed.is_empty()
        && trimmed.len() <= 16
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_');
    if !well_formed {
        return Err(CoreError::InvalidLocale(raw.to_string()));
    }
    Ok(trimmed.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Number,
    Separator,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub kind: SegmentKind,
}

impl Segment {
    fn new(text: String) -> Self {
        let kind = if text.chars().any(|ch| ch.is_ascii_digit()) {
            SegmentKind::Number
        } else {
            SegmentKind::Separator
        };
        Self { text, kind }
    }
}

pub fn split_values(value: &str, profile: SeparatorProfile) -> Vec<Segment> {
    let mut parts: Vec<&str> = Vec::new();
    let mut cursor = 0;
    for found in profile.pattern().find_iter(value) {
        if !splits_at(value, found.as_str(), found.start()) {
            continue;
        }
        parts.push(&value[cursor..found.start()]);
        parts.push(found.as_str());
        cursor = found.end();
    }
    parts.push(&value[cursor..]);

    let mut segments: Vec<Segment> = parts
        .into_iter()
        .filter(|part| !part.trim().is_empty())
        .map(|part| Segment::new(part.to_string()))
        .collect();
    consolidate_plus(&mut segments);
    segments
}

fn splits_at(value: &str, matched: &str, start: usize) -> bool {
    match matched.trim().chars().next() {
        Some(';') => {
            let semi_at = start + matched.find(';').expect("semicolon in match");
            !value[..semi_at].ends_with('\\')
        }
        Some(',') => {
            let comma_at = start + matched.find(',').expect("comma in match");
            !value[comma_at + 1..].starts_with("ext")
        }
        _ => true,
    }
}

// A lone "+" is never a standalone token; it belongs to the number that
// follows it.
fn consolidate_plus(segments: &mut Vec<Segment>) {
    let mut index = 0;
    while index < segments.len() {
        if segments[index].text.trim() == "+" {
            if let Some(next) = segments[index + 1..]
                .iter()
                .position(|segment| segment.kind == SegmentKind::Number)
            {
                let merged = format!("+{}", segments[index + 1 + next].text);
                segments[index + 1 + next] = Segment::new(merged);
                segments.remove(index);
                continue;
            }
        }
        index += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::{split_values, validate_locale, Segment, SegmentKind, SeparatorProfile};

    fn texts(segments: &[Segment]) -> Vec<&str> {
        segments.iter().map(|segment| segment.text.as_str()).collect()
    }

    #[test]
    fn split_on_semicolon_keeps_separator() {
        let segments = split_values("+32 58 1;+32 58 2", SeparatorProfile::Standard);
        assert_eq!(texts(&segments), vec!["+32 58 1", ";", "+32 58 2"]);
        assert_eq!(segments[0].kind, SegmentKind::Number);
        assert_eq!(segments[1].kind, SegmentKind::Separator);
    }

    #[test]
    fn split_takes_surrounding_spaces_into_separator() {
        let segments = split_values("030 1234 , 030 5678", SeparatorProfile::Standard);
        assert_eq!(texts(&segments), vec!["030 1234", " , ", "030 5678"]);
    }

    #[test]
    fn split_on_word_separators() {
        let segments = split_values("030 1234 or 030 5678", SeparatorProfile::Standard);
        assert_eq!(texts(&segments), vec!["030 1234", " or ", "030 5678"]);

        let segments = split_values("030 1234 oder 030 5678", SeparatorProfile::Standard);
        assert_eq!(texts(&segments), vec!["030 1234", " oder ", "030 5678"]);
    }

    #[test]
    fn word_separator_requires_whitespace() {
        let segments = split_values("corinne 1234", SeparatorProfile::Standard);
        assert_eq!(segments.len(), 1);
    }

    #[test]
    fn escaped_semicolon_does_not_split() {
        let segments = split_values("555 1234\\;89", SeparatorProfile::Standard);
        assert_eq!(texts(&segments), vec!["555 1234\\;89"]);
    }

    #[test]
    fn comma_before_extension_marker_does_not_split() {
        let segments = split_values("555 1234,ext 9", SeparatorProfile::Standard);
        assert_eq!(texts(&segments), vec!["555 1234,ext 9"]);

        let segments = split_values("555 1234, 555 5678", SeparatorProfile::Standard);
        assert_eq!(texts(&segments), vec!["555 1234", ", ", "555 5678"]);
    }

    #[test]
    fn slash_splits_only_in_standard_profile() {
        let segments = split_values("030/1234", SeparatorProfile::Standard);
        assert_eq!(texts(&segments), vec!["030", "/", "1234"]);

        let segments = split_values("030/1234", SeparatorProfile::NoSlash);
        assert_eq!(texts(&segments), vec!["030/1234"]);
    }

    #[test]
    fn lone_plus_is_merged_into_following_number() {
        let segments = split_values("+/49 30 1234", SeparatorProfile::Standard);
        assert_eq!(texts(&segments), vec!["/", "+49 30 1234"]);
        assert_eq!(segments[1].kind, SegmentKind::Number);
    }

    #[test]
    fn whitespace_only_parts_are_discarded() {
        let segments = split_values("  ;+32 58 2", SeparatorProfile::Standard);
        assert_eq!(texts(&segments), vec!["  ;", "+32 58 2"]);
        assert!(split_values("   ", SeparatorProfile::Standard).is_empty());
    }

    #[test]
    fn profile_for_locale() {
        assert_eq!(
            SeparatorProfile::for_locale("de"),
            SeparatorProfile::NoSlash
        );
        assert_eq!(
            SeparatorProfile::for_locale("de-AT"),
            SeparatorProfile::NoSlash
        );
        assert_eq!(
            SeparatorProfile::for_locale("en"),
            SeparatorProfile::Standard
        );
        assert_eq!(SeparatorProfile::for_locale(""), SeparatorProfile::Standard);
    }

    #[test]
    fn validate_locale_accepts_language_region() {
        assert_eq!(validate_locale("de-AT").unwrap(), "de-AT");
        assert_eq!(validate_locale(" en ").unwrap(), "en");
    }

    #[test]
    fn validate_locale_rejects_bad_input() {
        assert!(validate_locale("").is_err());
        assert!(validate_locale("de AT").is_err());
        assert!(validate_locale("aaaaaaaaaaaaaaaaaaaaa").is_err());
    }
}
