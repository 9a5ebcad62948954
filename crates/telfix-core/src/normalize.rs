pub const INVISIBLE_PLACEHOLDER: char = '\u{FFFD}';

pub fn normalize_digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

pub fn sanitize_invisible(value: &str) -> String {
    value
        .chars()
        .map(|ch| {
            if is_invisible(ch) {
                INVISIBLE_PLACEHOLDER
            } else {
                ch
            }
        })
        .collect()
}

// Zero-width and bidi characters, the BOM, soft hyphen and the atypical
// space variants. Each one is substituted, never collapsed, so the rendered
// diff still shows that something occupied the position.
fn is_invisible(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\u{00A0}'
            | '\u{00AD}'
            | '\u{2000}'..='\u{200F}'
            | '\u{202A}'..='\u{202F}'
            | '\u{205F}'
            | '\u{2060}'
            | '\u{2066}'..='\u{2069}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}
