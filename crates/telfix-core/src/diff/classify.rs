use crate::diff::align::common_digits;
use crate::diff::{merge_runs, DiffRun};
use crate::normalize::normalize_digits;

/// Character-level diff of a single number pair. The digits shared by both
/// sides form the backbone: a digit that survives into the replacement is
/// never reported as removed and added at the same time, so reformatting
/// shows up as unchanged digits with moved separators around them.
pub fn diff_phone_numbers(original: &str, suggested: &str) -> (Vec<DiffRun>, Vec<DiffRun>) {
    let common = common_digits(original, suggested);
    let old_runs = classify_original(original, suggested, &common);
    let new_runs = classify_suggested(original, suggested, &common);
    (merge_runs(old_runs), merge_runs(new_runs))
}

// Per-pass cursor state. Both cursors only ever move forward, which keeps
// every pass linear and terminating.
struct Cursors<'a> {
    common: &'a [char],
    common_at: usize,
    other: &'a [char],
    other_at: usize,
}

impl<'a> Cursors<'a> {
    fn new(common: &'a [char], other: &'a [char]) -> Self {
        Self {
            common,
            common_at: 0,
            other,
            other_at: 0,
        }
    }

    fn next_common(&self) -> Option<char> {
        self.common.get(self.common_at).copied()
    }

    fn consume_common(&mut self) {
        self.common_at += 1;
    }

    fn other_char(&self) -> Option<char> {
        self.other.get(self.other_at).copied()
    }

    fn consume_other(&mut self) {
        if self.other_at < self.other.len() {
            self.other_at += 1;
        }
    }

    // After a digit matched the backbone, drop other-side characters until the
    // cursor points at that digit again (or at the next expected common digit)
    // and consume it. This absorbs spacing and punctuation the other side
    // inserted before the digit.
    fn resync_other(&mut self, matched: char) {
        while let Some(ch) = self.other_char() {
            if ch == matched || Some(ch) == self.next_common() {
                break;
            }
            self.other_at += 1;
        }
        self.consume_other();
    }

    // Leaves the cursor on the first occurrence of `target`, or at the end.
    fn advance_other_to(&mut self, target: char) {
        while let Some(ch) = self.other_char() {
            if ch == target {
                break;
            }
            self.other_at += 1;
        }
    }
}

fn token_after_first_space(value: &str) -> Option<&str> {
    value.split_once(' ').map(|(_, rest)| rest)
}

fn classify_original(original: &str, suggested: &str, common: &[char]) -> Vec<DiffRun> {
    let chars: Vec<char> = original.chars().collect();
    let other: Vec<char> = suggested.chars().collect();
    let mut cursors = Cursors::new(common, &other);
    let mut runs = Vec::with_capacity(chars.len());

    // Used to tell a dropped trunk "0" from a "0" the suggested number kept.
    let suggested_number = token_after_first_space(suggested);

    let mut index = 0;
    while index < chars.len() {
        let ch = chars[index];

        let drops_trunk_zero = ch == '0'
            && cursors.other_char() == Some('+')
            && suggested_number.is_some_and(|rest| !rest.starts_with('0'));
        if drops_trunk_zero {
            runs.push(DiffRun::removed(ch));
            if cursors.next_common() == Some('0') {
                cursors.consume_common();
            }
            cursors.advance_other_to(' ');
            index += 1;
            continue;
        }

        if ch.is_ascii_digit() {
            if cursors.next_common() == Some(ch) {
                cursors.consume_common();
                cursors.resync_other(ch);
                runs.push(DiffRun::unchanged(ch));
            } else {
                runs.push(DiffRun::removed(ch));
            }
        } else if cursors.other_char() == Some(ch) {
            cursors.consume_other();
            runs.push(DiffRun::unchanged(ch));
        } else {
            runs.push(DiffRun::removed(ch));
        }
        index += 1;
    }
    runs
}

fn classify_suggested(original: &str, suggested: &str, common: &[char]) -> Vec<DiffRun> {
    let chars: Vec<char> = suggested.chars().collect();
    let other: Vec<char> = original.chars().collect();
    let mut cursors = Cursors::new(common, &other);
    let mut runs = Vec::with_capacity(chars.len());

    let original_digits = normalize_digits(original);
    let suggested_digits = normalize_digits(suggested);
    let original_has_plus = original.contains('+');
    let suggested_number = token_after_first_space(suggested);

    let mut index = 0;
    while index < chars.len() {
        let ch = chars[index];

        if ch == '+' && !original_has_plus {
            if let Some(end) = inserted_prefix_end(
                &chars,
                index,
                &original_digits,
                &suggested_digits,
            ) {
                // The whole "+<country> " prefix is new.
                for &prefix_ch in &chars[index..=end] {
                    runs.push(DiffRun::added(prefix_ch));
                }
                // A trunk "0" superseded by the prefix disappears from the
                // original without ever being matched.
                if cursors.other_char() == Some('0')
                    && suggested_number.is_some_and(|rest| !rest.starts_with('0'))
                {
                    cursors.consume_other();
                    if cursors.next_common() == Some('0') {
                        cursors.consume_common();
                    }
                }
                index = end + 1;
                continue;
            }
        }

        if ch.is_ascii_digit() {
            if cursors.next_common() == Some(ch) {
                cursors.consume_common();
                cursors.resync_other(ch);
                runs.push(DiffRun::unchanged(ch));
            } else {
                runs.push(DiffRun::added(ch));
            }
        } else if cursors.other_char() == Some(ch) {
            cursors.consume_other();
            runs.push(DiffRun::unchanged(ch));
        } else if let Some(offset) = realignment_offset(&cursors, ch) {
            // The character exists further into the original; realign rather
            // than flagging a reordered formatting character as new.
            cursors.other_at += offset + 1;
            runs.push(DiffRun::unchanged(ch));
        } else {
            runs.push(DiffRun::added(ch));
        }
        index += 1;
    }
    runs
}

// End index (inclusive, the space itself) of an inserted international
// prefix, or None when the "+" is not an inserted prefix:
//  - the original already dials internationally via "00",
//  - the digit sequences are identical (only the "+" itself is new),
//  - the prefix digits were already present unformatted in the original,
//  - or there is no space bounding the prefix.
fn inserted_prefix_end(
    chars: &[char],
    index: usize,
    original_digits: &str,
    suggested_digits: &str,
) -> Option<usize> {
    if original_digits.starts_with("00") {
        return None;
    }
    if original_digits == suggested_digits {
        return None;
    }
    let space_offset = chars[index..].iter().position(|&ch| ch == ' ')?;
    let prefix_digits: String = chars[index..index + space_offset]
        .iter()
        .filter(|ch| ch.is_ascii_digit())
        .collect();
    if prefix_digits.is_empty() || original_digits.starts_with(prefix_digits.as_str()) {
        return None;
    }
    Some(index + space_offset)
}

fn realignment_offset(cursors: &Cursors<'_>, ch: char) -> Option<usize> {
    if ch.is_ascii_digit() || matches!(ch, '+' | ' ' | '-') {
        return None;
    }
    let rest = &cursors.other[cursors.other_at..];
    match rest.iter().position(|&other_ch| other_ch == ch) {
        Some(offset) if offset > 0 => Some(offset),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::diff_phone_numbers;
    use crate::diff::DiffRun;

    #[test]
    fn trunk_zero_replaced_by_country_prefix() {
        let (old_runs, new_runs) = diff_phone_numbers("012", "+4 12");
        assert_eq!(
            old_runs,
            vec![DiffRun::removed("0"), DiffRun::unchanged("12")]
        );
        assert_eq!(
            new_runs,
            vec![DiffRun::added("+4 "), DiffRun::unchanged("12")]
        );
    }

    #[test]
    fn country_prefix_inserted_before_kept_digits() {
        let (old_runs, new_runs) = diff_phone_numbers("023 456 7890", "+37 23 456 7890");
        assert_eq!(
            old_runs,
            vec![DiffRun::removed("0"), DiffRun::unchanged("23 456 7890")]
        );
        assert_eq!(
            new_runs,
            vec![DiffRun::added("+37 "), DiffRun::unchanged("23 456 7890")]
        );
    }

    #[test]
    fn reformatting_only_keeps_all_digits_unchanged() {
        let (old_runs, new_runs) = diff_phone_numbers("+32 58 515 592", "+32 58 51 55 92");
        for run in old_runs.iter().chain(new_runs.iter()) {
            let digits: String = run.value.chars().filter(char::is_ascii_digit).collect();
            if !digits.is_empty() {
                assert_eq!(run.status, crate::diff::RunStatus::Unchanged, "{run:?}");
            }
        }
    }

    #[test]
    fn redundant_internal_zero_is_removed() {
        let (old_runs, new_runs) = diff_phone_numbers("+32 0473 792 951", "+32 473 79 29 51");
        assert!(old_runs.contains(&DiffRun::removed("0")));
        for run in old_runs.iter().chain(new_runs.iter()) {
            if run.status != crate::diff::RunStatus::Unchanged {
                assert!(
                    run.value.chars().all(|ch| ch == '0' || !ch.is_ascii_digit()),
                    "only the dropped zero may change: {run:?}"
                );
            }
        }
        let added_spaces = new_runs
            .iter()
            .filter(|run| run.status == crate::diff::RunStatus::Added)
            .map(|run| run.value.clone())
            .collect::<Vec<_>>();
        assert_eq!(added_spaces, vec![" ", " "]);
    }

    #[test]
    fn lone_plus_addition_does_not_flag_digits() {
        let (old_runs, new_runs) = diff_phone_numbers("32 58 515 592", "+32 58 515 592");
        assert_eq!(old_runs, vec![DiffRun::unchanged("32 58 515 592")]);
        assert_eq!(
            new_runs,
            vec![DiffRun::added("+"), DiffRun::unchanged("32 58 515 592")]
        );
    }

    #[test]
    fn prefix_already_present_unformatted_is_not_flagged_again() {
        let (_, new_runs) = diff_phone_numbers("3258515592", "+32 58 51 55 92");
        let added: String = new_runs
            .iter()
            .filter(|run| run.status == crate::diff::RunStatus::Added)
            .map(|run| run.value.as_str())
            .collect();
        assert!(
            added.chars().all(|ch| !ch.is_ascii_digit()),
            "no digit may be flagged added: {added:?}"
        );
    }

    #[test]
    fn international_access_code_blocks_prefix_insertion() {
        let (_, new_runs) = diff_phone_numbers("0032 58 515 592", "+32 58 51 55 92");
        let added: String = new_runs
            .iter()
            .filter(|run| run.status == crate::diff::RunStatus::Added)
            .map(|run| run.value.as_str())
            .collect();
        assert!(added.chars().all(|ch| !ch.is_ascii_digit()), "{added:?}");
    }

    #[test]
    fn dropped_punctuation_is_removed() {
        let (old_runs, _) = diff_phone_numbers("(030) 1234", "030 1234");
        assert_eq!(old_runs.first(), Some(&DiffRun::removed("(")));
        assert!(old_runs.contains(&DiffRun::removed(")")));
    }

    #[test]
    fn extra_digits_on_either_side_are_flagged() {
        let (old_runs, _) = diff_phone_numbers("030 12345", "030 1234");
        let removed: String = old_runs
            .iter()
            .filter(|run| run.status == crate::diff::RunStatus::Removed)
            .map(|run| run.value.as_str())
            .collect();
        assert_eq!(removed, "5");

        let (_, new_runs) = diff_phone_numbers("030 1234", "030 12345");
        let added: String = new_runs
            .iter()
            .filter(|run| run.status == crate::diff::RunStatus::Added)
            .map(|run| run.value.as_str())
            .collect();
        assert_eq!(added, "5");
    }

    #[test]
    fn concatenation_reconstructs_both_sides() {
        let cases = [
            ("012", "+4 12"),
            ("+32 0473 792 951", "+32 473 79 29 51"),
            ("(030) 1234x9", "+49 30 1234 9"),
            ("", "+32 58"),
            ("+32 58", ""),
        ];
        for (original, suggested) in cases {
            let (old_runs, new_runs) = diff_phone_numbers(original, suggested);
            let old: String = old_runs.iter().map(|run| run.value.as_str()).collect();
            let new: String = new_runs.iter().map(|run| run.value.as_str()).collect();
            assert_eq!(old, original);
            assert_eq!(new, suggested);
        }
    }

    #[test]
    fn terminates_on_adversarial_input() {
        let original = "+++000///;;;";
        let suggested = "000 +++ /// or";
        let (old_runs, new_runs) = diff_phone_numbers(original, suggested);
        let old: String = old_runs.iter().map(|run| run.value.as_str()).collect();
        let new: String = new_runs.iter().map(|run| run.value.as_str()).collect();
        assert_eq!(old, original);
        assert_eq!(new, suggested);
    }
}
