use super::*;

/// Fixed-advance measurer: every char is 10px wide.
///
/// Keeps the wrap logic observable without shaping real fonts; the ellipsis
/// counts as one char like any other.
fn measure(s: &str) -> CardResult<f32> {
    Ok(s.chars().count() as f32 * 10.0)
}

#[test]
fn short_title_stays_on_one_line() {
    let w = wrap_title("hello world", 200.0, 2, measure).unwrap();
    assert_eq!(w.lines, vec!["hello world"]);
    assert_eq!(w.lines_used(), 1);
    assert!(!w.truncated);
}

#[test]
fn empty_title_draws_nothing() {
    let w = wrap_title("", 200.0, 2, measure).unwrap();
    assert!(w.lines.is_empty());
    assert_eq!(w.lines_used(), 0);
    assert!(!w.truncated);
}

#[test]
fn two_lines_fit_without_truncation() {
    // 10 chars per line: "aaaa bbbb" (9) then "cccc".
    let w = wrap_title("aaaa bbbb cccc", 100.0, 2, measure).unwrap();
    assert_eq!(w.lines, vec!["aaaa bbbb", "cccc"]);
    assert_eq!(w.lines_used(), 2);
    assert!(!w.truncated);
}

#[test]
fn overflow_past_last_line_truncates_with_ellipsis() {
    // Would need three greedy lines; the second is cut instead.
    let w = wrap_title("aaaa bbbb cccc dddd eeee", 100.0, 2, measure).unwrap();
    assert_eq!(w.lines_used(), 2);
    assert!(w.truncated);
    let last = w.lines.last().unwrap();
    assert!(last.ends_with('…'));
    // The truncated line fits the limit exactly as measured.
    assert!(measure(last).unwrap() <= 100.0);
}

#[test]
fn truncation_drops_the_overflowing_word_not_the_committed_text() {
    // Line 0 commits "aaaa"; line 1 accumulates "bbbb" and then "cc"
    // overflows it, so truncation applies to "bbbb" alone.
    let w = wrap_title("aaaa bbbb cc", 50.0, 2, measure).unwrap();
    assert_eq!(w.lines[0], "aaaa");
    assert!(w.lines[1].starts_with("bbbb") || w.lines[1].ends_with('…'));
    assert!(measure(&w.lines[1]).unwrap() <= 50.0);
}

#[test]
fn single_overwide_word_is_never_split() {
    let word = "supercalifragilistic";
    let w = wrap_title(word, 100.0, 2, measure).unwrap();
    assert_eq!(w.lines, vec![word]);
    assert_eq!(w.lines_used(), 1);
    assert!(!w.truncated);
}

#[test]
fn overwide_first_word_pushes_following_words_to_line_two() {
    let w = wrap_title("supercalifragilistic ok", 100.0, 2, measure).unwrap();
    assert_eq!(w.lines, vec!["supercalifragilistic", "ok"]);
    assert_eq!(w.lines_used(), 2);
    assert!(!w.truncated);
}

#[test]
fn truncation_can_empty_the_line_entirely() {
    // Nothing fits even alone; the ellipsis still lands.
    let w = wrap_title("abcdef ghijkl", 5.0, 1, measure).unwrap();
    assert_eq!(w.lines, vec!["…"]);
    assert_eq!(w.lines_used(), 1);
    assert!(w.truncated);
}

#[test]
fn max_lines_one_truncates_immediately_on_second_word() {
    let w = wrap_title("aaaa bbbb cccc", 90.0, 1, measure).unwrap();
    assert_eq!(w.lines_used(), 1);
    assert!(w.truncated);
    assert!(w.lines[0].ends_with('…'));
}

#[test]
fn wrapping_is_pure() {
    let a = wrap_title("aaaa bbbb cccc dddd", 100.0, 2, measure).unwrap();
    let b = wrap_title("aaaa bbbb cccc dddd", 100.0, 2, measure).unwrap();
    assert_eq!(a, b);
}
