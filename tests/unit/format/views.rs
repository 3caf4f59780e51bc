use super::*;

#[test]
fn below_one_thousand_is_verbatim() {
    assert_eq!(format_view_count("999"), "999 views");
    assert_eq!(format_view_count("0"), "0 views");
}

#[test]
fn exactly_one_is_singular() {
    assert_eq!(format_view_count("1"), "1 view");
}

#[test]
fn thousands_scale_to_one_decimal() {
    assert_eq!(format_view_count("1000"), "1.0K views");
    assert_eq!(format_view_count("1500"), "1.5K views");
    assert_eq!(format_view_count("999999"), "1000.0K views");
}

#[test]
fn millions_and_billions() {
    assert_eq!(format_view_count("1500000"), "1.5M views");
    assert_eq!(format_view_count("1000000000"), "1.0B views");
    assert_eq!(format_view_count("2500000000"), "2.5B views");
}

#[test]
fn unparseable_defaults_to_zero() {
    assert_eq!(format_view_count("not-a-number"), "0 views");
    assert_eq!(format_view_count(""), "0 views");
}

#[test]
fn formatting_is_idempotent_across_calls() {
    for _ in 0..3 {
        assert_eq!(format_view_count("1500000"), "1.5M views");
    }
}
