use super::*;

#[test]
fn full_duration_pads_minutes_and_seconds() {
    assert_eq!(format_duration("PT1H2M3S"), "1:02:03");
}

#[test]
fn seconds_only_renders_zero_minutes() {
    assert_eq!(format_duration("PT45S"), "0:45");
}

#[test]
fn minutes_only_renders_zero_seconds() {
    assert_eq!(format_duration("PT2M"), "2:00");
}

#[test]
fn malformed_input_fails_soft() {
    assert_eq!(format_duration("garbage"), "0:00");
    assert_eq!(format_duration(""), "0:00");
    assert_eq!(format_duration("PT5X"), "0:00");
    assert_eq!(format_duration("PT3S2M"), "0:00");
    assert_eq!(format_duration("PT12"), "0:00");
}

#[test]
fn empty_component_list_is_zero() {
    assert_eq!(format_duration("PT"), "0:00");
}

#[test]
fn long_durations_carry_hours() {
    assert_eq!(format_duration("PT10H0M5S"), "10:00:05");
    assert_eq!(format_duration("PT1H"), "1:00:00");
}

#[test]
fn seconds_do_not_normalize_into_display_minutes_wrongly() {
    // 90 seconds lands as 1:30, matching total-seconds conversion.
    assert_eq!(format_duration("PT90S"), "1:30");
}

#[test]
fn formatting_is_idempotent_across_calls() {
    for _ in 0..3 {
        assert_eq!(format_duration("PT1H2M3S"), "1:02:03");
    }
}
