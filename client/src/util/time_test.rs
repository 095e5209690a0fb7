use super::*;

#[test]
fn format_utc_clock_midnight() {
    assert_eq!(format_utc_clock(0.0), "00:00:00");
}

#[test]
fn format_utc_clock_wraps_days() {
    // 1970-01-02T13:05:09.500Z
    let ms = ((86_400 + 13 * 3600 + 5 * 60 + 9) * 1000 + 500) as f64;
    assert_eq!(format_utc_clock(ms), "13:05:09");
}

#[test]
fn format_utc_clock_clamps_negative() {
    assert_eq!(format_utc_clock(-5_000.0), "00:00:00");
}

#[test]
fn now_ms_is_after_2020() {
    assert!(now_ms() > 1_577_836_800_000.0);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn format_time_of_day_uses_utc_clock_natively() {
    assert_eq!(format_time_of_day(3_600_000.0), "01:00:00");
}
