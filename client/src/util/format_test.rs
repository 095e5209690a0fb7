use super::*;

#[test]
fn format_megabytes_uses_two_decimals() {
    assert_eq!(format_megabytes(1_000_000), "0.95");
    assert_eq!(format_megabytes(1_048_576), "1.00");
    assert_eq!(format_megabytes(0), "0.00");
}

#[test]
fn format_megabytes_large_file() {
    assert_eq!(format_megabytes(16 * 1024 * 1024), "16.00");
}
