use seat::normalize_seat_label;

#[test]
fn test_trims_and_upper_cases() {
    assert_eq!(normalize_seat_label(" s-42\n"), Some("S-42".to_string()));
    assert_eq!(normalize_seat_label("12"), Some("12".to_string()));
}

#[test]
fn test_blank_is_not_a_seat() {
    assert_eq!(normalize_seat_label(""), None);
    assert_eq!(normalize_seat_label(" \t\r\n"), None);
}

#[test]
fn test_inner_whitespace_is_kept() {
    assert_eq!(normalize_seat_label("  row 3 "), Some("ROW 3".to_string()));
}
