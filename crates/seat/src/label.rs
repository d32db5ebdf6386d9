/// Turn a scanned or typed value into a seat number.
///
/// Surrounding whitespace is dropped and letters are upper-cased, so
/// `" s-42\n"` and `"S-42"` name the same seat. Blank input is not a seat.
pub fn normalize_seat_label(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_uppercase())
    }
}
