use seat::{MAX_SEAT_SPAN, SeatError, SeatRange};

#[test]
fn test_valid_range() {
    let range = SeatRange::new(3, 7).unwrap();
    assert_eq!(range.start(), 3);
    assert_eq!(range.end(), 7);
    assert_eq!(range.len(), 5);
    assert_eq!(range.iter().collect::<Vec<_>>(), vec![3, 4, 5, 6, 7]);
}

#[test]
fn test_single_seat() {
    assert_eq!(SeatRange::new(9, 9).unwrap().len(), 1);
}

#[test]
fn test_start_must_be_positive() {
    assert!(matches!(SeatRange::new(0, 4), Err(SeatError::StartBelowOne(0))));
}

#[test]
fn test_reversed_range() {
    let err = SeatRange::new(8, 2).unwrap_err();
    assert!(matches!(err, SeatError::Reversed { start: 8, end: 2 }));
    assert!(err.to_string().contains("start 8 is after end 2"));
}

#[test]
fn test_span_limit() {
    assert_eq!(SeatRange::new(1, 1 + MAX_SEAT_SPAN).unwrap().len(), 51);
    assert!(matches!(
        SeatRange::new(1, 2 + MAX_SEAT_SPAN),
        Err(SeatError::TooMany {
            requested: 52,
            max: 51
        })
    ));
}
