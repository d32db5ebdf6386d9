use base::{Epoch, Vec2};

#[test]
fn test_epoch_advance_invalidates_old_stamp() {
    let epoch = Epoch::new();
    let stamp = epoch.current();
    assert!(epoch.is_current(stamp));

    let next = epoch.advance();
    assert_eq!(next, stamp + 1);
    assert!(!epoch.is_current(stamp));
    assert!(epoch.is_current(next));
}

#[test]
fn test_epoch_clones_share_counter() {
    let epoch = Epoch::new();
    let other = epoch.clone();
    let stamp = other.current();
    epoch.advance();
    assert!(!other.is_current(stamp));
}

#[test]
fn test_vec2_area_and_display() {
    let size = Vec2::new(1280usize, 720);
    assert_eq!(size.area(), 921_600);
    assert!(!size.is_empty());
    assert!(Vec2::<usize>::zero().is_empty());
    assert_eq!(size.to_string(), "1280x720");
}
