use super::*;

#[test]
fn union_covers_both_boxes() {
    let first   = BoundingBox::new(2, 3, 4, 4);
    let second  = BoundingBox::new(-1, 5, 2, 6);

    assert!(first.union(&second) == BoundingBox::new(-1, 3, 7, 8));
}

#[test]
fn union_ignores_empty_box() {
    let first   = BoundingBox::new(2, 3, 4, 4);

    assert!(first.union(&BoundingBox::new(100, 100, 0, 5)) == first);
    assert!(BoundingBox::new(-50, 0, 3, 0).union(&first) == first);
}

#[test]
fn union_wider_than_u32_saturates() {
    let left    = BoundingBox::new(i32::MIN, 0, 1, 1);
    let right   = BoundingBox::new(i32::MAX, 0, u32::MAX, 1);
    let union   = left.union(&right);

    assert!(union.x == i32::MIN);
    assert!(union.width == u32::MAX);
    assert!(union.height == 1);
}
