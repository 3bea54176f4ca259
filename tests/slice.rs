//! Slice resolution tests.

use std::num::NonZeroIsize;

use deckseq::Slice;

fn step(n: isize) -> NonZeroIsize {
    NonZeroIsize::new(n).unwrap()
}

fn resolve(slice: impl Into<Slice>, len: usize) -> Vec<usize> {
    slice.into().indices(len).collect()
}

#[test]
fn full_slice_visits_everything() {
    assert_eq!(resolve(Slice::full(), 5), [0, 1, 2, 3, 4]);
    assert_eq!(resolve(Slice::default(), 3), [0, 1, 2]);
    assert!(resolve(Slice::full(), 0).is_empty());
}

#[test]
fn bounds_are_clamped() {
    assert_eq!(resolve(Slice::new(-100, 100), 5), [0, 1, 2, 3, 4]);
    assert_eq!(resolve(Slice::new(3, 100), 5), [3, 4]);
    assert!(resolve(Slice::new(7, 9), 5).is_empty());
    assert!(resolve(Slice::new(4, 2), 5).is_empty());
}

#[test]
fn negative_bounds_count_from_end() {
    assert_eq!(resolve(Slice::full().with_start(-2), 5), [3, 4]);
    assert_eq!(resolve(Slice::full().with_stop(-3), 5), [0, 1]);
    assert_eq!(resolve(Slice::new(-4, -1), 5), [1, 2, 3]);
}

#[test]
fn positive_steps_skip() {
    assert_eq!(resolve(Slice::new(0, 5).with_step(step(3)), 5), [0, 3]);
    assert_eq!(resolve(Slice::full().with_start(1).with_step(step(2)), 5), [1, 3]);
    assert_eq!(resolve(Slice::full().with_step(step(isize::MAX)), 5), [0]);
}

#[test]
fn negative_steps_walk_backwards() {
    assert_eq!(resolve(Slice::full().with_step(step(-1)), 5), [4, 3, 2, 1, 0]);
    assert_eq!(
        resolve(Slice::full().with_start(10).with_step(step(-1)), 5),
        [4, 3, 2, 1, 0]
    );
    assert_eq!(
        resolve(Slice::full().with_stop(-100).with_step(step(-2)), 5),
        [4, 2, 0]
    );
    assert_eq!(
        resolve(Slice::new(-1, -6).with_step(step(-1)), 5),
        [4, 3, 2, 1, 0]
    );
    assert_eq!(resolve(Slice::new(3, 1).with_step(step(-1)), 5), [3, 2]);
    assert!(resolve(Slice::new(1, 3).with_step(step(-1)), 5).is_empty());
    assert_eq!(resolve(Slice::full().with_step(step(isize::MIN)), 5), [4]);
    assert!(resolve(Slice::full().with_step(step(-1)), 0).is_empty());
}

#[test]
fn ranges_convert_to_slices() {
    assert_eq!(Slice::from(1_isize..3), Slice::new(1, 3));
    assert_eq!(resolve(2_isize.., 5), [2, 3, 4]);
    assert_eq!(resolve(..2_isize, 5), [0, 1]);
    assert_eq!(resolve(1_isize..=3, 5), [1, 2, 3]);
    assert_eq!(resolve(0..=isize::MAX, 5), [0, 1, 2, 3, 4]);
    assert_eq!(resolve(.., 2), [0, 1]);
}

#[test]
fn indices_report_exact_length() {
    let mut indices = Slice::new(1, 10).with_step(step(4)).indices(52);
    assert_eq!(indices.len(), 3);
    assert_eq!(indices.next(), Some(1));
    assert_eq!(indices.len(), 2);
    assert_eq!(indices.by_ref().count(), 2);
    assert_eq!(indices.next(), None);
    assert_eq!(indices.next(), None);

    assert_eq!(Slice::full().with_step(step(-3)).indices(52).len(), 18);
}
