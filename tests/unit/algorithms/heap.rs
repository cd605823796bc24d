use super::*;
use crate::algorithms::testing::{drive, ix};
use crate::foundation::stats::SortStats;

#[test]
fn builds_heap_then_extracts() {
    let mut data = vec![1, 2, 3];
    let t = drive(HeapSort::new(3), &mut data);
    assert_eq!(data, vec![1, 2, 3]);
    assert_eq!(
        t.events,
        vec![
            Event::compare(1, 0),
            Event::compare(2, 1),
            Event::swap(0, 2),
            Event::swap(0, 2),
            Event::compare(1, 0),
            Event::swap(0, 1),
            Event::swap(0, 1),
        ]
    );
    assert_eq!(
        t.stats,
        SortStats {
            comparisons: 3,
            array_accesses: 22,
            swaps: 4,
        }
    );
}

#[test]
fn sift_continues_down_the_tree() {
    let mut data = vec![0, 5, 4, 3, 2, 1, 9];
    let t = drive(HeapSort::new(7), &mut data);
    assert_eq!(data, vec![0, 1, 2, 3, 4, 5, 9]);
    // Build: 4 swaps with 9, 5 already dominates, then 0 sinks two levels.
    assert_eq!(&t.writes()[..3], &[ix(&[2, 6]), ix(&[0, 2]), ix(&[2, 6])]);
}

#[test]
fn tiny_inputs_are_silent() {
    for len in 0..2 {
        let mut data: Vec<u32> = (0..len as u32).collect();
        let t = drive(HeapSort::new(len), &mut data);
        assert!(t.events.is_empty());
    }
}
