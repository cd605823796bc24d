use super::*;
use crate::algorithms::testing::drive;
use crate::foundation::stats::SortStats;

#[test]
fn tallies_then_writes_back() {
    let mut data = vec![3, 1, 2];
    let t = drive(CountingSort::default(), &mut data);
    assert_eq!(data, vec![1, 2, 3]);
    assert_eq!(
        t.events,
        vec![
            Event::probe(0),
            Event::probe(1),
            Event::probe(2),
            Event::write(0),
            Event::write(1),
            Event::write(2),
        ]
    );
    assert_eq!(
        t.stats,
        SortStats {
            comparisons: 0,
            array_accesses: 15,
            swaps: 3,
        }
    );
}

#[test]
fn offset_range_covers_min_to_max() {
    let mut data = vec![5_000, 1_000, 3_417, 1_000, 4_999, 2_500];
    drive(CountingSort::default(), &mut data);
    assert_eq!(data, vec![1_000, 1_000, 2_500, 3_417, 4_999, 5_000]);
    assert_eq!(Key::Offset { min: 1_000, max: 5_000 }.table_len(), 4_001);
    assert_eq!(Key::Digit { exp: 10 }.table_len(), 10);
}

#[test]
fn empty_input_touches_nothing() {
    let mut data: Vec<u32> = Vec::new();
    let t = drive(CountingSort::default(), &mut data);
    assert!(t.events.is_empty());
    assert!(t.stats.is_zero());
}

#[test]
fn digit_pass_is_stable() {
    // Ones digit: 21 and 11 share digit 1 and must keep their order.
    let mut data = vec![21, 13, 11, 2];
    drive(CountingPass::new(Key::Digit { exp: 1 }), &mut data);
    assert_eq!(data, vec![21, 11, 2, 13]);
}

#[test]
fn digit_key_reads_the_requested_place() {
    assert_eq!(Key::Digit { exp: 1 }.of(345), 5);
    assert_eq!(Key::Digit { exp: 100 }.of(345), 3);
    assert_eq!(Key::Digit { exp: 1000 }.of(345), 0);
    assert_eq!(Key::Offset { min: 10, max: 20 }.of(15), 5);
}
