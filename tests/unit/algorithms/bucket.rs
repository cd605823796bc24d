use super::*;
use crate::algorithms::testing::drive;

#[test]
fn distributes_then_gathers_in_bucket_order() {
    let mut data = vec![3, 1, 2];
    let t = drive(BucketSort::default(), &mut data);
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
            comparisons: 1,
            array_accesses: 12,
            swaps: 3,
        }
    );
}

#[test]
fn bucket_comparisons_are_counted_without_events() {
    let mut data = vec![4, 3, 2, 1];
    let t = drive(BucketSort::default(), &mut data);
    assert_eq!(data, vec![1, 2, 3, 4]);
    assert!(t.compares().iter().all(|c| c.len() == 1));
    assert_eq!(t.stats.comparisons, 5);
}

#[test]
fn settle_counts_shifts_and_stops() {
    let mut stats = SortStats::default();
    let mut bucket = vec![3, 2, 1];
    settle(&mut bucket, &mut stats);
    assert_eq!(bucket, vec![1, 2, 3]);
    assert_eq!(stats.comparisons, 5);
    assert_eq!(stats.array_accesses, 0);
}

#[test]
fn all_equal_values_share_one_bucket() {
    let mut data = vec![5; 9];
    let t = drive(BucketSort::default(), &mut data);
    assert_eq!(data, vec![5; 9]);
    assert_eq!(t.writes().len(), 9);
}

#[test]
fn tiny_inputs_are_silent() {
    let mut one = vec![1];
    assert!(drive(BucketSort::default(), &mut one).stats.is_zero());
    let mut none: Vec<u32> = Vec::new();
    assert!(drive(BucketSort::default(), &mut none).stats.is_zero());
}
