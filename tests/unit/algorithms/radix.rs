use super::*;
use crate::algorithms::testing::{drive, ix};
use crate::foundation::stats::SortStats;

#[test]
fn lsd_runs_one_pass_per_digit() {
    let mut data = vec![21, 13, 11, 2];
    let t = drive(LsdRadixSort::default(), &mut data);
    assert_eq!(data, vec![2, 11, 13, 21]);
    assert_eq!(t.events.len(), 16);
    assert_eq!(
        t.stats,
        SortStats {
            comparisons: 0,
            array_accesses: 28,
            swaps: 8,
        }
    );
}

#[test]
fn lsd_on_all_zero_input_only_scans() {
    let mut data = vec![0, 0];
    let t = drive(LsdRadixSort::default(), &mut data);
    assert!(t.events.is_empty());
    assert_eq!(t.stats.array_accesses, 2);
}

#[test]
fn msd_recurses_into_shared_buckets() {
    let mut data = vec![21, 13, 11, 2];
    let t = drive(MsdRadixSort::default(), &mut data);
    assert_eq!(data, vec![2, 11, 13, 21]);
    assert_eq!(
        t.writes(),
        vec![
            ix(&[0]),
            ix(&[1]),
            ix(&[2]),
            ix(&[3]),
            ix(&[1]),
            ix(&[2])
        ]
    );
    // Second pass only reads the two-element bucket.
    assert_eq!(&t.compares()[4..], &[ix(&[1]), ix(&[2])]);
}

#[test]
fn msd_zeros_take_a_single_pass() {
    let mut data = vec![0, 0, 0];
    let t = drive(MsdRadixSort::default(), &mut data);
    assert_eq!(t.events.len(), 6);
}

#[test]
fn msd_empty_input_counts_nothing() {
    let mut data: Vec<u32> = Vec::new();
    let t = drive(MsdRadixSort::default(), &mut data);
    assert!(t.stats.is_zero());
}

#[test]
fn decimal_digit_counts() {
    assert_eq!(decimal_digits(0), 1);
    assert_eq!(decimal_digits(9), 1);
    assert_eq!(decimal_digits(10), 2);
    assert_eq!(decimal_digits(u32::MAX), 10);
}
