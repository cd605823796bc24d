use super::*;
use crate::algorithms::testing::{drive, ix};
use crate::foundation::stats::SortStats;

#[test]
fn bubble_alternates_compare_and_swap() {
    let mut data = vec![3, 1, 2];
    let t = drive(BubbleSort::default(), &mut data);
    assert_eq!(data, vec![1, 2, 3]);
    assert_eq!(
        t.events,
        vec![
            Event::compare(0, 1),
            Event::swap(0, 1),
            Event::compare(1, 2),
            Event::swap(1, 2),
            Event::compare(0, 1),
        ]
    );
    assert_eq!(
        t.stats,
        SortStats {
            comparisons: 3,
            array_accesses: 14,
            swaps: 2,
        }
    );
}

#[test]
fn cocktail_shrinks_from_both_ends() {
    let mut data = vec![2, 1, 3];
    let t = drive(CocktailShakerSort::new(3), &mut data);
    assert_eq!(data, vec![1, 2, 3]);
    assert_eq!(
        t.events,
        vec![
            Event::compare(0, 1),
            Event::swap(0, 1),
            Event::compare(1, 2),
            Event::compare(0, 1),
        ]
    );
}

#[test]
fn cocktail_reversed_input() {
    let mut data: Vec<u32> = (0..12).rev().collect();
    drive(CocktailShakerSort::new(12), &mut data);
    assert_eq!(data, (0..12).collect::<Vec<_>>());
}

#[test]
fn gnome_only_suspends_on_inversions() {
    let mut data = vec![2, 1];
    let t = drive(GnomeSort::default(), &mut data);
    assert_eq!(data, vec![1, 2]);
    assert_eq!(t.events, vec![Event::compare(1, 0), Event::swap(1, 0)]);
    // The silent in-order check after stepping back is still counted.
    assert_eq!(t.stats.comparisons, 2);
}

#[test]
fn gnome_sorted_input_emits_nothing_but_counts() {
    let mut data = vec![1, 2, 3, 4];
    let t = drive(GnomeSort::default(), &mut data);
    assert!(t.events.is_empty());
    assert_eq!(t.stats.comparisons, 3);
}

#[test]
fn comb_starts_with_wide_gap() {
    let mut data = vec![4, 3, 2, 1];
    let t = drive(CombSort::new(4), &mut data);
    assert_eq!(data, vec![1, 2, 3, 4]);
    assert_eq!(t.events[0], Event::compare(0, 3));
    assert_eq!(t.events[1], Event::swap(0, 3));
    assert_eq!(t.events[2], Event::compare(0, 2));
    // Last pass (gap 1) makes no swap.
    let tail: Vec<_> = t.events[t.events.len() - 3..].to_vec();
    assert_eq!(
        tail,
        vec![
            Event::compare(0, 1),
            Event::compare(1, 2),
            Event::compare(2, 3)
        ]
    );
}

#[test]
fn comb_handles_tiny_inputs() {
    let mut empty: Vec<u32> = Vec::new();
    assert!(drive(CombSort::new(0), &mut empty).events.is_empty());

    let mut one = vec![7];
    assert!(drive(CombSort::new(1), &mut one).events.is_empty());
}

#[test]
fn odd_even_runs_until_a_clean_round() {
    let mut data = vec![3, 2, 1];
    let t = drive(OddEvenSort::default(), &mut data);
    assert_eq!(data, vec![1, 2, 3]);
    assert_eq!(
        t.writes(),
        vec![ix(&[1, 2]), ix(&[0, 1]), ix(&[1, 2])]
    );
    // Final clean round: one odd and one even comparison.
    let c = t.compares();
    assert_eq!(&c[c.len() - 2..], &[ix(&[1, 2]), ix(&[0, 1])]);
}

#[test]
fn descending_compare_exchange_swaps_ties() {
    let mut data = vec![5, 5];
    let mut ws = Workspace::new(&mut data);
    let x = CompareExchange {
        lo: 0,
        hi: 1,
        ascending: false,
    };
    assert_eq!(x.resolve(&mut ws), Some(Event::swap(0, 1)));
    let x = CompareExchange::ascending(0, 1);
    assert_eq!(x.resolve(&mut ws), None);
}
