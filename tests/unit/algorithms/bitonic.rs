use super::*;
use crate::algorithms::testing::drive;
use crate::foundation::stats::SortStats;

#[test]
fn padded_len_rounds_up_to_power_of_two() {
    assert_eq!(padded_len(0), 0);
    assert_eq!(padded_len(1), 1);
    assert_eq!(padded_len(2), 2);
    assert_eq!(padded_len(3), 4);
    assert_eq!(padded_len(5), 8);
    assert_eq!(padded_len(8), 8);
}

#[test]
fn two_elements_need_one_exchange() {
    let mut data = vec![2, 1];
    let t = drive(BitonicSort::default(), &mut data);
    assert_eq!(data, vec![1, 2]);
    assert_eq!(t.events, vec![Event::compare(0, 1), Event::swap(0, 1)]);
    assert_eq!(
        t.stats,
        SortStats {
            comparisons: 1,
            array_accesses: 8,
            swaps: 1,
        }
    );
}

#[test]
fn padding_is_visible_during_the_run_and_gone_after() {
    let mut data = vec![3, 1, 2];
    {
        let mut ws = Workspace::new(&mut data);
        let mut sort = BitonicSort::default();
        assert!(sort.resume(&mut ws).is_some());
        assert_eq!(ws.len(), 4);
        assert!(ws.is_padded());
        // max + 1 + slot index
        assert!(ws.to_vec().contains(&7));
        while sort.resume(&mut ws).is_some() {}
        assert_eq!(ws.len(), 3);
        assert!(!ws.is_padded());
    }
    assert_eq!(data, vec![1, 2, 3]);
}

#[test]
fn saturated_padding_still_sorts() {
    let mut data = vec![u32::MAX, 0, 1];
    drive(BitonicSort::default(), &mut data);
    assert_eq!(data, vec![0, 1, u32::MAX]);
}

#[test]
fn non_power_of_two_lengths_sort() {
    for n in [3usize, 5, 6, 7, 9, 13] {
        let mut data: Vec<u32> = (0..n as u32).rev().collect();
        drive(BitonicSort::default(), &mut data);
        assert_eq!(data, (0..n as u32).collect::<Vec<_>>(), "n = {n}");
    }
}

#[test]
fn single_element_counts_its_scan() {
    let mut data = vec![4];
    let t = drive(BitonicSort::default(), &mut data);
    assert!(t.events.is_empty());
    assert_eq!(t.stats.array_accesses, 1);
}
