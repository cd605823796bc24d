use super::*;

#[test]
fn compare_and_exchange_bump_expected_counters() {
    let mut s = SortStats::default();
    assert!(s.is_zero());

    s.compare();
    s.exchange();
    assert_eq!(
        s,
        SortStats {
            comparisons: 1,
            array_accesses: 6,
            swaps: 1,
        }
    );

    s.moved(2);
    s.access(3);
    assert_eq!(s.array_accesses, 11);
    assert_eq!(s.swaps, 2);
    assert!(!s.is_zero());
}

#[test]
fn dominates_is_componentwise() {
    let a = SortStats {
        comparisons: 3,
        array_accesses: 10,
        swaps: 1,
    };
    let mut b = a;
    assert!(b.dominates(&a));
    b.swaps += 1;
    assert!(b.dominates(&a));
    assert!(!a.dominates(&b));
}
