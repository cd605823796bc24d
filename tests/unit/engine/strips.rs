use super::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn shuffled_is_a_permutation_of_positions() {
    let mut rng = StdRng::seed_from_u64(1);
    let strips = shuffled(64, &mut rng).unwrap();
    let identity: Vec<u32> = (0..64).collect();
    assert!(is_permutation_of(&strips, &identity));
    assert_ne!(strips, identity);
}

#[test]
fn shuffled_is_reproducible_from_a_seed() {
    let a = shuffled(32, &mut StdRng::seed_from_u64(99)).unwrap();
    let b = shuffled(32, &mut StdRng::seed_from_u64(99)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn tiny_counts() {
    let mut rng = StdRng::seed_from_u64(0);
    assert!(shuffled(0, &mut rng).unwrap().is_empty());
    assert_eq!(shuffled(1, &mut rng).unwrap(), vec![0]);
}

#[cfg(target_pointer_width = "64")]
#[test]
fn count_beyond_u32_positions_is_rejected() {
    let mut rng = StdRng::seed_from_u64(0);
    let err = shuffled(u32::MAX as usize + 1, &mut rng).unwrap_err();
    assert!(matches!(err, StripsortError::Validation(_)));
}

#[test]
fn sortedness_allows_ties() {
    assert!(is_sorted(&[]));
    assert!(is_sorted(&[1, 1, 2]));
    assert!(!is_sorted(&[2, 1]));
}

#[test]
fn permutation_checks_multiplicity() {
    assert!(is_permutation_of(&[2, 1, 1], &[1, 2, 1]));
    assert!(!is_permutation_of(&[2, 2, 1], &[1, 2, 1]));
    assert!(!is_permutation_of(&[1], &[1, 1]));
}
