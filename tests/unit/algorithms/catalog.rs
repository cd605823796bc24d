use super::*;
use std::collections::BTreeSet;

#[test]
fn ids_are_unique_and_round_trip() {
    let ids: BTreeSet<_> = Algorithm::ALL.iter().map(|a| a.id()).collect();
    assert_eq!(ids.len(), 20);

    for a in Algorithm::ALL {
        assert_eq!(a.id().parse::<Algorithm>().unwrap(), a);
        assert_eq!(a.to_string(), a.id());
    }
}

#[test]
fn serde_uses_the_same_ids() {
    for a in Algorithm::ALL {
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, format!("\"{}\"", a.id()));
    }
}

#[test]
fn parsing_is_trimmed_and_case_insensitive() {
    assert_eq!(" Quick ".parse::<Algorithm>().unwrap(), Algorithm::Quick);
    assert_eq!("LSD-Radix".parse::<Algorithm>().unwrap(), Algorithm::LsdRadix);
}

#[test]
fn unknown_id_is_a_validation_error() {
    let err = "timsort".parse::<Algorithm>().unwrap_err();
    assert!(matches!(err, StripsortError::Validation(_)));
    assert!(err.to_string().contains("timsort"));
}

#[test]
fn only_bogo_is_nondeterministic() {
    let nondet: Vec<_> = Algorithm::ALL
        .into_iter()
        .filter(|a| !a.is_deterministic())
        .collect();
    assert_eq!(nondet, vec![Algorithm::Bogo]);
}

#[test]
fn strip_budget_scales_by_complexity() {
    assert_eq!(Algorithm::Merge.strip_budget(128), 128);
    assert_eq!(Algorithm::Shell.strip_budget(128), 64);
    assert_eq!(Algorithm::Bubble.strip_budget(128), 32);
    assert_eq!(Algorithm::Bubble.strip_budget(4), 2);
    assert_eq!(Algorithm::Bubble.strip_budget(1), 1);
    assert_eq!(Algorithm::Bubble.strip_budget(0), 0);
}
