use super::*;

fn seeded() -> RunOptions {
    RunOptions {
        seed: Some(11),
        ..RunOptions::default()
    }
}

#[test]
fn every_algorithm_sorts_a_small_shuffle() {
    for algorithm in Algorithm::ALL {
        let mut data = vec![5, 3, 9, 1, 1, 8, 0, 4];
        let summary = SortRun::with_options(algorithm, &mut data, seeded()).drain();
        if summary.outcome == Outcome::Sorted {
            assert_eq!(summary.array, vec![0, 1, 1, 3, 4, 5, 8, 9], "{algorithm}");
            assert_eq!(data, summary.array, "{algorithm}");
        }
    }
}

#[test]
fn done_is_sticky() {
    let mut data = vec![2, 1];
    let mut run = SortRun::new(Algorithm::Bubble, &mut data);
    let first = loop {
        if let Advance::Done(summary) = run.advance() {
            break summary;
        }
    };
    let steps = run.steps();
    assert_eq!(run.advance(), Advance::Done(first.clone()));
    assert_eq!(run.steps(), steps);
    assert_eq!(run.summary(), Some(&first));
    assert!(run.next().is_none());
}

#[test]
fn steps_own_their_snapshot() {
    let mut data = vec![3, 2, 1];
    let run = SortRun::new(Algorithm::Selection, &mut data);
    let steps: Vec<Step> = run.collect();
    assert_eq!(steps[0].array, vec![3, 2, 1]);
    assert_eq!(steps.last().map(|s| s.array.clone()), Some(vec![1, 2, 3]));
}

#[test]
fn step_count_matches_summary() {
    let mut data = vec![4, 2, 7, 1];
    let mut run = SortRun::new(Algorithm::Heap, &mut data);
    let mut seen = 0;
    let summary = loop {
        match run.advance() {
            Advance::Step(_) => seen += 1,
            Advance::Done(summary) => break summary,
        }
    };
    assert_eq!(summary.steps, seen);
    assert_eq!(summary.stats, run.stats());
}

#[test]
fn stats_never_decrease_between_steps() {
    let mut data: Vec<u32> = (0..24).rev().collect();
    let run = SortRun::new(Algorithm::Bitonic, &mut data);
    let mut prev = SortStats::default();
    for step in run {
        assert!(step.stats.dominates(&prev));
        prev = step.stats;
    }
}

#[test]
fn bitonic_steps_expose_padding_through_len() {
    let mut data = vec![5, 3, 9, 1, 7];
    let steps: Vec<Step> = SortRun::new(Algorithm::Bitonic, &mut data).collect();
    assert!(steps.iter().all(|s| s.array.len() == 8 && s.len == 5));
    assert!(steps.iter().all(Step::is_padded));
    assert_eq!(data, vec![1, 3, 5, 7, 9]);
}

#[test]
fn dropping_a_run_keeps_partial_progress() {
    let mut data = vec![2, 1, 3];
    {
        let mut run = SortRun::new(Algorithm::Bubble, &mut data);
        run.advance();
        run.advance();
    }
    // Compare (0, 1) then swap (0, 1).
    assert_eq!(data, vec![1, 2, 3]);
}

#[test]
fn bogo_gives_up_at_its_limit() {
    let mut data: Vec<u32> = (0..10).rev().collect();
    let opts = RunOptions {
        bogo_limit: 2,
        seed: Some(3),
    };
    let summary = SortRun::with_options(Algorithm::Bogo, &mut data, opts).drain();
    assert_eq!(summary.outcome, Outcome::GaveUp { shuffles: 2 });
    // 2 shuffles x 9 exchanges, each announced then performed.
    assert_eq!(summary.steps, 36);
}

#[test]
fn empty_input_finishes_immediately() {
    for algorithm in Algorithm::ALL {
        let mut data: Vec<u32> = Vec::new();
        let mut run = SortRun::new(algorithm, &mut data);
        match run.advance() {
            Advance::Done(summary) => {
                assert_eq!(summary.steps, 0, "{algorithm}");
                assert!(summary.stats.is_zero(), "{algorithm}");
            }
            Advance::Step(step) => panic!("{algorithm} emitted {step:?} on empty input"),
        }
    }
}
