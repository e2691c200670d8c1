use proptest::prelude::*;
use similar::{capture_diff_slices, Algorithm, DiffTag};
use snakediff_core::{diff, diff_by, DiffConfig, DiffEngine, EditKind, EditScript, Position};

/// Reference LCS length by dynamic programming
fn lcs_len<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let mut table = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for i in (0..a.len()).rev() {
        for j in (0..b.len()).rev() {
            table[i][j] = if a[i] == b[j] {
                table[i + 1][j + 1] + 1
            } else {
                table[i + 1][j].max(table[i][j + 1])
            };
        }
    }
    table[0][0]
}

fn similar_distance(a: &[u8], b: &[u8]) -> usize {
    capture_diff_slices(Algorithm::Myers, a, b)
        .iter()
        .map(|op| {
            let (tag, old, new) = op.as_tag_tuple();
            match tag {
                DiffTag::Equal => 0,
                DiffTag::Delete => old.len(),
                DiffTag::Insert => new.len(),
                DiffTag::Replace => old.len() + new.len(),
            }
        })
        .sum()
}

/// Runs tile the edit graph from (0, 0) to (N, M) and matches really match
fn assert_well_formed<T: PartialEq + std::fmt::Debug>(script: &EditScript, a: &[T], b: &[T]) {
    let mut at = Position::new(0, 0);
    let mut previous = None;
    for run in script.runs() {
        assert_eq!(run.at, at, "runs must be contiguous");
        assert!(run.len > 0, "empty runs are never emitted");
        if let Some((kind, end)) = previous {
            assert!(
                kind != run.kind || end != run.at,
                "adjacent runs of one kind must be coalesced"
            );
        }
        if run.kind == EditKind::Match {
            assert_eq!(&a[run.old_range()], &b[run.new_range()]);
        }
        previous = Some((run.kind, run.end()));
        at = run.end();
    }
    assert_eq!(at, Position::new(a.len(), b.len()));
}

fn sequence() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..4, 0..32)
}

proptest! {
    #[test]
    fn identity(a in sequence()) {
        let script = diff(&a, &a).unwrap();
        prop_assert_eq!(script.insertions(), 0);
        prop_assert_eq!(script.deletions(), 0);
        prop_assert_eq!(script.matches(), a.len());
    }

    #[test]
    fn round_trip(a in sequence(), b in sequence()) {
        let script = diff(&a, &b).unwrap();
        assert_well_formed(&script, &a, &b);
        prop_assert_eq!(script.apply(&a, &b), b);
    }

    #[test]
    fn minimal_against_reference_lcs(a in sequence(), b in sequence()) {
        let script = diff(&a, &b).unwrap();
        let lcs = lcs_len(&a, &b);
        prop_assert_eq!(script.matches(), lcs);
        prop_assert_eq!(script.deletions(), a.len() - lcs);
        prop_assert_eq!(script.insertions(), b.len() - lcs);
        prop_assert_eq!(script.distance(), a.len() + b.len() - 2 * lcs);
    }

    #[test]
    fn agrees_with_similar(a in prop::collection::vec(0u8..6, 0..200), b in prop::collection::vec(0u8..6, 0..200)) {
        let script = diff(&a, &b).unwrap();
        prop_assert_eq!(script.distance(), similar_distance(&a, &b));
    }

    #[test]
    fn cost_symmetry(a in sequence(), b in sequence()) {
        let forward = diff(&a, &b).unwrap();
        let backward = diff(&b, &a).unwrap();
        prop_assert_eq!(forward.distance(), backward.distance());
        prop_assert_eq!(forward.insertions(), backward.deletions());
        prop_assert_eq!(forward.deletions(), backward.insertions());
        prop_assert_eq!(forward.inverted().apply(&b, &a), a);
    }

    #[test]
    fn deterministic(a in sequence(), b in sequence()) {
        let first = diff(&a, &b).unwrap();
        let second = diff(&a, &b).unwrap();
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn bounded_search_stays_valid(a in sequence(), b in sequence(), rounds in 1usize..4) {
        let engine = DiffEngine::new().with_config(DiffConfig::bounded(rounds));
        let script = engine.diff(&a, &b).unwrap();
        assert_well_formed(&script, &a, &b);
        let minimal = a.len() + b.len() - 2 * lcs_len(&a, &b);
        prop_assert!(script.distance() >= minimal);
        prop_assert_eq!(script.apply(&a, &b), b);
    }
}

#[test]
fn boundaries() {
    let empty: &[u8] = b"";
    assert!(diff(empty, empty).unwrap().is_empty());

    let script = diff(b"", b"abc").unwrap();
    assert_eq!(script.insertions(), 3);
    assert_eq!(script.deletions(), 0);

    let script = diff(b"abc", b"").unwrap();
    assert_eq!(script.deletions(), 3);
    assert_eq!(script.insertions(), 0);
}

#[test]
fn classic_case() {
    let a = b"ABCABBA";
    let b = b"CBABAC";
    let script = diff(a, b).unwrap();
    assert_eq!(script.distance(), 5);
    assert_eq!(script.matches(), 4);

    let common: Vec<u8> = script
        .runs()
        .iter()
        .filter(|run| run.kind == EditKind::Match)
        .flat_map(|run| a[run.old_range()].iter().copied())
        .collect();
    assert_eq!(common.len(), 4);
    assert_eq!(lcs_len(&common, a), 4);
    assert_eq!(lcs_len(&common, b), 4);
}

#[test]
fn custom_equality() {
    let old = ["Alpha", "beta", "GAMMA"];
    let new = ["alpha", "delta", "gamma"];
    let script = diff_by(&old, &new, |a: &&str, b: &&str| a.eq_ignore_ascii_case(b)).unwrap();
    assert_eq!(script.matches(), 2);
    assert_eq!(script.distance(), 2);
}

#[test]
fn long_inputs_with_sparse_edits() {
    let old: Vec<u32> = (0..5_000).collect();
    let mut new = old.clone();
    new.remove(4_000);
    new.insert(2_500, 99_999);
    new[100] = 77_777;
    let script = diff(&old, &new).unwrap();
    assert_eq!(script.distance(), 4);
    assert_eq!(script.apply(&old, &new), new);
}

#[test]
fn fully_different_inputs() {
    let old: Vec<u32> = (0..300).collect();
    let new: Vec<u32> = (1_000..1_250).collect();
    let script = diff(&old, &new).unwrap();
    assert_eq!(script.matches(), 0);
    assert_eq!(script.distance(), 550);
}
