use rankset::{AddMode, LexBound, OrderedSet, ScoreBound};

fn set_of(entries: &[(&str, f64)]) -> OrderedSet {
    let mut set = OrderedSet::new();
    set.add_many(entries, AddMode::Plain, false).unwrap();
    set
}

fn members(entries: Vec<(String, f64)>) -> Vec<String> {
    entries.into_iter().map(|(m, _)| m).collect()
}

#[test]
fn score_range_inclusive_low_exclusive_high() {
    let set = set_of(&[
        ("a", 0.0),
        ("b", 1.0),
        ("c", 2.0),
        ("d", 3.0),
        ("e", 4.0),
        ("f", 5.0),
        ("g", 6.0),
    ]);
    let low = ScoreBound::inclusive(1.0).unwrap();
    let high = ScoreBound::exclusive(5.0).unwrap();
    let out = members(set.range_by_score(&low, &high, false, 0, None));
    assert_eq!(out, ["b", "c", "d", "e"]);
    assert_eq!(set.count_by_score(&low, &high), 4);
}

#[test]
fn score_range_infinite_bounds_match_everything() {
    let set = set_of(&[("a", f64::NEG_INFINITY), ("b", 0.0), ("c", f64::INFINITY)]);
    let low = ScoreBound::neg_infinite();
    let high = ScoreBound::pos_infinite();
    assert_eq!(set.count_by_score(&low, &high), 3);
    let out = members(set.range_by_score(&low, &high, false, 0, None));
    assert_eq!(out, ["a", "b", "c"]);
    // Exclusive infinite bounds shave the infinite entries off.
    let low = ScoreBound::parse("(-inf").unwrap();
    let high = ScoreBound::parse("(+inf").unwrap();
    let out = members(set.range_by_score(&low, &high, false, 0, None));
    assert_eq!(out, ["b"]);
}

#[test]
fn score_range_pagination_after_direction() {
    let set = set_of(&[("a", 1.0), ("b", 2.0), ("c", 3.0), ("d", 4.0)]);
    let low = ScoreBound::neg_infinite();
    let high = ScoreBound::pos_infinite();
    let out = members(set.range_by_score(&low, &high, false, 1, Some(2)));
    assert_eq!(out, ["b", "c"]);
    let out = members(set.range_by_score(&low, &high, true, 1, Some(2)));
    assert_eq!(out, ["c", "b"]);
    let out = members(set.range_by_score(&low, &high, false, 3, None));
    assert_eq!(out, ["d"]);
    assert!(set.range_by_score(&low, &high, false, 9, None).is_empty());
}

#[test]
fn lex_range_fixture() {
    let set = set_of(&[
        ("a", 1.0),
        ("b", 1.0),
        ("c", 1.0),
        ("d", 1.0),
        ("e", 1.0),
        ("f", 1.0),
        ("g", 1.0),
    ]);
    let low = LexBound::parse("[c").unwrap();
    let high = LexBound::parse("(f").unwrap();
    assert_eq!(set.range_by_lex(&low, &high, false, 0, None), ["c", "d", "e"]);
    assert_eq!(set.count_by_lex(&low, &high), 3);
    assert_eq!(set.range_by_lex(&low, &high, true, 0, None), ["e", "d", "c"]);
    assert_eq!(
        set.range_by_lex(&LexBound::Min, &LexBound::Max, false, 0, None).len(),
        7
    );
    assert_eq!(set.range_by_lex(&low, &high, false, 1, Some(1)), ["d"]);
}

#[test]
fn rank_range_negative_and_clamped() {
    let set = set_of(&[("a", 1.0), ("b", 2.0), ("c", 3.0), ("d", 4.0)]);
    assert_eq!(members(set.range_by_rank(0, -1, false)), ["a", "b", "c", "d"]);
    assert_eq!(members(set.range_by_rank(-2, -1, false)), ["c", "d"]);
    assert_eq!(members(set.range_by_rank(-100, 100, false)), ["a", "b", "c", "d"]);
    assert!(set.range_by_rank(2, 1, false).is_empty());
    assert!(set.range_by_rank(10, 20, false).is_empty());
}

#[test]
fn reverse_queries_mirror_tied_scores() {
    let set = set_of(&[("a", 7.0), ("b", 7.0), ("c", 7.0), ("d", 7.0)]);
    let forward = members(set.range_by_rank(0, -1, false));
    let mut backward = members(set.range_by_rank(0, -1, true));
    assert_eq!(forward, ["a", "b", "c", "d"]);
    backward.reverse();
    assert_eq!(forward, backward);
    // Reversed window [0, 1] addresses the two largest entries.
    assert_eq!(members(set.range_by_rank(0, 1, true)), ["d", "c"]);
}

#[test]
fn remove_range_by_rank_fixture() {
    let mut set = set_of(&[("a", 0.0), ("d", 1.0), ("b", 2.0), ("c", 2.0)]);
    assert_eq!(set.remove_range_by_rank(0, 1), 2);
    let left = members(set.range_by_rank(0, -1, false));
    assert_eq!(left, ["b", "c"]);
}

#[test]
fn remove_range_by_score_and_lex() {
    let mut set = set_of(&[("a", 1.0), ("b", 2.0), ("c", 3.0), ("d", 4.0)]);
    let low = ScoreBound::inclusive(2.0).unwrap();
    let high = ScoreBound::exclusive(4.0).unwrap();
    assert_eq!(set.remove_range_by_score(&low, &high), 2);
    assert_eq!(members(set.range_by_rank(0, -1, false)), ["a", "d"]);

    let mut set = set_of(&[("a", 1.0), ("b", 1.0), ("c", 1.0), ("d", 1.0)]);
    let low = LexBound::parse("(a").unwrap();
    let high = LexBound::parse("[c").unwrap();
    assert_eq!(set.remove_range_by_lex(&low, &high), 2);
    assert_eq!(members(set.range_by_rank(0, -1, false)), ["a", "d"]);
}

#[test]
fn empty_score_window_is_not_an_error() {
    let set = set_of(&[("a", 1.0), ("b", 2.0)]);
    let low = ScoreBound::inclusive(5.0).unwrap();
    let high = ScoreBound::inclusive(1.0).unwrap();
    assert!(set.range_by_score(&low, &high, false, 0, None).is_empty());
    assert_eq!(set.count_by_score(&low, &high), 0);
    let low = ScoreBound::exclusive(2.0).unwrap();
    let high = ScoreBound::inclusive(2.0).unwrap();
    assert_eq!(set.count_by_score(&low, &high), 0);
}
