use crate::bound::{LexBound, ScoreBound};
use ordered_float::OrderedFloat;
use smallvec::SmallVec;
use std::collections::BTreeMap;

type Bucket = SmallVec<[String; 4]>;

/// Canonical total order over the entries of one set: score ascending, then
/// member ascending by byte value. Every range and rank query resolves
/// against this order; reverse queries reverse the whole comparator, so
/// tied-score scans mirror exactly.
#[derive(Default)]
pub struct ScoreIndex {
    by_score: BTreeMap<OrderedFloat<f64>, Bucket>,
    len: usize,
}

/// Forward iterator over a resolved rank window.
pub(crate) struct ScoreIter<'a> {
    outer: std::collections::btree_map::Iter<'a, OrderedFloat<f64>, Bucket>,
    current: Option<(&'a Bucket, OrderedFloat<f64>, usize)>,
    index: usize,
    start: usize,
    stop: usize,
}

impl<'a> ScoreIter<'a> {
    fn new(map: &'a BTreeMap<OrderedFloat<f64>, Bucket>, start: usize, stop: usize) -> Self {
        Self {
            outer: map.iter(),
            current: None,
            index: 0,
            start,
            stop,
        }
    }

    fn empty(map: &'a BTreeMap<OrderedFloat<f64>, Bucket>) -> Self {
        Self {
            outer: map.iter(),
            current: None,
            index: 0,
            start: 1,
            stop: 0,
        }
    }

    #[inline]
    fn total_len(&self) -> usize {
        if self.start > self.stop {
            0
        } else {
            self.stop - self.start + 1
        }
    }
}

impl<'a> Iterator for ScoreIter<'a> {
    type Item = (&'a str, f64);

    fn next(&mut self) -> Option<Self::Item> {
        while self.index <= self.stop {
            if let Some((bucket, score, ref mut pos)) = &mut self.current {
                if *pos < bucket.len() {
                    let global = self.index;
                    let member = &bucket[*pos];
                    *pos += 1;
                    self.index += 1;
                    if global < self.start {
                        continue;
                    }
                    return Some((member.as_str(), score.0));
                }
                self.current = None;
                continue;
            }
            match self.outer.next() {
                Some((score, bucket)) => {
                    self.current = Some((bucket, *score, 0));
                }
                None => break,
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ScoreIter<'_> {
    #[inline]
    fn len(&self) -> usize {
        let total = self.total_len();
        let done = self.index.saturating_sub(self.start);
        total.saturating_sub(done)
    }
}

/// Resolve a start/stop rank pair against `len`: negative ranks count from
/// the end, out-of-range starts clamp, inverted windows resolve to `None`.
fn resolve_window(start: isize, stop: isize, len: usize) -> Option<(usize, usize)> {
    if len == 0 {
        return None;
    }
    let len = len as isize;
    let mut start = if start < 0 { len + start } else { start };
    let mut stop = if stop < 0 { len + stop } else { stop };
    if start < 0 {
        start = 0;
    }
    if stop < 0 {
        return None;
    }
    if stop >= len {
        stop = len - 1;
    }
    if start > stop {
        return None;
    }
    Some((start as usize, stop as usize))
}

fn paginate<'a, I>(iter: I, offset: usize, count: Option<usize>) -> Vec<(String, f64)>
where
    I: Iterator<Item = (&'a str, f64)>,
{
    iter.skip(offset)
        .take(count.unwrap_or(usize::MAX))
        .map(|(m, s)| (m.to_owned(), s))
        .collect()
}

impl ScoreIndex {
    /// Insert an entry that is known not to be present.
    pub fn insert(&mut self, score: f64, member: &str) {
        let bucket = self.by_score.entry(OrderedFloat(score)).or_default();
        match bucket.binary_search_by(|m| m.as_str().cmp(member)) {
            Ok(_) => debug_assert!(false, "entry already present"),
            Err(pos) => {
                bucket.insert(pos, member.to_owned());
                self.len += 1;
            }
        }
    }

    /// Remove the entry binding `member` to `score`. Returns true when it
    /// existed.
    pub fn remove(&mut self, score: f64, member: &str) -> bool {
        let key = OrderedFloat(score);
        if let Some(bucket) = self.by_score.get_mut(&key) {
            if let Ok(pos) = bucket.binary_search_by(|m| m.as_str().cmp(member)) {
                bucket.remove(pos);
                if bucket.is_empty() {
                    self.by_score.remove(&key);
                } else if bucket.spilled() && bucket.len() <= 4 {
                    bucket.shrink_to_fit();
                }
                self.len -= 1;
                return true;
            }
        }
        false
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Ascending rank of `member`, given the score it is bound to.
    pub fn rank(&self, score: f64, member: &str) -> Option<usize> {
        let key = OrderedFloat(score);
        let bucket = self.by_score.get(&key)?;
        let pos = bucket.binary_search_by(|m| m.as_str().cmp(member)).ok()?;
        let before: usize = self.by_score.range(..key).map(|(_, b)| b.len()).sum();
        Some(before + pos)
    }

    /// All entries in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.by_score
            .iter()
            .flat_map(|(score, bucket)| bucket.iter().map(move |m| (m.as_str(), score.0)))
    }

    pub fn first(&self) -> Option<(&str, f64)> {
        let (score, bucket) = self.by_score.iter().next()?;
        Some((bucket.first()?.as_str(), score.0))
    }

    pub fn last(&self) -> Option<(&str, f64)> {
        let (score, bucket) = self.by_score.iter().next_back()?;
        Some((bucket.last()?.as_str(), score.0))
    }

    pub(crate) fn iter_range(&self, start: isize, stop: isize) -> ScoreIter<'_> {
        match resolve_window(start, stop, self.len) {
            Some((start, stop)) => ScoreIter::new(&self.by_score, start, stop),
            None => ScoreIter::empty(&self.by_score),
        }
    }

    /// Entries between two ranks. Descending mode addresses ranks against
    /// the reversed order, so rank 0 is the largest entry.
    pub fn range_by_rank(&self, start: isize, stop: isize, rev: bool) -> Vec<(String, f64)> {
        if !rev {
            return self
                .iter_range(start, stop)
                .map(|(m, s)| (m.to_owned(), s))
                .collect();
        }
        // Mirror the reversed window onto the ascending order, then flip.
        let Some((start, stop)) = resolve_window(start, stop, self.len) else {
            return Vec::new();
        };
        let mirror_start = (self.len - 1 - stop) as isize;
        let mirror_stop = (self.len - 1 - start) as isize;
        let mut out: Vec<_> = self
            .iter_range(mirror_start, mirror_stop)
            .map(|(m, s)| (m.to_owned(), s))
            .collect();
        out.reverse();
        out
    }

    /// Entries whose score falls between the bounds, in canonical order
    /// (reversed when `rev`), with `offset`/`count` applied after the
    /// direction is fixed. `count` of `None` means unlimited.
    pub fn range_by_score(
        &self,
        low: &ScoreBound,
        high: &ScoreBound,
        rev: bool,
        offset: usize,
        count: Option<usize>,
    ) -> Vec<(String, f64)> {
        if ScoreBound::empty_range(low, high) {
            return Vec::new();
        }
        let span = self.by_score.range((low.as_bound(), high.as_bound()));
        if rev {
            paginate(
                span.rev().flat_map(|(score, bucket)| {
                    bucket.iter().rev().map(move |m| (m.as_str(), score.0))
                }),
                offset,
                count,
            )
        } else {
            paginate(
                span.flat_map(|(score, bucket)| {
                    bucket.iter().map(move |m| (m.as_str(), score.0))
                }),
                offset,
                count,
            )
        }
    }

    /// Members between two lexicographic bounds, scanning every entry in
    /// canonical order and comparing member bytes only. Only meaningful when
    /// all entries share one score; the scan happens either way.
    pub fn range_by_lex(
        &self,
        low: &LexBound,
        high: &LexBound,
        rev: bool,
        offset: usize,
        count: Option<usize>,
    ) -> Vec<String> {
        if LexBound::empty_range(low, high) {
            return Vec::new();
        }
        let slice = |bucket: &Bucket| {
            let lo = low.lower_index(bucket);
            let hi = high.upper_index(bucket);
            (lo, hi)
        };
        let take = count.unwrap_or(usize::MAX);
        if rev {
            self.by_score
                .values()
                .rev()
                .flat_map(|bucket| {
                    let (lo, hi) = slice(bucket);
                    bucket[lo..hi].iter().rev()
                })
                .skip(offset)
                .take(take)
                .cloned()
                .collect()
        } else {
            self.by_score
                .values()
                .flat_map(|bucket| {
                    let (lo, hi) = slice(bucket);
                    bucket[lo..hi].iter()
                })
                .skip(offset)
                .take(take)
                .cloned()
                .collect()
        }
    }

    pub fn count_by_score(&self, low: &ScoreBound, high: &ScoreBound) -> usize {
        if ScoreBound::empty_range(low, high) {
            return 0;
        }
        self.by_score
            .range((low.as_bound(), high.as_bound()))
            .map(|(_, bucket)| bucket.len())
            .sum()
    }

    pub fn count_by_lex(&self, low: &LexBound, high: &LexBound) -> usize {
        if LexBound::empty_range(low, high) {
            return 0;
        }
        self.by_score
            .values()
            .map(|bucket| high.upper_index(bucket) - low.lower_index(bucket))
            .sum()
    }
}
