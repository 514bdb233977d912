use crate::bound::{LexBound, ScoreBound};
use crate::member_index::MemberIndex;
use crate::score_index::ScoreIndex;
use crate::{Error, Result};

/// Conditional policy for [`OrderedSet::add`] and [`OrderedSet::increment`],
/// replacing the store's NX/XX flags with a tagged mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AddMode {
    /// Create or overwrite unconditionally.
    #[default]
    Plain,
    /// Only update members that already exist; never insert.
    OnlyIfExists,
    /// Only insert new members; never touch an existing score.
    OnlyIfAbsent,
}

/// What a single `add` actually did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new member was inserted.
    Added,
    /// An existing member moved to a new score.
    Updated,
    /// The member was already bound to exactly this score.
    Unchanged,
    /// The conditional precondition failed; nothing happened.
    Skipped,
}

/// A set of unique members, each bound to an `f64` score, ordered by
/// (score, member). Composes a [`MemberIndex`] for identity lookups with a
/// [`ScoreIndex`] for everything order-related; every mutating path updates
/// both or neither.
#[derive(Default)]
pub struct OrderedSet {
    members: MemberIndex,
    order: ScoreIndex,
}

impl OrderedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, member: &str, score: f64, mode: AddMode) -> Result<AddOutcome> {
        if score.is_nan() {
            return Err(Error::InvalidScore);
        }
        match (self.members.get(member), mode) {
            (Some(_), AddMode::OnlyIfAbsent) => Ok(AddOutcome::Skipped),
            (None, AddMode::OnlyIfExists) => Ok(AddOutcome::Skipped),
            (Some(old), _) if old == score => Ok(AddOutcome::Unchanged),
            (Some(old), _) => {
                let removed = self.order.remove(old, member);
                debug_assert!(removed, "indices out of sync");
                self.order.insert(score, member);
                self.members.set(member, score);
                Ok(AddOutcome::Updated)
            }
            (None, _) => {
                self.order.insert(score, member);
                self.members.set(member, score);
                Ok(AddOutcome::Added)
            }
        }
    }

    /// Bulk add. The returned count is "newly added members" by default, or
    /// "members whose score actually changed" when `count_changed` is set.
    /// Every score is validated before the first mutation.
    pub fn add_many(
        &mut self,
        entries: &[(&str, f64)],
        mode: AddMode,
        count_changed: bool,
    ) -> Result<usize> {
        if entries.iter().any(|&(_, score)| score.is_nan()) {
            return Err(Error::InvalidScore);
        }
        let mut count = 0;
        for &(member, score) in entries {
            match self.add(member, score, mode)? {
                AddOutcome::Added => count += 1,
                AddOutcome::Updated if count_changed => count += 1,
                _ => {}
            }
        }
        Ok(count)
    }

    /// Add `delta` to the member's running total, treating an absent member
    /// as score 0. A failed `OnlyIfExists`/`OnlyIfAbsent` precondition yields
    /// `Ok(None)` ("not applied"); a NaN result (`inf + -inf`) is rejected
    /// before any mutation.
    pub fn increment(&mut self, member: &str, delta: f64, mode: AddMode) -> Result<Option<f64>> {
        if delta.is_nan() {
            return Err(Error::InvalidScore);
        }
        let current = self.members.get(member);
        match (current, mode) {
            (None, AddMode::OnlyIfExists) => return Ok(None),
            (Some(_), AddMode::OnlyIfAbsent) => return Ok(None),
            _ => {}
        }
        let next = current.unwrap_or(0.0) + delta;
        if next.is_nan() {
            return Err(Error::NanResult);
        }
        self.add(member, next, AddMode::Plain)?;
        Ok(Some(next))
    }

    /// Remove one member. Removing an absent member is a no-op returning
    /// false.
    pub fn remove(&mut self, member: &str) -> bool {
        match self.members.remove(member) {
            Some(score) => {
                let removed = self.order.remove(score, member);
                debug_assert!(removed, "indices out of sync");
                true
            }
            None => false,
        }
    }

    /// Remove several members, returning how many actually existed.
    pub fn remove_all<'a, I>(&mut self, members: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        members.into_iter().filter(|m| self.remove(m)).count()
    }

    pub fn score(&self, member: &str) -> Option<f64> {
        self.members.get(member)
    }

    /// Scores for several members at once; absent members yield `None`
    /// slots in the same positions.
    pub fn scores<'a, I>(&self, members: I) -> Vec<Option<f64>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        members.into_iter().map(|m| self.members.get(m)).collect()
    }

    pub fn contains(&self, member: &str) -> bool {
        self.members.contains(member)
    }

    /// Zero-based position in the canonical order, or from the top when
    /// `rev` is set.
    pub fn rank(&self, member: &str, rev: bool) -> Option<usize> {
        let score = self.members.get(member)?;
        let ascending = self.order.rank(score, member)?;
        Some(if rev {
            self.len() - 1 - ascending
        } else {
            ascending
        })
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// All entries in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.order.iter()
    }

    pub fn range_by_rank(&self, start: isize, stop: isize, rev: bool) -> Vec<(String, f64)> {
        self.order.range_by_rank(start, stop, rev)
    }

    pub fn range_by_score(
        &self,
        low: &ScoreBound,
        high: &ScoreBound,
        rev: bool,
        offset: usize,
        count: Option<usize>,
    ) -> Vec<(String, f64)> {
        self.order.range_by_score(low, high, rev, offset, count)
    }

    pub fn range_by_lex(
        &self,
        low: &LexBound,
        high: &LexBound,
        rev: bool,
        offset: usize,
        count: Option<usize>,
    ) -> Vec<String> {
        self.order.range_by_lex(low, high, rev, offset, count)
    }

    pub fn count_by_score(&self, low: &ScoreBound, high: &ScoreBound) -> usize {
        self.order.count_by_score(low, high)
    }

    pub fn count_by_lex(&self, low: &LexBound, high: &LexBound) -> usize {
        self.order.count_by_lex(low, high)
    }

    pub fn remove_range_by_rank(&mut self, start: isize, stop: isize) -> usize {
        let doomed: Vec<String> = self
            .order
            .range_by_rank(start, stop, false)
            .into_iter()
            .map(|(m, _)| m)
            .collect();
        self.remove_all(doomed.iter().map(String::as_str))
    }

    pub fn remove_range_by_score(&mut self, low: &ScoreBound, high: &ScoreBound) -> usize {
        let doomed: Vec<String> = self
            .order
            .range_by_score(low, high, false, 0, None)
            .into_iter()
            .map(|(m, _)| m)
            .collect();
        self.remove_all(doomed.iter().map(String::as_str))
    }

    pub fn remove_range_by_lex(&mut self, low: &LexBound, high: &LexBound) -> usize {
        let doomed = self.order.range_by_lex(low, high, false, 0, None);
        self.remove_all(doomed.iter().map(String::as_str))
    }

    pub fn pop_min(&mut self) -> Option<(String, f64)> {
        self.pop(true)
    }

    pub fn pop_max(&mut self) -> Option<(String, f64)> {
        self.pop(false)
    }

    fn pop(&mut self, min: bool) -> Option<(String, f64)> {
        let (member, score) = {
            let (m, s) = if min {
                self.order.first()?
            } else {
                self.order.last()?
            };
            (m.to_owned(), s)
        };
        self.remove(&member);
        Some((member, score))
    }

    /// Pop up to `n` entries from the small (or large) end.
    pub fn pop_n(&mut self, min: bool, n: usize) -> Vec<(String, f64)> {
        let mut out = Vec::with_capacity(n.min(self.len()));
        for _ in 0..n {
            match self.pop(min) {
                Some(item) => out.push(item),
                None => break,
            }
        }
        out
    }

    /// Insert a member known to be absent, bypassing mode checks. Used by
    /// the combiner while building a fresh result set.
    pub(crate) fn insert_new(&mut self, member: &str, score: f64) {
        debug_assert!(!score.is_nan());
        debug_assert!(!self.members.contains(member));
        self.order.insert(score, member);
        self.members.set(member, score);
    }
}
