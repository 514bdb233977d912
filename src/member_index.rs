use crate::FastHashMap;
use ordered_float::OrderedFloat;

/// Identity index: each member maps to at most one live score, with O(1)
/// amortized lookup. Carries no ordering information of its own.
#[derive(Default)]
pub struct MemberIndex {
    scores: FastHashMap<String, OrderedFloat<f64>>,
}

impl MemberIndex {
    pub fn get(&self, member: &str) -> Option<f64> {
        self.scores.get(member).map(|s| s.0)
    }

    /// Bind `member` to `score`, returning the previous score if the member
    /// already existed.
    pub fn set(&mut self, member: &str, score: f64) -> Option<f64> {
        self.scores
            .insert(member.to_owned(), OrderedFloat(score))
            .map(|s| s.0)
    }

    /// Drop `member`, returning its score if it existed.
    pub fn remove(&mut self, member: &str) -> Option<f64> {
        self.scores.remove(member).map(|s| s.0)
    }

    pub fn contains(&self, member: &str) -> bool {
        self.scores.contains_key(member)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_reports_previous_score() {
        let mut idx = MemberIndex::default();
        assert_eq!(idx.set("a", 1.0), None);
        assert_eq!(idx.set("a", 2.0), Some(1.0));
        assert_eq!(idx.get("a"), Some(2.0));
        assert_eq!(idx.len(), 1);
        assert_eq!(idx.remove("a"), Some(2.0));
        assert_eq!(idx.remove("a"), None);
        assert!(idx.is_empty());
    }
}
