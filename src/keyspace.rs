use crate::combine::{combine, Aggregate, CombinationSpec, CombineKind};
use crate::ordered_set::OrderedSet;
use crate::{FastHashMap, Result};

/// Owner of named ordered sets. A set exists exactly while it has entries:
/// a write that drains a set drops it, and reads of unknown names see the
/// empty set. No locking of its own; the embedding layer serializes access.
#[derive(Default)]
pub struct Keyspace {
    sets: FastHashMap<String, OrderedSet>,
}

impl Keyspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_write<F, R>(&mut self, key: &str, f: F) -> R
    where
        F: FnOnce(&mut OrderedSet) -> R,
    {
        let mut remove = false;
        let result;
        {
            let set = self.sets.entry(key.to_owned()).or_default();
            result = f(set);
            if set.is_empty() {
                remove = true;
            }
        }
        if remove {
            self.sets.remove(key);
        }
        result
    }

    pub fn with_read<F, R>(&self, key: &str, f: F) -> R
    where
        F: FnOnce(&OrderedSet) -> R,
    {
        f(self.sets.get(key).unwrap_or(&OrderedSet::default()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.sets.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> bool {
        self.sets.remove(key).is_some()
    }

    pub fn clear(&mut self) {
        self.sets.clear();
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Store the weighted union or intersection of `sources` under `dest`,
    /// fully replacing whatever was there; an empty result removes `dest`.
    /// Missing sources read as empty sets. Returns the destination
    /// cardinality.
    pub fn combine_into(
        &mut self,
        dest: &str,
        sources: &[&str],
        weights: Option<&[f64]>,
        aggregate: Aggregate,
        kind: CombineKind,
    ) -> Result<usize> {
        let result = {
            let empty = OrderedSet::default();
            let inputs: Vec<&OrderedSet> = sources
                .iter()
                .map(|key| self.sets.get(*key).unwrap_or(&empty))
                .collect();
            let mut spec = CombinationSpec::new(inputs)?;
            if let Some(weights) = weights {
                spec = spec.weights(weights.to_vec())?;
            }
            combine(&spec.aggregate(aggregate), kind)
        };
        let cardinality = result.len();
        if cardinality == 0 {
            self.sets.remove(dest);
        } else {
            self.sets.insert(dest.to_owned(), result);
        }
        Ok(cardinality)
    }
}
