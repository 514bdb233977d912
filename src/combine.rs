use crate::ordered_set::OrderedSet;
use crate::{Error, FastHashMap, Result};

/// How per-input weighted scores merge into one result score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Aggregate {
    #[default]
    Sum,
    Min,
    Max,
}

impl Aggregate {
    fn apply(self, acc: f64, value: f64) -> f64 {
        let out = match self {
            Self::Sum => acc + value,
            Self::Min => {
                if value < acc {
                    value
                } else {
                    acc
                }
            }
            Self::Max => {
                if value > acc {
                    value
                } else {
                    acc
                }
            }
        };
        // inf + -inf collapses to 0, as the original store aggregates.
        if out.is_nan() {
            0.0
        } else {
            out
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CombineKind {
    Union,
    Intersection,
}

/// Ordered list of input sets with per-input weights (default 1) and an
/// aggregation rule (default [`Aggregate::Sum`]). All validation happens
/// here, before [`combine`] touches anything.
pub struct CombinationSpec<'a> {
    inputs: Vec<&'a OrderedSet>,
    weights: Vec<f64>,
    aggregate: Aggregate,
}

impl<'a> CombinationSpec<'a> {
    pub fn new(inputs: Vec<&'a OrderedSet>) -> Result<Self> {
        if inputs.is_empty() {
            return Err(Error::NoInputs);
        }
        let weights = vec![1.0; inputs.len()];
        Ok(Self {
            inputs,
            weights,
            aggregate: Aggregate::Sum,
        })
    }

    /// Replace the default weights, one per input in order.
    pub fn weights(mut self, weights: Vec<f64>) -> Result<Self> {
        if weights.len() != self.inputs.len() {
            return Err(Error::WeightCountMismatch {
                inputs: self.inputs.len(),
                weights: weights.len(),
            });
        }
        if weights.iter().any(|w| w.is_nan()) {
            return Err(Error::InvalidWeight);
        }
        self.weights = weights;
        Ok(self)
    }

    pub fn aggregate(mut self, aggregate: Aggregate) -> Self {
        self.aggregate = aggregate;
        self
    }
}

fn weighted(score: f64, weight: f64) -> f64 {
    let value = score * weight;
    // inf * 0 collapses to 0, as the original store weights.
    if value.is_nan() {
        0.0
    } else {
        value
    }
}

/// Build a fresh set from the weighted union or intersection of the spec's
/// inputs. The inputs are never mutated and share no storage with the
/// result. Per-member contributions fold in input-list order, so identical
/// inputs always yield bit-identical result scores.
pub fn combine(spec: &CombinationSpec<'_>, kind: CombineKind) -> OrderedSet {
    let mut out = OrderedSet::new();
    match kind {
        CombineKind::Union => {
            let mut acc: FastHashMap<String, f64> = FastHashMap::default();
            for (set, &weight) in spec.inputs.iter().zip(&spec.weights) {
                for (member, score) in set.iter() {
                    let contribution = weighted(score, weight);
                    match acc.get_mut(member) {
                        Some(total) => *total = spec.aggregate.apply(*total, contribution),
                        None => {
                            acc.insert(member.to_owned(), contribution);
                        }
                    }
                }
            }
            for (member, score) in &acc {
                out.insert_new(member, *score);
            }
        }
        CombineKind::Intersection => {
            let first = spec.inputs[0];
            'members: for (member, score) in first.iter() {
                let mut total = weighted(score, spec.weights[0]);
                for (set, &weight) in spec.inputs[1..].iter().zip(&spec.weights[1..]) {
                    match set.score(member) {
                        Some(other) => total = spec.aggregate.apply(total, weighted(other, weight)),
                        None => continue 'members,
                    }
                }
                out.insert_new(member, total);
            }
        }
    }
    out
}
