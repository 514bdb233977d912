use crate::score::{fmt_score, parse_score, with_fmt_buf};
use crate::{Error, Result};
use ordered_float::OrderedFloat;
use std::fmt;
use std::ops::Bound;

/// One end of a score range, tagged inclusive or exclusive.
///
/// Infinities are ordinary bound values: `-inf` parses to an inclusive bound
/// on `f64::NEG_INFINITY`, which still matches entries whose score is itself
/// infinite. NaN never enters a bound.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoreBound {
    value: f64,
    exclusive: bool,
}

impl ScoreBound {
    pub fn inclusive(value: f64) -> Result<Self> {
        if value.is_nan() {
            return Err(Error::InvalidScoreBound);
        }
        Ok(Self {
            value,
            exclusive: false,
        })
    }

    pub fn exclusive(value: f64) -> Result<Self> {
        if value.is_nan() {
            return Err(Error::InvalidScoreBound);
        }
        Ok(Self {
            value,
            exclusive: true,
        })
    }

    /// The open lower end: matches every score.
    pub fn neg_infinite() -> Self {
        Self {
            value: f64::NEG_INFINITY,
            exclusive: false,
        }
    }

    /// The open upper end: matches every score.
    pub fn pos_infinite() -> Self {
        Self {
            value: f64::INFINITY,
            exclusive: false,
        }
    }

    /// Parse the textual syntax: `1.5`, `(1.5`, `-inf`, `+inf`.
    pub fn parse(s: &str) -> Result<Self> {
        let (rest, exclusive) = match s.strip_prefix('(') {
            Some(rest) => (rest, true),
            None => (s, false),
        };
        let value = parse_score(rest).map_err(|_| Error::InvalidScoreBound)?;
        Ok(Self { value, exclusive })
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_exclusive(&self) -> bool {
        self.exclusive
    }

    pub(crate) fn as_bound(&self) -> Bound<OrderedFloat<f64>> {
        if self.exclusive {
            Bound::Excluded(OrderedFloat(self.value))
        } else {
            Bound::Included(OrderedFloat(self.value))
        }
    }

    /// True when no score can sit between `low` and `high`. Guards the
    /// `BTreeMap::range` call, which panics on inverted bounds.
    pub(crate) fn empty_range(low: &Self, high: &Self) -> bool {
        low.value > high.value
            || (low.value == high.value && (low.exclusive || high.exclusive))
    }
}

impl fmt::Display for ScoreBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exclusive {
            f.write_str("(")?;
        }
        with_fmt_buf(|b| f.write_str(fmt_score(b, self.value)))
    }
}

/// One end of a lexicographic range over members: the sentinels `-` / `+`,
/// or a member value tagged inclusive (`[m`) or exclusive (`(m`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LexBound {
    Min,
    Max,
    Inclusive(String),
    Exclusive(String),
}

impl LexBound {
    /// Parse the textual syntax: `-`, `+`, `[member`, `(member`.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "-" => Ok(Self::Min),
            "+" => Ok(Self::Max),
            _ => {
                if let Some(rest) = s.strip_prefix('[') {
                    Ok(Self::Inclusive(rest.to_owned()))
                } else if let Some(rest) = s.strip_prefix('(') {
                    Ok(Self::Exclusive(rest.to_owned()))
                } else {
                    Err(Error::InvalidLexBound)
                }
            }
        }
    }

    /// Index of the first element of a sorted member slice inside a range
    /// that starts at this bound.
    pub(crate) fn lower_index(&self, members: &[String]) -> usize {
        match self {
            Self::Min => 0,
            Self::Max => members.len(),
            Self::Inclusive(m) => members.partition_point(|x| x.as_str() < m.as_str()),
            Self::Exclusive(m) => members.partition_point(|x| x.as_str() <= m.as_str()),
        }
    }

    /// One past the last element of a sorted member slice inside a range
    /// that ends at this bound.
    pub(crate) fn upper_index(&self, members: &[String]) -> usize {
        match self {
            Self::Min => 0,
            Self::Max => members.len(),
            Self::Inclusive(m) => members.partition_point(|x| x.as_str() <= m.as_str()),
            Self::Exclusive(m) => members.partition_point(|x| x.as_str() < m.as_str()),
        }
    }

    pub(crate) fn empty_range(low: &Self, high: &Self) -> bool {
        match (low, high) {
            (Self::Max, _) | (_, Self::Min) => true,
            (
                Self::Inclusive(a) | Self::Exclusive(a),
                Self::Inclusive(b) | Self::Exclusive(b),
            ) => {
                a > b
                    || (a == b
                        && (matches!(low, Self::Exclusive(_))
                            || matches!(high, Self::Exclusive(_))))
            }
            _ => false,
        }
    }
}

impl fmt::Display for LexBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Min => f.write_str("-"),
            Self::Max => f.write_str("+"),
            Self::Inclusive(m) => write!(f, "[{m}"),
            Self::Exclusive(m) => write!(f, "({m}"),
        }
    }
}
