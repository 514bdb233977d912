#![deny(clippy::uninlined_format_args)]
#![deny(clippy::to_string_in_format_args)]

//! In-process ordered-set engine: unique string members bound to `f64`
//! scores, kept in a canonical (score, member) order that supports rank,
//! score-range and lexicographic-range queries, incremental score updates,
//! and weighted union/intersection of several sets.
//!
//! The engine is a synchronous data structure library. It has no locking of
//! its own; an embedding layer that shares an [`OrderedSet`] or [`Keyspace`]
//! across threads must serialize access itself.

#[cfg(feature = "fast-hash")]
type Build = std::hash::BuildHasherDefault<rustc_hash::FxHasher>;
#[cfg(not(feature = "fast-hash"))]
type Build = ahash::RandomState;

/// Hash map implementation used by the member index and the set combiner.
pub type FastHashMap<K, V> = hashbrown::HashMap<K, V, Build>;

mod bound;
mod combine;
mod error;
mod keyspace;
mod member_index;
mod ordered_set;
mod score;
mod score_index;

pub use bound::{LexBound, ScoreBound};
pub use combine::{combine, Aggregate, CombinationSpec, CombineKind};
pub use error::{Error, Result};
pub use keyspace::Keyspace;
pub use member_index::MemberIndex;
pub use ordered_set::{AddMode, AddOutcome, OrderedSet};
pub use score::{fmt_score, parse_score, with_fmt_buf};
pub use score_index::ScoreIndex;
