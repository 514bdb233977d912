use thiserror::Error;

/// Convenient result type used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors reported synchronously by the call that caused them. A failed
/// call never leaves a set partially mutated.
///
/// Absent members and failed conditional preconditions are not errors; they
/// surface as `None` or [`crate::AddOutcome::Skipped`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("score is not a valid float")]
    InvalidScore,
    #[error("resulting score is not a number")]
    NanResult,
    #[error("min or max is not a float")]
    InvalidScoreBound,
    #[error("min or max is not a valid string range item")]
    InvalidLexBound,
    #[error("weight count {weights} does not match input count {inputs}")]
    WeightCountMismatch { inputs: usize, weights: usize },
    #[error("weight is not a valid float")]
    InvalidWeight,
    #[error("at least one input set is required")]
    NoInputs,
}
