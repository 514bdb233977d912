use crate::{Error, Result};
use ryu::Buffer;
use std::cell::RefCell;

/// Format a score in its textual form: shortest round-trip representation
/// with a trailing `.0` stripped, infinities spelled `inf` / `-inf`.
#[inline]
pub fn fmt_score(buf: &mut Buffer, score: f64) -> &str {
    debug_assert!(!score.is_nan());
    if score == f64::INFINITY {
        return "inf";
    }
    if score == f64::NEG_INFINITY {
        return "-inf";
    }
    let formatted = buf.format_finite(score);
    formatted.strip_suffix(".0").unwrap_or(formatted)
}

thread_local! {
    static FMT_BUF: RefCell<Buffer> = RefCell::new(Buffer::new());
}

#[inline]
pub fn with_fmt_buf<F, R>(f: F) -> R
where
    F: FnOnce(&mut Buffer) -> R,
{
    FMT_BUF.with(|b| f(&mut b.borrow_mut()))
}

/// Parse a score from its textual form. `inf`, `+inf` and `-inf` (and the
/// long `infinity` spellings) are accepted; NaN is rejected because it has
/// no place in the canonical order.
pub fn parse_score(s: &str) -> Result<f64> {
    let value: f64 = s.parse().map_err(|_| Error::InvalidScore)?;
    if value.is_nan() {
        return Err(Error::InvalidScore);
    }
    Ok(value)
}
