//! The single failure mode of [`GrowableArray`](crate::GrowableArray): an index
//! outside the valid range of the operation that received it.
//!
//! Every checked operation validates its indices before touching the buffer,
//! so an `Err` always leaves the array exactly as it was.

use core::{fmt, ops::Range};

use thiserror::Error;

/// The operation whose index check failed.
///
/// Most operations accept `0..len`. [`Access::Insert`] also accepts `len`
/// itself, which appends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    Get,
    Set,
    Insert,
    Remove,
    Exchange,
}

impl Access {
    /// Exclusive upper bound of the valid index range for an array of `len` elements.
    #[inline]
    pub const fn range_end(self, len: usize) -> usize {
        match self {
            Access::Insert => len.saturating_add(1),
            _ => len,
        }
    }

    fn method_name(self) -> &'static str {
        match self {
            Access::Get => "get",
            Access::Set => "set",
            Access::Insert => "insert_at",
            Access::Remove => "remove_at",
            Access::Exchange => "exchange",
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method_name())
    }
}

/// An index fell outside the valid range of the operation.
///
/// Retrying with the same index against the same array fails identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "diagnostics", derive(miette::Diagnostic))]
#[cfg_attr(
    feature = "diagnostics",
    diagnostic(
        code(growarr::index_out_of_range),
        help("check the index against `len()` before calling the operation")
    )
)]
#[error(
    "`{access}` index {index} is out of range for length {len} (valid range is 0..{})",
    range_end(.access, .len)
)]
pub struct IndexOutOfRange {
    pub access: Access,
    pub index: usize,
    pub len: usize,
}

impl IndexOutOfRange {
    /// The indices `access` would have accepted at the time of the failure.
    pub fn valid_range(&self) -> Range<usize> {
        0..self.access.range_end(self.len)
    }
}

fn range_end(access: &Access, len: &usize) -> usize {
    access.range_end(*len)
}
