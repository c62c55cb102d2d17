//! growarr - a growable array with checked indexing
//!
//! # Overview
//!
//! [`GrowableArray`] is a low-level building block: a sequentially indexed
//! container over one owned, contiguous buffer that grows on demand.
//!
//! - Constant-time indexed reads and writes
//! - Amortized constant-time append, single-growth batch append
//! - Linear-time insertion and removal at arbitrary positions
//! - Every index is checked; failures are values, not panics
//!
//! # Quick Start
//!
//! ```
//! use growarr::{grow_array, GrowableArray};
//!
//! let mut nums = grow_array![10, 20, 30, 40];
//! nums.insert_at(0, 1).unwrap();
//! nums.remove_at(2).unwrap();
//! assert_eq!(nums.to_text(), "[1, 10, 30, 40]");
//!
//! let mut batch = GrowableArray::new();
//! batch.add_range(0..2000);
//! assert!(batch.capacity() >= batch.len());
//!
//! // Out-of-range indices are reported, and the array is left untouched.
//! let err = nums.get(500).unwrap_err();
//! assert_eq!(err.to_string(), "`get` index 500 is out of range for length 4 (valid range is 0..4)");
//! ```
//!
//! # Features
//!
//! - `diagnostics` (default): [`IndexOutOfRange`] implements
//!   `miette::Diagnostic`, for hosts that render errors with miette.

pub use growarr_core::{Access, GrowableArray, IndexOutOfRange, MIN_CAPACITY, grow_array};
