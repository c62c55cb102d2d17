#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

//! A growable array with checked indexing and an explicit growth policy.
//!
//! [`GrowableArray`] keeps its elements left-aligned in one owned buffer of
//! at least [`MIN_CAPACITY`] slots. Appends are amortized O(1); insertion and
//! removal shift the suffix and are O(n). Operations that take an index
//! return `Result<_, IndexOutOfRange>` instead of panicking.
//!
//! # Example
//!
//! ```
//! use growarr_core::{grow_array, Access, GrowableArray};
//!
//! let mut nums = grow_array![10, 20, 30, 40];
//! nums.exchange(0, 3).unwrap();
//! assert_eq!(nums.to_text(), "[40, 20, 30, 10]");
//!
//! let err = nums.get(4).unwrap_err();
//! assert_eq!(err.access, Access::Get);
//! assert_eq!(err.valid_range(), 0..4);
//!
//! let empty = GrowableArray::<i32>::new();
//! assert_eq!(empty.to_text(), "[]");
//! assert_eq!(empty.capacity(), 16);
//! ```

extern crate alloc;

pub mod array;
pub mod error;

pub use array::{GrowableArray, MIN_CAPACITY};
pub use error::{Access, IndexOutOfRange};

/// Builds a [`GrowableArray`] from a list of elements, like `vec!`.
///
/// ```
/// use growarr_core::grow_array;
///
/// let names = grow_array!["Bob", "Joe"];
/// assert_eq!(names.to_text(), "[Bob, Joe]");
///
/// let empty: growarr_core::GrowableArray<u8> = grow_array![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! grow_array {
    () => {
        $crate::GrowableArray::new()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::GrowableArray::from([$($item),+])
    };
}
