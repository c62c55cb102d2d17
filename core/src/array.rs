//! GrowableArray: a bounds-checked dynamic array over one contiguous buffer.
//!
//! The array owns a single `Box<[MaybeUninit<T>]>` whose length is the
//! capacity. The first `count` slots are initialized, in positional order,
//! with no gaps:
//!
//! ```text
//! buffer: [ e0 | e1 | ... | e(count-1) | uninit ... ]
//!          └──────── live ────────────┘
//!          └──────────────── capacity ─────────────┘
//! ```
//!
//! - Capacity never drops below [`MIN_CAPACITY`] and never shrinks.
//! - Growth replaces the buffer wholesale: `max(required, 2 * capacity, 16)`.
//! - Insertion and removal shift the suffix by one slot with `ptr::copy`.
//! - Index checks run before any mutation, so a failed call is a no-op.

use alloc::{boxed::Box, string::String, string::ToString, vec::Vec};
use core::{
    fmt,
    mem::{self, MaybeUninit},
    ops::{Index, IndexMut},
    ptr, slice,
};

use crate::error::{Access, IndexOutOfRange};

/// The smallest capacity an array ever has.
pub const MIN_CAPACITY: usize = 16;

/// A growable, sequentially indexed container with checked access.
///
/// See [module-level docs](self) for the storage layout.
pub struct GrowableArray<T> {
    buffer: Box<[MaybeUninit<T>]>,
    count: usize,
}

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
static_assertions::assert_eq_size!(GrowableArray<u8>, [usize; 3]);
static_assertions::assert_eq_size!(GrowableArray<u64>, GrowableArray<[u64; 8]>);

impl<T> GrowableArray<T> {
    /// Creates an empty array with capacity [`MIN_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(MIN_CAPACITY)
    }

    /// Creates an empty array that holds at least `capacity` elements
    /// before growing. Requests below [`MIN_CAPACITY`] are rounded up.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Box::new_uninit_slice(capacity.max(MIN_CAPACITY)),
            count: 0,
        }
    }

    /// Creates an array holding `items` in order.
    ///
    /// For exact-size sources the capacity is `max(16, items.len())`.
    ///
    /// # Example
    ///
    /// ```
    /// use growarr_core::GrowableArray;
    ///
    /// let names = GrowableArray::from_items("Peter,Maria,Steve".split(','));
    /// assert_eq!(names.to_text(), "[Peter, Maria, Steve]");
    /// ```
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let items = items.into_iter();
        let mut array = Self::with_capacity(items.size_hint().0);
        array.add_range(items);
        array
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `buffer[..count]` is initialized and `MaybeUninit<T>` has the layout of `T`.
        unsafe { slice::from_raw_parts(self.buffer.as_ptr().cast::<T>(), self.count) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: see `as_slice`; the unique borrow of `self` covers the slice.
        unsafe { slice::from_raw_parts_mut(self.buffer.as_mut_ptr().cast::<T>(), self.count) }
    }

    /// Returns the element at `index`, or [`IndexOutOfRange`] unless `index < len()`.
    pub fn get(&self, index: usize) -> Result<&T, IndexOutOfRange> {
        self.check_index(Access::Get, index)?;
        Ok(&self.as_slice()[index])
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfRange> {
        self.check_index(Access::Get, index)?;
        Ok(&mut self.as_mut_slice()[index])
    }

    /// Overwrites the element at `index` and hands back the previous one.
    ///
    /// On failure `value` is dropped and the array is untouched.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, IndexOutOfRange> {
        self.check_index(Access::Set, index)?;
        Ok(mem::replace(&mut self.as_mut_slice()[index], value))
    }

    /// Appends `value`, growing the buffer if it is full.
    pub fn add(&mut self, value: T) {
        if self.count == self.capacity() {
            self.grow_to(self.count + 1);
        }
        self.buffer[self.count].write(value);
        self.count += 1;
    }

    /// Appends every element of `values` in order.
    ///
    /// The iterator's lower size bound is reserved up front, so a batch from
    /// a slice, `Vec`, array or range grows the buffer at most once.
    pub fn add_range<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        let values = values.into_iter();
        self.reserve(values.size_hint().0);
        for value in values {
            self.add(value);
        }
    }

    /// Makes room for at least `additional` more elements without further growth.
    pub fn reserve(&mut self, additional: usize) {
        let Some(required) = self.count.checked_add(additional) else {
            capacity_overflow();
        };
        if required > self.capacity() {
            self.grow_to(required);
        }
    }

    /// Inserts `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// `index == len()` appends, `index == 0` prepends.
    ///
    /// # Example
    ///
    /// ```
    /// use growarr_core::grow_array;
    ///
    /// let mut nums = grow_array![10, 20, 30, 40];
    /// nums.insert_at(2, 1).unwrap();
    /// assert_eq!(nums.to_text(), "[10, 20, 1, 30, 40]");
    /// assert!(nums.insert_at(6, 1).is_err());
    /// ```
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<(), IndexOutOfRange> {
        self.check_index(Access::Insert, index)?;
        if self.count == self.capacity() {
            self.grow_to(self.count + 1);
        }
        // SAFETY: index <= count < capacity, so both the run [index, count) and
        // its destination [index + 1, count + 1) are inside the buffer.
        unsafe {
            let slot = self.buffer.as_mut_ptr().add(index);
            ptr::copy(slot, slot.add(1), self.count - index);
            slot.write(MaybeUninit::new(value));
        }
        self.count += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting `[index + 1, len)`
    /// one slot left. Capacity is unchanged.
    pub fn remove_at(&mut self, index: usize) -> Result<T, IndexOutOfRange> {
        self.check_index(Access::Remove, index)?;
        // SAFETY: index < count, so the slot is initialized. It is read out once
        // and then overwritten by the shifted tail.
        let value = unsafe {
            let slot = self.buffer.as_mut_ptr().add(index);
            let value = slot.read().assume_init();
            ptr::copy(slot.add(1), slot, self.count - index - 1);
            value
        };
        self.count -= 1;
        Ok(value)
    }

    /// Drops every element. Capacity is unchanged.
    pub fn clear(&mut self) {
        let live =
            ptr::slice_from_raw_parts_mut(self.buffer.as_mut_ptr().cast::<T>(), self.count);
        // Reset before dropping so a panicking destructor cannot double drop.
        self.count = 0;
        // SAFETY: `live` is exactly the initialized prefix, now unreachable through `self`.
        unsafe { ptr::drop_in_place(live) }
    }

    /// Swaps the elements at `i` and `j`. `i == j` is a no-op.
    pub fn exchange(&mut self, i: usize, j: usize) -> Result<(), IndexOutOfRange> {
        self.check_index(Access::Exchange, i)?;
        self.check_index(Access::Exchange, j)?;
        self.as_mut_slice().swap(i, j);
        Ok(())
    }

    /// Renders the array as `[e1, e2, ..., en]`, or `[]` when empty.
    pub fn to_text(&self) -> String
    where
        T: fmt::Display,
    {
        self.to_string()
    }

    #[inline]
    fn check_index(&self, access: Access, index: usize) -> Result<(), IndexOutOfRange> {
        if index < access.range_end(self.count) {
            Ok(())
        } else {
            Err(self.out_of_range(access, index))
        }
    }

    #[cold]
    fn out_of_range(&self, access: Access, index: usize) -> IndexOutOfRange {
        tracing::trace!(%access, index, len = self.count, "index out of range");
        IndexOutOfRange {
            access,
            index,
            len: self.count,
        }
    }

    /// Moves the live elements into a fresh buffer that fits `required`.
    #[cold]
    fn grow_to(&mut self, required: usize) {
        let old_capacity = self.capacity();
        debug_assert!(required > old_capacity);
        let new_capacity = grown_capacity::<T>(old_capacity, required);

        let mut buffer = Box::<[T]>::new_uninit_slice(new_capacity);
        // SAFETY: both buffers hold at least `count` slots and do not overlap.
        // The old buffer is `MaybeUninit`, so dropping it does not drop the
        // elements that were moved out bitwise.
        unsafe {
            ptr::copy_nonoverlapping(self.buffer.as_ptr(), buffer.as_mut_ptr(), self.count);
        }
        self.buffer = buffer;

        tracing::debug!(old_capacity, new_capacity, len = self.count, "grew buffer");
    }
}

/// Capacity for a buffer that must hold `required` elements, growing from `capacity`.
fn grown_capacity<T>(capacity: usize, required: usize) -> usize {
    // Largest element count whose byte size still fits in `isize`.
    let max = isize::MAX as usize / mem::size_of::<T>().max(1);
    if required > max {
        capacity_overflow();
    }
    capacity
        .saturating_mul(2)
        .min(max)
        .max(required)
        .max(MIN_CAPACITY)
}

#[cold]
#[track_caller]
fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}

impl<T> Drop for GrowableArray<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for GrowableArray<T> {
    fn clone(&self) -> Self {
        let mut array = Self::with_capacity(self.capacity());
        array.add_range(self.as_slice().iter().cloned());
        array
    }
}

impl<T: fmt::Display> fmt::Display for GrowableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.as_slice().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(item, f)?;
        }
        f.write_str("]")
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T, const N: usize> From<[T; N]> for GrowableArray<T> {
    fn from(items: [T; N]) -> Self {
        Self::from_items(items)
    }
}

impl<T> From<Vec<T>> for GrowableArray<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_items(items)
    }
}

impl<T> FromIterator<T> for GrowableArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}

impl<T> Extend<T> for GrowableArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_range(iter);
    }
}

/// Indexer sugar over [`GrowableArray::get`]; panics with the
/// [`IndexOutOfRange`] message instead of returning it.
impl<T> Index<usize> for GrowableArray<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for GrowableArray<T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}
