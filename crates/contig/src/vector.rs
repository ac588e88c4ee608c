//! The [`Vector`] container: construction, access, capacity and mutation.
//!
//! Comparison operators live in [`crate::cmp`], traversal in
//! [`crate::iter`], and the unchecked accessors in the private `raw` module.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter;
use std::mem;
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::slice::SliceIndex;

use crate::buffer::Buffer;
use crate::error::VectorError;
use crate::growth;

/// A contiguous, growable sequence of `T`.
///
/// A `Vector` owns at most one allocation of [`capacity`](Vector::capacity)
/// slots, of which the first [`size`](Vector::size) hold the observable
/// sequence. Every allocated slot holds a constructed value; slots past
/// `size` always hold `T::default()`, which is why every operation that can
/// allocate requires `T: Default`.
///
/// Growth is explicit and deterministic; see [`crate::growth`] for the
/// targets each operation reserves.
///
/// ```
/// use contig::Vector;
///
/// let mut v = Vector::new();
/// v.push_back(1);
/// v.push_back(2);
/// assert_eq!(v.size(), 2);
/// assert_eq!(v.capacity(), 2);
/// v.push_back(3);
/// assert_eq!(v.capacity(), 4);
/// ```
pub struct Vector<T> {
    buf: Buffer<T>,
    size: usize,
}

impl<T> Vector<T> {
    /// Create an empty vector. Does not allocate.
    pub const fn new() -> Self {
        Self {
            buf: Buffer::empty(),
            size: 0,
        }
    }

    /// Number of live elements.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of allocated slots. Zero exactly when no buffer is held.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Whether the vector holds no live elements.
    ///
    /// An empty vector may still hold a buffer (after [`clear`](Vector::clear)).
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Whether a buffer is currently held.
    pub fn is_allocated(&self) -> bool {
        self.buf.is_allocated()
    }

    /// Checked access to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::OutOfRange`] if `index >= size()`.
    pub fn at(&self, index: usize) -> Result<&T, VectorError> {
        let size = self.size;
        self.data()
            .get(index)
            .ok_or(VectorError::OutOfRange { index, size })
    }

    /// Checked mutable access to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::OutOfRange`] if `index >= size()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, VectorError> {
        let size = self.size;
        self.data_mut()
            .get_mut(index)
            .ok_or(VectorError::OutOfRange { index, size })
    }

    /// The first live element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty. Use [`first`](slice::first) through
    /// `Deref` for an `Option`.
    #[track_caller]
    pub fn front(&self) -> &T {
        match self.data().first() {
            Some(value) => value,
            None => empty_access("front"),
        }
    }

    /// The first live element, mutably.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[track_caller]
    pub fn front_mut(&mut self) -> &mut T {
        match self.data_mut().first_mut() {
            Some(value) => value,
            None => empty_access("front_mut"),
        }
    }

    /// The last live element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[track_caller]
    pub fn back(&self) -> &T {
        match self.data().last() {
            Some(value) => value,
            None => empty_access("back"),
        }
    }

    /// The last live element, mutably.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[track_caller]
    pub fn back_mut(&mut self) -> &mut T {
        match self.data_mut().last_mut() {
            Some(value) => value,
            None => empty_access("back_mut"),
        }
    }

    /// The live elements as a slice.
    pub fn data(&self) -> &[T] {
        &self.buf.slots()[..self.size]
    }

    /// The live elements as a mutable slice.
    pub fn data_mut(&mut self) -> &mut [T] {
        let size = self.size;
        &mut self.buf.slots_mut()[..size]
    }

    /// Raw pointer to the start of the buffer, null when none is held.
    ///
    /// Valid until the next operation that reallocates or releases.
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Raw mutable pointer to the start of the buffer, null when none is held.
    ///
    /// Valid until the next operation that reallocates or releases.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }

    /// Exchange contents with `other`. Never allocates.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Move the contents out, leaving `self` empty with no buffer.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Replace the contents of `self` with those of `source`, leaving
    /// `source` empty with no buffer. The old buffer of `self` is released.
    pub fn move_from(&mut self, source: &mut Self) {
        self.buf.release();
        self.size = 0;
        self.swap(source);
    }

    /// Convert into a `Vec` holding only the live elements.
    pub fn into_vec(self) -> Vec<T> {
        let size = self.size;
        let mut out = self
            .buf
            .into_boxed()
            .map(|slots| slots.into_vec())
            .unwrap_or_default();
        out.truncate(size);
        out
    }
}

impl<T: Default> Vector<T> {
    /// Create a vector of `n` default values with `capacity() == n`.
    pub fn with_size(n: usize) -> Self {
        Self {
            buf: Buffer::allocate(n),
            size: n,
        }
    }

    /// Grow the buffer to exactly `new_cap` slots, moving the live elements.
    ///
    /// Does nothing if `new_cap <= capacity()`.
    pub fn reserve(&mut self, new_cap: usize) {
        if new_cap > self.capacity() {
            let target = Buffer::allocate(new_cap);
            self.buf.relocate(self.size, target);
        }
    }

    /// Fallible form of [`reserve`](Vector::reserve).
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::CapacityOverflow`] if `new_cap` slots cannot be
    /// addressed, or [`VectorError::AllocFailed`] if the allocator refuses.
    /// The vector is unchanged on error.
    pub fn try_reserve(&mut self, new_cap: usize) -> Result<(), VectorError> {
        if new_cap > self.capacity() {
            let target = Buffer::try_allocate(new_cap)?;
            self.buf.relocate(self.size, target);
        }
        Ok(())
    }

    /// Set the number of live elements to `new_size`.
    ///
    /// Outgrowing the buffer reserves `2 * new_size` slots. Newly exposed
    /// elements are `T::default()`. Shrinking drops the truncated elements
    /// but keeps the buffer.
    pub fn resize(&mut self, new_size: usize) {
        if new_size > self.capacity() {
            self.reserve(growth::headroom(new_size).unwrap_or_else(|| capacity_overflow()));
        }
        if new_size < self.size {
            reset_slots(&mut self.buf.slots_mut()[new_size..self.size]);
        }
        self.size = new_size;
    }

    /// Release spare capacity so that `capacity() == size()`.
    ///
    /// An empty vector gives its buffer back entirely.
    pub fn shrink_to_fit(&mut self) {
        if self.capacity() == self.size {
            return;
        }
        if self.size == 0 {
            self.buf.release();
        } else {
            let target = Buffer::allocate(self.size);
            self.buf.relocate(self.size, target);
        }
    }

    /// Drop every live element. The buffer and its capacity are kept.
    pub fn clear(&mut self) {
        let size = self.size;
        reset_slots(&mut self.buf.slots_mut()[..size]);
        self.size = 0;
    }

    /// Append `value`, growing to `2 * size()` slots when full.
    pub fn push_back(&mut self, value: T) {
        if self.size == self.capacity() {
            self.reserve(growth::move_push_target(self.size).unwrap_or_else(|| capacity_overflow()));
        }
        let size = self.size;
        self.buf.slots_mut()[size] = value;
        self.size += 1;
    }

    /// Remove and return the last element.
    ///
    /// Whenever the vector is empty afterwards, its buffer is released and
    /// `capacity()` drops to zero. Unlike [`clear`](Vector::clear), draining
    /// with `pop_back` never leaves spare capacity behind.
    pub fn pop_back(&mut self) -> Option<T> {
        let popped = match self.size {
            0 => None,
            size => {
                self.size = size - 1;
                Some(mem::take(&mut self.buf.slots_mut()[size - 1]))
            }
        };
        if self.size == 0 {
            self.buf.release();
        }
        popped
    }
}

impl<T: Clone> Vector<T> {
    /// Create a vector of `n` copies of `value` with `capacity() == n`.
    ///
    /// If cloning panics, the clones made so far are dropped and no vector
    /// is produced.
    pub fn with_value(n: usize, value: T) -> Self {
        Self {
            buf: Buffer::from_boxed(iter::repeat_n(value, n).collect()),
            size: n,
        }
    }
}

impl<T: Clone + Default> Vector<T> {
    /// Copy `items` into a new vector with `capacity() == 2 * items.len()`.
    ///
    /// The extra capacity is headroom for subsequent pushes. An empty slice
    /// allocates nothing.
    pub fn from_slice(items: &[T]) -> Self {
        let n = items.len();
        let capacity = growth::headroom(n).unwrap_or_else(|| capacity_overflow());
        Self {
            buf: Buffer::with_leading(capacity, items.iter().cloned()),
            size: n,
        }
    }

    /// Like [`resize`](Vector::resize), but newly exposed elements are copies
    /// of `value`.
    ///
    /// The copies are made before the vector is touched, so a panicking
    /// `clone` leaves it unchanged.
    pub fn resize_with_value(&mut self, new_size: usize, value: T) {
        let old_size = self.size;
        if new_size <= old_size {
            self.resize(new_size);
            return;
        }
        let mut fill: Vec<T> = iter::repeat_n(value, new_size - old_size).collect();
        self.resize(new_size);
        self.buf.slots_mut()[old_size..new_size].swap_with_slice(&mut fill);
    }

    /// Append a copy of `value`, growing to `2 * size() - 1` slots when full.
    ///
    /// The growth target is one slot smaller than
    /// [`push_back`](Vector::push_back)'s; see [`growth::copy_push_target`].
    pub fn push_back_cloned(&mut self, value: &T) {
        let value = value.clone();
        if self.size == self.capacity() {
            self.reserve(growth::copy_push_target(self.size).unwrap_or_else(|| capacity_overflow()));
        }
        let size = self.size;
        self.buf.slots_mut()[size] = value;
        self.size += 1;
    }

    /// A fresh buffer of the same capacity holding copies of the live elements.
    fn duplicate_buffer(&self) -> Buffer<T> {
        Buffer::with_leading(self.capacity(), self.data().iter().cloned())
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Default> Clone for Vector<T> {
    /// Deep copy with the same size and capacity.
    fn clone(&self) -> Self {
        Self {
            buf: self.duplicate_buffer(),
            size: self.size,
        }
    }

    /// Copy-assign. The new buffer is fully built before the old one is
    /// released, so a panicking `clone` leaves `self` unchanged.
    fn clone_from(&mut self, source: &Self) {
        let buf = source.duplicate_buffer();
        self.buf = buf;
        self.size = source.size;
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data()).finish()
    }
}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data().hash(state);
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.data()
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.data_mut()
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self.data()
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.data_mut()
    }
}

/// Bounds-checked against `size()`: indexing past the live range panics
/// even when the slot is allocated. See
/// [`get_unchecked`](Vector::get_unchecked) for the unchecked form.
impl<T, I: SliceIndex<[T]>> Index<I> for Vector<T> {
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output {
        &self.data()[index]
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for Vector<T> {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.data_mut()[index]
    }
}

impl<T: Clone + Default> From<&[T]> for Vector<T> {
    fn from(items: &[T]) -> Self {
        Self::from_slice(items)
    }
}

impl<T: Default> From<Vec<T>> for Vector<T> {
    /// Range construction that moves the elements instead of copying them.
    /// Capacity is `2 * len`, as with [`Vector::from_slice`].
    fn from(items: Vec<T>) -> Self {
        let n = items.len();
        let capacity = growth::headroom(n).unwrap_or_else(|| capacity_overflow());
        Self {
            buf: Buffer::with_leading(capacity, items),
            size: n,
        }
    }
}

impl<T: Default, const N: usize> From<[T; N]> for Vector<T> {
    fn from(items: [T; N]) -> Self {
        Self::from(Vec::from(items))
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    fn from(vector: Vector<T>) -> Self {
        vector.into_vec()
    }
}

/// Overwrite each slot with `T::default()`, dropping what was there.
fn reset_slots<T: Default>(slots: &mut [T]) {
    for slot in slots {
        *slot = T::default();
    }
}

#[cold]
#[track_caller]
fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}

#[cold]
#[track_caller]
fn empty_access(op: &str) -> ! {
    panic!("{op}() called on an empty Vector");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_does_not_allocate() {
        let v = Vector::<i32>::new();
        assert_eq!(v.size(), 0);
        assert_eq!(v.capacity(), 0);
        assert!(!v.is_allocated());
        assert!(v.as_ptr().is_null());
    }

    #[test]
    fn with_size_default_fills() {
        let v = Vector::<i32>::with_size(4);
        assert_eq!(v.size(), 4);
        assert_eq!(v.capacity(), 4);
        assert_eq!(v.data(), &[0, 0, 0, 0]);
    }

    #[test]
    fn with_size_zero_does_not_allocate() {
        let v = Vector::<String>::with_size(0);
        assert!(!v.is_allocated());
        assert!(v.is_empty());
    }

    #[test]
    fn with_value_fills_exactly() {
        let v = Vector::with_value(3, String::from("x"));
        assert_eq!(v.size(), 3);
        assert_eq!(v.capacity(), 3);
        assert!(v.iter().all(|s| s == "x"));
    }

    #[test]
    fn from_slice_doubles_capacity() {
        let v = Vector::from_slice(&[1, 2, 3]);
        assert_eq!(v.size(), 3);
        assert_eq!(v.capacity(), 6);
        assert_eq!(v.data(), &[1, 2, 3]);
    }

    #[test]
    fn from_empty_slice_does_not_allocate() {
        let v = Vector::<u8>::from_slice(&[]);
        assert_eq!(v.capacity(), 0);
        assert!(!v.is_allocated());
    }

    #[test]
    fn from_vec_moves_and_doubles_capacity() {
        let v = Vector::from(vec![String::from("a"), String::from("b")]);
        assert_eq!(v.size(), 2);
        assert_eq!(v.capacity(), 4);
        assert_eq!(v[1], "b");
    }

    #[test]
    fn at_reports_out_of_range() {
        let mut v = Vector::from([10, 20]);
        assert_eq!(v.at(1), Ok(&20));
        assert_eq!(
            v.at(2),
            Err(VectorError::OutOfRange { index: 2, size: 2 })
        );
        *v.at_mut(0).unwrap() = 11;
        assert_eq!(v[0], 11);
        assert!(v.at_mut(5).is_err());
    }

    #[test]
    fn at_rejects_allocated_but_dead_slot() {
        let mut v = Vector::from([1, 2, 3]);
        v.resize(1);
        assert_eq!(v.capacity(), 6);
        assert!(v.at(1).is_err());
    }

    #[test]
    fn front_and_back() {
        let mut v = Vector::from([1, 2, 3]);
        assert_eq!(*v.front(), 1);
        assert_eq!(*v.back(), 3);
        *v.front_mut() = 9;
        *v.back_mut() = 7;
        assert_eq!(v.data(), &[9, 2, 7]);
    }

    #[test]
    #[should_panic(expected = "front() called on an empty Vector")]
    fn front_on_empty_panics() {
        let v = Vector::<i32>::new();
        let _ = v.front();
    }

    #[test]
    #[should_panic]
    fn index_past_size_panics() {
        let mut v = Vector::<i32>::new();
        v.reserve(8);
        let _value = v[0];
    }

    #[test]
    fn reserve_grows_exactly_and_keeps_elements() {
        let mut v = Vector::from([1, 2]);
        v.reserve(10);
        assert_eq!(v.capacity(), 10);
        assert_eq!(v.data(), &[1, 2]);
    }

    #[test]
    fn reserve_never_shrinks() {
        let mut v = Vector::from([1, 2]);
        v.reserve(1);
        assert_eq!(v.capacity(), 4);
    }

    #[test]
    fn try_reserve_overflow_leaves_vector_unchanged() {
        let mut v = Vector::from([1u64, 2]);
        let err = v.try_reserve(usize::MAX).unwrap_err();
        assert_eq!(err, VectorError::CapacityOverflow { requested: usize::MAX });
        assert_eq!(v.capacity(), 4);
        assert_eq!(v.data(), &[1, 2]);
    }

    #[test]
    fn try_reserve_grows() {
        let mut v = Vector::<u8>::new();
        v.try_reserve(16).unwrap();
        assert_eq!(v.capacity(), 16);
    }

    #[test]
    fn resize_past_capacity_reserves_headroom() {
        let mut v = Vector::from([1, 2]);
        v.resize(5);
        assert_eq!(v.size(), 5);
        assert_eq!(v.capacity(), 10);
        assert_eq!(v.data(), &[1, 2, 0, 0, 0]);
    }

    #[test]
    fn resize_within_capacity_keeps_buffer() {
        let mut v = Vector::from([1, 2, 3]);
        let ptr = v.as_ptr();
        v.resize(5);
        assert_eq!(v.as_ptr(), ptr);
        assert_eq!(v.capacity(), 6);
    }

    #[test]
    fn shrink_then_grow_exposes_defaults() {
        let mut v = Vector::from([1, 2, 3]);
        v.resize(1);
        assert_eq!(v.capacity(), 6);
        v.resize(3);
        assert_eq!(v.data(), &[1, 0, 0]);
    }

    #[test]
    fn resize_with_value_fills_only_growth() {
        let mut v = Vector::from([1, 2]);
        v.resize_with_value(4, 7);
        assert_eq!(v.data(), &[1, 2, 7, 7]);
        v.resize_with_value(1, 9);
        assert_eq!(v.data(), &[1]);
    }

    #[test]
    fn resize_with_value_on_empty() {
        let mut v = Vector::new();
        v.resize_with_value(3, 'z');
        assert_eq!(v.data(), &['z', 'z', 'z']);
        assert_eq!(v.capacity(), 6);
    }

    #[test]
    fn shrink_to_fit_matches_size() {
        let mut v = Vector::from([1, 2, 3]);
        v.shrink_to_fit();
        assert_eq!(v.capacity(), 3);
        assert_eq!(v.data(), &[1, 2, 3]);
    }

    #[test]
    fn shrink_to_fit_on_empty_releases() {
        let mut v = Vector::<i32>::with_size(0);
        v.reserve(4);
        v.shrink_to_fit();
        assert_eq!(v.capacity(), 0);
        assert!(!v.is_allocated());
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut v = Vector::from([1, 2, 3]);
        v.clear();
        assert_eq!(v.size(), 0);
        assert_eq!(v.capacity(), 6);
        v.clear();
        assert_eq!(v.capacity(), 6);
    }

    #[test]
    fn push_back_growth_sequence() {
        let mut v = Vector::new();
        let mut caps = Vec::new();
        for i in 0..5 {
            v.push_back(i);
            caps.push(v.capacity());
        }
        assert_eq!(caps, vec![2, 2, 4, 4, 8]);
    }

    #[test]
    fn push_back_cloned_growth_sequence() {
        let mut v = Vector::new();
        let mut caps = Vec::new();
        for i in 0..6 {
            v.push_back_cloned(&i);
            caps.push(v.capacity());
        }
        assert_eq!(caps, vec![2, 2, 3, 5, 5, 9]);
    }

    #[test]
    fn push_back_cloned_from_single_slot() {
        let mut v = Vector::with_value(1, 5);
        v.push_back_cloned(&6);
        assert_eq!(v.capacity(), 2);
        assert_eq!(v.data(), &[5, 6]);
    }

    #[test]
    fn push_after_clear_reuses_buffer() {
        let mut v = Vector::from([1, 2, 3]);
        let ptr = v.as_ptr();
        v.clear();
        v.push_back(4);
        assert_eq!(v.as_ptr(), ptr);
        assert_eq!(v.data(), &[4]);
    }

    #[test]
    fn pop_back_returns_last_and_releases_when_drained() {
        let mut v = Vector::from([1, 2]);
        assert_eq!(v.pop_back(), Some(2));
        assert_eq!(v.capacity(), 4);
        assert_eq!(v.pop_back(), Some(1));
        assert_eq!(v.capacity(), 0);
        assert!(!v.is_allocated());
        assert_eq!(v.pop_back(), None);
    }

    #[test]
    fn pop_back_after_clear_releases() {
        let mut v = Vector::from([1, 2]);
        v.clear();
        assert_eq!(v.pop_back(), None);
        assert_eq!(v.capacity(), 0);
    }

    #[test]
    fn take_leaves_source_empty() {
        let mut a = Vector::from([1, 2, 3]);
        let b = a.take();
        assert_eq!(b.data(), &[1, 2, 3]);
        assert_eq!(a.size(), 0);
        assert_eq!(a.capacity(), 0);
    }

    #[test]
    fn move_from_adopts_and_empties_source() {
        let mut a = Vector::from([9]);
        let mut b = Vector::from([1, 2, 3]);
        a.move_from(&mut b);
        assert_eq!(a.data(), &[1, 2, 3]);
        assert_eq!(a.capacity(), 6);
        assert_eq!(b.size(), 0);
        assert_eq!(b.capacity(), 0);
    }

    #[test]
    fn swap_exchanges_everything() {
        let mut a = Vector::from([1]);
        let mut b = Vector::with_size(3);
        a.swap(&mut b);
        assert_eq!(a.data(), &[0, 0, 0]);
        assert_eq!(a.capacity(), 3);
        assert_eq!(b.data(), &[1]);
        assert_eq!(b.capacity(), 2);
    }

    #[test]
    fn clone_keeps_capacity_and_is_independent() {
        let a = Vector::from([1, 2, 3]);
        let mut b = a.clone();
        assert_eq!(b.capacity(), a.capacity());
        b[0] = 100;
        assert_eq!(a[0], 1);
    }

    #[test]
    fn clone_from_replaces_contents() {
        let source = Vector::from([4, 5]);
        let mut target = Vector::with_size(10);
        target.clone_from(&source);
        assert_eq!(target.data(), &[4, 5]);
        assert_eq!(target.capacity(), 4);
    }

    #[test]
    fn into_vec_drops_dead_slots() {
        let v = Vector::from([1, 2, 3]);
        assert_eq!(v.into_vec(), vec![1, 2, 3]);
        assert_eq!(Vec::from(Vector::<u8>::new()), Vec::<u8>::new());
    }

    #[test]
    fn debug_lists_live_elements() {
        let mut v = Vector::from([1, 2, 3]);
        v.resize(2);
        assert_eq!(format!("{v:?}"), "[1, 2]");
    }

    #[test]
    fn range_indexing() {
        let v = Vector::from([1, 2, 3, 4]);
        assert_eq!(&v[1..3], &[2, 3]);
    }
}
