//! Owning handle over a vector's slot allocation.
//!
//! A [`Buffer`] owns zero or one contiguous allocation. Every slot in the
//! allocation holds a constructed `T` at all times: fresh allocations are
//! filled with `T::default()`, and elements only ever move between slots by
//! swapping. That keeps the whole module free of `unsafe` and lets the
//! allocation be released by dropping it.
//!
//! An empty allocation is never stored, so "has a buffer" and
//! "capacity > 0" are the same condition.

use std::iter;
use std::mem;

use crate::error::VectorError;

/// Exclusive owner of the slot storage.
pub(crate) struct Buffer<T> {
    slots: Option<Box<[T]>>,
}

impl<T> Buffer<T> {
    /// A handle that owns no allocation.
    pub(crate) const fn empty() -> Self {
        Self { slots: None }
    }

    /// Adopt a fully constructed slot slice.
    pub(crate) fn from_boxed(slots: Box<[T]>) -> Self {
        if slots.is_empty() {
            return Self::empty();
        }
        log::trace!("acquired buffer of {} slots", slots.len());
        Self { slots: Some(slots) }
    }

    /// Number of allocated slots.
    pub(crate) fn capacity(&self) -> usize {
        self.slots.as_ref().map_or(0, |slots| slots.len())
    }

    /// Whether an allocation is held.
    pub(crate) fn is_allocated(&self) -> bool {
        self.slots.is_some()
    }

    /// All slots, live or not.
    pub(crate) fn slots(&self) -> &[T] {
        self.slots.as_deref().unwrap_or(&[])
    }

    /// All slots, live or not.
    pub(crate) fn slots_mut(&mut self) -> &mut [T] {
        self.slots.as_deref_mut().unwrap_or(&mut [])
    }

    /// Start of the allocation, or null when none is held.
    pub(crate) fn as_ptr(&self) -> *const T {
        self.slots
            .as_ref()
            .map_or(std::ptr::null(), |slots| slots.as_ptr())
    }

    /// Start of the allocation, or null when none is held.
    pub(crate) fn as_mut_ptr(&mut self) -> *mut T {
        self.slots
            .as_mut()
            .map_or(std::ptr::null_mut(), |slots| slots.as_mut_ptr())
    }

    /// Drop every slot and give the allocation back.
    ///
    /// Idempotent: releasing an empty handle does nothing.
    pub(crate) fn release(&mut self) {
        if let Some(slots) = self.slots.take() {
            log::trace!("released buffer of {} slots", slots.len());
            drop(slots);
        }
    }

    /// Give up the allocation without dropping it.
    pub(crate) fn into_boxed(mut self) -> Option<Box<[T]>> {
        self.slots.take()
    }

    /// Move the first `count` elements into `target` and adopt it.
    ///
    /// The old allocation, now holding only default values in its first
    /// `count` slots, is released afterwards.
    ///
    /// # Panics
    ///
    /// Panics if either buffer has fewer than `count` slots.
    pub(crate) fn relocate(&mut self, count: usize, mut target: Buffer<T>) {
        let (old, new) = (self.capacity(), target.capacity());
        target.slots_mut()[..count].swap_with_slice(&mut self.slots_mut()[..count]);
        log::trace!("relocated {count} elements from {old} to {new} slots");
        mem::swap(self, &mut target);
        target.release();
    }
}

impl<T: Default> Buffer<T> {
    /// Allocate `capacity` slots, each holding `T::default()`.
    ///
    /// A capacity of zero allocates nothing.
    pub(crate) fn allocate(capacity: usize) -> Self {
        Self::from_boxed(iter::repeat_with(T::default).take(capacity).collect())
    }

    /// Fallible form of [`Buffer::allocate`].
    pub(crate) fn try_allocate(capacity: usize) -> Result<Self, VectorError> {
        let elem = mem::size_of::<T>();
        if elem != 0 && capacity > isize::MAX as usize / elem {
            return Err(VectorError::CapacityOverflow {
                requested: capacity,
            });
        }
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| VectorError::AllocFailed {
                requested: capacity,
            })?;
        slots.resize_with(capacity, T::default);
        Ok(Self::from_boxed(slots.into_boxed_slice()))
    }

    /// Allocate `capacity` slots whose leading slots come from `live`.
    ///
    /// Slots past the end of `live` hold `T::default()`. If `live` yields
    /// more than `capacity` items the surplus is ignored.
    pub(crate) fn with_leading<I>(capacity: usize, live: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_boxed(
            live.into_iter()
                .chain(iter::repeat_with(T::default))
                .take(capacity)
                .collect(),
        )
    }
}

impl<T> Drop for Buffer<T> {
    fn drop(&mut self) {
        self.release();
    }
}
