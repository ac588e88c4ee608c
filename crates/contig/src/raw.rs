//! Unchecked element access.
//!
//! The only module in the crate allowed to use `unsafe`. Each `unsafe`
//! block carries a `// SAFETY:` comment stating the caller obligation it
//! relies on.

#![allow(unsafe_code)]

use crate::vector::Vector;

impl<T> Vector<T> {
    /// Element at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`size()`](Vector::size). An index into the
    /// allocated-but-dead tail is still undefined behaviour as far as this
    /// API is concerned, even though the slot is initialised.
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.size(), "get_unchecked: {index} >= {}", self.size());
        // SAFETY: caller guarantees index < size, and data() is exactly
        // size elements long.
        unsafe { self.data().get_unchecked(index) }
    }

    /// Mutable element at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`size()`](Vector::size).
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.size(), "get_unchecked_mut: {index} >= {}", self.size());
        // SAFETY: caller guarantees index < size, and data_mut() is exactly
        // size elements long.
        unsafe { self.data_mut().get_unchecked_mut(index) }
    }
}
