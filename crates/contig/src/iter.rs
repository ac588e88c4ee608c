//! Traversal over the live elements of a [`Vector`].
//!
//! Borrowing iterators are the slice iterators over `[0, size)`; the
//! borrow checker rules out using one across an operation that could
//! reallocate or resize.

use std::iter::{FusedIterator, Rev};
use std::slice;
use std::vec;

use crate::vector::Vector;

impl<T> Vector<T> {
    /// Front-to-back iterator over the live elements.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data().iter()
    }

    /// Front-to-back iterator yielding mutable references.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.data_mut().iter_mut()
    }

    /// Back-to-front iterator over the live elements.
    pub fn iter_rev(&self) -> Rev<slice::Iter<'_, T>> {
        self.iter().rev()
    }

    /// Back-to-front iterator yielding mutable references.
    pub fn iter_rev_mut(&mut self) -> Rev<slice::IterMut<'_, T>> {
        self.iter_mut().rev()
    }
}

/// Owning iterator returned by `Vector::into_iter`.
///
/// Yields only the live elements; the dead tail of the buffer is dropped
/// when the iterator is created.
#[derive(Debug)]
pub struct IntoIter<T> {
    inner: vec::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.into_vec().into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Range construction: collects first to learn the length, then reserves
/// twice that, like [`Vector::from_slice`].
impl<T: Default> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

/// Appends with [`Vector::push_back`], so growth follows the by-value policy.
impl<T: Default> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

/// Appends with [`Vector::push_back_cloned`], so growth follows the
/// by-reference policy.
impl<'a, T: Clone + Default + 'a> Extend<&'a T> for Vector<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back_cloned(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{vector, Vector};

    #[test]
    fn forward_and_reverse() {
        let v = vector![1, 2, 3];
        assert_eq!(v.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(v.iter_rev().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn iteration_stops_at_size_not_capacity() {
        let mut v = vector![1, 2, 3];
        v.reserve(50);
        v.resize(2);
        assert_eq!(v.iter().count(), 2);
        assert_eq!(v.iter_rev().next(), Some(&2));
    }

    #[test]
    fn mutable_iteration() {
        let mut v = vector![1, 2, 3];
        for x in &mut v {
            *x *= 10;
        }
        for (i, x) in v.iter_rev_mut().enumerate() {
            *x += i as i32;
        }
        assert_eq!(v, [12, 21, 30]);
    }

    #[test]
    fn owned_iteration_is_double_ended() {
        let v = vector![String::from("a"), String::from("b"), String::from("c")];
        let mut it = v.into_iter();
        assert_eq!(it.len(), 3);
        assert_eq!(it.next_back().as_deref(), Some("c"));
        assert_eq!(it.next().as_deref(), Some("a"));
        assert_eq!(it.collect::<Vec<_>>(), vec!["b"]);
    }

    #[test]
    fn collect_reserves_headroom() {
        let v: Vector<u32> = (1..=4).collect();
        assert_eq!(v.size(), 4);
        assert_eq!(v.capacity(), 8);
        assert_eq!(v, [1, 2, 3, 4]);
    }

    #[test]
    fn extend_by_value_and_by_reference() {
        let mut by_value: Vector<i32> = Vector::new();
        by_value.extend([1, 2, 3]);
        assert_eq!(by_value.capacity(), 4);

        let mut by_ref: Vector<i32> = Vector::new();
        by_ref.extend(&[1, 2, 3]);
        assert_eq!(by_ref.capacity(), 3);
        assert_eq!(by_value, by_ref);
    }
}
