//! Equality and ordering between vectors.
//!
//! Equality is the usual element-wise comparison. Ordering is not plain
//! lexicographic when the sizes differ; the `PartialOrd` impl on [`Vector`]
//! documents the exact rule. Because
//! that rule is not transitive, `Vector` implements `PartialOrd` but never
//! `Ord`.

use std::cmp::Ordering;

use crate::vector::Vector;

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.size() != other.size() {
            return false;
        }
        !self.data().iter().zip(other.data()).any(|(a, b)| a != b)
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: PartialEq> PartialEq<[T]> for Vector<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.data() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Vector<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.data() == other.as_slice()
    }
}

/// `<` and `>` are computed independently:
///
/// - both empty: neither holds;
/// - exactly one empty: the non-empty vector is greater;
/// - same size: strict lexicographic comparison;
/// - different sizes: only the overlapping prefix is scanned. The shorter
///   vector is the smaller one, unless some prefix position has the shorter
///   vector's element strictly greater than the longer one's, in which case
///   it is the greater one.
///
/// The last case differs from slice ordering: `[1, 9] > [2, 0, 0]` here,
/// because `9 > 0` at index 1, while slices would order by index 0.
///
/// `<=` and `>=` are `==` or the respective strict comparison.
impl<T: PartialOrd> PartialOrd for Vector<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if less(self.data(), other.data()) {
            Some(Ordering::Less)
        } else if greater(self.data(), other.data()) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }

    fn lt(&self, other: &Self) -> bool {
        less(self.data(), other.data())
    }

    fn gt(&self, other: &Self) -> bool {
        greater(self.data(), other.data())
    }

    fn le(&self, other: &Self) -> bool {
        self == other || less(self.data(), other.data())
    }

    fn ge(&self, other: &Self) -> bool {
        self == other || greater(self.data(), other.data())
    }
}

fn less<T: PartialOrd>(lhs: &[T], rhs: &[T]) -> bool {
    match (lhs.is_empty(), rhs.is_empty()) {
        (true, true) | (false, true) => return false,
        (true, false) => return true,
        (false, false) => {}
    }
    if lhs.len() == rhs.len() {
        return lexicographic(lhs, rhs, |a, b| a < b);
    }
    let mut prefix = lhs.iter().zip(rhs);
    if lhs.len() < rhs.len() {
        !prefix.any(|(a, b)| a > b)
    } else {
        prefix.any(|(a, b)| a < b)
    }
}

fn greater<T: PartialOrd>(lhs: &[T], rhs: &[T]) -> bool {
    match (lhs.is_empty(), rhs.is_empty()) {
        (true, true) | (true, false) => return false,
        (false, true) => return true,
        (false, false) => {}
    }
    if lhs.len() == rhs.len() {
        return lexicographic(lhs, rhs, |a, b| a > b);
    }
    let mut prefix = lhs.iter().zip(rhs);
    if lhs.len() < rhs.len() {
        prefix.any(|(a, b)| a > b)
    } else {
        !prefix.any(|(a, b)| a < b)
    }
}

/// True if `lhs` precedes `rhs` under `before`: at the first position where
/// one element is `before` the other, `lhs` wins iff its element is the
/// earlier one. Elements unordered in both directions count as tied.
fn lexicographic<T>(lhs: &[T], rhs: &[T], before: impl Fn(&T, &T) -> bool) -> bool {
    for (a, b) in lhs.iter().zip(rhs) {
        if before(a, b) {
            return true;
        }
        if before(b, a) {
            return false;
        }
    }
    false
}
