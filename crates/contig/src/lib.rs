//! A contiguous, growable sequence container with explicit capacity control.
//!
//! [`Vector<T>`] owns a single buffer of slots, tracks how many of them are
//! live (`size`) and how many are allocated (`capacity`), and grows by fixed,
//! documented targets rather than an opaque amortisation strategy.
//!
//! # Architecture
//!
//! ```text
//! Vector<T>
//! ├── Buffer<T>   (owning handle: zero or one Box<[T]>, default-filled)
//! ├── size        (live prefix of the buffer)
//! ├── growth      (reservation targets for push, resize, range construction)
//! ├── cmp         (equality and the size-aware ordering rule)
//! ├── iter        (forward/reverse, borrowed/owned traversal)
//! └── raw         (unchecked access; the only unsafe code)
//! ```
//!
//! # Capacity policies
//!
//! - **Range construction** (`from_slice`, `From<Vec<T>>`, `collect`,
//!   [`vector!`]) reserves twice the element count.
//! - **`push_back`** (by value) grows a full vector to `2 * size`;
//!   **`push_back_cloned`** (by reference) to `2 * size - 1`.
//! - **`clear`** keeps the buffer; **`pop_back`** releases it as soon as the
//!   vector is empty.
//!
//! # Failure safety
//!
//! All element storage is fully initialised, so a panic from `T::clone` or
//! `T::default` during construction, assignment or reallocation unwinds
//! through ordinary drops: the partially built buffer is freed and the
//! vector being modified is left as it was.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

mod buffer;
pub mod cmp;
pub mod error;
pub mod growth;
pub mod iter;
mod raw;
pub mod vector;

// Public re-exports for the primary API surface.
pub use error::VectorError;
pub use iter::IntoIter;
pub use vector::Vector;

/// Build a [`Vector`] from a list of elements or a repeated value.
///
/// `vector![a, b, c]` is range construction over the listed elements, so
/// the capacity is twice their count. `vector![value; n]` clones `value`
/// into exactly `n` slots.
///
/// ```
/// use contig::vector;
///
/// let v = vector![1, 2, 3];
/// assert_eq!(v.capacity(), 6);
///
/// let w = vector![0u8; 4];
/// assert_eq!(w.capacity(), 4);
/// ```
#[macro_export]
macro_rules! vector {
    () => {
        $crate::Vector::new()
    };
    ($value:expr; $n:expr) => {
        $crate::Vector::with_value($n, $value)
    };
    ($($item:expr),+ $(,)?) => {
        $crate::Vector::from([$($item),+])
    };
}
