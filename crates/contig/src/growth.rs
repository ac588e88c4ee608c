//! Capacity growth policy.
//!
//! All growth targets used by [`Vector`](crate::Vector) are computed here.
//! The figures are fixed; there is no runtime configuration. Each function
//! returns `None` when the target would overflow `usize`.
//!
//! | trigger                                      | target          |
//! |----------------------------------------------|-----------------|
//! | push into an empty, unallocated vector       | `2`             |
//! | `push_back` (by value) when full             | `2 * size`      |
//! | `push_back_cloned` (by reference) when full  | `2 * size - 1`  |
//! | range construction of `n` elements           | `2 * n`         |
//! | `resize(n)` past capacity                    | `2 * n`         |

/// Capacity reserved by the first push into a vector with no buffer.
pub const INITIAL_PUSH_CAPACITY: usize = 2;

/// Multiplier applied to the occupied size when reserving headroom.
pub const HEADROOM_FACTOR: usize = 2;

/// Capacity for `n` occupied slots plus headroom.
///
/// Used by range construction and by `resize` when it outgrows the buffer.
pub fn headroom(n: usize) -> Option<usize> {
    n.checked_mul(HEADROOM_FACTOR)
}

/// Growth target for a full vector receiving an element by value.
pub fn move_push_target(size: usize) -> Option<usize> {
    if size == 0 {
        return Some(INITIAL_PUSH_CAPACITY);
    }
    size.checked_mul(HEADROOM_FACTOR)
}

/// Growth target for a full vector receiving a cloned element.
///
/// One slot smaller than [`move_push_target`] in general. A full vector of a
/// single element would get a target of `1`, which cannot hold the new
/// element, so the target never drops below `size + 1`.
pub fn copy_push_target(size: usize) -> Option<usize> {
    if size == 0 {
        return Some(INITIAL_PUSH_CAPACITY);
    }
    let target = size.checked_mul(HEADROOM_FACTOR)? - 1;
    Some(target.max(size + 1))
}
