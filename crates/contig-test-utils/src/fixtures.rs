//! Reusable vectors and a reference model of the growth policy.
//!
//! - [`ascending`]: `1..=n` built one `push_back` at a time.
//! - [`CapacityModel`]: predicts `size`/`capacity` after each operation,
//!   independently of the implementation under test.

use contig::Vector;

/// `[1, 2, ..., n]` built by repeated `push_back`.
pub fn ascending(n: i32) -> Vector<i32> {
    let mut v = Vector::new();
    for i in 1..=n {
        v.push_back(i);
    }
    v
}

/// Operations understood by [`CapacityModel`].
#[derive(Clone, Debug)]
pub enum Op {
    PushBack(i32),
    PushBackCloned(i32),
    PopBack,
    Reserve(usize),
    Resize(usize),
    ResizeWithValue(usize, i32),
    ShrinkToFit,
    Clear,
}

impl Op {
    /// Apply the operation to a real vector.
    pub fn apply(&self, v: &mut Vector<i32>) {
        match *self {
            Op::PushBack(x) => v.push_back(x),
            Op::PushBackCloned(x) => v.push_back_cloned(&x),
            Op::PopBack => {
                v.pop_back();
            }
            Op::Reserve(n) => v.reserve(n),
            Op::Resize(n) => v.resize(n),
            Op::ResizeWithValue(n, x) => v.resize_with_value(n, x),
            Op::ShrinkToFit => v.shrink_to_fit(),
            Op::Clear => v.clear(),
        }
    }
}

/// Straight-line restatement of the container's observable behaviour:
/// elements in a `Vec`, capacity as a plain number.
#[derive(Clone, Debug, Default)]
pub struct CapacityModel {
    pub elements: Vec<i32>,
    pub capacity: usize,
}

impl CapacityModel {
    pub fn apply(&mut self, op: &Op) {
        let size = self.elements.len();
        match *op {
            Op::PushBack(x) => {
                if size == self.capacity {
                    self.capacity = if size == 0 { 2 } else { 2 * size };
                }
                self.elements.push(x);
            }
            Op::PushBackCloned(x) => {
                if size == self.capacity {
                    self.capacity = match size {
                        0 => 2,
                        1 => 2,
                        _ => 2 * size - 1,
                    };
                }
                self.elements.push(x);
            }
            Op::PopBack => {
                self.elements.pop();
                if self.elements.is_empty() {
                    self.capacity = 0;
                }
            }
            Op::Reserve(n) => self.capacity = self.capacity.max(n),
            Op::Resize(n) => {
                if n > self.capacity {
                    self.capacity = 2 * n;
                }
                self.elements.resize(n, 0);
            }
            Op::ResizeWithValue(n, x) => {
                if n > self.capacity {
                    self.capacity = 2 * n;
                }
                self.elements.resize(n, x);
            }
            Op::ShrinkToFit => self.capacity = size,
            Op::Clear => self.elements.clear(),
        }
    }
}
