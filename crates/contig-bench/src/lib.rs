//! Workloads and input generators for benchmarking `contig`.
//!
//! - [`filled_by_push`]: a vector built element by element, by value.
//! - [`filled_by_cloned_push`]: the same, through the by-reference push.
//! - [`scrambled`]: deterministic pseudo-random input via a seeded hash.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use contig::Vector;

/// Build `[0, n)` with `push_back`.
pub fn filled_by_push(n: u64) -> Vector<u64> {
    let mut v = Vector::new();
    for i in 0..n {
        v.push_back(i);
    }
    v
}

/// Build `[0, n)` with `push_back_cloned`.
pub fn filled_by_cloned_push(n: u64) -> Vector<u64> {
    let mut v = Vector::new();
    for i in 0..n {
        v.push_back_cloned(&i);
    }
    v
}

/// `n` deterministic pseudo-random values in `0..modulus`.
///
/// Uses a splitmix64 step per element, so the same `seed` always produces
/// the same sequence.
pub fn scrambled(n: usize, modulus: u64, seed: u64) -> Vec<u64> {
    let mut state = seed;
    (0..n)
        .map(|_| {
            state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
            let mut z = state;
            z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
            (z ^ (z >> 31)) % modulus.max(1)
        })
        .collect()
}
