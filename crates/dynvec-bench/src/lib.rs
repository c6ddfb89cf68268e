//! Benchmark input builders for the dynvec workspace.
//!
//! Provides deterministic integer workloads at several sizes and
//! orderings so the benches compare like against like across runs.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dynvec::prelude::*;

/// `n` deterministic pseudo-random values (one LCG step per index; no
/// external RNG needed for reproducible inputs).
pub fn scrambled(n: usize, seed: u64) -> Vec<i32> {
    let mut state = seed | 1;
    (0..n)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (state >> 33) as i32
        })
        .collect()
}

/// Build a `TypedVec<i32>` from a value slice.
pub fn int_vec(values: &[i32]) -> TypedVec<i32> {
    let mut v = TypedVec::new(values.len()).expect("bench allocation");
    for &x in values {
        v.push(x).expect("bench push");
    }
    v
}

/// Already-ascending input of length `n` — the Lomuto worst case.
pub fn ascending(n: usize) -> Vec<i32> {
    (0..n as i32).collect()
}

/// Strictly descending input of length `n`.
pub fn descending(n: usize) -> Vec<i32> {
    (0..n as i32).rev().collect()
}
