//! Copy-then-quicksort over raw element slots.
//!
//! Partitioning is Lomuto with the last element as pivot, so equal
//! elements are NOT guaranteed to keep their relative order. Recursion
//! is replaced by an explicit work-stack that always defers the larger
//! partition, bounding the stack depth at O(log n) even on adversarial
//! inputs.

use std::cmp::Ordering;

use smallvec::SmallVec;

use crate::error::VecError;
use crate::raw::RawBuffer;
use crate::vec::ByteVec;

impl ByteVec {
    /// Return a sorted copy of this vector; the source is untouched.
    ///
    /// `cmp` sees two borrowed element byte slices and returns their
    /// ordering. The sort is not stable. The comparator must not
    /// reenter the vector being sorted (the borrows enforce this).
    ///
    /// Returns [`VecError::AllocFailed`] if the output vector cannot be
    /// allocated.
    pub fn sorted<F>(&self, mut cmp: F) -> Result<ByteVec, VecError>
    where
        F: FnMut(&[u8], &[u8]) -> Ordering,
    {
        let mut out = ByteVec::new(self.element_size(), self.len())?;
        if self.is_empty() {
            return Ok(out);
        }
        out.copy_in_prefix(self);
        let live = out.len();
        quicksort(out.buf_mut(), live, &mut cmp);
        Ok(out)
    }
}

/// Iterative quicksort over the first `len` slots of `buf`.
fn quicksort<F>(buf: &mut RawBuffer, len: usize, cmp: &mut F)
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    // (lo, hi) half-open ranges still awaiting partitioning. The larger
    // side of each split is deferred, so the stack never holds more
    // than log2(len) ranges; the inline capacity covers any usize len.
    let mut pending: SmallVec<[(usize, usize); 64]> = SmallVec::new();
    pending.push((0, len));

    while let Some((lo, hi)) = pending.pop() {
        if hi - lo < 2 {
            continue;
        }
        let p = partition(buf, lo, hi, cmp);
        let left = (lo, p);
        let right = (p + 1, hi);
        if left.1 - left.0 < right.1 - right.0 {
            pending.push(right);
            pending.push(left);
        } else {
            pending.push(left);
            pending.push(right);
        }
    }
}

/// Lomuto partition of `[lo, hi)` around the last slot as pivot.
///
/// Elements ordered at-or-below the pivot move left; returns the
/// pivot's final position.
fn partition<F>(buf: &mut RawBuffer, lo: usize, hi: usize, cmp: &mut F) -> usize
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    let pivot = hi - 1;
    let mut boundary = lo;
    for j in lo..pivot {
        if cmp(buf.slot(j), buf.slot(pivot)) != Ordering::Greater {
            buf.swap_slots(boundary, j);
            boundary += 1;
        }
    }
    buf.swap_slots(boundary, pivot);
    boundary
}
