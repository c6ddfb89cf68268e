//! Derived algorithms that build a new vector from an existing one:
//! element-wise map, reversal, and slicing.
//!
//! All three leave the source untouched and never surface a partial
//! output: on any internal failure the half-built vector is dropped and
//! the first error propagates.

use crate::error::VecError;
use crate::vec::ByteVec;

impl ByteVec {
    /// Transform every element into a new vector of
    /// `out_element_size`-wide elements.
    ///
    /// `f` is invoked once per source element in index order with the
    /// source bytes and a zeroed output slot to fill. The output has
    /// the same length and element order as the source; the element
    /// width may differ.
    ///
    /// # Panics
    ///
    /// Panics if `out_element_size` is zero.
    pub fn map<F>(&self, out_element_size: usize, mut f: F) -> Result<ByteVec, VecError>
    where
        F: FnMut(&[u8], &mut [u8]),
    {
        let mut out = ByteVec::new(out_element_size, self.len())?;
        let mut slot = vec![0u8; out_element_size];
        for i in 0..self.len() {
            slot.fill(0);
            f(self.slot_view(i), &mut slot);
            out.push(&slot)?;
        }
        Ok(out)
    }

    /// New vector holding this vector's elements in strictly reverse
    /// index order. An empty source yields an empty output.
    pub fn reversed(&self) -> Result<ByteVec, VecError> {
        let mut out = ByteVec::new(self.element_size(), self.len())?;
        for i in (0..self.len()).rev() {
            out.push(self.slot_view(i))?;
        }
        Ok(out)
    }

    /// Copy a sub-range into a new vector.
    ///
    /// Three regimes, selected by comparing `begin` and `end`:
    ///
    /// - `begin < end`: forward half-open copy of indices
    ///   `[begin, end)`.
    /// - `begin > end`: descending copy of indices `begin, begin - 1,
    ///   …, end` — INCLUSIVE of `end`, unlike the forward case.
    /// - `begin == end`: an empty vector.
    ///
    /// `begin` and `end` must not exceed `len()`, and in the descending
    /// regime `begin` must itself be a live index; violations yield
    /// [`VecError::IllegalAccess`].
    pub fn subvec(&self, begin: usize, end: usize) -> Result<ByteVec, VecError> {
        if begin > self.len() || end > self.len() {
            return Err(VecError::IllegalAccess);
        }
        match begin.cmp(&end) {
            std::cmp::Ordering::Equal => ByteVec::new(self.element_size(), 0),
            std::cmp::Ordering::Less => {
                let mut out = ByteVec::new(self.element_size(), end - begin)?;
                for i in begin..end {
                    out.push(self.slot_view(i))?;
                }
                Ok(out)
            }
            std::cmp::Ordering::Greater => {
                if begin >= self.len() {
                    return Err(VecError::IllegalAccess);
                }
                let mut out = ByteVec::new(self.element_size(), begin - end + 1)?;
                for i in (end..=begin).rev() {
                    out.push(self.slot_view(i))?;
                }
                Ok(out)
            }
        }
    }
}
