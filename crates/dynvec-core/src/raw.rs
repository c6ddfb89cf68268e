//! Low-level buffer engine: allocation, doubling growth, block shifts.
//!
//! A [`RawBuffer`] owns exactly `capacity * element_size` bytes of
//! zero-initialised storage and knows nothing about how many slots are
//! live — length bookkeeping belongs to [`ByteVec`](crate::ByteVec).
//! Allocation failures surface as [`VecError`] values via
//! `try_reserve_exact`; the buffer never panics on out-of-memory.

use crate::error::VecError;

/// A contiguous, exclusively-owned region of fixed-width element slots.
///
/// Slot `i` occupies the byte range `[i * element_size, (i + 1) *
/// element_size)`. The backing storage is allocated to full capacity at
/// creation and only ever replaced wholesale by
/// [`RawBuffer::grow_double`]; a failed growth leaves the prior storage
/// fully intact.
pub struct RawBuffer {
    /// Backing storage. Always exactly `capacity * element_size` bytes.
    data: Vec<u8>,
    /// Fixed byte width of one element slot.
    element_size: usize,
}

impl RawBuffer {
    /// Allocate a buffer with `capacity` slots of `element_size` bytes.
    ///
    /// Returns [`VecError::AllocFailed`] if the allocation cannot be
    /// satisfied (including a byte count that overflows `usize`).
    ///
    /// # Panics
    ///
    /// Panics if `element_size` is zero.
    pub fn new(element_size: usize, capacity: usize) -> Result<Self, VecError> {
        assert!(element_size > 0, "element_size must be non-zero");
        let bytes = capacity
            .checked_mul(element_size)
            .ok_or(VecError::AllocFailed)?;
        let mut data = Vec::new();
        data.try_reserve_exact(bytes)
            .map_err(|_| VecError::AllocFailed)?;
        data.resize(bytes, 0);
        Ok(Self { data, element_size })
    }

    /// Byte width of one element slot.
    pub fn element_size(&self) -> usize {
        self.element_size
    }

    /// Number of element slots currently allocated.
    pub fn capacity(&self) -> usize {
        self.data.len() / self.element_size
    }

    /// Shared view of slot `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= capacity`.
    pub fn slot(&self, i: usize) -> &[u8] {
        let start = i * self.element_size;
        &self.data[start..start + self.element_size]
    }

    /// Mutable view of slot `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= capacity`.
    pub fn slot_mut(&mut self, i: usize) -> &mut [u8] {
        let start = i * self.element_size;
        &mut self.data[start..start + self.element_size]
    }

    /// Copy `element` into slot `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= capacity` or `element.len() != element_size`.
    pub fn write_slot(&mut self, i: usize, element: &[u8]) {
        assert_eq!(
            element.len(),
            self.element_size,
            "element width must match the buffer's element_size"
        );
        self.slot_mut(i).copy_from_slice(element);
    }

    /// Double the slot capacity, preserving existing contents.
    ///
    /// Returns [`VecError::ReallocFailed`] if the larger allocation
    /// cannot be satisfied; in that case capacity and contents are
    /// unchanged.
    pub fn grow_double(&mut self) -> Result<(), VecError> {
        let additional = self.data.len();
        self.data
            .try_reserve_exact(additional)
            .map_err(|_| VecError::ReallocFailed)?;
        self.data.resize(additional * 2, 0);
        Ok(())
    }

    /// Shift slots `[index, live)` one slot to the right.
    ///
    /// Used by insert to open a hole at `index` when `live` slots are
    /// occupied. Requires a free slot at position `live`.
    ///
    /// # Panics
    ///
    /// Panics if `live >= capacity` or `index > live`.
    pub fn shift_right(&mut self, index: usize, live: usize) {
        let es = self.element_size;
        self.data
            .copy_within(index * es..live * es, (index + 1) * es);
    }

    /// Shift slots `[index + 1, live)` one slot to the left.
    ///
    /// Used by remove to close the hole left at `index` when `live`
    /// slots were occupied before the removal.
    ///
    /// # Panics
    ///
    /// Panics if `live > capacity` or `index >= live`.
    pub fn shift_left(&mut self, index: usize, live: usize) {
        let es = self.element_size;
        self.data.copy_within((index + 1) * es..live * es, index * es);
    }

    /// Swap the contents of slots `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is `>= capacity`.
    pub fn swap_slots(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let es = self.element_size;
        for k in 0..es {
            self.data.swap(i * es + k, j * es + k);
        }
    }

    /// Copy the live prefix of `src` into this buffer.
    ///
    /// # Panics
    ///
    /// Panics if the element sizes differ or `live` exceeds either
    /// capacity.
    pub fn copy_prefix_from(&mut self, src: &RawBuffer, live: usize) {
        assert_eq!(self.element_size, src.element_size);
        let bytes = live * self.element_size;
        self.data[..bytes].copy_from_slice(&src.data[..bytes]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_allocates_zeroed_slots() {
        let buf = RawBuffer::new(4, 8).unwrap();
        assert_eq!(buf.capacity(), 8);
        assert_eq!(buf.element_size(), 4);
        assert!(buf.slot(0).iter().all(|&b| b == 0));
        assert!(buf.slot(7).iter().all(|&b| b == 0));
    }

    #[test]
    fn slots_are_disjoint_fixed_width_ranges() {
        let mut buf = RawBuffer::new(2, 4).unwrap();
        buf.write_slot(0, &[1, 2]);
        buf.write_slot(1, &[3, 4]);
        assert_eq!(buf.slot(0), &[1, 2]);
        assert_eq!(buf.slot(1), &[3, 4]);
        assert_eq!(buf.slot(2), &[0, 0]);
    }

    #[test]
    fn grow_double_preserves_contents() {
        let mut buf = RawBuffer::new(2, 2).unwrap();
        buf.write_slot(0, &[9, 9]);
        buf.write_slot(1, &[8, 8]);
        buf.grow_double().unwrap();
        assert_eq!(buf.capacity(), 4);
        assert_eq!(buf.slot(0), &[9, 9]);
        assert_eq!(buf.slot(1), &[8, 8]);
        assert_eq!(buf.slot(2), &[0, 0]);
    }

    #[test]
    fn shift_right_opens_a_hole() {
        let mut buf = RawBuffer::new(1, 4).unwrap();
        buf.write_slot(0, &[10]);
        buf.write_slot(1, &[20]);
        buf.write_slot(2, &[30]);
        buf.shift_right(1, 3);
        // Slot 1 still holds its old bytes; slots 2 and 3 carry the shifted pair.
        assert_eq!(buf.slot(2), &[20]);
        assert_eq!(buf.slot(3), &[30]);
        assert_eq!(buf.slot(0), &[10]);
    }

    #[test]
    fn shift_left_closes_a_hole() {
        let mut buf = RawBuffer::new(1, 4).unwrap();
        buf.write_slot(0, &[10]);
        buf.write_slot(1, &[20]);
        buf.write_slot(2, &[30]);
        buf.shift_left(0, 3);
        assert_eq!(buf.slot(0), &[20]);
        assert_eq!(buf.slot(1), &[30]);
    }

    #[test]
    fn swap_slots_exchanges_contents() {
        let mut buf = RawBuffer::new(3, 2).unwrap();
        buf.write_slot(0, &[1, 2, 3]);
        buf.write_slot(1, &[7, 8, 9]);
        buf.swap_slots(0, 1);
        assert_eq!(buf.slot(0), &[7, 8, 9]);
        assert_eq!(buf.slot(1), &[1, 2, 3]);
    }

    #[test]
    fn overflowing_byte_count_is_alloc_failure() {
        let result = RawBuffer::new(usize::MAX, 2);
        assert_eq!(result.err(), Some(VecError::AllocFailed));
    }

    #[test]
    #[should_panic(expected = "element_size must be non-zero")]
    fn zero_element_size_is_a_contract_violation() {
        let _ = RawBuffer::new(0, 10);
    }

    #[test]
    #[should_panic(expected = "element width")]
    fn wrong_width_write_is_a_contract_violation() {
        let mut buf = RawBuffer::new(4, 2).unwrap();
        buf.write_slot(0, &[1, 2]);
    }
}
