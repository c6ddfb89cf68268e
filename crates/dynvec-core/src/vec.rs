//! The erased container: length bookkeeping and indexed mutators.

use crate::error::VecError;
use crate::raw::RawBuffer;

/// Minimum slot capacity of a freshly constructed vector.
///
/// Construction allocates `max(default_capacity, DEFAULT_CAPACITY)`
/// slots, so small or zero capacity hints still leave headroom before
/// the first growth.
pub const DEFAULT_CAPACITY: usize = 10;

/// A type-erased dynamic array of fixed-width elements.
///
/// The element width is chosen at construction and never changes.
/// Elements are stored and retrieved by value copy: `push`/`insert`
/// copy caller bytes in, and `get`/`pop`/`remove` hand back owned
/// copies that never alias the buffer.
///
/// Invariants upheld across every operation and failure path:
///
/// - `len() <= capacity()`
/// - the backing buffer holds exactly `capacity() * element_size()` bytes
/// - a failed growth leaves length, capacity, and contents untouched
pub struct ByteVec {
    buf: RawBuffer,
    length: usize,
}

impl ByteVec {
    /// Create an empty vector for `element_size`-byte elements with at
    /// least `default_capacity` slots (floored at [`DEFAULT_CAPACITY`]).
    ///
    /// Returns [`VecError::AllocFailed`] if the buffer cannot be
    /// allocated; no vector exists in that case.
    ///
    /// # Panics
    ///
    /// Panics if `element_size` is zero.
    pub fn new(element_size: usize, default_capacity: usize) -> Result<Self, VecError> {
        let capacity = default_capacity.max(DEFAULT_CAPACITY);
        Ok(Self {
            buf: RawBuffer::new(element_size, capacity)?,
            length: 0,
        })
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Whether the vector holds no elements.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Number of element slots currently allocated.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Fixed byte width of one element.
    pub fn element_size(&self) -> usize {
        self.buf.element_size()
    }

    /// Append a copy of `element`.
    ///
    /// Doubles the capacity first when the vector is full. If that
    /// growth fails, [`VecError::ReallocFailed`] is returned and the
    /// vector keeps its prior capacity with the element not appended.
    ///
    /// # Panics
    ///
    /// Panics if `element.len() != element_size()`.
    pub fn push(&mut self, element: &[u8]) -> Result<(), VecError> {
        self.assert_width(element);
        if self.length == self.buf.capacity() {
            self.buf.grow_double()?;
        }
        self.buf.write_slot(self.length, element);
        self.length += 1;
        Ok(())
    }

    /// Remove and return a copy of the last element.
    ///
    /// Returns [`VecError::IllegalDelete`] on an empty vector.
    pub fn pop(&mut self) -> Result<Box<[u8]>, VecError> {
        if self.length == 0 {
            return Err(VecError::IllegalDelete);
        }
        self.length -= 1;
        Ok(self.copy_out(self.length))
    }

    /// Insert a copy of `element` at `index`, shifting later elements
    /// one slot right. `index == len()` appends.
    ///
    /// Returns [`VecError::OutOfBounds`] for `index > len()`, or
    /// [`VecError::ReallocFailed`] if a required growth fails (the
    /// vector is left untouched).
    ///
    /// # Panics
    ///
    /// Panics if `element.len() != element_size()`.
    pub fn insert(&mut self, element: &[u8], index: usize) -> Result<(), VecError> {
        self.assert_width(element);
        if index > self.length {
            return Err(VecError::OutOfBounds {
                index,
                len: self.length,
            });
        }
        if self.length == self.buf.capacity() {
            self.buf.grow_double()?;
        }
        self.buf.shift_right(index, self.length);
        self.buf.write_slot(index, element);
        self.length += 1;
        Ok(())
    }

    /// Remove the element at `index`, shifting later elements one slot
    /// left, and return a copy of it.
    ///
    /// Returns [`VecError::IllegalDelete`] on an empty vector and
    /// [`VecError::OutOfBounds`] for `index >= len()`.
    pub fn remove(&mut self, index: usize) -> Result<Box<[u8]>, VecError> {
        if self.length == 0 {
            return Err(VecError::IllegalDelete);
        }
        if index >= self.length {
            return Err(VecError::OutOfBounds {
                index,
                len: self.length,
            });
        }
        let out = self.copy_out(index);
        self.buf.shift_left(index, self.length);
        self.length -= 1;
        Ok(out)
    }

    /// Return a copy of the element at `index`.
    ///
    /// Check order matches the removal path: an empty vector yields
    /// [`VecError::IllegalAccess`] (distinct from out-of-bounds), then
    /// `index >= len()` yields [`VecError::OutOfBounds`].
    pub fn get(&self, index: usize) -> Result<Box<[u8]>, VecError> {
        if self.length == 0 {
            return Err(VecError::IllegalAccess);
        }
        if index >= self.length {
            return Err(VecError::OutOfBounds {
                index,
                len: self.length,
            });
        }
        Ok(self.copy_out(index))
    }

    /// Return a copy of the first element.
    pub fn first(&self) -> Result<Box<[u8]>, VecError> {
        self.get(0)
    }

    /// Return a copy of the last element.
    pub fn last(&self) -> Result<Box<[u8]>, VecError> {
        if self.length == 0 {
            return Err(VecError::IllegalAccess);
        }
        self.get(self.length - 1)
    }

    /// Borrowed view of the element at `index`. Crate-internal: the
    /// public surface only ever hands out copies.
    pub(crate) fn slot_view(&self, index: usize) -> &[u8] {
        self.buf.slot(index)
    }

    pub(crate) fn buf_mut(&mut self) -> &mut RawBuffer {
        &mut self.buf
    }

    pub(crate) fn copy_in_prefix(&mut self, src: &ByteVec) {
        self.buf.copy_prefix_from(&src.buf, src.length);
        self.length = src.length;
    }

    fn copy_out(&self, index: usize) -> Box<[u8]> {
        self.buf.slot(index).to_vec().into_boxed_slice()
    }

    fn assert_width(&self, element: &[u8]) {
        assert_eq!(
            element.len(),
            self.buf.element_size(),
            "element width must match the vector's element_size"
        );
    }
}

/// Explicitly tear down a vector held through a nullable handle.
///
/// `None` yields [`VecError::NullVec`]; `Some(v)` releases the vector's
/// buffer and succeeds. Because the vector is consumed, a destroyed
/// handle cannot be reused and double destruction does not compile.
pub fn destroy(v: Option<ByteVec>) -> Result<(), VecError> {
    match v {
        None => Err(VecError::NullVec),
        Some(v) => {
            drop(v);
            Ok(())
        }
    }
}
