//! `TypedVec<T>`: the typed wrapper over the erased core.
//!
//! The wrapper performs exactly one job per call: box the typed value
//! into a slot-width byte buffer on the way in, and unbox the slot
//! bytes on the way out. Every invariant (growth, bounds, check order,
//! teardown-on-failure) lives in the core.

use std::cmp::Ordering;
use std::io::{self, Write};
use std::marker::PhantomData;

use dynvec_core::{render, ByteVec, VecError};
use smallvec::SmallVec;

use crate::element::Element;

/// Slot-width scratch for boxing a single element; inline capacity
/// covers every primitive codec (the widest is 16 bytes).
type SlotBuf = SmallVec<[u8; 16]>;

fn boxed<T: Element>(value: T) -> SlotBuf {
    let mut slot = SlotBuf::from_elem(0, T::WIDTH);
    value.write_to(&mut slot);
    slot
}

/// A dynamic array of `T`, backed by the type-erased [`ByteVec`].
pub struct TypedVec<T: Element> {
    inner: ByteVec,
    _marker: PhantomData<T>,
}

impl<T: Element> TypedVec<T> {
    /// Create an empty vector with at least `default_capacity` slots
    /// (floored at [`dynvec_core::DEFAULT_CAPACITY`]).
    pub fn new(default_capacity: usize) -> Result<Self, VecError> {
        Ok(Self::from_erased(ByteVec::new(T::WIDTH, default_capacity)?))
    }

    fn from_erased(inner: ByteVec) -> Self {
        debug_assert_eq!(inner.element_size(), T::WIDTH);
        Self {
            inner,
            _marker: PhantomData,
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the vector holds no elements.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Number of element slots currently allocated.
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Append `value`.
    pub fn push(&mut self, value: T) -> Result<(), VecError> {
        self.inner.push(&boxed(value))
    }

    /// Remove and return the last element.
    pub fn pop(&mut self) -> Result<T, VecError> {
        self.inner.pop().map(|bytes| T::read_from(&bytes))
    }

    /// Insert `value` at `index`, shifting later elements right.
    pub fn insert(&mut self, value: T, index: usize) -> Result<(), VecError> {
        self.inner.insert(&boxed(value), index)
    }

    /// Remove and return the element at `index`.
    pub fn remove(&mut self, index: usize) -> Result<T, VecError> {
        self.inner.remove(index).map(|bytes| T::read_from(&bytes))
    }

    /// Copy out the element at `index`.
    pub fn get(&self, index: usize) -> Result<T, VecError> {
        self.inner.get(index).map(|bytes| T::read_from(&bytes))
    }

    /// Copy out the first element.
    pub fn first(&self) -> Result<T, VecError> {
        self.inner.first().map(|bytes| T::read_from(&bytes))
    }

    /// Copy out the last element.
    pub fn last(&self) -> Result<T, VecError> {
        self.inner.last().map(|bytes| T::read_from(&bytes))
    }

    /// Transform every element into a new `TypedVec<U>`, preserving
    /// length and order. The source is untouched.
    pub fn map<U, F>(&self, mut f: F) -> Result<TypedVec<U>, VecError>
    where
        U: Element,
        F: FnMut(T) -> U,
    {
        let mapped = self
            .inner
            .map(U::WIDTH, |src, dst| f(T::read_from(src)).write_to(dst))?;
        Ok(TypedVec::from_erased(mapped))
    }

    /// Sorted copy using a typed comparator; not stable.
    pub fn sorted_by<F>(&self, mut cmp: F) -> Result<TypedVec<T>, VecError>
    where
        F: FnMut(T, T) -> Ordering,
    {
        let sorted = self
            .inner
            .sorted(|a, b| cmp(T::read_from(a), T::read_from(b)))?;
        Ok(TypedVec::from_erased(sorted))
    }

    /// Sorted copy in the element's natural order.
    pub fn sorted(&self) -> Result<TypedVec<T>, VecError>
    where
        T: Ord,
    {
        self.sorted_by(|a, b| a.cmp(&b))
    }

    /// Copy with elements in strictly reverse index order.
    pub fn reversed(&self) -> Result<TypedVec<T>, VecError> {
        Ok(Self::from_erased(self.inner.reversed()?))
    }

    /// Copy a sub-range; see [`ByteVec::subvec`] for the three regimes.
    pub fn subvec(&self, begin: usize, end: usize) -> Result<TypedVec<T>, VecError> {
        Ok(Self::from_erased(self.inner.subvec(begin, end)?))
    }

    /// Give up the typed view and return the erased vector.
    pub fn into_erased(self) -> ByteVec {
        self.inner
    }

    /// Borrow the erased vector, e.g. for the core render entry points.
    pub fn as_erased(&self) -> &ByteVec {
        &self.inner
    }
}

impl<T: Element + std::fmt::Display> TypedVec<T> {
    /// Render as `<e0, e1, …, en>` to `w` using the element's `Display`.
    pub fn render<W: Write>(&self, w: &mut W) -> io::Result<()> {
        render(Some(&self.inner), w, |bytes, w| {
            write!(w, "{}", T::read_from(bytes))
        })
    }

    /// Render to stdout with a trailing newline.
    pub fn print(&self) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        self.render(&mut stdout)?;
        writeln!(stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<T: Element>(v: &TypedVec<T>) -> Vec<T> {
        (0..v.len()).map(|i| v.get(i).unwrap()).collect()
    }

    #[test]
    fn push_get_round_trip() {
        let mut v: TypedVec<i32> = TypedVec::new(0).unwrap();
        for x in [1234, 5132, 9604] {
            v.push(x).unwrap();
        }
        assert_eq!(v.len(), 3);
        assert_eq!(v.capacity(), 10);
        assert_eq!(collect(&v), vec![1234, 5132, 9604]);
        assert_eq!(v.first().unwrap(), 1234);
        assert_eq!(v.last().unwrap(), 9604);
    }

    #[test]
    fn insert_and_remove_forward_to_the_core() {
        let mut v: TypedVec<u8> = TypedVec::new(0).unwrap();
        v.push(1).unwrap();
        v.push(3).unwrap();
        v.insert(2, 1).unwrap();
        assert_eq!(collect(&v), vec![1, 2, 3]);
        assert_eq!(v.remove(0).unwrap(), 1);
        assert_eq!(v.pop().unwrap(), 3);
        assert_eq!(collect(&v), vec![2]);
    }

    #[test]
    fn typed_errors_match_the_core_kinds() {
        let mut v: TypedVec<i64> = TypedVec::new(0).unwrap();
        assert_eq!(v.pop().err(), Some(VecError::IllegalDelete));
        assert_eq!(v.get(0).err(), Some(VecError::IllegalAccess));
        v.push(1).unwrap();
        assert_eq!(
            v.get(1).err(),
            Some(VecError::OutOfBounds { index: 1, len: 1 })
        );
    }

    #[test]
    fn map_changes_the_element_type() {
        let mut v: TypedVec<i32> = TypedVec::new(0).unwrap();
        for x in [1234, 5132, 9604] {
            v.push(x).unwrap();
        }
        let floats: TypedVec<f32> = v.map(|x| x as f32 / 10.0).unwrap();
        assert_eq!(collect(&floats), vec![123.4, 513.2, 960.4]);
        assert_eq!(collect(&v), vec![1234, 5132, 9604]);
    }

    #[test]
    fn sorted_by_and_natural_order_agree_for_ints() {
        let mut v: TypedVec<i32> = TypedVec::new(0).unwrap();
        for x in [10, 20, 30, 2314, -213, -34] {
            v.push(x).unwrap();
        }
        let by = v.sorted_by(|a, b| a.cmp(&b)).unwrap();
        let natural = v.sorted().unwrap();
        assert_eq!(collect(&by), vec![-213, -34, 10, 20, 30, 2314]);
        assert_eq!(collect(&natural), collect(&by));
    }

    #[test]
    fn floats_sort_with_a_caller_comparator() {
        let mut v: TypedVec<f32> = TypedVec::new(0).unwrap();
        for x in [2.5, -1.0, 0.25] {
            v.push(x).unwrap();
        }
        let sorted = v.sorted_by(|a, b| a.partial_cmp(&b).unwrap()).unwrap();
        assert_eq!(collect(&sorted), vec![-1.0, 0.25, 2.5]);
    }

    #[test]
    fn reversed_and_subvec_preserve_the_type() {
        let mut v: TypedVec<u16> = TypedVec::new(0).unwrap();
        for x in [1, 2, 3, 4, 5] {
            v.push(x).unwrap();
        }
        assert_eq!(collect(&v.reversed().unwrap()), vec![5, 4, 3, 2, 1]);
        assert_eq!(collect(&v.subvec(1, 4).unwrap()), vec![2, 3, 4]);
        assert_eq!(collect(&v.subvec(3, 1).unwrap()), vec![4, 3, 2]);
        assert!(v.subvec(2, 2).unwrap().is_empty());
    }

    #[test]
    fn render_uses_display() {
        let mut v: TypedVec<i32> = TypedVec::new(0).unwrap();
        v.push(-5).unwrap();
        v.push(12).unwrap();
        let mut out = Vec::new();
        v.render(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "<-5, 12>");
    }

    #[test]
    fn into_erased_exposes_the_core_vector() {
        let mut v: TypedVec<i32> = TypedVec::new(0).unwrap();
        v.push(7).unwrap();
        let erased = v.into_erased();
        assert_eq!(erased.element_size(), 4);
        assert_eq!(erased.len(), 1);
        assert!(dynvec_core::destroy(Some(erased)).is_ok());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn typed_layer_is_a_faithful_boxing(values in proptest::collection::vec(any::<i64>(), 0..64)) {
                let mut v: TypedVec<i64> = TypedVec::new(0).unwrap();
                for &x in &values {
                    v.push(x).unwrap();
                }
                prop_assert_eq!(collect(&v), values);
            }

            #[test]
            fn map_then_get_equals_f_of_get(values in proptest::collection::vec(any::<i32>(), 0..64)) {
                let mut v: TypedVec<i32> = TypedVec::new(0).unwrap();
                for &x in &values {
                    v.push(x).unwrap();
                }
                let mapped = v.map(|x| i64::from(x) * 3).unwrap();
                prop_assert_eq!(mapped.len(), v.len());
                for i in 0..v.len() {
                    prop_assert_eq!(mapped.get(i).unwrap(), i64::from(v.get(i).unwrap()) * 3);
                }
            }
        }
    }
}
