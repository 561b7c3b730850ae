//! Dynamically sized mathematical vector with contiguous storage.
//!
//! [`Vector`] is the base data type of the toolkit: solvers, mode shapes and
//! spatial coordinates are all stored in it. It owns its elements exclusively,
//! cloning performs a deep copy, and every resize reallocates to the exact
//! new length so no spare capacity is carried around.

mod create;
mod display;
mod io;
mod ops;
mod reduce;
mod sort;

pub use display::{FormatMode, Formatted, PrettyStyle};

use core::ops::{Index, IndexMut};

use tracing::debug;

use crate::Scalar;
use crate::error::{CoreError, Result};

/// A growable vector of numeric elements.
///
/// Element-wise operations between two vectors require equal lengths. The
/// operator forms (`+`, `-`, `*` between vectors) panic on a mismatch; the
/// `*_checked` methods and [`Vector::dot`] report
/// [`CoreError::ShapeMismatch`] instead.
///
/// # Type Parameters
///
/// - `T`: The element type, which must implement [`Scalar`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Vector<T: Scalar> {
    data: Vec<T>,
}

/// Allocate an empty buffer able to hold exactly `len` elements.
pub(crate) fn allocate<T>(len: usize) -> Result<Vec<T>> {
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| CoreError::OutOfMemory { requested: len })?;
    Ok(data)
}

impl<T: Scalar> Vector<T> {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Create an empty vector. No storage is allocated.
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Allocate a vector of `len` elements, all set to zero.
    ///
    /// ```
    /// # use numpde_core::vector::Vector;
    /// let v = Vector::<f64>::with_len(3).unwrap();
    /// assert_eq!(v.len(), 3);
    /// ```
    pub fn with_len(len: usize) -> Result<Self> {
        Self::filled(len, T::zero())
    }

    /// Allocate a vector of `len` elements, all set to `value`.
    pub fn filled(len: usize, value: T) -> Result<Self> {
        let mut data = allocate(len)?;
        data.resize(len, value);
        Ok(Self { data })
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// The number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the vector has zero elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// A slice of all elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// A mutable slice of all elements.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the vector and return the underlying `Vec<T>`.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Iterate over all elements.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate mutably over all elements.
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    // ------------------------------------------------------------------
    // Storage management
    // ------------------------------------------------------------------

    /// Reallocate to exactly `new_len` elements.
    ///
    /// The first `min(len, new_len)` elements are preserved. Elements added
    /// at the tail are zero when `fill_new_with_zero` is set and
    /// `T::default()` otherwise, which is also zero for every primitive
    /// element type.
    ///
    /// On allocation failure the vector is left untouched and
    /// [`CoreError::OutOfMemory`] is returned.
    pub fn resize(&mut self, new_len: usize, fill_new_with_zero: bool) -> Result<()> {
        let old_len = self.data.len();
        if new_len == old_len {
            return Ok(());
        }

        if new_len > old_len {
            self.data
                .try_reserve_exact(new_len - old_len)
                .map_err(|_| CoreError::OutOfMemory { requested: new_len })?;
            let tail = if fill_new_with_zero {
                T::zero()
            } else {
                T::default()
            };
            self.data.resize(new_len, tail);
        } else {
            self.data.truncate(new_len);
            self.data.shrink_to_fit();
        }

        debug!(old_len, new_len, "vector storage reallocated");
        Ok(())
    }

    /// Drop every element and release the storage.
    pub fn clear(&mut self) {
        self.data = Vec::new();
    }

    /// Move the contents out, leaving `self` as an empty vector.
    #[must_use]
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }

    /// Replace the contents with a copy of `values`, resizing as needed.
    pub fn assign_from_slice(&mut self, values: &[T]) -> Result<()> {
        if values.len() != self.len() {
            let mut data = allocate(values.len())?;
            data.extend_from_slice(values);
            self.data = data;
        } else {
            self.data.copy_from_slice(values);
        }
        Ok(())
    }

    /// Set every element to `value`.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    // ------------------------------------------------------------------
    // Element access
    // ------------------------------------------------------------------

    /// Bounds-checked reference to the element at `index`.
    pub fn at(&self, index: usize) -> Result<&T> {
        let len = self.len();
        self.data
            .get(index)
            .ok_or(CoreError::IndexOutOfRange { index, len })
    }

    /// Bounds-checked mutable reference to the element at `index`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len();
        self.data
            .get_mut(index)
            .ok_or(CoreError::IndexOutOfRange { index, len })
    }

    /// Copy `count` elements starting at `first` into a new vector.
    ///
    /// ```
    /// # use numpde_core::vector::Vector;
    /// let v = Vector::from([1, 2, 3, 4, 5]);
    /// assert_eq!(v.get(1, 3).unwrap(), Vector::from([2, 3, 4]));
    /// assert!(v.get(3, 3).is_err());
    /// ```
    pub fn get(&self, first: usize, count: usize) -> Result<Self> {
        let len = self.len();
        let end = first
            .checked_add(count)
            .filter(|&end| end <= len)
            .ok_or(CoreError::RangeError { first, count, len })?;
        Ok(Self::from_slice(&self.data[first..end]))
    }

    /// Copy every element from `first` to the end into a new vector.
    pub fn get_from(&self, first: usize) -> Result<Self> {
        let len = self.len();
        let count = len
            .checked_sub(first)
            .ok_or(CoreError::RangeError {
                first,
                count: 0,
                len,
            })?;
        self.get(first, count)
    }

    /// Overwrite `first..first + count` with the leading `count` elements of
    /// `source`.
    pub fn set(&mut self, first: usize, source: &Self, count: usize) -> Result<()> {
        let len = self.len();
        let end = first
            .checked_add(count)
            .filter(|&end| end <= len && count <= source.len())
            .ok_or(CoreError::RangeError { first, count, len })?;
        self.data[first..end].copy_from_slice(&source.data[..count]);
        Ok(())
    }

    /// Overwrite the elements starting at `first` with all of `source`.
    pub fn set_from(&mut self, first: usize, source: &Self) -> Result<()> {
        self.set(first, source, source.len())
    }

    /// Position of the first element equal to `value`.
    pub fn find(&self, value: &T) -> Option<usize> {
        self.data.iter().position(|x| x == value)
    }

    // ------------------------------------------------------------------
    // Map / apply
    // ------------------------------------------------------------------

    /// Apply a function to every element, returning a new vector.
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(T) -> T,
    {
        Self {
            data: self.data.iter().map(|&x| f(x)).collect(),
        }
    }

    /// Apply a function element-wise to two vectors of the same length.
    pub fn zip_map<F>(&self, other: &Self, f: F) -> Result<Self>
    where
        F: Fn(T, T) -> T,
    {
        self.check_same_len(other)?;
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Self { data })
    }

    /// Apply a function to every element in place.
    pub fn apply<F>(&mut self, f: F)
    where
        F: Fn(T) -> T,
    {
        for x in &mut self.data {
            *x = f(*x);
        }
    }

    pub(crate) fn check_same_len(&self, other: &Self) -> Result<()> {
        if self.len() == other.len() {
            Ok(())
        } else {
            Err(CoreError::ShapeMismatch {
                left: self.len(),
                right: other.len(),
            })
        }
    }
}

impl<T: Scalar> Index<usize> for Vector<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T: Scalar> IndexMut<usize> for Vector<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T: Scalar> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T: Scalar> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T: Scalar> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let v = Vector::<f64>::new();
        assert!(v.is_empty());
        assert_eq!(v.len(), 0);
        assert_eq!(v.as_slice(), &[] as &[f64]);
    }

    #[test]
    fn test_filled() {
        let v = Vector::filled(4, 2.5_f64).unwrap();
        assert_eq!(v.len(), 4);
        assert!(v.iter().all(|&x| x == 2.5));
    }

    #[test]
    fn test_with_len_is_zeroed() {
        let v = Vector::<i32>::with_len(3).unwrap();
        assert_eq!(v.as_slice(), &[0, 0, 0]);
    }

    #[test]
    fn test_clone_is_deep() {
        let a = Vector::from([1, 2, 3]);
        let mut b = a.clone();
        assert_eq!(a, b);
        b[0] = 99;
        assert_eq!(a.as_slice(), &[1, 2, 3]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_take_leaves_source_empty() {
        let mut a = Vector::from([1.0, 2.0]);
        let b = a.take();
        assert_eq!(b.as_slice(), &[1.0, 2.0]);
        assert!(a.is_empty());
    }

    #[test]
    fn test_resize_grow_zero_fill() {
        let mut v = Vector::from([1, 2]);
        v.resize(4, true).unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 0, 0]);
    }

    #[test]
    fn test_resize_grow_without_fill_keeps_prefix() {
        let mut v = Vector::from([7.0, 8.0]);
        v.resize(5, false).unwrap();
        assert_eq!(v.len(), 5);
        assert_eq!(&v.as_slice()[..2], &[7.0, 8.0]);
    }

    #[test]
    fn test_resize_shrink() {
        let mut v = Vector::from([1, 2, 3, 4]);
        v.resize(2, true).unwrap();
        assert_eq!(v.as_slice(), &[1, 2]);
        v.resize(2, true).unwrap();
        assert_eq!(v.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_resize_out_of_memory() {
        let mut v = Vector::from([1_u64, 2]);
        let err = v.resize(usize::MAX, true).unwrap_err();
        assert!(matches!(err, CoreError::OutOfMemory { .. }));
        assert_eq!(v.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_clear() {
        let mut v = Vector::from([1, 2, 3]);
        v.clear();
        assert!(v.is_empty());
    }

    #[test]
    fn test_assign_from_slice() {
        let mut v = Vector::from([1, 2]);
        v.assign_from_slice(&[5, 6, 7]).unwrap();
        assert_eq!(v.as_slice(), &[5, 6, 7]);
        v.assign_from_slice(&[1, 1, 1]).unwrap();
        assert_eq!(v.as_slice(), &[1, 1, 1]);
    }

    #[test]
    fn test_at() {
        let mut v = Vector::from([10, 20, 30]);
        assert_eq!(*v.at(2).unwrap(), 30);
        *v.at_mut(0).unwrap() = 11;
        assert_eq!(v[0], 11);
        assert!(matches!(
            v.at(3),
            Err(CoreError::IndexOutOfRange { index: 3, len: 3 })
        ));
        assert!(v.at_mut(7).is_err());
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_index_panics_out_of_range() {
        let v = Vector::from([1, 2]);
        let _ = v[2];
    }

    #[test]
    fn test_get_range() {
        let v = Vector::from([1, 2, 3, 4, 5]);
        assert_eq!(v.get(0, 0).unwrap(), Vector::new());
        assert_eq!(v.get(2, 3).unwrap().as_slice(), &[3, 4, 5]);
        assert!(matches!(
            v.get(4, 2),
            Err(CoreError::RangeError {
                first: 4,
                count: 2,
                len: 5
            })
        ));
        assert!(v.get(usize::MAX, 2).is_err());
    }

    #[test]
    fn test_get_from() {
        let v = Vector::from([1, 2, 3, 4]);
        assert_eq!(v.get_from(1).unwrap().as_slice(), &[2, 3, 4]);
        assert!(v.get_from(4).unwrap().is_empty());
        assert!(v.get_from(5).is_err());
    }

    #[test]
    fn test_set_range() {
        let mut v = Vector::from([0, 0, 0, 0, 0]);
        let src = Vector::from([7, 8, 9]);
        v.set(1, &src, 2).unwrap();
        assert_eq!(v.as_slice(), &[0, 7, 8, 0, 0]);
        v.set_from(2, &src).unwrap();
        assert_eq!(v.as_slice(), &[0, 7, 7, 8, 9]);
    }

    #[test]
    fn test_set_out_of_range() {
        let mut v = Vector::from([0, 0, 0]);
        let src = Vector::from([1, 2]);
        assert!(v.set(2, &src, 2).is_err());
        assert!(v.set(0, &src, 3).is_err());
        assert!(v.set_from(2, &src).is_err());
        assert_eq!(v.as_slice(), &[0, 0, 0]);
    }

    #[test]
    fn test_find() {
        let v = Vector::from([3.0, 1.5, 3.0]);
        assert_eq!(v.find(&3.0), Some(0));
        assert_eq!(v.find(&1.5), Some(1));
        assert_eq!(v.find(&9.0), None);
    }

    #[test]
    fn test_map_zip_map_apply() {
        let a = Vector::from([1, 2, 3]);
        assert_eq!(a.map(|x| x * 10).as_slice(), &[10, 20, 30]);

        let b = Vector::from([10, 20, 30]);
        assert_eq!(a.zip_map(&b, |x, y| x + y).unwrap().as_slice(), &[11, 22, 33]);
        assert!(a.zip_map(&Vector::from([1]), |x, y| x + y).is_err());

        let mut c = a.clone();
        c.apply(|x| x - 1);
        assert_eq!(c.as_slice(), &[0, 1, 2]);
    }

    #[test]
    fn test_iterators() {
        let mut v = Vector::from([1, 2, 3]);
        for x in &mut v {
            *x *= 2;
        }
        let total: i32 = (&v).into_iter().sum();
        assert_eq!(total, 12);
        assert_eq!(v.into_iter().collect::<Vec<_>>(), vec![2, 4, 6]);
    }
}
