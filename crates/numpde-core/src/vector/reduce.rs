//! Reductions and element-wise transforms.
//!
//! Every reduction scans the vector once and fails with
//! [`CoreError::InvalidOperation`] on an empty vector.

use core::cmp::Ordering;

use crate::error::{CoreError, Result};
use crate::{Float, Scalar};

use super::Vector;

impl<T: Scalar> Vector<T> {
    /// Fold the elements with `pick`, which returns `true` when the candidate
    /// should replace the current extreme.
    fn extreme_by<F>(&self, what: &'static str, pick: F) -> Result<T>
    where
        F: Fn(T, T) -> bool,
    {
        let (&first, rest) = self
            .data
            .split_first()
            .ok_or(CoreError::InvalidOperation { reason: what })?;
        Ok(rest
            .iter()
            .fold(first, |best, &x| if pick(x, best) { x } else { best }))
    }

    /// Largest element.
    pub fn maximum_element(&self) -> Result<T> {
        self.extreme_by("maximum of an empty vector", |x, best| x > best)
    }

    /// Smallest element.
    pub fn minimum_element(&self) -> Result<T> {
        self.extreme_by("minimum of an empty vector", |x, best| x < best)
    }

    /// Largest magnitude. For a signed integer vector whose extreme is
    /// `iN::MIN` this returns `iN::MIN`, the one magnitude `iN` cannot hold.
    pub fn absolute_maximum_element(&self) -> Result<T> {
        self.absolute_maximum_element_with_sign().map(Scalar::abs)
    }

    /// Smallest magnitude.
    pub fn absolute_minimum_element(&self) -> Result<T> {
        self.absolute_minimum_element_with_sign().map(Scalar::abs)
    }

    /// The element with the largest magnitude, sign preserved. The first
    /// occurrence wins ties such as `[-3, 3]`.
    pub fn absolute_maximum_element_with_sign(&self) -> Result<T> {
        self.extreme_by("absolute maximum of an empty vector", |x, best| {
            x.cmp_abs(best) == Some(Ordering::Greater)
        })
    }

    /// The element with the smallest magnitude, sign preserved.
    pub fn absolute_minimum_element_with_sign(&self) -> Result<T> {
        self.extreme_by("absolute minimum of an empty vector", |x, best| {
            x.cmp_abs(best) == Some(Ordering::Less)
        })
    }

    /// Sum of every element.
    pub fn sum_all_elements(&self) -> Result<T> {
        let (&first, rest) = self
            .data
            .split_first()
            .ok_or(CoreError::invalid("sum of an empty vector"))?;
        Ok(rest.iter().fold(first, |acc, &x| acc + x))
    }

    /// Raise every element to `power` by repeated multiplication.
    ///
    /// `power == 0` yields a vector of ones.
    pub fn pow_elements(&self, power: u32) -> Vector<T> {
        self.map(|x| (0..power).fold(T::one(), |acc, _| acc * x))
    }

    /// Whether every element equals zero. An empty vector is null.
    pub fn is_null(&self) -> bool {
        self.data.iter().all(|&x| x == T::zero())
    }
}

impl<T: Float> Vector<T> {
    /// Element-wise square root.
    #[inline]
    pub fn sqrt(&self) -> Vector<T> {
        self.map(Float::sqrt)
    }
}
