//! Vector creation: literal lists, element ranges, identity fills and
//! uniform random fills.

use core::cmp::Ordering;

use rand::Rng;
use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Uniform};
use tracing::warn;

use crate::Scalar;
use crate::error::{CoreError, Result};

use super::Vector;

impl<T: Scalar> Vector<T> {
    /// Create a vector from a slice (copies the data).
    pub fn from_slice(values: &[T]) -> Self {
        Self {
            data: values.to_vec(),
        }
    }

    /// Create a vector filled with zeros.
    ///
    /// ```
    /// # use numpde_core::vector::Vector;
    /// let v = Vector::<f64>::zeros(3).unwrap();
    /// assert!(v.iter().all(|&x| x == 0.0));
    /// ```
    pub fn zeros(len: usize) -> Result<Self> {
        Self::filled(len, T::zero())
    }

    /// Create a vector filled with ones.
    pub fn ones(len: usize) -> Result<Self> {
        Self::filled(len, T::one())
    }

    /// Create a vector filled with a constant value.
    ///
    /// Returns [`CoreError::OutOfMemory`] when the storage cannot be
    /// allocated.
    pub fn full(len: usize, value: T) -> Result<Self> {
        Self::filled(len, value)
    }

    /// Set every element to zero.
    pub fn fill_zero(&mut self) {
        self.fill(T::zero());
    }

    /// Set every element to one.
    pub fn fill_ones(&mut self) {
        self.fill(T::one());
    }
}

impl<T: Scalar + SampleUniform> Vector<T> {
    /// Create a vector of `len` independent samples uniform in `[min, max)`.
    ///
    /// ```
    /// # use numpde_core::vector::Vector;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let v = Vector::random(&mut rng, 8, -1.0_f64, 1.0).unwrap();
    /// assert!(v.iter().all(|&x| (-1.0..1.0).contains(&x)));
    /// ```
    pub fn random<R: Rng + ?Sized>(rng: &mut R, len: usize, min: T, max: T) -> Result<Self> {
        let mut v = Self::with_len(len)?;
        v.randomize(rng, min, max)?;
        Ok(v)
    }

    /// Overwrite every element with a sample uniform in `[min, max)`.
    ///
    /// Returns [`CoreError::InvalidOperation`] unless both bounds are finite
    /// and `min < max`. The vector is untouched on error.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, min: T, max: T) -> Result<()> {
        if !min.is_finite() || !max.is_finite() {
            warn!(%min, %max, "rejected non-finite random range");
            return Err(CoreError::invalid("random fill requires finite bounds"));
        }
        if min.partial_cmp(&max) != Some(Ordering::Less) {
            warn!(%min, %max, "rejected empty random range");
            return Err(CoreError::invalid("random fill requires min < max"));
        }

        if T::span_is_finite(min, max) {
            let uniform = Uniform::new(min, max);
            for x in &mut self.data {
                *x = uniform.sample(rng);
            }
        } else {
            // Only float spans overflow; halving both bounds brings the span
            // back in range and doubling a sample is exact.
            let two = T::one() + T::one();
            let uniform = Uniform::new(min / two, max / two);
            for x in &mut self.data {
                *x = uniform.sample(rng) * two;
            }
        }
        Ok(())
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T> {
    fn from(values: [T; N]) -> Self {
        Self {
            data: values.to_vec(),
        }
    }
}

impl<T: Scalar> From<Vec<T>> for Vector<T> {
    fn from(mut data: Vec<T>) -> Self {
        data.shrink_to_fit();
        Self { data }
    }
}

impl<T: Scalar> From<&[T]> for Vector<T> {
    fn from(values: &[T]) -> Self {
        Self::from_slice(values)
    }
}

impl<T: Scalar> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut data: Vec<T> = iter.into_iter().collect();
        data.shrink_to_fit();
        Self { data }
    }
}

impl<'a, T: Scalar> FromIterator<&'a T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = &'a T>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}
