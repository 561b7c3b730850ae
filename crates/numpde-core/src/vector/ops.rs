//! Vector-space arithmetic for [`Vector`].
//!
//! Implements:
//! - `Vector<T> ± Vector<T>` and `+=` / `-=` (element-wise, equal length)
//! - `Vector<T> op T` for `*`, `/` and, for [`Integer`] elements, `%`
//! - `T * Vector<T>` for every primitive scalar
//! - `-Vector<T>` when `T: Neg`
//! - `&Vector<T> * &Vector<T>` as the dot product
//!
//! Operator forms panic on a length mismatch. The `*_checked` methods and
//! [`Vector::dot`] return [`CoreError::ShapeMismatch`] instead.

use core::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

use tracing::warn;

use crate::error::{CoreError, Result};
use crate::{Float, Integer, Scalar};

use super::Vector;

// ======================================================================
// Vector ± Vector  (element-wise, same length — panics on mismatch)
// ======================================================================

macro_rules! impl_vector_binop {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl<T: Scalar> $trait for Vector<T> {
            type Output = Vector<T>;

            fn $method(mut self, rhs: Vector<T>) -> Vector<T> {
                self.$assign_method(&rhs);
                self
            }
        }

        impl<T: Scalar> $trait<&Vector<T>> for Vector<T> {
            type Output = Vector<T>;

            fn $method(mut self, rhs: &Vector<T>) -> Vector<T> {
                self.$assign_method(rhs);
                self
            }
        }

        impl<T: Scalar> $trait for &Vector<T> {
            type Output = Vector<T>;

            fn $method(self, rhs: &Vector<T>) -> Vector<T> {
                assert_eq!(
                    self.len(), rhs.len(),
                    "shape mismatch in element-wise {}: {} vs {}",
                    stringify!($method), self.len(), rhs.len(),
                );
                let data = self.data.iter()
                    .zip(rhs.data.iter())
                    .map(|(&a, &b)| a $op b)
                    .collect();
                Vector { data }
            }
        }

        impl<T: Scalar> $assign_trait<&Vector<T>> for Vector<T> {
            fn $assign_method(&mut self, rhs: &Vector<T>) {
                assert_eq!(
                    self.len(), rhs.len(),
                    "shape mismatch in element-wise {}: {} vs {}",
                    stringify!($assign_method), self.len(), rhs.len(),
                );
                for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
                    *a = *a $op b;
                }
            }
        }

        impl<T: Scalar> $assign_trait for Vector<T> {
            fn $assign_method(&mut self, rhs: Vector<T>) {
                self.$assign_method(&rhs);
            }
        }
    };
}

impl_vector_binop!(Add, add, AddAssign, add_assign, +);
impl_vector_binop!(Sub, sub, SubAssign, sub_assign, -);

// ======================================================================
// Vector op scalar  (applied to every element)
// ======================================================================

macro_rules! impl_scalar_binop {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl<T: Scalar> $trait<T> for Vector<T> {
            type Output = Vector<T>;

            fn $method(mut self, rhs: T) -> Vector<T> {
                self.$assign_method(rhs);
                self
            }
        }

        impl<T: Scalar> $trait<T> for &Vector<T> {
            type Output = Vector<T>;

            fn $method(self, rhs: T) -> Vector<T> {
                self.map(|a| a $op rhs)
            }
        }

        impl<T: Scalar> $assign_trait<T> for Vector<T> {
            fn $assign_method(&mut self, rhs: T) {
                for a in &mut self.data {
                    *a = *a $op rhs;
                }
            }
        }
    };
}

impl_scalar_binop!(Mul, mul, MulAssign, mul_assign, *);
impl_scalar_binop!(Div, div, DivAssign, div_assign, /);

impl<T: Integer> Rem<T> for Vector<T> {
    type Output = Vector<T>;

    fn rem(mut self, rhs: T) -> Vector<T> {
        self %= rhs;
        self
    }
}

impl<T: Integer> Rem<T> for &Vector<T> {
    type Output = Vector<T>;

    fn rem(self, rhs: T) -> Vector<T> {
        self.map(|a| Integer::rem(a, rhs))
    }
}

impl<T: Integer> RemAssign<T> for Vector<T> {
    fn rem_assign(&mut self, rhs: T) {
        self.apply(|a| Integer::rem(a, rhs));
    }
}

// ======================================================================
// scalar * Vector  (orphan rules require one impl per primitive)
// ======================================================================

macro_rules! impl_commuted_mul {
    ($($ty:ty),*) => {
        $(
            impl Mul<Vector<$ty>> for $ty {
                type Output = Vector<$ty>;

                fn mul(self, rhs: Vector<$ty>) -> Vector<$ty> {
                    rhs * self
                }
            }

            impl Mul<&Vector<$ty>> for $ty {
                type Output = Vector<$ty>;

                fn mul(self, rhs: &Vector<$ty>) -> Vector<$ty> {
                    rhs * self
                }
            }
        )*
    };
}

impl_commuted_mul!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

// ======================================================================
// Negation
// ======================================================================

impl<T: Scalar + Neg<Output = T>> Neg for Vector<T> {
    type Output = Vector<T>;

    fn neg(mut self) -> Vector<T> {
        self.apply(|a| -a);
        self
    }
}

impl<T: Scalar + Neg<Output = T>> Neg for &Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Vector<T> {
        self.map(|a| -a)
    }
}

// ======================================================================
// Dot product
// ======================================================================

impl<T: Scalar> Mul<&Vector<T>> for &Vector<T> {
    type Output = T;

    fn mul(self, rhs: &Vector<T>) -> T {
        match self.dot(rhs) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

// ======================================================================
// Fallible (Result-returning) arithmetic for non-panicking callers
// ======================================================================

impl<T: Scalar> Vector<T> {
    /// Element-wise addition, returning `Err` on length mismatch.
    pub fn add_checked(&self, other: &Vector<T>) -> Result<Vector<T>> {
        self.zip_map(other, |a, b| a + b)
    }

    /// Element-wise subtraction, returning `Err` on length mismatch.
    pub fn sub_checked(&self, other: &Vector<T>) -> Result<Vector<T>> {
        self.zip_map(other, |a, b| a - b)
    }

    /// In-place element-wise addition. `self` is untouched on error.
    pub fn add_assign_checked(&mut self, other: &Vector<T>) -> Result<()> {
        self.check_same_len(other)?;
        *self += other;
        Ok(())
    }

    /// In-place element-wise subtraction. `self` is untouched on error.
    pub fn sub_assign_checked(&mut self, other: &Vector<T>) -> Result<()> {
        self.check_same_len(other)?;
        *self -= other;
        Ok(())
    }

    /// Sum of element-wise products.
    pub fn dot(&self, other: &Vector<T>) -> Result<T> {
        self.check_same_len(other)?;
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b))
    }

    /// Cross product of two 3-component vectors.
    ///
    /// ```
    /// # use numpde_core::vector::Vector;
    /// let x = Vector::from([1, 0, 0]);
    /// let y = Vector::from([0, 1, 0]);
    /// assert_eq!(x.cross_product_3d(&y).unwrap(), Vector::from([0, 0, 1]));
    /// ```
    pub fn cross_product_3d(&self, other: &Vector<T>) -> Result<Vector<T>> {
        if self.len() != 3 || other.len() != 3 {
            return Err(CoreError::invalid(
                "cross product requires two vectors of length 3",
            ));
        }
        let (a, b) = (&self.data, &other.data);
        Ok(Vector::from([
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]))
    }

    /// Squared Euclidean norm, accumulated in `f64` for every element type.
    pub fn squared_norm(&self) -> f64 {
        self.data
            .iter()
            .map(|&x| {
                let x = x.to_f64();
                x * x
            })
            .sum()
    }

    /// Euclidean norm.
    ///
    /// Elements are scaled by the largest magnitude before squaring, so the
    /// result stays finite whenever it is representable (`[1e200, 1e200]`
    /// has norm `√2·1e200` even though its squared norm overflows).
    pub fn norm(&self) -> f64 {
        let scale = self
            .data
            .iter()
            .fold(0.0_f64, |m, &x| m.max(x.to_f64().abs()));
        if scale <= 0.0 || scale.is_infinite() {
            // All zeros (or NaN, which `max` skips), or an infinite element.
            return self.squared_norm().sqrt();
        }
        let scaled: f64 = self
            .data
            .iter()
            .map(|&x| {
                let x = x.to_f64() / scale;
                x * x
            })
            .sum();
        scale * scaled.sqrt()
    }
}

impl<T: Float> Vector<T> {
    /// The vector scaled to unit norm.
    ///
    /// Returns [`CoreError::InvalidOperation`] when the norm is zero (which
    /// includes the empty vector) or not finite.
    ///
    /// Division happens in `f64`, so an `f32` vector whose norm exceeds
    /// `f32::MAX` still normalizes.
    pub fn unitary(&self) -> Result<Vector<T>> {
        let norm = self.norm();
        if norm <= 0.0 || !norm.is_finite() {
            warn!(len = self.len(), norm, "cannot normalize vector");
            return Err(CoreError::invalid(
                "unit vector requires a finite, non-zero norm",
            ));
        }
        Ok(self.map(|x| T::from_f64(x.to_f64() / norm)))
    }
}
