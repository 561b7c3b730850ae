//! Numeric element traits for [`Vector`](crate::vector::Vector).
//!
//! The trait hierarchy is:
//! ```text
//! Scalar
//!   ├── Integer  (i8 … u64, isize, usize)
//!   └── Float    (f32, f64)
//! ```
//!
//! Container operations are bounded by the narrowest trait they need, so an
//! integer vector supports `%` but not `sqrt`, and a float vector supports
//! unit vectors but not `%`.

use core::cmp::Ordering;
use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

// ---------------------------------------------------------------------------
// Scalar — the root trait for every element type
// ---------------------------------------------------------------------------

/// Base trait for all numeric types storable in a [`Vector`](crate::vector::Vector).
///
/// Negation is deliberately not required so that unsigned element types
/// remain usable; operations that negate add a `Neg` bound of their own.
pub trait Scalar:
    Copy
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Sum
    + Default
    + 'static
{
    /// The additive identity (`0`).
    fn zero() -> Self;

    /// The multiplicative identity (`1`).
    fn one() -> Self;

    /// Magnitude of the value. Identity for unsigned types.
    ///
    /// `iN::MIN` has no positive counterpart and is returned unchanged.
    fn abs(self) -> Self;

    /// Compare magnitudes. Exact for every integer, `iN::MIN` included.
    fn cmp_abs(self, other: Self) -> Option<Ordering>;

    /// Whether the value is neither infinite nor NaN. Always true for
    /// integers.
    fn is_finite(self) -> bool;

    /// Whether `high - low` is representable, which uniform sampling over
    /// `[low, high)` requires. Always true for integers.
    fn span_is_finite(low: Self, high: Self) -> bool;

    /// Lossy widening to `f64`, used by norms.
    fn to_f64(self) -> f64;
}

// ---------------------------------------------------------------------------
// Integer
// ---------------------------------------------------------------------------

/// Marker trait for integer scalar types.
pub trait Integer: Scalar {
    /// Remainder after division.
    fn rem(self, rhs: Self) -> Self;
}

// ---------------------------------------------------------------------------
// Float
// ---------------------------------------------------------------------------

/// Trait for floating-point scalar types (`f32`, `f64`).
pub trait Float: Scalar + core::ops::Neg<Output = Self> {
    fn sqrt(self) -> Self;

    /// Narrowing conversion from `f64`.
    fn from_f64(v: f64) -> Self;
}

// ===========================================================================
// Macro implementations
// ===========================================================================

macro_rules! impl_scalar_float {
    ($ty:ty) => {
        impl Scalar for $ty {
            #[inline]
            fn zero() -> Self {
                0.0
            }
            #[inline]
            fn one() -> Self {
                1.0
            }
            #[inline]
            fn abs(self) -> Self {
                <$ty>::abs(self)
            }
            #[inline]
            fn cmp_abs(self, other: Self) -> Option<Ordering> {
                <$ty>::abs(self).partial_cmp(&<$ty>::abs(other))
            }
            #[inline]
            fn is_finite(self) -> bool {
                <$ty>::is_finite(self)
            }
            #[inline]
            fn span_is_finite(low: Self, high: Self) -> bool {
                (high - low).is_finite()
            }
            #[inline]
            fn to_f64(self) -> f64 {
                f64::from(self)
            }
        }

        impl Float for $ty {
            #[inline]
            fn sqrt(self) -> Self {
                <$ty>::sqrt(self)
            }
            #[inline]
            #[allow(clippy::cast_possible_truncation)]
            fn from_f64(v: f64) -> Self {
                v as Self
            }
        }
    };
}

impl_scalar_float!(f32);
impl_scalar_float!(f64);

macro_rules! impl_scalar_int {
    ($ty:ty, $abs:expr, $magnitude:expr) => {
        impl Scalar for $ty {
            #[inline]
            fn zero() -> Self {
                0
            }
            #[inline]
            fn one() -> Self {
                1
            }
            #[inline]
            fn abs(self) -> Self {
                $abs(self)
            }
            #[inline]
            fn cmp_abs(self, other: Self) -> Option<Ordering> {
                Some($magnitude(self).cmp(&$magnitude(other)))
            }
            #[inline]
            fn is_finite(self) -> bool {
                true
            }
            #[inline]
            fn span_is_finite(_low: Self, _high: Self) -> bool {
                true
            }
            #[inline]
            #[allow(clippy::cast_lossless)]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }

        impl Integer for $ty {
            #[inline]
            fn rem(self, rhs: Self) -> Self {
                self % rhs
            }
        }
    };
}

impl_scalar_int!(i8, i8::wrapping_abs, i8::unsigned_abs);
impl_scalar_int!(i16, i16::wrapping_abs, i16::unsigned_abs);
impl_scalar_int!(i32, i32::wrapping_abs, i32::unsigned_abs);
impl_scalar_int!(i64, i64::wrapping_abs, i64::unsigned_abs);
impl_scalar_int!(isize, isize::wrapping_abs, isize::unsigned_abs);
impl_scalar_int!(u8, core::convert::identity, core::convert::identity);
impl_scalar_int!(u16, core::convert::identity, core::convert::identity);
impl_scalar_int!(u32, core::convert::identity, core::convert::identity);
impl_scalar_int!(u64, core::convert::identity, core::convert::identity);
impl_scalar_int!(usize, core::convert::identity, core::convert::identity);

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_zero_one() {
        assert_eq!(f64::zero(), 0.0);
        assert_eq!(f64::one(), 1.0);
        assert_eq!(i32::zero(), 0);
        assert_eq!(u8::one(), 1);
    }

    #[test]
    fn test_abs_signed_and_unsigned() {
        assert_eq!(Scalar::abs(-3.5_f64), 3.5);
        assert_eq!(Scalar::abs(-7_i32), 7);
        assert_eq!(Scalar::abs(7_u32), 7);
        assert_eq!(Scalar::abs(i8::MIN), i8::MIN);
    }

    #[test]
    fn test_cmp_abs() {
        assert_eq!(i32::MIN.cmp_abs(i32::MAX), Some(Ordering::Greater));
        assert_eq!((-3_i64).cmp_abs(3), Some(Ordering::Equal));
        assert_eq!(2_u8.cmp_abs(9), Some(Ordering::Less));
        assert_eq!((-2.5_f64).cmp_abs(1.0), Some(Ordering::Greater));
        assert_eq!(f64::NAN.cmp_abs(1.0), None);
    }

    #[test]
    fn test_finiteness() {
        assert!(i64::MIN.is_finite());
        assert!(!f32::INFINITY.is_finite());
        assert!(!Scalar::is_finite(f64::NAN));
        assert!(i32::span_is_finite(i32::MIN, i32::MAX));
        assert!(f64::span_is_finite(-1.0, 1.0));
        assert!(!f64::span_is_finite(-f64::MAX, f64::MAX));
        assert!(!f32::span_is_finite(-f32::MAX, f32::MAX));
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(3_i64.to_f64(), 3.0);
        assert_eq!(2.5_f32.to_f64(), 2.5);
        assert_eq!(u64::MAX.to_f64(), 18_446_744_073_709_551_615.0);
    }

    #[test]
    fn test_float_ops() {
        assert_eq!(Float::sqrt(16.0_f64), 4.0);
        assert_eq!(f32::from_f64(0.5), 0.5_f32);
    }

    #[test]
    fn test_integer_rem() {
        assert_eq!(Integer::rem(7_i32, 3), 1);
        assert_eq!(Integer::rem(10_u64, 4), 2);
    }
}
