//! Ordering and duplicate detection.
//!
//! Duplicate checks compare every pair of positions and are quadratic in the
//! length. The vectors they run on (coordinates, mode shapes) are short.

use core::cmp::Ordering;

use crate::Scalar;

use super::Vector;

impl<T: Scalar> Vector<T> {
    /// Sort in ascending order, in place.
    ///
    /// The sort is stable. Incomparable values (NaN) compare equal to
    /// everything and keep their relative position.
    pub fn sort(&mut self) {
        self.data
            .sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    }

    /// Whether two distinct positions hold equal values.
    pub fn has_duplicate(&self) -> bool {
        self.any_pair(|a, b| a == b)
    }

    /// Whether two distinct positions hold values closer than `tolerance`.
    ///
    /// ```
    /// # use numpde_core::vector::Vector;
    /// let v = Vector::from([1.0, 1.0009]);
    /// assert!(v.has_duplicate_within(0.01));
    /// assert!(!v.has_duplicate_within(0.0001));
    /// ```
    pub fn has_duplicate_within(&self, tolerance: T) -> bool {
        self.any_pair(|a, b| {
            let distance = if a > b { a - b } else { b - a };
            distance < tolerance
        })
    }

    fn any_pair<F>(&self, f: F) -> bool
    where
        F: Fn(T, T) -> bool,
    {
        self.data
            .iter()
            .enumerate()
            .any(|(i, &a)| self.data[i + 1..].iter().any(|&b| f(a, b)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort() {
        let mut v = Vector::from([3, 1, 2]);
        v.sort();
        assert_eq!(v.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_sort_with_repeats() {
        let mut v = Vector::from([3.0, 1.0, 4.0, 1.0, 5.0, 9.0, -2.0]);
        v.sort();
        assert_eq!(v.as_slice(), &[-2.0, 1.0, 1.0, 3.0, 4.0, 5.0, 9.0]);
    }

    #[test]
    fn test_sort_noop_cases() {
        let mut sorted = Vector::from([1, 2, 3, 4, 5]);
        sorted.sort();
        assert_eq!(sorted.as_slice(), &[1, 2, 3, 4, 5]);

        let mut single = Vector::from([42]);
        single.sort();
        assert_eq!(single.as_slice(), &[42]);

        let mut empty = Vector::<f64>::new();
        empty.sort();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_has_duplicate_exact() {
        assert!(!Vector::from([1, 2, 3]).has_duplicate());
        assert!(Vector::from([1, 2, 2]).has_duplicate());
        assert!(Vector::from([5, 1, 5]).has_duplicate());
        assert!(!Vector::<i32>::new().has_duplicate());
        assert!(!Vector::from([7]).has_duplicate());
    }

    #[test]
    fn test_has_duplicate_within_tolerance() {
        let v = Vector::from([1.0, 1.0009]);
        assert!(v.has_duplicate_within(0.01));
        assert!(!v.has_duplicate_within(0.0001));
    }

    #[test]
    fn test_tolerance_is_strict() {
        let v = Vector::from([0, 2]);
        assert!(!v.has_duplicate_within(2));
        assert!(v.has_duplicate_within(3));
    }

    #[test]
    fn test_unsigned_tolerance_no_underflow() {
        let v = Vector::from([10_u8, 3, 250]);
        assert!(!v.has_duplicate_within(5));
        assert!(v.has_duplicate_within(8));
    }
}
