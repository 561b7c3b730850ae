//! # numpde
//!
//! Numeric building blocks for physics simulation and PDE solvers.
//!
//! One `use numpde::prelude::*;` gives you the [`Vector`](core::Vector)
//! container together with its element traits and error type.
//!
//! ## Feature Flags
//!
//! | Feature | Enables |
//! |---------|---------|
//! | `core` *(default)* | `Vector`, scalar traits, text serialization |

pub use numpde_core as core;

/// Glob-import convenience: `use numpde::prelude::*;`
pub mod prelude {
    pub use numpde_core::prelude::*;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_exposes_vector() {
        let v: Vector<f64> = Vector::from([3.0, 4.0]);
        assert!((v.norm() - 5.0).abs() < 1e-12);
        assert_eq!(v.display(FormatMode::Record).to_string(), "3;4");
    }
}
