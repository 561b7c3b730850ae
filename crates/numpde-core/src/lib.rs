//! `numpde-core` — Foundation crate for the numpde toolkit.
//!
//! Provides the numeric element traits and [`Vector`], the growable
//! mathematical vector that solvers, mode shapes and coordinates are built
//! on.
//!
//! # Design
//!
//! - Generic over numeric types via the [`Scalar`] / [`Integer`] / [`Float`]
//!   trait hierarchy.
//! - Contract violations (out-of-range access, mismatched lengths, empty
//!   reductions) are reported through [`CoreError`]; operator forms that
//!   cannot return a `Result` panic instead.
//! - Diagnostics go through `tracing`; the library installs no subscriber.

pub mod dtype;
pub mod error;
pub mod vector;

// Re-export key types at crate root for convenience.
pub use dtype::{Float, Integer, Scalar};
pub use error::{CoreError, Result};
pub use vector::{FormatMode, PrettyStyle, Vector};

/// Items intended for glob-import: `use numpde_core::prelude::*;`
pub mod prelude {
    pub use crate::dtype::{Float, Integer, Scalar};
    pub use crate::error::{CoreError, Result};
    pub use crate::vector::{FormatMode, PrettyStyle, Vector};
}
