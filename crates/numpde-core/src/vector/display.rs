//! Text layouts for [`Vector`].
//!
//! Two layouts exist:
//! - **record**: elements joined by `;`, the form [`Vector::read_record`]
//!   parses back;
//! - **pretty**: fixed-point columns inside brackets, for terminals.
//!
//! `Display` renders the record layout; the alternate flag (`{:#}`) selects
//! the pretty one. Neither appends a newline.

use core::fmt;

use crate::Scalar;

use super::Vector;

/// Separator between elements in the record layout.
const RECORD_SEPARATOR: char = ';';

/// Which text layout to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatMode {
    /// Bracketed fixed-width columns for human display.
    Pretty,
    /// `;`-separated values that round-trip through [`Vector::read_record`].
    #[default]
    Record,
}

/// Column layout of the pretty format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrettyStyle {
    /// Minimum field width; values are right-aligned.
    pub width: usize,
    /// Fractional digits for floating-point elements.
    pub precision: usize,
}

impl Default for PrettyStyle {
    fn default() -> Self {
        Self {
            width: 12,
            precision: 5,
        }
    }
}

/// A [`Vector`] bound to a layout, ready for `format!` / `write!`.
#[derive(Debug, Clone, Copy)]
pub struct Formatted<'a, T: Scalar> {
    vector: &'a Vector<T>,
    mode: FormatMode,
    style: PrettyStyle,
}

impl<T: Scalar> Vector<T> {
    /// Bind the vector to a layout with the default pretty style.
    ///
    /// ```
    /// # use numpde_core::vector::{FormatMode, Vector};
    /// let v = Vector::from([1.0, -2.5]);
    /// assert_eq!(v.display(FormatMode::Record).to_string(), "1;-2.5");
    /// assert_eq!(
    ///     v.display(FormatMode::Pretty).to_string(),
    ///     "[     1.00000     -2.50000]"
    /// );
    /// ```
    pub fn display(&self, mode: FormatMode) -> Formatted<'_, T> {
        Formatted {
            vector: self,
            mode,
            style: PrettyStyle::default(),
        }
    }

    /// Bind the vector to the pretty layout with a custom column style.
    pub fn display_pretty_with(&self, style: PrettyStyle) -> Formatted<'_, T> {
        Formatted {
            vector: self,
            mode: FormatMode::Pretty,
            style,
        }
    }
}

impl<T: Scalar> fmt::Display for Formatted<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            FormatMode::Record => fmt_record(self.vector, f),
            FormatMode::Pretty => fmt_pretty(self.vector, self.style, f),
        }
    }
}

impl<T: Scalar> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            fmt_pretty(self, PrettyStyle::default(), f)
        } else {
            fmt_record(self, f)
        }
    }
}

fn fmt_record<T: Scalar>(vector: &Vector<T>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, v) in vector.iter().enumerate() {
        if i > 0 {
            write!(f, "{RECORD_SEPARATOR}")?;
        }
        write!(f, "{v}")?;
    }
    Ok(())
}

fn fmt_pretty<T: Scalar>(
    vector: &Vector<T>,
    style: PrettyStyle,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    let PrettyStyle { width, precision } = style;
    write!(f, "[")?;
    for (i, v) in vector.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{v:>width$.precision$}")?;
    }
    write!(f, "]")
}
