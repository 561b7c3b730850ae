//! Reading and writing vectors as text.
//!
//! [`Vector::read_record`] parses one line such as `1;2.5;-3` back into a
//! vector. [`Vector::write`] emits either layout of
//! [`FormatMode`](super::FormatMode) followed by a newline, and
//! [`Vector::write_file`] stores the record layout on disk.

use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::Scalar;
use crate::error::{CoreError, Result};

use super::{FormatMode, Vector};

/// Length of the parse buffer before the first growth step.
const INITIAL_PARSE_LEN: usize = 100;

/// Characters that may appear inside a numeric token.
fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E')
}

/// Byte length of the numeric token at the start of `s`. A sign belongs to
/// the token only in leading or exponent position, so `1-2` ends after `1`.
fn token_end(s: &str) -> usize {
    let mut prev = None;
    for (i, c) in s.char_indices() {
        let inner_sign =
            matches!(c, '+' | '-') && prev.is_some_and(|p| !matches!(p, 'e' | 'E'));
        if !is_numeric_char(c) || inner_sign {
            return i;
        }
        prev = Some(c);
    }
    s.len()
}

/// Splits a record line into numeric tokens.
///
/// Tokens are separated by one non-numeric character, by whitespace, or by
/// both. A sign glued to the end of a token is a separator too (`1-2` yields
/// `1` and `2`). Iteration ends at the end of the line or at the first
/// position where no token follows a separator (`1;;2` yields only `1`).
struct RecordTokens<'a> {
    rest: &'a str,
    started: bool,
}

impl<'a> RecordTokens<'a> {
    fn new(line: &'a str) -> Self {
        Self {
            rest: line,
            started: false,
        }
    }
}

impl<'a> Iterator for RecordTokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let glued_sign = self.rest.starts_with(['+', '-']);
        let mut rest = self.rest.trim_start();
        if self.started {
            if let Some(sep) = rest
                .chars()
                .next()
                .filter(|&c| glued_sign || !is_numeric_char(c))
            {
                rest = rest[sep.len_utf8()..].trim_start();
            }
        }
        self.started = true;

        let (token, tail) = rest.split_at(token_end(rest));
        self.rest = tail;
        (!token.is_empty()).then_some(token)
    }
}

impl<T: Scalar + FromStr> Vector<T> {
    /// Parse one line of separated numeric tokens.
    ///
    /// Parsing stops at the first token that is not a valid `T`; everything
    /// read so far is kept. The storage grows by a doubling increment
    /// (100, 300, 700, … elements) and is truncated to the parsed count.
    ///
    /// Returns [`CoreError::InputUnavailable`] when the reader fails or is
    /// already at end of input.
    ///
    /// ```
    /// # use numpde_core::vector::Vector;
    /// let v = Vector::<f64>::read_record("1;2.5;-3\n".as_bytes()).unwrap();
    /// assert_eq!(v.as_slice(), &[1.0, 2.5, -3.0]);
    /// ```
    pub fn read_record<R: BufRead>(mut reader: R) -> Result<Self> {
        let mut line = String::new();
        let read = reader
            .read_line(&mut line)
            .map_err(|e| CoreError::InputUnavailable {
                reason: e.to_string(),
            })?;
        if read == 0 {
            return Err(CoreError::InputUnavailable {
                reason: "end of input reached before any data".to_owned(),
            });
        }

        let mut vector = Self::with_len(INITIAL_PARSE_LEN)?;
        let mut increment = INITIAL_PARSE_LEN;
        let mut count = 0;
        for token in RecordTokens::new(&line) {
            let Ok(value) = token.parse::<T>() else {
                break;
            };
            vector[count] = value;
            count += 1;
            if count >= vector.len() {
                increment *= 2;
                vector.resize(vector.len() + increment, false)?;
            }
        }
        vector.resize(count, false)?;

        debug!(elements = count, "parsed vector record");
        Ok(vector)
    }
}

impl<T: Scalar> Vector<T> {
    /// Write the vector in the given layout, followed by a newline.
    pub fn write<W: Write>(&self, mut writer: W, mode: FormatMode) -> Result<()> {
        writeln!(writer, "{}", self.display(mode))?;
        Ok(())
    }

    /// Write the record layout to `dir/filename`, replacing any existing
    /// file.
    pub fn write_file(&self, dir: impl AsRef<Path>, filename: impl AsRef<Path>) -> Result<()> {
        let path = dir.as_ref().join(filename);
        let mut writer = BufWriter::new(File::create(&path)?);
        self.write(&mut writer, FormatMode::Record)?;
        writer.flush()?;

        debug!(path = %path.display(), len = self.len(), "wrote vector record");
        Ok(())
    }
}
