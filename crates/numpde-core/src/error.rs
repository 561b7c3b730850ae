use thiserror::Error;

/// All errors returned by `numpde-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The allocator could not provide storage for the requested length.
    #[error("out of memory: cannot allocate {requested} elements")]
    OutOfMemory { requested: usize },

    /// A checked element access fell outside the vector.
    #[error("index {index} out of range for vector of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A sub-range request does not fit inside the vector.
    #[error("range of {count} elements starting at {first} exceeds length {len}")]
    RangeError {
        first: usize,
        count: usize,
        len: usize,
    },

    /// Element-wise operands have different lengths.
    #[error("shape mismatch: left operand has {left} elements, right has {right}")]
    ShapeMismatch { left: usize, right: usize },

    /// The operation is not defined for the given operands.
    #[error("invalid operation: {reason}")]
    InvalidOperation { reason: &'static str },

    /// A text source could not provide any data.
    #[error("input unavailable: {reason}")]
    InputUnavailable { reason: String },

    /// Writing a serialized vector failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CoreError {
    pub(crate) fn invalid(reason: &'static str) -> Self {
        Self::InvalidOperation { reason }
    }
}

/// Convenience alias used throughout `numpde-core`.
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = CoreError::ShapeMismatch { left: 3, right: 2 };
        assert_eq!(
            e.to_string(),
            "shape mismatch: left operand has 3 elements, right has 2"
        );

        let e = CoreError::IndexOutOfRange { index: 5, len: 5 };
        assert!(e.to_string().contains("index 5"));

        let e = CoreError::invalid("cross product requires length 3");
        assert_eq!(
            e.to_string(),
            "invalid operation: cross product requires length 3"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let e: CoreError = io.into();
        assert!(matches!(e, CoreError::Io(_)));
        assert_eq!(e.to_string(), "denied");
    }
}
