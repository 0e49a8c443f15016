//! Error types for memio operations

/// Coarse classification of a [`MemoryError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An argument can never be valid (overflowing size, unknown pointer, ...)
    InvalidArgument,
    /// A byte range falls outside the addressable region
    OutOfRange,
    /// The storage collaborator failed
    StorageFailure,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            ErrorKind::InvalidArgument => "Invalid argument",
            ErrorKind::OutOfRange => "Out of range",
            ErrorKind::StorageFailure => "Storage failure",
        };
        write!(f, "{msg}")
    }
}

/// Errors that can occur during memory operations
///
/// `E` is the error type of the underlying storage collaborator. Storage
/// errors are carried unchanged in [`MemoryError::Storage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoryError<E> {
    /// Argument rejected before touching storage
    InvalidArgument(&'static str),
    /// `[offset, offset + len)` is not inside `[0, size)`
    OutOfRange {
        /// Requested start offset
        offset: u64,
        /// Requested length in bytes
        len: u64,
        /// Addressable size at the time of the request
        size: u64,
    },
    /// Error reported by the storage collaborator
    Storage(E),
}

impl<E> MemoryError<E> {
    /// Classify this error
    pub const fn kind(&self) -> ErrorKind {
        match self {
            MemoryError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            MemoryError::OutOfRange { .. } => ErrorKind::OutOfRange,
            MemoryError::Storage(_) => ErrorKind::StorageFailure,
        }
    }

    /// Returns true if this is an [`ErrorKind::OutOfRange`] error
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self, MemoryError::OutOfRange { .. })
    }

    /// Map the storage error type, keeping validation errors as they are
    pub fn map_storage<F, O>(self, op: O) -> MemoryError<F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            MemoryError::InvalidArgument(msg) => MemoryError::InvalidArgument(msg),
            MemoryError::OutOfRange { offset, len, size } => {
                MemoryError::OutOfRange { offset, len, size }
            }
            MemoryError::Storage(err) => MemoryError::Storage(op(err)),
        }
    }
}

impl<E> From<crate::validation::RangeError> for MemoryError<E> {
    fn from(err: crate::validation::RangeError) -> Self {
        MemoryError::OutOfRange {
            offset: err.offset,
            len: err.len,
            size: err.size,
        }
    }
}

impl<E: core::fmt::Display> core::fmt::Display for MemoryError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MemoryError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            MemoryError::OutOfRange { offset, len, size } => write!(
                f,
                "Range out of bounds: offset {offset} + length {len} > size {size}"
            ),
            MemoryError::Storage(err) => write!(f, "Storage failure: {err}"),
        }
    }
}

#[cfg(feature = "std")]
impl<E> std::error::Error for MemoryError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MemoryError::Storage(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type for memory operations over a storage error `E`
pub type Result<T, E> = core::result::Result<T, MemoryError<E>>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_kind() {
        let err: MemoryError<()> = MemoryError::InvalidArgument("zero-sized allocation");
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err: MemoryError<()> = MemoryError::OutOfRange {
            offset: 2,
            len: 10,
            size: 4,
        };
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert!(err.is_out_of_range());

        let err = MemoryError::Storage("disk full");
        assert_eq!(err.kind(), ErrorKind::StorageFailure);
        assert!(!err.is_out_of_range());
    }

    #[test]
    fn test_display() {
        let err: MemoryError<&str> = MemoryError::OutOfRange {
            offset: 2,
            len: 10,
            size: 4,
        };
        assert_eq!(
            err.to_string(),
            "Range out of bounds: offset 2 + length 10 > size 4"
        );
        assert_eq!(
            MemoryError::Storage("disk full").to_string(),
            "Storage failure: disk full"
        );
    }

    #[test]
    fn test_map_storage() {
        let err = MemoryError::Storage(7u8).map_storage(u32::from);
        assert_eq!(err, MemoryError::Storage(7u32));

        let err: MemoryError<u8> = MemoryError::InvalidArgument("bad");
        assert_eq!(err.map_storage(u32::from), MemoryError::InvalidArgument("bad"));
    }
}
