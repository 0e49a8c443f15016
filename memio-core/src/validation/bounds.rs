//! Byte-range bounds validation
//!
//! Pure arithmetic over offsets and lengths with no I/O. Every raw access is
//! gated through [`check_range`] before storage is touched.

/// A byte range that does not fit inside the addressable region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeError {
    pub offset: u64,
    pub len: u64,
    pub size: u64,
}

/// Validate that `[offset, offset + len)` lies inside `[0, size)`
///
/// Returns the exclusive end of the range. A zero-length range at
/// `offset == size` is valid. An overflowing `offset + len` is out of range.
pub const fn check_range(offset: u64, len: u64, size: u64) -> Result<u64, RangeError> {
    match offset.checked_add(len) {
        Some(end) if end <= size => Ok(end),
        _ => Err(RangeError { offset, len, size }),
    }
}

/// Convert a slice length to a byte count
///
/// `usize` never exceeds 64 bits on supported targets, so this is lossless.
pub const fn byte_len(len: usize) -> u64 {
    len as u64
}

/// Size after shrinking by `delta`, clamped at zero
pub const fn shrunk_size(size: u64, delta: u64) -> u64 {
    size.saturating_sub(delta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_range() {
        assert_eq!(check_range(0, 4, 4), Ok(4));
        assert_eq!(check_range(1, 2, 4), Ok(3));

        // Zero-length at the end is valid, one past it is not
        assert_eq!(check_range(4, 0, 4), Ok(4));
        assert_eq!(
            check_range(5, 0, 4),
            Err(RangeError {
                offset: 5,
                len: 0,
                size: 4
            })
        );

        assert_eq!(
            check_range(2, 10, 4),
            Err(RangeError {
                offset: 2,
                len: 10,
                size: 4
            })
        );
    }

    #[test]
    fn test_check_range_overflow() {
        assert!(check_range(u64::MAX, 1, u64::MAX).is_err());
        assert!(check_range(1, u64::MAX, u64::MAX).is_err());
        assert_eq!(check_range(u64::MAX, 0, u64::MAX), Ok(u64::MAX));
    }

    #[test]
    fn test_shrunk_size() {
        assert_eq!(shrunk_size(10, 3), 7);
        assert_eq!(shrunk_size(10, 10), 0);
        assert_eq!(shrunk_size(10, 11), 0);
        assert_eq!(shrunk_size(0, u64::MAX), 0);
    }
}
