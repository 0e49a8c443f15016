//! Layout constants for typed access

/// Widest supported integer, in bytes
pub const MAX_WIDTH_BYTES: usize = 4;

/// Bit width of the native signed integer that values are widened into
pub const NATIVE_INT_BITS: u32 = i64::BITS;
