//! Byte layout definitions for typed memory access
//!
//! Pure data definitions for the little-endian integer layout. No I/O.

pub mod constants;
pub mod width;

pub use constants::{MAX_WIDTH_BYTES, NATIVE_INT_BITS};
pub use width::{IntWidth, WidthDescriptor, DESCRIPTORS};
