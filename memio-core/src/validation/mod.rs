//! Validation utilities for byte-range access
//!
//! This module contains pure validation functions with no I/O dependencies.

pub mod bounds;

pub use bounds::{byte_len, check_range, shrunk_size, RangeError};
