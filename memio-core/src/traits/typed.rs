//! Typed integer accessors over a raw byte range
//!
//! All integers are stored little-endian in two's complement. Writers keep
//! only the low bits of their input, so writing a value that does not fit the
//! width stores it modulo `2^bits` rather than failing.

use super::raw::RawMemory;
use crate::format::IntWidth;
use crate::Result;

/// Fixed-width integer access on top of [`RawMemory`]
pub trait TypedMemory: RawMemory {
    /// Read an unsigned integer of `width` at `offset`
    fn read_uint(&self, offset: u64, width: IntWidth) -> Result<u64, Self::Error>;

    /// Read a signed integer of `width` at `offset`, sign-extended to `i64`
    fn read_int(&self, offset: u64, width: IntWidth) -> Result<i64, Self::Error>;

    /// Write the low `width` bits of `value` at `offset`
    fn write_uint(&mut self, offset: u64, width: IntWidth, value: u64) -> Result<(), Self::Error>;

    /// Write the two's-complement low `width` bits of `value` at `offset`
    fn write_int(&mut self, offset: u64, width: IntWidth, value: i64) -> Result<(), Self::Error>;

    fn read_uint8(&self, offset: u64) -> Result<u8, Self::Error> {
        Ok(self.read_uint(offset, IntWidth::W8)? as u8)
    }

    fn read_uint16(&self, offset: u64) -> Result<u16, Self::Error> {
        Ok(self.read_uint(offset, IntWidth::W16)? as u16)
    }

    /// Read a 24-bit unsigned integer into the low bits of a `u32`
    fn read_uint24(&self, offset: u64) -> Result<u32, Self::Error> {
        Ok(self.read_uint(offset, IntWidth::W24)? as u32)
    }

    fn read_uint32(&self, offset: u64) -> Result<u32, Self::Error> {
        Ok(self.read_uint(offset, IntWidth::W32)? as u32)
    }

    fn read_int8(&self, offset: u64) -> Result<i8, Self::Error> {
        Ok(self.read_int(offset, IntWidth::W8)? as i8)
    }

    fn read_int16(&self, offset: u64) -> Result<i16, Self::Error> {
        Ok(self.read_int(offset, IntWidth::W16)? as i16)
    }

    /// Read a 24-bit signed integer, sign-extended to `i32`
    fn read_int24(&self, offset: u64) -> Result<i32, Self::Error> {
        Ok(self.read_int(offset, IntWidth::W24)? as i32)
    }

    fn read_int32(&self, offset: u64) -> Result<i32, Self::Error> {
        Ok(self.read_int(offset, IntWidth::W32)? as i32)
    }

    fn write_uint8(&mut self, offset: u64, value: u8) -> Result<(), Self::Error> {
        self.write_uint(offset, IntWidth::W8, value.into())
    }

    fn write_uint16(&mut self, offset: u64, value: u16) -> Result<(), Self::Error> {
        self.write_uint(offset, IntWidth::W16, value.into())
    }

    /// Write the low 24 bits of `value`
    fn write_uint24(&mut self, offset: u64, value: u32) -> Result<(), Self::Error> {
        self.write_uint(offset, IntWidth::W24, value.into())
    }

    fn write_uint32(&mut self, offset: u64, value: u32) -> Result<(), Self::Error> {
        self.write_uint(offset, IntWidth::W32, value.into())
    }

    fn write_int8(&mut self, offset: u64, value: i8) -> Result<(), Self::Error> {
        self.write_int(offset, IntWidth::W8, value.into())
    }

    fn write_int16(&mut self, offset: u64, value: i16) -> Result<(), Self::Error> {
        self.write_int(offset, IntWidth::W16, value.into())
    }

    /// Write the low 24 bits of `value` in two's complement
    fn write_int24(&mut self, offset: u64, value: i32) -> Result<(), Self::Error> {
        self.write_int(offset, IntWidth::W24, value.into())
    }

    fn write_int32(&mut self, offset: u64, value: i32) -> Result<(), Self::Error> {
        self.write_int(offset, IntWidth::W32, value.into())
    }
}
