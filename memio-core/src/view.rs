//! Typed integer view over a raw byte range
//!
//! [`TypedView`] holds no state of its own besides the wrapped memory. Every
//! accessor looks up the [`WidthDescriptor`](crate::WidthDescriptor) for its
//! width, moves `bits / 8` bytes through the raw layer, and converts between
//! little-endian bytes and native integers.

use crate::buffer::RawBuffer;
use crate::format::{IntWidth, MAX_WIDTH_BYTES};
use crate::traits::{RawMemory, Storage, TypedMemory};
use crate::Result;

/// Fixed-width integer accessors over any [`RawMemory`]
#[derive(Debug)]
pub struct TypedView<R> {
    memory: R,
}

impl<R: RawMemory> TypedView<R> {
    /// Wrap a raw byte range
    pub fn new(memory: R) -> Self {
        Self { memory }
    }

    /// Borrow the wrapped memory
    pub fn get_ref(&self) -> &R {
        &self.memory
    }

    /// Mutably borrow the wrapped memory
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.memory
    }

    /// Unwrap the view
    pub fn into_inner(self) -> R {
        self.memory
    }
}

impl<S: Storage> TypedView<RawBuffer<S>> {
    /// Build a view directly over a storage collaborator
    pub fn from_storage(storage: S) -> Result<Self, S::Error> {
        Ok(Self::new(RawBuffer::new(storage)?))
    }
}

impl<R: RawMemory> RawMemory for TypedView<R> {
    type Error = R::Error;

    fn size(&self) -> u64 {
        self.memory.size()
    }

    fn increase_size(&mut self, delta: u64) -> Result<(), R::Error> {
        self.memory.increase_size(delta)
    }

    fn reduce_size(&mut self, delta: u64) -> Result<(), R::Error> {
        self.memory.reduce_size(delta)
    }

    fn read_buffer_into(&self, offset: u64, buf: &mut [u8]) -> Result<(), R::Error> {
        self.memory.read_buffer_into(offset, buf)
    }

    fn write_buffer(&mut self, offset: u64, data: &[u8]) -> Result<(), R::Error> {
        self.memory.write_buffer(offset, data)
    }
}

impl<R: RawMemory> TypedMemory for TypedView<R> {
    fn read_uint(&self, offset: u64, width: IntWidth) -> Result<u64, R::Error> {
        let desc = width.descriptor();
        let mut bytes = [0u8; MAX_WIDTH_BYTES];
        self.memory
            .read_buffer_into(offset, &mut bytes[..desc.bytes])?;
        Ok(desc.decode_le(&bytes))
    }

    fn read_int(&self, offset: u64, width: IntWidth) -> Result<i64, R::Error> {
        let raw = self.read_uint(offset, width)?;
        Ok(width.descriptor().sign_extend(raw))
    }

    fn write_uint(&mut self, offset: u64, width: IntWidth, value: u64) -> Result<(), R::Error> {
        let desc = width.descriptor();
        let bytes = desc.encode_le(value);
        self.memory.write_buffer(offset, &bytes[..desc.bytes])
    }

    fn write_int(&mut self, offset: u64, width: IntWidth, value: i64) -> Result<(), R::Error> {
        let raw = width.descriptor().to_unsigned(value);
        self.write_uint(offset, width, raw)
    }
}
