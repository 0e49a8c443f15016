//! Fixed-width integer descriptors
//!
//! Each supported width carries the masks needed to pack and unpack
//! little-endian two's-complement integers. The table is built at compile
//! time; sign extension always targets `i64`, independent of the host's
//! pointer width.

use super::constants::{MAX_WIDTH_BYTES, NATIVE_INT_BITS};

/// Supported integer widths
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IntWidth {
    /// 8-bit integer (1 byte)
    W8 = 8,
    /// 16-bit integer (2 bytes)
    W16 = 16,
    /// 24-bit integer (3 bytes)
    W24 = 24,
    /// 32-bit integer (4 bytes)
    W32 = 32,
}

impl IntWidth {
    /// All widths in ascending order
    pub const ALL: [IntWidth; 4] = [IntWidth::W8, IntWidth::W16, IntWidth::W24, IntWidth::W32];

    /// Convert from a bit count
    pub const fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            8 => Some(IntWidth::W8),
            16 => Some(IntWidth::W16),
            24 => Some(IntWidth::W24),
            32 => Some(IntWidth::W32),
            _ => None,
        }
    }

    /// Number of bits
    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// Number of bytes occupied in storage
    pub const fn bytes(self) -> usize {
        (self as usize) / 8
    }

    /// Descriptor with the precomputed masks for this width
    pub fn descriptor(self) -> &'static WidthDescriptor {
        &DESCRIPTORS[self.bytes() - 1]
    }
}

impl core::fmt::Display for IntWidth {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

/// Precomputed masks for one integer width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidthDescriptor {
    pub width: IntWidth,
    pub bits: u32,
    pub bytes: usize,
    /// `(1 << bits) - 1`
    pub value_mask: u64,
    /// `1 << (bits - 1)`
    pub sign_bit: u64,
    /// Bits above `bits` in a 64-bit native integer
    pub extension_mask: u64,
}

impl WidthDescriptor {
    /// Build the descriptor for `width`
    pub const fn new(width: IntWidth) -> Self {
        let bits = width.bits();
        let value_mask = (1u64 << bits) - 1;
        Self {
            width,
            bits,
            bytes: width.bytes(),
            value_mask,
            sign_bit: 1u64 << (bits - 1),
            extension_mask: !value_mask & (u64::MAX >> (64 - NATIVE_INT_BITS)),
        }
    }

    /// Keep only the low `bits` bits of `value`
    pub const fn truncate(&self, value: u64) -> u64 {
        value & self.value_mask
    }

    /// Returns true if the sign bit of `raw` is set
    pub const fn is_negative(&self, raw: u64) -> bool {
        raw & self.sign_bit != 0
    }

    /// Interpret the low `bits` bits of `raw` as a two's-complement value
    pub const fn sign_extend(&self, raw: u64) -> i64 {
        let raw = self.truncate(raw);
        if self.is_negative(raw) {
            raw as i64 - (1i64 << self.bits)
        } else {
            raw as i64
        }
    }

    /// Sign extension by ORing [`Self::extension_mask`] into negative values
    ///
    /// Agrees with [`Self::sign_extend`] for every input.
    pub const fn sign_extend_masked(&self, raw: u64) -> i64 {
        let raw = self.truncate(raw);
        if self.is_negative(raw) {
            (raw | self.extension_mask) as i64
        } else {
            raw as i64
        }
    }

    /// Two's-complement bit pattern of `value`, truncated to `bits` bits
    pub const fn to_unsigned(&self, value: i64) -> u64 {
        self.truncate(value as u64)
    }

    /// Largest unsigned value
    pub const fn max_unsigned(&self) -> u64 {
        self.value_mask
    }

    /// Smallest signed value
    pub const fn min_signed(&self) -> i64 {
        -(1i64 << (self.bits - 1))
    }

    /// Largest signed value
    pub const fn max_signed(&self) -> i64 {
        (1i64 << (self.bits - 1)) - 1
    }

    /// Little-endian encoding of the low `bits` bits of `value`
    ///
    /// Only the first [`Self::bytes`] entries of the returned array are
    /// meaningful; the rest are zero.
    pub const fn encode_le(&self, value: u64) -> [u8; MAX_WIDTH_BYTES] {
        let mut out = [0u8; MAX_WIDTH_BYTES];
        let mut i = 0;
        while i < self.bytes {
            out[i] = (value >> (8 * i)) as u8;
            i += 1;
        }
        out
    }

    /// Reassemble a little-endian value from the first `bytes` entries
    ///
    /// `bytes` must hold at least [`Self::bytes`] entries.
    pub const fn decode_le(&self, bytes: &[u8]) -> u64 {
        let mut value = 0u64;
        let mut i = 0;
        while i < self.bytes {
            value |= (bytes[i] as u64) << (8 * i);
            i += 1;
        }
        value
    }
}

/// Descriptor table indexed by `bytes - 1`
pub static DESCRIPTORS: [WidthDescriptor; 4] = [
    WidthDescriptor::new(IntWidth::W8),
    WidthDescriptor::new(IntWidth::W16),
    WidthDescriptor::new(IntWidth::W24),
    WidthDescriptor::new(IntWidth::W32),
];

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_descriptor_table() {
        for width in IntWidth::ALL {
            let desc = width.descriptor();
            assert_eq!(desc.width, width);
            assert_eq!(desc.bits as usize, desc.bytes * 8);
        }

        let d8 = IntWidth::W8.descriptor();
        assert_eq!(d8.sign_bit, 0x80);
        assert_eq!(d8.value_mask, 0xFF);
        assert_eq!(d8.extension_mask, 0xFFFF_FFFF_FFFF_FF00);

        let d24 = IntWidth::W24.descriptor();
        assert_eq!(d24.sign_bit, 0x80_0000);
        assert_eq!(d24.bytes, 3);

        // 32-bit still extends into the upper half of the native integer
        let d32 = IntWidth::W32.descriptor();
        assert_eq!(d32.sign_bit, 0x8000_0000);
        assert_eq!(d32.extension_mask, 0xFFFF_FFFF_0000_0000);
    }

    #[test]
    fn test_from_bits() {
        assert_eq!(IntWidth::from_bits(8), Some(IntWidth::W8));
        assert_eq!(IntWidth::from_bits(24), Some(IntWidth::W24));
        assert_eq!(IntWidth::from_bits(32), Some(IntWidth::W32));
        assert_eq!(IntWidth::from_bits(64), None);
        assert_eq!(IntWidth::from_bits(0), None);
    }

    #[test]
    fn test_sign_extend() {
        let d8 = IntWidth::W8.descriptor();
        assert_eq!(d8.sign_extend(0xFF), -1);
        assert_eq!(d8.sign_extend(0x80), -128);
        assert_eq!(d8.sign_extend(0x7F), 127);

        let d32 = IntWidth::W32.descriptor();
        assert_eq!(d32.sign_extend(0xDEAD_BEEF), 0xDEAD_BEEFu32 as i32 as i64);
        assert_eq!(d32.sign_extend(0x8000_0000), i32::MIN as i64);
    }

    #[test]
    fn test_encode_decode_le() {
        let d32 = IntWidth::W32.descriptor();
        assert_eq!(d32.encode_le(0xDEAD_BEEF), [0xEF, 0xBE, 0xAD, 0xDE]);
        assert_eq!(d32.decode_le(&[0xEF, 0xBE, 0xAD, 0xDE]), 0xDEAD_BEEF);

        let d16 = IntWidth::W16.descriptor();
        // Only the low 16 bits are kept
        assert_eq!(d16.encode_le(0x1234_5678), [0x78, 0x56, 0, 0]);

        let d24 = IntWidth::W24.descriptor();
        assert_eq!(d24.decode_le(&[0x01, 0x02, 0x03, 0xFF]), 0x03_0201);
    }

    #[test]
    fn test_signed_limits() {
        let d24 = IntWidth::W24.descriptor();
        assert_eq!(d24.min_signed(), -8_388_608);
        assert_eq!(d24.max_signed(), 8_388_607);
        assert_eq!(d24.max_unsigned(), 0xFF_FFFF);
    }

    proptest! {
        #[test]
        fn prop_mask_and_subtraction_agree(raw in any::<u64>()) {
            for width in IntWidth::ALL {
                let desc = width.descriptor();
                prop_assert_eq!(desc.sign_extend(raw), desc.sign_extend_masked(raw));
            }
        }

        #[test]
        fn prop_twos_complement_inverse(value in any::<i32>()) {
            for width in IntWidth::ALL {
                let desc = width.descriptor();
                let v = (value as i64).clamp(desc.min_signed(), desc.max_signed());
                prop_assert_eq!(desc.sign_extend(desc.to_unsigned(v)), v);
            }
        }
    }
}
