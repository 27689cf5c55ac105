//! Q8.8 fixed-point values as they are written into the lookup table.

use std::fmt;

/// Number of fractional bits in a table value.
pub const FRACTION_BITS: u32 = 8;

/// Scale applied to a real value before truncation (`1 << FRACTION_BITS`).
pub const SCALE: f64 = 256.0;

/// A 16-bit fixed-point table entry.
///
/// The full 32-bit pattern of the truncated integer is kept, and only the low 16 bits are
/// displayed. For anything that fits in an `i16` this is the ordinary two's-complement Q8.8
/// encoding. Larger magnitudes silently lose their upper bits, and magnitudes beyond the range
/// of an `i32` saturate because of how Rust casts floats to integers.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
#[repr(transparent)]
pub struct Fxp16(u32);

impl Fxp16 {
    /// Convert a real value to its table encoding.
    ///
    /// The value is scaled by [`SCALE`], truncated toward zero to an `i32` and then the bits of
    /// that integer are reinterpreted as a `u32`. The reinterpretation goes through the byte
    /// representation so it is a pure bit cast and never a numeric conversion.
    pub fn from_real(value: f64) -> Self {
        let truncated = (value * SCALE) as i32;
        Self(u32::from_ne_bytes(truncated.to_ne_bytes()))
    }

    /// Build an entry from an already-computed 32-bit pattern.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// The full 32-bit pattern of the truncated integer.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The low 16 bits, which is all that ends up in the table.
    #[inline]
    pub const fn low_bits(self) -> u16 {
        (self.0 & 0xFFFF) as u16
    }

    /// True if the truncated integer is representable in 16 signed bits, i.e. the displayed
    /// value loses nothing.
    pub const fn fits_i16(self) -> bool {
        let signed = i32::from_ne_bytes(self.0.to_ne_bytes());
        signed >= i16::MIN as i32 && signed <= i16::MAX as i32
    }
}

impl fmt::LowerHex for Fxp16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.low_bits(), f)
    }
}

impl fmt::Display for Fxp16 {
    /// Writes the entry as it appears in a `dw` directive, e.g. `0xf000`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04x}", self.low_bits())
    }
}
