//! Image bit depth information and helpers

/// The sample depth of a decoded image.
///
/// A LibRaw-style engine emits interleaved samples that are either one
/// or two bytes wide, so only those two depths exist here.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BitDepth {
    /// Eight bit depth.
    ///
    /// Samples are stored in a [`u8`] and use the whole range from 0-255.
    Eight,
    /// Sixteen bit depth.
    ///
    /// Samples are stored in a [`u16`] and use the whole range from
    /// 0-65535.
    ///
    /// Data is stored and processed in native endian.
    Sixteen
}

impl BitDepth {
    /// Get the max value supported by the bit depth
    pub const fn max_value(self) -> u16 {
        match self {
            Self::Eight => u8::MAX as u16,
            Self::Sixteen => u16::MAX
        }
    }

    /// Return the number of bytes a single sample occupies
    ///
    /// # Example
    /// ```
    /// use rawmill::BitDepth;
    /// assert_eq!(BitDepth::Sixteen.size_of(), 2);
    /// ```
    pub const fn size_of(self) -> usize {
        match self {
            Self::Eight => 1,
            Self::Sixteen => 2
        }
    }

    /// Return the number of bits a single sample occupies
    pub const fn bit_size(self) -> usize {
        self.size_of() * 8
    }

    /// Map an engine reported bit count to a depth.
    ///
    /// Returns `None` for anything other than 8 or 16, which a
    /// conforming engine never reports for a finished memory image.
    ///
    /// # Example
    /// ```
    /// use rawmill::BitDepth;
    /// assert_eq!(BitDepth::from_bits(16), Some(BitDepth::Sixteen));
    /// assert_eq!(BitDepth::from_bits(12), None);
    /// ```
    pub const fn from_bits(bits: u16) -> Option<BitDepth> {
        match bits {
            8 => Some(BitDepth::Eight),
            16 => Some(BitDepth::Sixteen),
            _ => None
        }
    }
}
