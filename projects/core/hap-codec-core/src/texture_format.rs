use crate::error::{HapFormatError, HapFormatResult};

/// A GPU block-compressed texture format, as stored in HAP frames.
///
/// Discriminants are the OpenGL compressed internal format values HAP uses to tag
/// frame sections, with the exception of [`TextureFormat::YCoCgDxt5`], which has no GL
/// equivalent (it is DXT5 data with a different channel interpretation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_enum_all_values::AllValues)]
#[repr(u32)]
pub enum TextureFormat {
    /// RGB, DXT1 (BC1). 8 bytes per 4x4 block.
    RgbDxt1 = 0x83F0,
    /// RGBA, DXT5 (BC3). 16 bytes per 4x4 block.
    RgbaDxt5 = 0x83F3,
    /// Scaled YCoCg stored in DXT5 (BC3). 16 bytes per 4x4 block.
    YCoCgDxt5 = 0x01,
    /// Single channel alpha, RGTC1 (BC4). 8 bytes per 4x4 block.
    AlphaRgtc1 = 0x8DBB,
    /// RGBA, BPTC unorm (BC7). 16 bytes per 4x4 block.
    RgbaBptcUnorm = 0x8E8C,
    /// RGB HDR, BPTC signed float (BC6H SF16). 16 bytes per 4x4 block.
    RgbBptcSignedFloat = 0x8E8E,
    /// RGB HDR, BPTC unsigned float (BC6H UF16). 16 bytes per 4x4 block.
    RgbBptcUnsignedFloat = 0x8E8F,
}

impl TextureFormat {
    /// Converts from the raw format value.
    ///
    /// Returns [`None`] if the value does not correspond to a known texture format.
    #[inline]
    pub const fn from_raw(value: u32) -> Option<Self> {
        match value {
            0x83F0 => Some(Self::RgbDxt1),
            0x83F3 => Some(Self::RgbaDxt5),
            0x01 => Some(Self::YCoCgDxt5),
            0x8DBB => Some(Self::AlphaRgtc1),
            0x8E8C => Some(Self::RgbaBptcUnorm),
            0x8E8E => Some(Self::RgbBptcSignedFloat),
            0x8E8F => Some(Self::RgbBptcUnsignedFloat),
            _ => None,
        }
    }

    /// Returns the raw format value.
    #[inline(always)]
    pub const fn to_raw(self) -> u32 {
        self as u32
    }

    /// Size in bytes of a single 4x4 block in this format.
    #[inline]
    pub const fn bytes_per_block(self) -> u32 {
        match self {
            Self::RgbDxt1 | Self::AlphaRgtc1 => 8,
            Self::RgbaDxt5
            | Self::YCoCgDxt5
            | Self::RgbaBptcUnorm
            | Self::RgbBptcSignedFloat
            | Self::RgbBptcUnsignedFloat => 16,
        }
    }
}

impl TryFrom<u32> for TextureFormat {
    type Error = HapFormatError;

    fn try_from(value: u32) -> HapFormatResult<Self> {
        Self::from_raw(value).ok_or(HapFormatError::UnknownTextureFormat(value))
    }
}

impl From<TextureFormat> for u32 {
    fn from(format: TextureFormat) -> Self {
        format.to_raw()
    }
}
