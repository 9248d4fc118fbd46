//! The closed set of HAP codec sub-types.
//!
//! Each variant is registered with the host under a FourCC and selects which texture
//! format(s) a frame is stored in, as well as the pixel density used for buffer sizing.

use crate::{
    error::{HapFormatError, HapFormatResult},
    pixel_format::fourcc,
    texture_format::TextureFormat,
};

/// Number of compressed bits stored per source pixel, once padded to the block grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockDensity {
    /// 8 bytes per 4x4 block (DXT1, RGTC1).
    FourBitsPerPixel,
    /// 16 bytes per 4x4 block (DXT5, BC6H, BC7).
    EightBitsPerPixel,
}

/// A HAP codec sub-type.
///
/// Discriminants are the FourCC sub-type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_enum_all_values::AllValues)]
#[repr(u32)]
pub enum CodecVariant {
    /// HAP: RGB in DXT1. `'Hap1'`
    Hap = fourcc(b"Hap1"),
    /// HAP Alpha: RGBA in DXT5. `'Hap5'`
    HapAlpha = fourcc(b"Hap5"),
    /// HAP Q: scaled YCoCg in DXT5. `'HapY'`
    HapQ = fourcc(b"HapY"),
    /// HAP Q Alpha: scaled YCoCg in DXT5 plus a separate RGTC1 alpha plane. `'HapM'`
    HapQAlpha = fourcc(b"HapM"),
    /// HAP Alpha-Only: a single RGTC1 alpha plane. `'HapA'`
    HapAlphaOnly = fourcc(b"HapA"),
    /// HAP R: RGBA in BC7. `'Hap7'`
    Hap7Alpha = fourcc(b"Hap7"),
    /// HAP HDR: RGB in BC6H unsigned float. `'HapH'`
    HapHdr = fourcc(b"HapH"),
}

impl CodecVariant {
    /// Looks up a variant from its codec sub-type FourCC.
    ///
    /// Returns [`None`] for sub-types outside the HAP family.
    #[inline]
    pub const fn from_sub_type(sub_type: u32) -> Option<Self> {
        const HAP: u32 = CodecVariant::Hap as u32;
        const HAP_ALPHA: u32 = CodecVariant::HapAlpha as u32;
        const HAP_Q: u32 = CodecVariant::HapQ as u32;
        const HAP_Q_ALPHA: u32 = CodecVariant::HapQAlpha as u32;
        const HAP_ALPHA_ONLY: u32 = CodecVariant::HapAlphaOnly as u32;
        const HAP_7_ALPHA: u32 = CodecVariant::Hap7Alpha as u32;
        const HAP_HDR: u32 = CodecVariant::HapHdr as u32;

        match sub_type {
            HAP => Some(Self::Hap),
            HAP_ALPHA => Some(Self::HapAlpha),
            HAP_Q => Some(Self::HapQ),
            HAP_Q_ALPHA => Some(Self::HapQAlpha),
            HAP_ALPHA_ONLY => Some(Self::HapAlphaOnly),
            HAP_7_ALPHA => Some(Self::Hap7Alpha),
            HAP_HDR => Some(Self::HapHdr),
            _ => None,
        }
    }

    /// Returns the codec sub-type FourCC.
    #[inline(always)]
    pub const fn sub_type(self) -> u32 {
        self as u32
    }

    /// Pixel density used when sizing this variant's compressed frame buffer.
    #[inline]
    pub const fn density(self) -> BlockDensity {
        match self {
            Self::Hap | Self::HapAlphaOnly => BlockDensity::FourBitsPerPixel,
            Self::HapAlpha | Self::HapQ | Self::HapQAlpha | Self::Hap7Alpha | Self::HapHdr => {
                BlockDensity::EightBitsPerPixel
            }
        }
    }

    /// Texture format of the frame's primary plane.
    #[inline]
    pub const fn texture_format(self) -> TextureFormat {
        match self {
            Self::Hap => TextureFormat::RgbDxt1,
            Self::HapAlpha => TextureFormat::RgbaDxt5,
            Self::HapQ | Self::HapQAlpha => TextureFormat::YCoCgDxt5,
            Self::HapAlphaOnly => TextureFormat::AlphaRgtc1,
            Self::Hap7Alpha => TextureFormat::RgbaBptcUnorm,
            Self::HapHdr => TextureFormat::RgbBptcUnsignedFloat,
        }
    }

    /// Texture format of the separate alpha plane, for variants that carry one.
    #[inline]
    pub const fn alpha_texture_format(self) -> Option<TextureFormat> {
        match self {
            Self::HapQAlpha => Some(TextureFormat::AlphaRgtc1),
            _ => None,
        }
    }

    /// Human readable name, as shown in host codec menus.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Hap => "Hap",
            Self::HapAlpha => "Hap Alpha",
            Self::HapQ => "Hap Q",
            Self::HapQAlpha => "Hap Q Alpha",
            Self::HapAlphaOnly => "Hap Alpha-Only",
            Self::Hap7Alpha => "Hap R",
            Self::HapHdr => "Hap HDR",
        }
    }
}

impl TryFrom<u32> for CodecVariant {
    type Error = HapFormatError;

    fn try_from(sub_type: u32) -> HapFormatResult<Self> {
        Self::from_sub_type(sub_type).ok_or(HapFormatError::UnknownCodecSubType(sub_type))
    }
}
