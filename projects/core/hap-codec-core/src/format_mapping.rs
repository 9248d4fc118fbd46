//! Bidirectional mapping between the host pipeline's [`PixelFormatId`] and the codec's
//! internal [`TextureFormat`].
//!
//! The mapping is a bijection over [`PixelFormatId::KNOWN`] and every [`TextureFormat`].
//! Both directions are total: identifiers outside the bijection map to the unknown
//! sentinel ([`None`] / [`PixelFormatId::UNKNOWN`]) instead of failing. Callers must
//! check for the sentinel before selecting a block decoder with the result.

use crate::{
    error::{HapFormatError, HapFormatResult},
    pixel_format::PixelFormatId,
    texture_format::TextureFormat,
};

/// Returns the texture format for a pixel format identifier.
///
/// Returns [`None`] when `pixel_format` is not one of [`PixelFormatId::KNOWN`].
///
/// # Example
///
/// ```
/// use hap_codec_core::{texture_format_for_pixel_format, PixelFormatId, TextureFormat};
///
/// assert_eq!(
///     texture_format_for_pixel_format(PixelFormatId::RGB_DXT1),
///     Some(TextureFormat::RgbDxt1)
/// );
/// assert_eq!(texture_format_for_pixel_format(PixelFormatId(0x42475241)), None);
/// ```
pub fn texture_format_for_pixel_format(pixel_format: PixelFormatId) -> Option<TextureFormat> {
    let format = match pixel_format {
        PixelFormatId::RGB_DXT1 => TextureFormat::RgbDxt1,
        PixelFormatId::RGBA_DXT5 => TextureFormat::RgbaDxt5,
        PixelFormatId::YCOCG_DXT5 => TextureFormat::YCoCgDxt5,
        PixelFormatId::A_RGTC1 => TextureFormat::AlphaRgtc1,
        PixelFormatId::RGBA_BC7 => TextureFormat::RgbaBptcUnorm,
        PixelFormatId::RGB_BC6U => TextureFormat::RgbBptcUnsignedFloat,
        PixelFormatId::RGB_BC6S => TextureFormat::RgbBptcSignedFloat,
        _ => {
            log::debug!("No texture format for pixel format {pixel_format:?}");
            return None;
        }
    };
    Some(format)
}

/// Returns the pixel format identifier for a texture format.
///
/// Every [`TextureFormat`] has exactly one identifier, so this never returns
/// [`PixelFormatId::UNKNOWN`].
#[inline]
pub const fn pixel_format_for_texture_format(format: TextureFormat) -> PixelFormatId {
    match format {
        TextureFormat::RgbDxt1 => PixelFormatId::RGB_DXT1,
        TextureFormat::RgbaDxt5 => PixelFormatId::RGBA_DXT5,
        TextureFormat::YCoCgDxt5 => PixelFormatId::YCOCG_DXT5,
        TextureFormat::AlphaRgtc1 => PixelFormatId::A_RGTC1,
        TextureFormat::RgbaBptcUnorm => PixelFormatId::RGBA_BC7,
        TextureFormat::RgbBptcUnsignedFloat => PixelFormatId::RGB_BC6U,
        TextureFormat::RgbBptcSignedFloat => PixelFormatId::RGB_BC6S,
    }
}

/// Returns the pixel format identifier for a raw texture format value.
///
/// This is the untyped form of [`pixel_format_for_texture_format`], for values that have
/// not been validated as a [`TextureFormat`]. Out of range values give
/// [`PixelFormatId::UNKNOWN`].
pub fn pixel_format_for_raw_texture_format(raw_format: u32) -> PixelFormatId {
    match TextureFormat::from_raw(raw_format) {
        Some(format) => pixel_format_for_texture_format(format),
        None => {
            log::debug!("No pixel format for texture format {raw_format:#06X}");
            PixelFormatId::UNKNOWN
        }
    }
}

impl TryFrom<PixelFormatId> for TextureFormat {
    type Error = HapFormatError;

    fn try_from(pixel_format: PixelFormatId) -> HapFormatResult<Self> {
        texture_format_for_pixel_format(pixel_format)
            .ok_or(HapFormatError::UnknownPixelFormat(pixel_format.raw()))
    }
}

impl From<TextureFormat> for PixelFormatId {
    fn from(format: TextureFormat) -> Self {
        pixel_format_for_texture_format(format)
    }
}
