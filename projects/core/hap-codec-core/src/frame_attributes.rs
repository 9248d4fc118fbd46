//! Description of a compressed frame buffer, handed to the collaborator that allocates
//! and stages frame buffers for the host pipeline.

use crate::{
    codec_variant::CodecVariant, format_mapping::pixel_format_for_texture_format,
    pixel_format::PixelFormatId,
};

/// Attributes of the compressed buffer holding one frame.
///
/// Plain data, built by value; the host translates it into whatever attribute
/// representation its buffer pools expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameBufferAttributes {
    /// Frame width in pixels, before block padding.
    pub width: u32,
    /// Frame height in pixels, before block padding.
    pub height: u32,
    /// Codec variant the frame is encoded with.
    pub codec: CodecVariant,
    /// Pixel format of the primary plane.
    pub pixel_format: PixelFormatId,
    /// Pixel format of the separate alpha plane, for variants that carry one.
    pub alpha_pixel_format: Option<PixelFormatId>,
    /// Byte length of the compressed buffer.
    pub data_len: u64,
}

impl FrameBufferAttributes {
    /// Describes the compressed buffer for a `width` x `height` frame in `codec`.
    pub const fn new(width: u32, height: u32, codec: CodecVariant) -> Self {
        let alpha_pixel_format = match codec.alpha_texture_format() {
            Some(format) => Some(pixel_format_for_texture_format(format)),
            None => None,
        };

        Self {
            width,
            height,
            codec,
            pixel_format: pixel_format_for_texture_format(codec.texture_format()),
            alpha_pixel_format,
            data_len: codec.compressed_len(width, height),
        }
    }

    /// Number of texture planes making up the frame.
    #[inline]
    pub const fn plane_count(&self) -> usize {
        if self.alpha_pixel_format.is_some() {
            2
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(CodecVariant::Hap, PixelFormatId::RGB_DXT1, None)]
    #[case(CodecVariant::HapAlpha, PixelFormatId::RGBA_DXT5, None)]
    #[case(CodecVariant::HapQ, PixelFormatId::YCOCG_DXT5, None)]
    #[case(
        CodecVariant::HapQAlpha,
        PixelFormatId::YCOCG_DXT5,
        Some(PixelFormatId::A_RGTC1)
    )]
    #[case(CodecVariant::HapAlphaOnly, PixelFormatId::A_RGTC1, None)]
    #[case(CodecVariant::Hap7Alpha, PixelFormatId::RGBA_BC7, None)]
    #[case(CodecVariant::HapHdr, PixelFormatId::RGB_BC6U, None)]
    fn pixel_formats_per_variant(
        #[case] codec: CodecVariant,
        #[case] pixel_format: PixelFormatId,
        #[case] alpha_pixel_format: Option<PixelFormatId>,
    ) {
        let attributes = FrameBufferAttributes::new(1920, 1080, codec);
        assert_eq!(attributes.pixel_format, pixel_format);
        assert_eq!(attributes.alpha_pixel_format, alpha_pixel_format);
        assert_eq!(
            attributes.plane_count(),
            1 + alpha_pixel_format.is_some() as usize
        );
    }

    #[test]
    fn keeps_unpadded_dimensions_and_padded_length() {
        let attributes = FrameBufferAttributes::new(66, 66, CodecVariant::Hap);
        assert_eq!(attributes.width, 66);
        assert_eq!(attributes.height, 66);
        assert_eq!(attributes.codec, CodecVariant::Hap);
        assert_eq!(attributes.data_len, 2312);
    }

    #[test]
    fn data_len_matches_buffer_size() {
        for &codec in CodecVariant::all_values() {
            let attributes = FrameBufferAttributes::new(1280, 722, codec);
            assert_eq!(attributes.data_len, codec.compressed_len(1280, 722));
        }
    }
}
