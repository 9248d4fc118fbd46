//! Byte length of a compressed HAP frame buffer.
//!
//! Width and height are padded independently to the 4x4 block grid, then multiplied.
//! 4 bits-per-pixel variants store half a byte per padded pixel, every other variant
//! stores one byte per padded pixel.
//!
//! The returned length corresponds to the padded grid, not to `width * height`.

use crate::{
    codec_variant::{BlockDensity, CodecVariant},
    rounding::round_up_to_multiple_of_4,
};

/// Number of pixels in the padded block grid covering `width` x `height`.
///
/// Saturates at [`u64::MAX`], which is only reachable when both sides pad to `2^32`.
#[inline(always)]
pub const fn padded_pixel_count(width: u32, height: u32) -> u64 {
    round_up_to_multiple_of_4(width).saturating_mul(round_up_to_multiple_of_4(height))
}

/// Compressed size in bytes of a `width` x `height` frame at the given density.
///
/// Exact for every 4 bits-per-pixel input. At 8 bits per pixel the result saturates at
/// [`u64::MAX`] when both sides pad to `2^32`.
#[inline]
pub const fn dxt_bytes_for_density(width: u32, height: u32, density: BlockDensity) -> u64 {
    match density {
        // Padded width is even, so halving it first is exact and cannot overflow.
        BlockDensity::FourBitsPerPixel => {
            (round_up_to_multiple_of_4(width) / 2) * round_up_to_multiple_of_4(height)
        }
        BlockDensity::EightBitsPerPixel => padded_pixel_count(width, height),
    }
}

impl CodecVariant {
    /// Compressed size in bytes of a `width` x `height` frame in this variant.
    ///
    /// # Example
    ///
    /// ```
    /// use hap_codec_core::CodecVariant;
    ///
    /// assert_eq!(CodecVariant::Hap.compressed_len(1920, 1080), 1_036_800);
    /// assert_eq!(CodecVariant::HapAlpha.compressed_len(1920, 1080), 2_073_600);
    /// ```
    #[inline]
    pub const fn compressed_len(self, width: u32, height: u32) -> u64 {
        dxt_bytes_for_density(width, height, self.density())
    }
}

/// Compressed size in bytes of a `width` x `height` frame with the given codec sub-type.
///
/// `codec_sub_type` is the raw FourCC supplied by the host pipeline. Sub-types that are
/// not HAP variants are sized at 8 bits per pixel; this can only over-allocate.
///
/// # Example
///
/// ```
/// use hap_codec_core::{dxt_bytes_for_dimensions, CodecVariant};
///
/// let hap = CodecVariant::Hap.sub_type();
/// assert_eq!(dxt_bytes_for_dimensions(64, 64, hap), 2048);
/// assert_eq!(dxt_bytes_for_dimensions(66, 66, hap), 2312);
/// ```
pub fn dxt_bytes_for_dimensions(width: u32, height: u32, codec_sub_type: u32) -> u64 {
    let density = match CodecVariant::from_sub_type(codec_sub_type) {
        Some(variant) => variant.density(),
        None => {
            log::debug!(
                "Unknown codec sub-type {codec_sub_type:#010X}, sizing {width}x{height} at 8 bits per pixel"
            );
            BlockDensity::EightBitsPerPixel
        }
    };
    dxt_bytes_for_density(width, height, density)
}
