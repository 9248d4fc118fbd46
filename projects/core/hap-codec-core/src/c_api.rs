//! C API for HAP frame sizing and format mapping.
//!
//! All functions take and return plain integers, so no pointers cross the boundary and
//! none of the exports are `unsafe` to call.
//!
//! ## Unknown values
//!
//! The mapping functions return `0` when the input has no counterpart. `0` is neither a
//! valid pixel format identifier nor a valid texture format, so callers must check for it
//! before selecting a decoder with the result.
//!
//! ## Thread Safety
//!
//! Every function is a pure computation and may be called from any thread.

use crate::{
    buffer_size::dxt_bytes_for_dimensions,
    format_mapping::{pixel_format_for_raw_texture_format, texture_format_for_pixel_format},
    pixel_format::PixelFormatId,
};

/// Returns the compressed buffer length for a `width` x `height` frame.
///
/// # Parameters
///
/// - `width`, `height`: Frame dimensions in pixels.
/// - `codec_sub_type`: Codec sub-type FourCC (e.g. `'Hap1'`). Unknown sub-types are sized at
///   8 bits per pixel.
#[no_mangle]
pub extern "C" fn haputil_dxt_bytes_for_dimensions(
    width: u32,
    height: u32,
    codec_sub_type: u32,
) -> u64 {
    dxt_bytes_for_dimensions(width, height, codec_sub_type)
}

/// Returns the texture format value for a pixel format identifier, or `0` if unknown.
#[no_mangle]
pub extern "C" fn haputil_texture_format_for_pixel_format(pixel_format: u32) -> u32 {
    texture_format_for_pixel_format(PixelFormatId(pixel_format))
        .map(|format| format.to_raw())
        .unwrap_or(0)
}

/// Returns the pixel format identifier for a texture format value, or `0` if unknown.
#[no_mangle]
pub extern "C" fn haputil_pixel_format_for_texture_format(texture_format: u32) -> u32 {
    pixel_format_for_raw_texture_format(texture_format).raw()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;
    use crate::{CodecVariant, TextureFormat};

    #[rstest]
    #[case(CodecVariant::Hap, 64, 64, 2048)]
    #[case(CodecVariant::HapQ, 64, 64, 4096)]
    fn sizes_match_rust_api(
        #[case] variant: CodecVariant,
        #[case] width: u32,
        #[case] height: u32,
        #[case] expected: u64,
    ) {
        assert_eq!(
            haputil_dxt_bytes_for_dimensions(width, height, variant.sub_type()),
            expected
        );
    }

    #[test]
    fn mapping_round_trips_through_raw_values() {
        for &format in TextureFormat::all_values() {
            let pixel_format = haputil_pixel_format_for_texture_format(format.to_raw());
            assert_ne!(pixel_format, 0);
            assert_eq!(
                haputil_texture_format_for_pixel_format(pixel_format),
                format.to_raw()
            );
        }
    }

    #[test]
    fn unknown_values_return_zero() {
        assert_eq!(haputil_texture_format_for_pixel_format(0), 0);
        assert_eq!(haputil_texture_format_for_pixel_format(0x42475241), 0);
        assert_eq!(haputil_pixel_format_for_texture_format(0), 0);
        assert_eq!(haputil_pixel_format_for_texture_format(0x83F1), 0);
    }
}
