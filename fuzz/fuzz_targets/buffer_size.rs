#![no_main]

// Checks the buffer size properties for arbitrary dimensions and codec sub-types:
// padding to the block grid, monotonicity in both dimensions and the unknown sub-type fallback.

use hap_codec_core::{dxt_bytes_for_dimensions, rounding::round_up_to_multiple_of_4, CodecVariant};
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct SizeQuery {
    pub width: u32,
    pub height: u32,
    pub grow_width: u16,
    pub grow_height: u16,
    pub codec_sub_type: u32,
}

fuzz_target!(|query: SizeQuery| {
    let SizeQuery {
        width,
        height,
        grow_width,
        grow_height,
        codec_sub_type,
    } = query;

    let size = dxt_bytes_for_dimensions(width, height, codec_sub_type);

    // Rounding is idempotent wherever the padded side is still a valid dimension.
    let padded_width = round_up_to_multiple_of_4(width);
    if let Ok(padded) = u32::try_from(padded_width) {
        assert_eq!(round_up_to_multiple_of_4(padded), padded_width);
    }

    // Never smaller when either side grows.
    let wider = width.saturating_add(grow_width as u32);
    let taller = height.saturating_add(grow_height as u32);
    assert!(size <= dxt_bytes_for_dimensions(wider, height, codec_sub_type));
    assert!(size <= dxt_bytes_for_dimensions(width, taller, codec_sub_type));
    assert!(size <= dxt_bytes_for_dimensions(wider, taller, codec_sub_type));

    match CodecVariant::from_sub_type(codec_sub_type) {
        Some(variant) => assert_eq!(size, variant.compressed_len(width, height)),
        // Unknown sub-types are sized like any 8 bits-per-pixel variant.
        None => assert_eq!(size, CodecVariant::HapAlpha.compressed_len(width, height)),
    }

    if width == 0 || height == 0 {
        assert_eq!(size, 0);
    }
});
