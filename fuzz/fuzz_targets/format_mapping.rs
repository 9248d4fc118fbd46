#![no_main]

// Checks that arbitrary identifiers either round trip through the texture format mapping
// or map to the unknown sentinel, in both directions.

use hap_codec_core::{
    pixel_format_for_raw_texture_format, pixel_format_for_texture_format,
    texture_format_for_pixel_format, PixelFormatId, TextureFormat,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|raw: u32| {
    // Treat the value as a host pixel format identifier.
    let id = PixelFormatId(raw);
    match texture_format_for_pixel_format(id) {
        Some(format) => {
            assert!(PixelFormatId::KNOWN.contains(&id));
            assert_eq!(pixel_format_for_texture_format(format), id);
        }
        None => assert!(!PixelFormatId::KNOWN.contains(&id)),
    }

    // Treat the value as a raw texture format.
    let id = pixel_format_for_raw_texture_format(raw);
    match TextureFormat::from_raw(raw) {
        Some(format) => {
            assert!(!id.is_unknown());
            assert_eq!(texture_format_for_pixel_format(id), Some(format));
        }
        None => assert!(id.is_unknown()),
    }
});
