//! Resource identifiers used when registering the codec components with a legacy
//! (32-bit component manager) host.
//!
//! Only the codec-info resource type carries per-variant identifiers. Variants added after
//! the first four have no identifier assigned and are reported as unmapped.

use crate::{codec_variant::CodecVariant, pixel_format::fourcc};

/// Resource type of the codec-info resource. `'cdci'`
pub const CODEC_INFO_RESOURCE_TYPE: u32 = fourcc(b"cdci");

/// Returns the resource identifier of `component` for the given resource type.
///
/// Returns [`None`] for resource types other than [`CODEC_INFO_RESOURCE_TYPE`], and for
/// variants that have no registered identifier ([`CodecVariant::HapAlphaOnly`],
/// [`CodecVariant::Hap7Alpha`], [`CodecVariant::HapHdr`]).
#[inline]
pub const fn resource_id_for_component(component: CodecVariant, resource_type: u32) -> Option<i16> {
    if resource_type != CODEC_INFO_RESOURCE_TYPE {
        return None;
    }

    match component {
        CodecVariant::Hap => Some(256),
        CodecVariant::HapAlpha => Some(456),
        CodecVariant::HapQ => Some(356),
        CodecVariant::HapQAlpha => Some(556),
        CodecVariant::HapAlphaOnly | CodecVariant::Hap7Alpha | CodecVariant::HapHdr => None,
    }
}
