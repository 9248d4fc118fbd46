//! Error types for strict identifier conversions.
//!
//! The sizing and mapping functions are total and never produce these; they are only
//! returned by the [`TryFrom`] conversions, for callers that prefer an error over the
//! unknown sentinel.

use thiserror::Error;

/// Result type for strict identifier conversions.
pub type HapFormatResult<T> = Result<T, HapFormatError>;

/// An identifier that is not part of the HAP format family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HapFormatError {
    /// Codec sub-type is not a HAP variant.
    #[error("Unknown codec sub-type: {0:#010X}")]
    UnknownCodecSubType(u32),

    /// Pixel format identifier has no texture format counterpart.
    #[error("Unknown pixel format: {0:#010X}")]
    UnknownPixelFormat(u32),

    /// Raw value is not a known texture format.
    #[error("Unknown texture format: {0:#06X}")]
    UnknownTextureFormat(u32),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[test]
    fn messages_include_the_offending_value() {
        assert_eq!(
            HapFormatError::UnknownCodecSubType(0x61766331).to_string(),
            "Unknown codec sub-type: 0x61766331"
        );
        assert_eq!(
            HapFormatError::UnknownPixelFormat(0).to_string(),
            "Unknown pixel format: 0x00000000"
        );
        assert_eq!(
            HapFormatError::UnknownTextureFormat(0x83F1).to_string(),
            "Unknown texture format: 0x83F1"
        );
    }

    #[test]
    fn strict_conversions_share_the_result_alias() {
        use crate::{CodecVariant, PixelFormatId, TextureFormat};

        let codec: HapFormatResult<CodecVariant> = CodecVariant::try_from(0u32);
        let texture: HapFormatResult<TextureFormat> = TextureFormat::try_from(0x83F0u32);
        let mapped: HapFormatResult<TextureFormat> = TextureFormat::try_from(PixelFormatId::UNKNOWN);

        assert_eq!(codec, Err(HapFormatError::UnknownCodecSubType(0)));
        assert_eq!(texture, Ok(TextureFormat::RgbDxt1));
        assert_eq!(mapped, Err(HapFormatError::UnknownPixelFormat(0)));
    }
}
