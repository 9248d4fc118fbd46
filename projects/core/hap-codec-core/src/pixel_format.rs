//! Pixel format identifiers registered with the host graphics pipeline.
//!
//! These are opaque FourCC values (CoreVideo `OSType` style, big-endian character order).
//! Inside this crate they carry no meaning beyond being keys into the texture format
//! mapping; see [`crate::format_mapping`].

use core::fmt;

/// Builds a FourCC from its four characters, in the order they are written.
#[inline(always)]
pub(crate) const fn fourcc(code: &[u8; 4]) -> u32 {
    u32::from_be_bytes(*code)
}

/// An external pixel format identifier.
///
/// [`PixelFormatId::UNKNOWN`] (zero) is the sentinel for "no known format".
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct PixelFormatId(pub u32);

impl PixelFormatId {
    /// Sentinel for an unmapped or unrecognized format.
    pub const UNKNOWN: Self = Self(0);
    /// RGB DXT1. `'DXt1'`
    pub const RGB_DXT1: Self = Self(fourcc(b"DXt1"));
    /// RGBA DXT5. `'DXT5'`
    pub const RGBA_DXT5: Self = Self(fourcc(b"DXT5"));
    /// Scaled YCoCg DXT5. `'DYt5'`
    pub const YCOCG_DXT5: Self = Self(fourcc(b"DYt5"));
    /// Alpha only RGTC1. `'RGA1'`
    pub const A_RGTC1: Self = Self(fourcc(b"RGA1"));
    /// RGBA BC7. `'BC7A'`
    pub const RGBA_BC7: Self = Self(fourcc(b"BC7A"));
    /// RGB BC6H, unsigned float. `'BC6U'`
    pub const RGB_BC6U: Self = Self(fourcc(b"BC6U"));
    /// RGB BC6H, signed float. `'BC6S'`
    pub const RGB_BC6S: Self = Self(fourcc(b"BC6S"));

    /// Every identifier that maps to a texture format.
    pub const KNOWN: [Self; 7] = [
        Self::RGB_DXT1,
        Self::RGBA_DXT5,
        Self::YCOCG_DXT5,
        Self::A_RGTC1,
        Self::RGBA_BC7,
        Self::RGB_BC6U,
        Self::RGB_BC6S,
    ];

    /// Returns the raw identifier value.
    #[inline(always)]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns `true` for the [`PixelFormatId::UNKNOWN`] sentinel.
    #[inline(always)]
    pub const fn is_unknown(self) -> bool {
        self.0 == Self::UNKNOWN.0
    }
}

impl From<u32> for PixelFormatId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<PixelFormatId> for u32 {
    fn from(id: PixelFormatId) -> Self {
        id.0
    }
}

// Printed as the FourCC when every byte is printable, e.g. `PixelFormatId('DXt1')`.
impl fmt::Debug for PixelFormatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.0.to_be_bytes();
        if bytes.iter().all(|b| b.is_ascii_graphic() || *b == b' ') {
            write!(
                f,
                "PixelFormatId('{}{}{}{}')",
                bytes[0] as char, bytes[1] as char, bytes[2] as char, bytes[3] as char
            )
        } else {
            write!(f, "PixelFormatId({:#010X})", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(PixelFormatId::RGB_DXT1, 0x44587431)]
    #[case(PixelFormatId::RGBA_DXT5, 0x44585435)]
    #[case(PixelFormatId::YCOCG_DXT5, 0x44597435)]
    #[case(PixelFormatId::A_RGTC1, 0x52474131)]
    #[case(PixelFormatId::RGBA_BC7, 0x42433741)]
    #[case(PixelFormatId::RGB_BC6U, 0x42433655)]
    #[case(PixelFormatId::RGB_BC6S, 0x42433653)]
    fn fourcc_values_are_big_endian(#[case] id: PixelFormatId, #[case] raw: u32) {
        assert_eq!(id.raw(), raw);
    }

    #[test]
    fn known_identifiers_are_distinct_and_not_unknown() {
        for (i, a) in PixelFormatId::KNOWN.iter().enumerate() {
            assert!(!a.is_unknown());
            for b in &PixelFormatId::KNOWN[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn default_is_unknown() {
        assert!(PixelFormatId::default().is_unknown());
    }

    #[test]
    fn debug_prints_fourcc() {
        assert_eq!(
            format!("{:?}", PixelFormatId::RGB_DXT1),
            "PixelFormatId('DXt1')"
        );
        assert_eq!(
            format!("{:?}", PixelFormatId::UNKNOWN),
            "PixelFormatId(0x00000000)"
        );
    }
}
