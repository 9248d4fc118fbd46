#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

/// Rounding helpers for the 4x4 block grid.
pub mod rounding;

/// HAP codec sub-types and their properties.
pub mod codec_variant;

/// Internal texture format enumeration.
pub mod texture_format;

/// External (host pipeline) pixel format identifiers.
pub mod pixel_format;

/// Conversion between [`PixelFormatId`] and [`TextureFormat`].
pub mod format_mapping;

/// Byte length of compressed frame buffers.
pub mod buffer_size;

/// Legacy codec-info resource identifiers.
pub mod resource_id;

/// Attributes describing a compressed frame buffer.
pub mod frame_attributes;

/// Error types for strict conversions.
pub mod error;

/// C exports for sizing and format mapping.
#[cfg(feature = "c-exports")]
pub mod c_api;

pub use buffer_size::*;
pub use codec_variant::{BlockDensity, CodecVariant};
pub use error::{HapFormatError, HapFormatResult};
pub use format_mapping::*;
pub use frame_attributes::FrameBufferAttributes;
pub use pixel_format::PixelFormatId;
pub use resource_id::*;
pub use texture_format::TextureFormat;

/// Common test prelude for avoiding duplicate imports in test modules
#[cfg(test)]
pub(crate) mod test_prelude;
