// Distributed under The MIT License (MIT)
//
// Copyright (c) 2019, 2020 The `image-rs` developers
//! # Pixel formats
//!
//! The 32-bit pixel format descriptor of the native engine, and everything derived from it.
//!
//! A descriptor packs the type of a pixel, the order of its channels, the bit layout of packed
//! channels and the bit and byte depth into a single integer. Formats that do not fit that scheme
//! (planar and packed YUV, external textures) are instead named by a four character code. This
//! crate encodes and decodes both forms, classifies them, and converts between RGB(A) components
//! and packed pixel values.
//!
//! ## Usage
//!
//! ```
//! use sdl_pixelformat::{PixelFormat, PixelFormatDetails};
//!
//! let format = PixelFormat::RGB565;
//! assert!(format.is_packed());
//! assert!(!format.has_alpha());
//!
//! let details = PixelFormatDetails::new(format)?;
//! let white = details.map_rgb(None, 0xff, 0xff, 0xff);
//! assert_eq!(white, 0xffff);
//! // Narrow channels are expanded to the full range again.
//! assert_eq!(details.get_rgb(white, None), (0xff, 0xff, 0xff));
//! # Ok::<(), sdl_pixelformat::FormatError>(())
//! ```
//!
//! Four character codes compare equal to the named constants:
//!
//! ```
//! use sdl_pixelformat::PixelFormat;
//!
//! let yv12 = PixelFormat::fourcc(b'Y', b'V', b'1', b'2');
//! assert_eq!(yv12, PixelFormat::YV12);
//! assert!(yv12.is_fourcc());
//! assert_eq!(yv12.bits_per_pixel(), 0);
//! ```
// Be std for doctests, avoids a weird warning about missing allocator.
#![cfg_attr(not(doctest), no_std)]
#![deny(unsafe_code)]
extern crate alloc;

/// Define a `u8`-coded enumeration of a descriptor field.
macro_rules! field_codes {
    (
        $(#[$attr:meta])*
        pub enum $name:ident {
            $($(#[$vattr:meta])* $variant:ident = $value:literal,)*
        }
    ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[repr(u8)]
        pub enum $name {
            $($(#[$vattr])* $variant = $value,)*
        }

        impl $name {
            /// Interpret the bits of a descriptor field, `None` for unassigned codes.
            pub const fn from_bits(bits: u8) -> Option<Self> {
                match bits {
                    $($value => Some($name::$variant),)*
                    _ => None,
                }
            }

            /// The code of this value within a descriptor.
            pub const fn bits(self) -> u8 {
                self as u8
            }
        }
    };
}

mod colorspace;
mod convert;
mod details;
mod format;
mod palette;

pub use self::colorspace::{
    ChromaLocation, ColorPrimaries, ColorRange, ColorType, Colorspace, MatrixCoefficients,
    TransferCharacteristics,
};
pub use self::convert::{get_rgb, get_rgba, map_rgb, map_rgba, ColorError};
pub use self::details::{Channel, FormatError, PixelFormatDetails};
pub use self::format::{
    ArrayOrder, BitmapOrder, ChannelOrder, Masks, PackedLayout, PackedOrder, PixelFormat,
    PixelType,
};
pub use self::palette::{Color, Palette, ALPHA_OPAQUE, ALPHA_TRANSPARENT};
