// Distributed under The MIT License (MIT)
//
// Copyright (c) 2019, 2020 The `image-rs` developers
//! Mapping between color components and pixel values.
use core::fmt;

use crate::details::PixelFormatDetails;
use crate::palette::{Palette, ALPHA_OPAQUE};

/// A conversion was requested without a resolved format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ColorError {
    /// No format details were supplied.
    InvalidFormat,
}

impl PixelFormatDetails {
    /// The pixel value of an opaque color.
    ///
    /// Indexed formats yield the index of the closest palette entry, or `0` without palette. Other
    /// formats set all alpha bits, if they have any.
    pub fn map_rgb(&self, palette: Option<&Palette>, r: u8, g: u8, b: u8) -> u32 {
        if self.format.is_indexed() {
            return match palette {
                Some(palette) => palette.find_color(r, g, b, ALPHA_OPAQUE),
                None => 0,
            };
        }

        self.red.quantize(r) | self.green.quantize(g) | self.blue.quantize(b) | self.alpha.mask
    }

    /// The pixel value of a color.
    ///
    /// Alpha is ignored by formats without an alpha channel.
    pub fn map_rgba(&self, palette: Option<&Palette>, r: u8, g: u8, b: u8, a: u8) -> u32 {
        if self.format.is_indexed() {
            return match palette {
                Some(palette) => palette.find_color(r, g, b, a),
                None => 0,
            };
        }

        self.red.quantize(r)
            | self.green.quantize(g)
            | self.blue.quantize(b)
            | self.alpha.quantize(a)
    }

    /// The color components of a pixel value.
    ///
    /// Channels narrower than eight bits are expanded to the full range. Indexes with no
    /// corresponding palette entry read as black.
    pub fn get_rgb(&self, pixel: u32, palette: Option<&Palette>) -> (u8, u8, u8) {
        let (r, g, b, _) = self.get_rgba(pixel, palette);
        (r, g, b)
    }

    /// The color and alpha components of a pixel value.
    ///
    /// Formats without alpha channel report opaque alpha. Indexes with no corresponding palette
    /// entry read as all zero.
    pub fn get_rgba(&self, pixel: u32, palette: Option<&Palette>) -> (u8, u8, u8, u8) {
        if self.format.is_indexed() {
            let entry = palette.and_then(|palette| palette.get(pixel as usize));
            return match entry {
                Some(color) => (color.r, color.g, color.b, color.a),
                None => (0, 0, 0, 0),
            };
        }

        let a = if self.alpha.mask == 0 {
            ALPHA_OPAQUE
        } else {
            self.alpha.expand(pixel)
        };

        (
            self.red.expand(pixel),
            self.green.expand(pixel),
            self.blue.expand(pixel),
            a,
        )
    }
}

/// Map an opaque color to a pixel value of a possibly unresolved format.
pub fn map_rgb(
    format: Option<&PixelFormatDetails>,
    palette: Option<&Palette>,
    r: u8,
    g: u8,
    b: u8,
) -> Result<u32, ColorError> {
    let format = format.ok_or(ColorError::InvalidFormat)?;
    Ok(format.map_rgb(palette, r, g, b))
}

/// Map a color to a pixel value of a possibly unresolved format.
pub fn map_rgba(
    format: Option<&PixelFormatDetails>,
    palette: Option<&Palette>,
    r: u8,
    g: u8,
    b: u8,
    a: u8,
) -> Result<u32, ColorError> {
    let format = format.ok_or(ColorError::InvalidFormat)?;
    Ok(format.map_rgba(palette, r, g, b, a))
}

/// Read the color of a pixel value of a possibly unresolved format.
pub fn get_rgb(
    pixel: u32,
    format: Option<&PixelFormatDetails>,
    palette: Option<&Palette>,
) -> Result<(u8, u8, u8), ColorError> {
    let format = format.ok_or(ColorError::InvalidFormat)?;
    Ok(format.get_rgb(pixel, palette))
}

/// Read the color and alpha of a pixel value of a possibly unresolved format.
pub fn get_rgba(
    pixel: u32,
    format: Option<&PixelFormatDetails>,
    palette: Option<&Palette>,
) -> Result<(u8, u8, u8, u8), ColorError> {
    let format = format.ok_or(ColorError::InvalidFormat)?;
    Ok(format.get_rgba(pixel, palette))
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ColorError::InvalidFormat => f.write_str("no pixel format details to map colors"),
        }
    }
}

impl core::error::Error for ColorError {}
