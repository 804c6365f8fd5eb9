// Distributed under The MIT License (MIT)
//
// Copyright (c) 2019, 2020 The `image-rs` developers
use core::fmt;

use crate::format::PixelFormat;

/// The resolved channel layout of a pixel format.
///
/// This is the record consulted when mapping between color components and pixel values. It is
/// derived once from a descriptor and then only read, see [`PixelFormatDetails::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PixelFormatDetails {
    pub format: PixelFormat,
    pub bits_per_pixel: u8,
    pub bytes_per_pixel: u8,
    pub red: Channel,
    pub green: Channel,
    pub blue: Channel,
    pub alpha: Channel,
}

/// Where one color channel is stored in a pixel value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Channel {
    pub mask: u32,
    /// The number of bits in the mask.
    pub bits: u8,
    /// The position of the lowest bit of the mask.
    pub shift: u8,
}

/// A format which has no channel layout to resolve.
///
/// This is the case for [`PixelFormat::UNKNOWN`], for unassigned descriptors and for four
/// character codes whose samples are not stored as one pixel value.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct FormatError {
    format: PixelFormat,
}

impl Channel {
    pub const NONE: Self = Channel {
        mask: 0,
        bits: 0,
        shift: 0,
    };

    /// Describe a channel by its mask, which must be a contiguous run of bits.
    pub const fn from_mask(mask: u32) -> Self {
        if mask == 0 {
            return Channel::NONE;
        }

        Channel {
            mask,
            bits: mask.count_ones() as u8,
            shift: mask.trailing_zeros() as u8,
        }
    }

    /// The raw value of this channel in a pixel.
    pub const fn extract(self, pixel: u32) -> u32 {
        (pixel & self.mask) >> self.shift
    }

    /// The largest raw value of this channel.
    pub const fn max(self) -> u32 {
        ((1u64 << self.bits) - 1) as u32
    }

    /// Scale a raw channel value linearly onto the full 8-bit range.
    ///
    /// The maximum of any channel width maps to `255`, other values are rounded down. For widths
    /// up to eight bits this agrees with the expansion tables of the native engine.
    pub(crate) const fn expand(self, pixel: u32) -> u8 {
        let max = self.max() as u64;
        if max == 0 {
            return 0;
        }

        let value = self.extract(pixel) as u64;
        (value * 255 / max) as u8
    }

    /// Reduce an 8-bit component to this channel, in position within a pixel value.
    ///
    /// Narrower channels keep the most significant bits of the component, wider channels scale
    /// it linearly.
    pub(crate) const fn quantize(self, component: u8) -> u32 {
        let value = match self.bits {
            0 => return 0,
            1..=8 => (component as u32) >> (8 - self.bits),
            _ => {
                let max = self.max() as u64;
                ((component as u64 * max + 127) / 255) as u32
            }
        };

        (value << self.shift) & self.mask
    }
}

impl PixelFormatDetails {
    /// Resolve the channel layout of a format.
    pub fn new(format: PixelFormat) -> Result<Self, FormatError> {
        let masks = format.masks().ok_or(FormatError { format })?;

        Ok(PixelFormatDetails {
            format,
            bits_per_pixel: format.bits_per_pixel(),
            bytes_per_pixel: format.bytes_per_pixel(),
            red: Channel::from_mask(masks.red),
            green: Channel::from_mask(masks.green),
            blue: Channel::from_mask(masks.blue),
            alpha: Channel::from_mask(masks.alpha),
        })
    }
}

impl PixelFormat {
    /// Resolve the channel layout of this format.
    pub fn details(self) -> Result<PixelFormatDetails, FormatError> {
        PixelFormatDetails::new(self)
    }
}

impl FormatError {
    /// The format that could not be resolved.
    pub fn format(&self) -> PixelFormat {
        self.format
    }
}

impl fmt::Debug for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("FormatError")
            .field("format", &self.format)
            .finish()
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "pixel format {:?} has no channel layout", self.format)
    }
}

impl core::error::Error for FormatError {}
