// Distributed under The MIT License (MIT)
//
// Copyright (c) 2019, 2020 The `image-rs` developers
use core::fmt;

/// A pixel format descriptor.
///
/// From the most significant bits down, the descriptor holds:
///
/// | bits  | field                                          |
/// |-------|------------------------------------------------|
/// | 28–31 | flag, `1` for descriptors and anything else for a four character code |
/// | 24–27 | [`PixelType`]                                  |
/// | 20–23 | [`ChannelOrder`], interpreted by pixel type   |
/// | 16–19 | [`PackedLayout`], only meaningful when packed |
/// | 8–15  | bits per pixel                                 |
/// | 0–7   | bytes per pixel                                |
///
/// A four character code is instead stored as little endian ASCII bytes. Its fields are not
/// meaningful and all accessors treat such a code as opaque, see [`PixelFormat::is_fourcc`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(transparent)]
pub struct PixelFormat(u32);

field_codes! {
    /// The storage type of a pixel.
    pub enum PixelType {
        Unknown = 0,
        Index1 = 1,
        Index4 = 2,
        Index8 = 3,
        Packed8 = 4,
        Packed16 = 5,
        Packed32 = 6,
        ArrayU8 = 7,
        ArrayU16 = 8,
        ArrayU32 = 9,
        ArrayF16 = 10,
        ArrayF32 = 11,
        Index2 = 12,
    }
}

field_codes! {
    /// Order of pixels within a byte, for indexed formats.
    pub enum BitmapOrder {
        /// The first pixel is in the least significant bits.
        Order4321 = 1,
        /// The first pixel is in the most significant bits.
        Order1234 = 2,
    }
}

field_codes! {
    /// Order of channels within a packed integer, from the most significant bits.
    ///
    /// An `X` marks padding bits that do not hold a channel.
    pub enum PackedOrder {
        Xrgb = 1,
        Rgbx = 2,
        Argb = 3,
        Rgba = 4,
        Xbgr = 5,
        Bgrx = 6,
        Abgr = 7,
        Bgra = 8,
    }
}

field_codes! {
    /// Order of channels as consecutive array elements.
    pub enum ArrayOrder {
        Rgb = 1,
        Rgba = 2,
        Argb = 3,
        Bgr = 4,
        Bgra = 5,
        Abgr = 6,
    }
}

field_codes! {
    /// Bit widths of the channels of a packed pixel, from the most significant bits.
    pub enum PackedLayout {
        None = 0,
        Bits332 = 1,
        Bits4444 = 2,
        Bits1555 = 3,
        Bits5551 = 4,
        Bits565 = 5,
        Bits8888 = 6,
        Bits2101010 = 7,
        Bits1010102 = 8,
    }
}

/// The channel order field of a descriptor.
///
/// The same four bits are interpreted differently depending on the pixel type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChannelOrder {
    /// No order, or an order code that is not assigned for the pixel type.
    None,
    Bitmap(BitmapOrder),
    Packed(PackedOrder),
    Array(ArrayOrder),
}

/// Channel bit masks of a format, as used by the native surface API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Masks {
    /// Bits per pixel for formats of at most two bytes, otherwise eight bits per byte.
    pub bpp: u32,
    pub red: u32,
    pub green: u32,
    pub blue: u32,
    pub alpha: u32,
}

impl PixelType {
    pub const fn is_indexed(self) -> bool {
        matches!(
            self,
            PixelType::Index1 | PixelType::Index2 | PixelType::Index4 | PixelType::Index8
        )
    }

    pub const fn is_packed(self) -> bool {
        matches!(
            self,
            PixelType::Packed8 | PixelType::Packed16 | PixelType::Packed32
        )
    }

    pub const fn is_array(self) -> bool {
        matches!(
            self,
            PixelType::ArrayU8
                | PixelType::ArrayU16
                | PixelType::ArrayU32
                | PixelType::ArrayF16
                | PixelType::ArrayF32
        )
    }

    pub const fn is_float(self) -> bool {
        matches!(self, PixelType::ArrayF16 | PixelType::ArrayF32)
    }
}

impl ChannelOrder {
    /// The code of this order within a descriptor.
    pub const fn bits(self) -> u8 {
        match self {
            ChannelOrder::None => 0,
            ChannelOrder::Bitmap(order) => order.bits(),
            ChannelOrder::Packed(order) => order.bits(),
            ChannelOrder::Array(order) => order.bits(),
        }
    }

    const fn decode(ty: PixelType, bits: u8) -> Self {
        if ty.is_indexed() {
            match BitmapOrder::from_bits(bits) {
                Some(order) => ChannelOrder::Bitmap(order),
                None => ChannelOrder::None,
            }
        } else if ty.is_packed() {
            match PackedOrder::from_bits(bits) {
                Some(order) => ChannelOrder::Packed(order),
                None => ChannelOrder::None,
            }
        } else if ty.is_array() {
            match ArrayOrder::from_bits(bits) {
                Some(order) => ChannelOrder::Array(order),
                None => ChannelOrder::None,
            }
        } else {
            ChannelOrder::None
        }
    }
}

const fn indexed(ty: PixelType, order: ChannelOrder, bits: u8, bytes: u8) -> PixelFormat {
    PixelFormat::new(ty, order, PackedLayout::None, bits, bytes)
}

const fn packed(
    ty: PixelType,
    order: PackedOrder,
    layout: PackedLayout,
    bits: u8,
    bytes: u8,
) -> PixelFormat {
    PixelFormat::new(ty, ChannelOrder::Packed(order), layout, bits, bytes)
}

const fn array(ty: PixelType, order: ArrayOrder, bits: u8, bytes: u8) -> PixelFormat {
    PixelFormat::new(ty, ChannelOrder::Array(order), PackedLayout::None, bits, bytes)
}

macro_rules! pixel_formats {
    ($($(#[$attr:meta])* $name:ident = $value:expr;)*) => {
        impl PixelFormat {
            $($(#[$attr])* pub const $name: Self = $value;)*

            /// Every named format, in table order. Byte order aliases are not repeated.
            pub const ALL: &'static [PixelFormat] = &[$(PixelFormat::$name),*];

            fn table_name(self) -> Option<&'static str> {
                $(
                    if self.0 == Self::$name.0 {
                        return Some(concat!("SDL_PIXELFORMAT_", stringify!($name)));
                    }
                )*
                None
            }
        }
    };
}

pixel_formats! {
    INDEX1LSB = indexed(PixelType::Index1, ChannelOrder::Bitmap(BitmapOrder::Order4321), 1, 0);
    INDEX1MSB = indexed(PixelType::Index1, ChannelOrder::Bitmap(BitmapOrder::Order1234), 1, 0);
    INDEX2LSB = indexed(PixelType::Index2, ChannelOrder::Bitmap(BitmapOrder::Order4321), 2, 0);
    INDEX2MSB = indexed(PixelType::Index2, ChannelOrder::Bitmap(BitmapOrder::Order1234), 2, 0);
    INDEX4LSB = indexed(PixelType::Index4, ChannelOrder::Bitmap(BitmapOrder::Order4321), 4, 0);
    INDEX4MSB = indexed(PixelType::Index4, ChannelOrder::Bitmap(BitmapOrder::Order1234), 4, 0);
    INDEX8 = indexed(PixelType::Index8, ChannelOrder::None, 8, 1);

    RGB332 = packed(PixelType::Packed8, PackedOrder::Xrgb, PackedLayout::Bits332, 8, 1);

    XRGB4444 = packed(PixelType::Packed16, PackedOrder::Xrgb, PackedLayout::Bits4444, 12, 2);
    XBGR4444 = packed(PixelType::Packed16, PackedOrder::Xbgr, PackedLayout::Bits4444, 12, 2);
    XRGB1555 = packed(PixelType::Packed16, PackedOrder::Xrgb, PackedLayout::Bits1555, 15, 2);
    XBGR1555 = packed(PixelType::Packed16, PackedOrder::Xbgr, PackedLayout::Bits1555, 15, 2);
    ARGB4444 = packed(PixelType::Packed16, PackedOrder::Argb, PackedLayout::Bits4444, 16, 2);
    RGBA4444 = packed(PixelType::Packed16, PackedOrder::Rgba, PackedLayout::Bits4444, 16, 2);
    ABGR4444 = packed(PixelType::Packed16, PackedOrder::Abgr, PackedLayout::Bits4444, 16, 2);
    BGRA4444 = packed(PixelType::Packed16, PackedOrder::Bgra, PackedLayout::Bits4444, 16, 2);
    ARGB1555 = packed(PixelType::Packed16, PackedOrder::Argb, PackedLayout::Bits1555, 16, 2);
    RGBA5551 = packed(PixelType::Packed16, PackedOrder::Rgba, PackedLayout::Bits5551, 16, 2);
    ABGR1555 = packed(PixelType::Packed16, PackedOrder::Abgr, PackedLayout::Bits1555, 16, 2);
    BGRA5551 = packed(PixelType::Packed16, PackedOrder::Bgra, PackedLayout::Bits5551, 16, 2);
    RGB565 = packed(PixelType::Packed16, PackedOrder::Xrgb, PackedLayout::Bits565, 16, 2);
    BGR565 = packed(PixelType::Packed16, PackedOrder::Xbgr, PackedLayout::Bits565, 16, 2);

    RGB24 = array(PixelType::ArrayU8, ArrayOrder::Rgb, 24, 3);
    BGR24 = array(PixelType::ArrayU8, ArrayOrder::Bgr, 24, 3);

    XRGB8888 = packed(PixelType::Packed32, PackedOrder::Xrgb, PackedLayout::Bits8888, 24, 4);
    RGBX8888 = packed(PixelType::Packed32, PackedOrder::Rgbx, PackedLayout::Bits8888, 24, 4);
    XBGR8888 = packed(PixelType::Packed32, PackedOrder::Xbgr, PackedLayout::Bits8888, 24, 4);
    BGRX8888 = packed(PixelType::Packed32, PackedOrder::Bgrx, PackedLayout::Bits8888, 24, 4);
    ARGB8888 = packed(PixelType::Packed32, PackedOrder::Argb, PackedLayout::Bits8888, 32, 4);
    RGBA8888 = packed(PixelType::Packed32, PackedOrder::Rgba, PackedLayout::Bits8888, 32, 4);
    ABGR8888 = packed(PixelType::Packed32, PackedOrder::Abgr, PackedLayout::Bits8888, 32, 4);
    BGRA8888 = packed(PixelType::Packed32, PackedOrder::Bgra, PackedLayout::Bits8888, 32, 4);
    XRGB2101010 = packed(PixelType::Packed32, PackedOrder::Xrgb, PackedLayout::Bits2101010, 32, 4);
    XBGR2101010 = packed(PixelType::Packed32, PackedOrder::Xbgr, PackedLayout::Bits2101010, 32, 4);
    ARGB2101010 = packed(PixelType::Packed32, PackedOrder::Argb, PackedLayout::Bits2101010, 32, 4);
    ABGR2101010 = packed(PixelType::Packed32, PackedOrder::Abgr, PackedLayout::Bits2101010, 32, 4);

    RGB48 = array(PixelType::ArrayU16, ArrayOrder::Rgb, 48, 6);
    BGR48 = array(PixelType::ArrayU16, ArrayOrder::Bgr, 48, 6);
    RGBA64 = array(PixelType::ArrayU16, ArrayOrder::Rgba, 64, 8);
    ARGB64 = array(PixelType::ArrayU16, ArrayOrder::Argb, 64, 8);
    BGRA64 = array(PixelType::ArrayU16, ArrayOrder::Bgra, 64, 8);
    ABGR64 = array(PixelType::ArrayU16, ArrayOrder::Abgr, 64, 8);

    RGB48_FLOAT = array(PixelType::ArrayF16, ArrayOrder::Rgb, 48, 6);
    BGR48_FLOAT = array(PixelType::ArrayF16, ArrayOrder::Bgr, 48, 6);
    RGBA64_FLOAT = array(PixelType::ArrayF16, ArrayOrder::Rgba, 64, 8);
    ARGB64_FLOAT = array(PixelType::ArrayF16, ArrayOrder::Argb, 64, 8);
    BGRA64_FLOAT = array(PixelType::ArrayF16, ArrayOrder::Bgra, 64, 8);
    ABGR64_FLOAT = array(PixelType::ArrayF16, ArrayOrder::Abgr, 64, 8);

    RGB96_FLOAT = array(PixelType::ArrayF32, ArrayOrder::Rgb, 96, 12);
    BGR96_FLOAT = array(PixelType::ArrayF32, ArrayOrder::Bgr, 96, 12);
    RGBA128_FLOAT = array(PixelType::ArrayF32, ArrayOrder::Rgba, 128, 16);
    ARGB128_FLOAT = array(PixelType::ArrayF32, ArrayOrder::Argb, 128, 16);
    BGRA128_FLOAT = array(PixelType::ArrayF32, ArrayOrder::Bgra, 128, 16);
    ABGR128_FLOAT = array(PixelType::ArrayF32, ArrayOrder::Abgr, 128, 16);

    /// Planar mode: Y + V + U (3 planes).
    YV12 = PixelFormat::from_code(*b"YV12");
    /// Planar mode: Y + U + V (3 planes).
    IYUV = PixelFormat::from_code(*b"IYUV");
    /// Packed mode: Y0+U0+Y1+V0 (1 plane).
    YUY2 = PixelFormat::from_code(*b"YUY2");
    /// Packed mode: U0+Y0+V0+Y1 (1 plane).
    UYVY = PixelFormat::from_code(*b"UYVY");
    /// Packed mode: Y0+V0+Y1+U0 (1 plane).
    YVYU = PixelFormat::from_code(*b"YVYU");
    /// Planar mode: Y + U/V interleaved (2 planes).
    NV12 = PixelFormat::from_code(*b"NV12");
    /// Planar mode: Y + V/U interleaved (2 planes).
    NV21 = PixelFormat::from_code(*b"NV21");
    /// Planar mode: Y + U/V interleaved (2 planes), 10 bits in 16-bit samples.
    P010 = PixelFormat::from_code(*b"P010");
    /// An external texture handle, e.g. on Android.
    EXTERNAL_OES = PixelFormat::from_code(*b"OES ");
    /// Motion JPEG.
    MJPG = PixelFormat::from_code(*b"MJPG");
}

// Aliases naming the byte order in memory, rather than the order in a native integer.
#[cfg(target_endian = "little")]
impl PixelFormat {
    pub const RGBA32: Self = Self::ABGR8888;
    pub const ARGB32: Self = Self::BGRA8888;
    pub const BGRA32: Self = Self::ARGB8888;
    pub const ABGR32: Self = Self::RGBA8888;
    pub const RGBX32: Self = Self::XBGR8888;
    pub const XRGB32: Self = Self::BGRX8888;
    pub const BGRX32: Self = Self::XRGB8888;
    pub const XBGR32: Self = Self::RGBX8888;
}

#[cfg(target_endian = "big")]
impl PixelFormat {
    pub const RGBA32: Self = Self::RGBA8888;
    pub const ARGB32: Self = Self::ARGB8888;
    pub const BGRA32: Self = Self::BGRA8888;
    pub const ABGR32: Self = Self::ABGR8888;
    pub const RGBX32: Self = Self::RGBX8888;
    pub const XRGB32: Self = Self::XRGB8888;
    pub const BGRX32: Self = Self::BGRX8888;
    pub const XBGR32: Self = Self::XBGR8888;
}

impl PixelFormat {
    /// The constant denoting an unknown format, e.g. signalling a missing format.
    pub const UNKNOWN: Self = PixelFormat(0);

    /// Pack the fields of a descriptor.
    ///
    /// No validation is performed. Every field is masked to its width, so a nonsensical
    /// combination yields a descriptor which decodes to the same masked bits.
    pub const fn new(
        ty: PixelType,
        order: ChannelOrder,
        layout: PackedLayout,
        bits: u8,
        bytes: u8,
    ) -> Self {
        PixelFormat(
            (1 << 28)
                | ((ty.bits() as u32 & 0xf) << 24)
                | ((order.bits() as u32 & 0xf) << 20)
                | ((layout.bits() as u32 & 0xf) << 16)
                | ((bits as u32) << 8)
                | bytes as u32,
        )
    }

    /// Pack a four character code, the first character in the least significant byte.
    pub const fn fourcc(a: u8, b: u8, c: u8, d: u8) -> Self {
        PixelFormat(u32::from_le_bytes([a, b, c, d]))
    }

    /// Pack a four character code from its characters in order.
    pub const fn from_code(code: [u8; 4]) -> Self {
        PixelFormat(u32::from_le_bytes(code))
    }

    /// Wrap a raw value as received over the native boundary.
    pub const fn from_raw(raw: u32) -> Self {
        PixelFormat(raw)
    }

    pub const fn to_raw(self) -> u32 {
        self.0
    }

    /// The characters of a four character code, or `None` for descriptors.
    pub const fn code(self) -> Option<[u8; 4]> {
        if self.is_fourcc() {
            Some(self.0.to_le_bytes())
        } else {
            None
        }
    }

    pub const fn flag(self) -> u8 {
        ((self.0 >> 28) & 0xf) as u8
    }

    /// The pixel type, `Unknown` for four character codes and unassigned types.
    pub const fn pixel_type(self) -> PixelType {
        if self.is_fourcc() {
            return PixelType::Unknown;
        }

        match PixelType::from_bits(((self.0 >> 24) & 0xf) as u8) {
            Some(ty) => ty,
            None => PixelType::Unknown,
        }
    }

    pub const fn channel_order(self) -> ChannelOrder {
        ChannelOrder::decode(self.pixel_type(), ((self.0 >> 20) & 0xf) as u8)
    }

    pub const fn layout(self) -> PackedLayout {
        if self.is_fourcc() {
            return PackedLayout::None;
        }

        match PackedLayout::from_bits(((self.0 >> 16) & 0xf) as u8) {
            Some(layout) => layout,
            None => PackedLayout::None,
        }
    }

    /// Bits per pixel, which is `0` for four character codes.
    pub const fn bits_per_pixel(self) -> u8 {
        if self.is_fourcc() {
            0
        } else {
            ((self.0 >> 8) & 0xff) as u8
        }
    }

    /// Bytes per pixel, with a fixed table for four character codes.
    ///
    /// Packed YUV formats and `P010` report two bytes, all other codes report a single byte
    /// (which, for planar formats, is the size of one luma sample).
    pub const fn bytes_per_pixel(self) -> u8 {
        if self.is_fourcc() {
            match self {
                Self::YUY2 | Self::UYVY | Self::YVYU | Self::P010 => 2,
                _ => 1,
            }
        } else {
            (self.0 & 0xff) as u8
        }
    }

    /// Is this a four character code instead of a descriptor?
    pub const fn is_fourcc(self) -> bool {
        self.0 != 0 && self.flag() != 1
    }

    pub const fn is_indexed(self) -> bool {
        !self.is_fourcc() && self.pixel_type().is_indexed()
    }

    pub const fn is_packed(self) -> bool {
        !self.is_fourcc() && self.pixel_type().is_packed()
    }

    pub const fn is_array(self) -> bool {
        !self.is_fourcc() && self.pixel_type().is_array()
    }

    /// A packed 32-bit format with 10-bit color channels.
    pub const fn is_10bit(self) -> bool {
        !self.is_fourcc()
            && matches!(self.pixel_type(), PixelType::Packed32)
            && matches!(self.layout(), PackedLayout::Bits2101010)
    }

    pub const fn is_float(self) -> bool {
        !self.is_fourcc() && self.pixel_type().is_float()
    }

    /// A packed format with an alpha channel.
    pub const fn has_alpha(self) -> bool {
        self.is_packed()
            && matches!(
                self.channel_order(),
                ChannelOrder::Packed(
                    PackedOrder::Argb | PackedOrder::Rgba | PackedOrder::Abgr | PackedOrder::Bgra
                )
            )
    }

    /// The name of the native constant for this format.
    ///
    /// Aliases resolve to the name of the format they alias.
    pub fn name(self) -> &'static str {
        self.table_name().unwrap_or("SDL_PIXELFORMAT_UNKNOWN")
    }

    /// Channel masks of the format.
    ///
    /// Returns `None` for four character codes, unknown pixel types and packed descriptors whose
    /// order or layout is not assigned. Indexed formats and arrays other than the 24-bit ones
    /// have all masks zero.
    pub fn masks(self) -> Option<Masks> {
        let ty = self.pixel_type();
        if self.is_fourcc() || ty == PixelType::Unknown {
            return None;
        }

        let bytes = self.bytes_per_pixel();
        let bpp = if bytes <= 2 {
            u32::from(self.bits_per_pixel())
        } else {
            u32::from(bytes) * 8
        };

        let mut masks = Masks {
            bpp,
            ..Masks::default()
        };

        // The 24-bit arrays are addressed byte-wise, as if they were a native integer.
        let (first_byte, last_byte) = if cfg!(target_endian = "big") {
            (0x00ff_0000, 0x0000_00ff)
        } else {
            (0x0000_00ff, 0x00ff_0000)
        };

        if self == Self::RGB24 {
            masks.red = first_byte;
            masks.green = 0x0000_ff00;
            masks.blue = last_byte;
            return Some(masks);
        }

        if self == Self::BGR24 {
            masks.red = last_byte;
            masks.green = 0x0000_ff00;
            masks.blue = first_byte;
            return Some(masks);
        }

        if !ty.is_packed() {
            return Some(masks);
        }

        let [m0, m1, m2, m3]: [u32; 4] = match self.layout() {
            PackedLayout::Bits332 => [0x0000_0000, 0x0000_00e0, 0x0000_001c, 0x0000_0003],
            PackedLayout::Bits4444 => [0x0000_f000, 0x0000_0f00, 0x0000_00f0, 0x0000_000f],
            PackedLayout::Bits1555 => [0x0000_8000, 0x0000_7c00, 0x0000_03e0, 0x0000_001f],
            PackedLayout::Bits5551 => [0x0000_f800, 0x0000_07c0, 0x0000_003e, 0x0000_0001],
            PackedLayout::Bits565 => [0x0000_0000, 0x0000_f800, 0x0000_07e0, 0x0000_001f],
            PackedLayout::Bits8888 => [0xff00_0000, 0x00ff_0000, 0x0000_ff00, 0x0000_00ff],
            PackedLayout::Bits2101010 => [0xc000_0000, 0x3ff0_0000, 0x000f_fc00, 0x0000_03ff],
            PackedLayout::Bits1010102 => [0xffc0_0000, 0x003f_f000, 0x0000_0ffc, 0x0000_0003],
            PackedLayout::None => return None,
        };

        let ChannelOrder::Packed(order) = self.channel_order() else {
            return None;
        };

        match order {
            PackedOrder::Xrgb => [masks.red, masks.green, masks.blue] = [m1, m2, m3],
            PackedOrder::Rgbx => [masks.red, masks.green, masks.blue] = [m0, m1, m2],
            PackedOrder::Argb => {
                [masks.alpha, masks.red, masks.green, masks.blue] = [m0, m1, m2, m3]
            }
            PackedOrder::Rgba => {
                [masks.red, masks.green, masks.blue, masks.alpha] = [m0, m1, m2, m3]
            }
            PackedOrder::Xbgr => [masks.blue, masks.green, masks.red] = [m1, m2, m3],
            PackedOrder::Bgrx => [masks.blue, masks.green, masks.red] = [m0, m1, m2],
            PackedOrder::Bgra => {
                [masks.blue, masks.green, masks.red, masks.alpha] = [m0, m1, m2, m3]
            }
            PackedOrder::Abgr => {
                [masks.alpha, masks.blue, masks.green, masks.red] = [m0, m1, m2, m3]
            }
        }

        Some(masks)
    }

    /// Find the format with the given channel masks.
    ///
    /// An unrecognized combination is not an error, it results in [`PixelFormat::UNKNOWN`]. When
    /// the red mask is zero the default format of the bit depth is chosen.
    pub fn from_masks(bpp: u32, red: u32, green: u32, blue: u32, alpha: u32) -> Self {
        match bpp {
            1 => return Self::INDEX1MSB,
            2 => return Self::INDEX2MSB,
            4 => return Self::INDEX4MSB,
            8 => {
                return if (red, green, blue, alpha) == (0xe0, 0x1c, 0x03, 0) {
                    Self::RGB332
                } else {
                    Self::INDEX8
                };
            }
            24 => {
                let (native_rgb, swapped) = if cfg!(target_endian = "big") {
                    (Self::RGB24, Self::BGR24)
                } else {
                    (Self::BGR24, Self::RGB24)
                };

                return match red {
                    0 | 0x00ff_0000 => native_rgb,
                    0x0000_00ff => swapped,
                    _ => Self::UNKNOWN,
                };
            }
            _ => {}
        }

        if red == 0 {
            return match bpp {
                12 => Self::XRGB4444,
                15 => Self::XRGB1555,
                16 => Self::RGB565,
                32 => Self::XRGB8888,
                _ => Self::UNKNOWN,
            };
        }

        let wanted = Masks {
            bpp,
            red,
            green,
            blue,
            alpha,
        };

        Self::ALL
            .iter()
            .copied()
            .filter(|format| format.is_packed())
            .find(|format| match format.masks() {
                // Formats narrower than 16 bits are also found by their 16-bit storage, and 16-bit
                // formats by a depth of 15.
                Some(masks) if matches!((bpp, masks.bpp), (16, 12 | 15) | (15, 16)) => {
                    Masks { bpp, ..masks } == wanted
                }
                Some(masks) => masks == wanted,
                None => false,
            })
            .unwrap_or(Self::UNKNOWN)
    }
}

impl Default for PixelFormat {
    fn default() -> Self {
        PixelFormat::UNKNOWN
    }
}

impl From<u32> for PixelFormat {
    fn from(raw: u32) -> Self {
        PixelFormat(raw)
    }
}

impl From<PixelFormat> for u32 {
    fn from(format: PixelFormat) -> Self {
        format.0
    }
}

impl fmt::Debug for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.table_name() {
            Some(name) => f.write_str(name),
            None if self.0 == 0 => f.write_str("SDL_PIXELFORMAT_UNKNOWN"),
            None => f
                .debug_tuple("PixelFormat")
                .field(&format_args!("{:#010x}", self.0))
                .finish(),
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_descriptor_values() {
        assert_eq!(PixelFormat::INDEX1LSB.to_raw(), 0x1110_0100);
        assert_eq!(PixelFormat::INDEX2MSB.to_raw(), 0x1c20_0200);
        assert_eq!(PixelFormat::INDEX8.to_raw(), 0x1300_0801);
        assert_eq!(PixelFormat::RGB332.to_raw(), 0x1411_0801);
        assert_eq!(PixelFormat::RGB565.to_raw(), 0x1515_1002);
        assert_eq!(PixelFormat::RGB24.to_raw(), 0x1710_1803);
        assert_eq!(PixelFormat::XRGB8888.to_raw(), 0x1616_1804);
        assert_eq!(PixelFormat::ARGB8888.to_raw(), 0x1636_2004);
        assert_eq!(PixelFormat::ABGR2101010.to_raw(), 0x1677_2004);
        assert_eq!(PixelFormat::RGBA64_FLOAT.to_raw(), 0x1a20_4008);
        assert_eq!(PixelFormat::ABGR128_FLOAT.to_raw(), 0x1b60_8010);
    }

    #[test]
    fn fourcc_values() {
        assert_eq!(PixelFormat::YV12.to_raw(), 0x3231_5659);
        assert_eq!(PixelFormat::IYUV.to_raw(), 0x5655_5949);
        assert_eq!(PixelFormat::NV12.to_raw(), 0x3231_564e);
        assert_eq!(PixelFormat::P010.to_raw(), 0x3031_3050);
        assert_eq!(PixelFormat::EXTERNAL_OES.to_raw(), 0x2053_454f);
        assert_eq!(PixelFormat::YUY2.code(), Some(*b"YUY2"));
        assert_eq!(PixelFormat::RGB565.code(), None);
    }

    #[test]
    fn fourcc_fields_are_opaque() {
        // The flag nibble of `YV12` is 3 and its type nibble would read as `Index4`.
        let yv12 = PixelFormat::YV12;
        assert_eq!(yv12.flag(), 3);
        assert_eq!(yv12.pixel_type(), PixelType::Unknown);
        assert_eq!(yv12.channel_order(), ChannelOrder::None);
        assert_eq!(yv12.layout(), PackedLayout::None);
        assert!(!yv12.is_indexed());
        assert_eq!(yv12.bytes_per_pixel(), 1);
        assert_eq!(PixelFormat::P010.bytes_per_pixel(), 2);
        assert_eq!(PixelFormat::UYVY.bytes_per_pixel(), 2);
        assert_eq!(PixelFormat::NV21.bytes_per_pixel(), 1);
    }

    #[test]
    fn unknown_is_nothing() {
        let unknown = PixelFormat::UNKNOWN;
        assert!(!unknown.is_fourcc());
        assert!(!unknown.is_indexed());
        assert!(!unknown.is_packed());
        assert!(!unknown.is_array());
        assert!(!unknown.has_alpha());
        assert_eq!(unknown.masks(), None);
        assert_eq!(unknown.name(), "SDL_PIXELFORMAT_UNKNOWN");
    }

    #[test]
    fn out_of_range_fields_are_masked() {
        let format = PixelFormat::new(
            PixelType::Packed16,
            ChannelOrder::Packed(PackedOrder::Argb),
            PackedLayout::Bits4444,
            0xff,
            0xff,
        );
        assert_eq!(format.bits_per_pixel(), 0xff);
        assert_eq!(format.bytes_per_pixel(), 0xff);
        assert_eq!(format.flag(), 1);
    }

    #[test]
    fn masks_of_packed_layouts() {
        let masks = PixelFormat::ARGB8888.masks().unwrap();
        assert_eq!(
            masks,
            Masks {
                bpp: 32,
                red: 0x00ff_0000,
                green: 0x0000_ff00,
                blue: 0x0000_00ff,
                alpha: 0xff00_0000,
            }
        );

        let masks = PixelFormat::XBGR1555.masks().unwrap();
        assert_eq!(masks.bpp, 15);
        assert_eq!(masks.red, 0x001f);
        assert_eq!(masks.blue, 0x7c00);
        assert_eq!(masks.alpha, 0);

        let masks = PixelFormat::RGBA64.masks().unwrap();
        assert_eq!(masks, Masks { bpp: 64, ..Masks::default() });
    }

    #[test]
    fn masks_of_wide_descriptors() {
        // Unvalidated descriptors with large byte counts still resolve.
        let format = PixelFormat::new(
            PixelType::Packed32,
            ChannelOrder::Packed(PackedOrder::Argb),
            PackedLayout::Bits8888,
            32,
            32,
        );
        let masks = format.masks().unwrap();
        assert_eq!(masks.bpp, 256);
        assert_eq!(masks.alpha, 0xff00_0000);

        let format = PixelFormat::from_raw(0x1700_00ff);
        assert_eq!(format.masks().unwrap().bpp, 255 * 8);
        let details = PixelFormat::from_raw(0x1700_0040).details().unwrap();
        assert_eq!(details.bytes_per_pixel, 0x40);
        assert_eq!(details.red, crate::details::Channel::NONE);
    }

    #[test]
    fn names() {
        assert_eq!(PixelFormat::RGB565.name(), "SDL_PIXELFORMAT_RGB565");
        assert_eq!(PixelFormat::RGBA32.name(), PixelFormat::ABGR8888.name());
        assert_eq!(PixelFormat::from_raw(0x1fff_ffff).name(), "SDL_PIXELFORMAT_UNKNOWN");
        assert_eq!(
            alloc::format!("{:?}", PixelFormat::EXTERNAL_OES),
            "SDL_PIXELFORMAT_EXTERNAL_OES"
        );
    }
}
