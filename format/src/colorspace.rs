// Distributed under The MIT License (MIT)
//
// Copyright (c) 2019, 2020 The `image-rs` developers
use core::fmt;

/// A colorspace descriptor.
///
/// Packs color management metadata into one integer, from the most significant bits: the color
/// type (4 bits at 28), the range (4 bits at 24), the chroma location (4 bits at 20), the
/// primaries (5 bits at 10), the transfer characteristics (5 bits at 5) and the matrix
/// coefficients (5 bits at 0).
#[derive(Clone, Copy, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(transparent)]
pub struct Colorspace(u32);

field_codes! {
    pub enum ColorType {
        Unknown = 0,
        Rgb = 1,
        YCbCr = 2,
    }
}

field_codes! {
    /// The range of encoded values.
    pub enum ColorRange {
        Unknown = 0,
        /// Narrow range, e.g. 16-235 for 8-bit RGB and luma, and 16-240 for 8-bit chroma.
        Limited = 1,
        /// Full range, e.g. 0-255 for 8-bit RGB and luma, and 1-255 for 8-bit chroma.
        Full = 2,
    }
}

field_codes! {
    /// Color primaries, as described by ITU-T H.273.
    pub enum ColorPrimaries {
        Unknown = 0,
        /// ITU-R BT.709-6.
        Bt709 = 1,
        Unspecified = 2,
        /// ITU-R BT.470-6 System M.
        Bt470M = 4,
        /// ITU-R BT.470-6 System B, G / ITU-R BT.601-7 625.
        Bt470Bg = 5,
        /// ITU-R BT.601-7 525, SMPTE 170M.
        Bt601 = 6,
        /// SMPTE 240M, functionally the same as `Bt601`.
        Smpte240 = 7,
        /// Generic film (color filters using Illuminant C).
        GenericFilm = 8,
        /// ITU-R BT.2020-2 / ITU-R BT.2100-0.
        Bt2020 = 9,
        /// SMPTE ST 428-1.
        Xyz = 10,
        /// SMPTE RP 431-2.
        Smpte431 = 11,
        /// SMPTE EG 432-1 / DCI P3.
        Smpte432 = 12,
        /// EBU Tech. 3213-E.
        Ebu3213 = 22,
        Custom = 31,
    }
}

field_codes! {
    /// Transfer characteristics, as described by ITU-T H.273.
    pub enum TransferCharacteristics {
        Unknown = 0,
        /// Rec. ITU-R BT.709-6 / ITU-R BT1361.
        Bt709 = 1,
        Unspecified = 2,
        /// ITU-R BT.470-6 System M / ITU-R BT1700 625 PAL & SECAM.
        Gamma22 = 4,
        /// ITU-R BT.470-6 System B, G.
        Gamma28 = 5,
        /// SMPTE ST 170M / ITU-R BT.601-7 525 or 625.
        Bt601 = 6,
        /// SMPTE ST 240M.
        Smpte240 = 7,
        Linear = 8,
        Log100 = 9,
        Log100Sqrt10 = 10,
        /// IEC 61966-2-4.
        Iec61966 = 11,
        /// ITU-R BT1361 Extended Colour Gamut.
        Bt1361 = 12,
        /// IEC 61966-2-1 (sRGB or sYCC).
        Srgb = 13,
        /// ITU-R BT2020 for 10-bit system.
        Bt2020TenBit = 14,
        /// ITU-R BT2020 for 12-bit system.
        Bt2020TwelveBit = 15,
        /// SMPTE ST 2084 for 10-, 12-, 14- and 16-bit systems.
        Pq = 16,
        /// SMPTE ST 428-1.
        Smpte428 = 17,
        /// ARIB STD-B67, known as "hybrid log-gamma" (HLG).
        Hlg = 18,
        Custom = 31,
    }
}

field_codes! {
    /// Matrix coefficients, as described by ITU-T H.273.
    pub enum MatrixCoefficients {
        Identity = 0,
        /// ITU-R BT.709-6.
        Bt709 = 1,
        Unspecified = 2,
        /// US FCC Title 47.
        Fcc = 4,
        /// ITU-R BT.470-6 System B, G / ITU-R BT.601-7 625, functionally the same as `Bt601`.
        Bt470Bg = 5,
        /// ITU-R BT.601-7 525.
        Bt601 = 6,
        /// SMPTE 240M.
        Smpte240 = 7,
        YCgCo = 8,
        /// ITU-R BT.2020-2 non-constant luminance.
        Bt2020Ncl = 9,
        /// ITU-R BT.2020-2 constant luminance.
        Bt2020Cl = 10,
        /// SMPTE ST 2085.
        Smpte2085 = 11,
        ChromaDerivedNcl = 12,
        ChromaDerivedCl = 13,
        /// ITU-R BT.2100-0 ICTCP.
        ICtCp = 14,
        Custom = 31,
    }
}

field_codes! {
    /// Location of chroma samples relative to luma samples.
    pub enum ChromaLocation {
        /// RGB, no chroma sampling.
        None = 0,
        /// Cosited horizontally, centered vertically, as in MPEG-2 and H.264.
        Left = 1,
        /// Centered in both directions, as in JPEG and MPEG-1.
        Center = 2,
        /// Cosited with the top left luma sample, as in BT.2020 4:2:0.
        TopLeft = 3,
    }
}

impl Colorspace {
    pub const UNKNOWN: Self = Colorspace(0);

    /// sRGB, the default colorspace of RGB surfaces.
    pub const SRGB: Self = Colorspace::new(
        ColorType::Rgb,
        ColorRange::Full,
        ColorPrimaries::Bt709,
        TransferCharacteristics::Srgb,
        MatrixCoefficients::Identity,
        ChromaLocation::None,
    );

    /// sRGB primaries with a linear transfer, for floating point surfaces.
    pub const SRGB_LINEAR: Self = Colorspace::new(
        ColorType::Rgb,
        ColorRange::Full,
        ColorPrimaries::Bt709,
        TransferCharacteristics::Linear,
        MatrixCoefficients::Identity,
        ChromaLocation::None,
    );

    /// HDR10, BT.2020 primaries with the PQ transfer.
    pub const HDR10: Self = Colorspace::new(
        ColorType::Rgb,
        ColorRange::Full,
        ColorPrimaries::Bt2020,
        TransferCharacteristics::Pq,
        MatrixCoefficients::Identity,
        ChromaLocation::None,
    );

    /// Full range BT.601 coefficients with BT.709 primaries, as used by JPEG.
    pub const JPEG: Self = Colorspace::new(
        ColorType::YCbCr,
        ColorRange::Full,
        ColorPrimaries::Bt709,
        TransferCharacteristics::Bt601,
        MatrixCoefficients::Bt601,
        ChromaLocation::None,
    );

    pub const BT601_LIMITED: Self = Colorspace::new(
        ColorType::YCbCr,
        ColorRange::Limited,
        ColorPrimaries::Bt601,
        TransferCharacteristics::Bt601,
        MatrixCoefficients::Bt601,
        ChromaLocation::Left,
    );

    pub const BT601_FULL: Self = Colorspace::new(
        ColorType::YCbCr,
        ColorRange::Full,
        ColorPrimaries::Bt601,
        TransferCharacteristics::Bt601,
        MatrixCoefficients::Bt601,
        ChromaLocation::Left,
    );

    pub const BT709_LIMITED: Self = Colorspace::new(
        ColorType::YCbCr,
        ColorRange::Limited,
        ColorPrimaries::Bt709,
        TransferCharacteristics::Bt709,
        MatrixCoefficients::Bt709,
        ChromaLocation::Left,
    );

    pub const BT709_FULL: Self = Colorspace::new(
        ColorType::YCbCr,
        ColorRange::Full,
        ColorPrimaries::Bt709,
        TransferCharacteristics::Bt709,
        MatrixCoefficients::Bt709,
        ChromaLocation::Left,
    );

    pub const BT2020_LIMITED: Self = Colorspace::new(
        ColorType::YCbCr,
        ColorRange::Limited,
        ColorPrimaries::Bt2020,
        TransferCharacteristics::Pq,
        MatrixCoefficients::Bt2020Ncl,
        ChromaLocation::Left,
    );

    pub const BT2020_FULL: Self = Colorspace::new(
        ColorType::YCbCr,
        ColorRange::Full,
        ColorPrimaries::Bt2020,
        TransferCharacteristics::Pq,
        MatrixCoefficients::Bt2020Ncl,
        ChromaLocation::Left,
    );

    pub const RGB_DEFAULT: Self = Self::SRGB;
    pub const YUV_DEFAULT: Self = Self::BT601_LIMITED;

    pub const fn new(
        ty: ColorType,
        range: ColorRange,
        primaries: ColorPrimaries,
        transfer: TransferCharacteristics,
        matrix: MatrixCoefficients,
        chroma: ChromaLocation,
    ) -> Self {
        Colorspace(
            ((ty.bits() as u32 & 0xf) << 28)
                | ((range.bits() as u32 & 0xf) << 24)
                | ((chroma.bits() as u32 & 0xf) << 20)
                | ((primaries.bits() as u32 & 0x1f) << 10)
                | ((transfer.bits() as u32 & 0x1f) << 5)
                | (matrix.bits() as u32 & 0x1f),
        )
    }

    pub const fn from_raw(raw: u32) -> Self {
        Colorspace(raw)
    }

    pub const fn to_raw(self) -> u32 {
        self.0
    }

    const fn type_bits(self) -> u8 {
        ((self.0 >> 28) & 0xf) as u8
    }

    const fn range_bits(self) -> u8 {
        ((self.0 >> 24) & 0xf) as u8
    }

    const fn chroma_bits(self) -> u8 {
        ((self.0 >> 20) & 0xf) as u8
    }

    const fn primaries_bits(self) -> u8 {
        ((self.0 >> 10) & 0x1f) as u8
    }

    const fn transfer_bits(self) -> u8 {
        ((self.0 >> 5) & 0x1f) as u8
    }

    const fn matrix_bits(self) -> u8 {
        (self.0 & 0x1f) as u8
    }

    // Accessors return `None` for codes that are not assigned.

    pub const fn color_type(self) -> Option<ColorType> {
        ColorType::from_bits(self.type_bits())
    }

    pub const fn range(self) -> Option<ColorRange> {
        ColorRange::from_bits(self.range_bits())
    }

    pub const fn chroma_location(self) -> Option<ChromaLocation> {
        ChromaLocation::from_bits(self.chroma_bits())
    }

    pub const fn primaries(self) -> Option<ColorPrimaries> {
        ColorPrimaries::from_bits(self.primaries_bits())
    }

    pub const fn transfer(self) -> Option<TransferCharacteristics> {
        TransferCharacteristics::from_bits(self.transfer_bits())
    }

    pub const fn matrix(self) -> Option<MatrixCoefficients> {
        MatrixCoefficients::from_bits(self.matrix_bits())
    }

    /// Uses the BT.601 matrix, which `Bt470Bg` is functionally the same as.
    pub const fn is_matrix_bt601(self) -> bool {
        let matrix = self.matrix_bits();
        matrix == MatrixCoefficients::Bt601.bits() || matrix == MatrixCoefficients::Bt470Bg.bits()
    }

    pub const fn is_matrix_bt709(self) -> bool {
        self.matrix_bits() == MatrixCoefficients::Bt709.bits()
    }

    pub const fn is_matrix_bt2020_ncl(self) -> bool {
        self.matrix_bits() == MatrixCoefficients::Bt2020Ncl.bits()
    }

    /// Any range other than full counts as limited.
    pub const fn is_limited_range(self) -> bool {
        self.range_bits() != ColorRange::Full.bits()
    }

    pub const fn is_full_range(self) -> bool {
        self.range_bits() == ColorRange::Full.bits()
    }
}

impl Default for Colorspace {
    fn default() -> Self {
        Colorspace::UNKNOWN
    }
}

impl fmt::Debug for Colorspace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Colorspace")
            .field("type", &self.color_type())
            .field("range", &self.range())
            .field("chroma", &self.chroma_location())
            .field("primaries", &self.primaries())
            .field("transfer", &self.transfer())
            .field("matrix", &self.matrix())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predefined_values() {
        assert_eq!(Colorspace::SRGB.to_raw(), 0x1200_05a0);
        assert_eq!(Colorspace::SRGB_LINEAR.to_raw(), 0x1200_0500);
        assert_eq!(Colorspace::HDR10.to_raw(), 0x1200_2600);
        assert_eq!(Colorspace::JPEG.to_raw(), 0x2200_04c6);
        assert_eq!(Colorspace::BT601_LIMITED.to_raw(), 0x2110_18c6);
        assert_eq!(Colorspace::BT709_FULL.to_raw(), 0x2210_0421);
        assert_eq!(Colorspace::BT2020_LIMITED.to_raw(), 0x2110_2609);
    }

    #[test]
    fn fields_round_trip() {
        let cs = Colorspace::BT2020_FULL;
        assert_eq!(cs.color_type(), Some(ColorType::YCbCr));
        assert_eq!(cs.range(), Some(ColorRange::Full));
        assert_eq!(cs.chroma_location(), Some(ChromaLocation::Left));
        assert_eq!(cs.primaries(), Some(ColorPrimaries::Bt2020));
        assert_eq!(cs.transfer(), Some(TransferCharacteristics::Pq));
        assert_eq!(cs.matrix(), Some(MatrixCoefficients::Bt2020Ncl));

        let rebuilt = Colorspace::new(
            ColorType::YCbCr,
            ColorRange::Full,
            ColorPrimaries::Bt2020,
            TransferCharacteristics::Pq,
            MatrixCoefficients::Bt2020Ncl,
            ChromaLocation::Left,
        );
        assert_eq!(rebuilt, cs);
    }

    #[test]
    fn unassigned_codes() {
        // Primaries code 3 is reserved.
        let cs = Colorspace::from_raw(3 << 10);
        assert_eq!(cs.primaries(), None);
        assert_eq!(cs.matrix(), Some(MatrixCoefficients::Identity));
    }

    #[test]
    fn predicates() {
        assert!(Colorspace::BT601_LIMITED.is_matrix_bt601());
        assert!(Colorspace::JPEG.is_matrix_bt601());
        assert!(!Colorspace::JPEG.is_matrix_bt709());
        assert!(Colorspace::BT709_LIMITED.is_matrix_bt709());
        assert!(Colorspace::BT2020_FULL.is_matrix_bt2020_ncl());

        let bt470 = Colorspace::new(
            ColorType::YCbCr,
            ColorRange::Limited,
            ColorPrimaries::Bt470Bg,
            TransferCharacteristics::Gamma28,
            MatrixCoefficients::Bt470Bg,
            ChromaLocation::Center,
        );
        assert!(bt470.is_matrix_bt601());

        assert!(Colorspace::BT709_LIMITED.is_limited_range());
        assert!(!Colorspace::BT709_LIMITED.is_full_range());
        assert!(Colorspace::SRGB.is_full_range());
        assert!(Colorspace::UNKNOWN.is_limited_range());
    }
}
