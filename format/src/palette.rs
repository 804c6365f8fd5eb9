// Distributed under The MIT License (MIT)
//
// Copyright (c) 2019, 2020 The `image-rs` developers
use alloc::vec::Vec;
use core::ops::Deref;

/// Alpha value of a fully opaque color.
pub const ALPHA_OPAQUE: u8 = 255;
/// Alpha value of a fully transparent color.
pub const ALPHA_TRANSPARENT: u8 = 0;

/// An 8-bit RGBA color, laid out as the native palette entry.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// An ordered table of colors for indexed pixel formats.
///
/// Mapping functions only ever read from a palette. It dereferences to its entries.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Color {
    pub const WHITE: Self = Color::new(0xff, 0xff, 0xff, ALPHA_OPAQUE);
    pub const BLACK: Self = Color::new(0, 0, 0, ALPHA_OPAQUE);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    const fn distance(self, other: Color) -> u32 {
        let dr = self.r.abs_diff(other.r) as u32;
        let dg = self.g.abs_diff(other.g) as u32;
        let db = self.b.abs_diff(other.b) as u32;
        let da = self.a.abs_diff(other.a) as u32;
        dr * dr + dg * dg + db * db + da * da
    }
}

impl Palette {
    /// A palette with `len` entries, all opaque white.
    pub fn new(len: usize) -> Self {
        Palette {
            colors: alloc::vec![Color::WHITE; len],
        }
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// The entries as bytes in the native layout, four per entry.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Overwrite a run of entries starting at `first`.
    ///
    /// Colors beyond the end of the palette are dropped. Returns the number of entries written.
    pub fn set_colors(&mut self, first: usize, colors: &[Color]) -> usize {
        let Some(tail) = self.colors.get_mut(first..) else {
            return 0;
        };

        let count = tail.len().min(colors.len());
        tail[..count].copy_from_slice(&colors[..count]);
        count
    }

    /// The index of the entry closest to a color.
    ///
    /// Distance is the squared difference summed over all four components. Of several entries at
    /// the same distance the first one wins. An empty palette yields index `0`.
    pub fn find_color(&self, r: u8, g: u8, b: u8, a: u8) -> u32 {
        let wanted = Color::new(r, g, b, a);
        let mut smallest = u32::MAX;
        let mut index = 0;

        for (idx, &color) in self.colors.iter().enumerate() {
            let distance = color.distance(wanted);
            if distance < smallest {
                index = idx as u32;
                if distance == 0 {
                    break;
                }
                smallest = distance;
            }
        }

        index
    }
}

impl Deref for Palette {
    type Target = [Color];

    fn deref(&self) -> &[Color] {
        &self.colors
    }
}

impl From<Vec<Color>> for Palette {
    fn from(colors: Vec<Color>) -> Self {
        Palette { colors }
    }
}

impl From<&'_ [Color]> for Palette {
    fn from(colors: &[Color]) -> Self {
        Palette {
            colors: colors.to_vec(),
        }
    }
}
