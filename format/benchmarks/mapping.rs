//! Benchmarks mapping colors to pixel values and back.
use brunch::Bench;

use sdl_pixelformat::{Color, FormatError, Palette, PixelFormat, PixelFormatDetails};

struct Mapping {
    format: PixelFormat,
    pixels: u32,
}

impl Mapping {
    fn name(&self) -> String {
        format!("mapping({:?}, {})", self.format, self.pixels)
    }

    fn prepare(self) -> Result<impl FnMut(), FormatError> {
        let details = PixelFormatDetails::new(self.format)?;
        let palette: Palette = (0..=255u8)
            .map(|v| Color::new(v, v.wrapping_mul(3), v.wrapping_mul(7), 0xff))
            .collect::<Vec<_>>()
            .into();
        let pixels = self.pixels;

        Ok(move || {
            let mut acc = 0u32;
            for idx in 0..pixels {
                let [r, g, b, a] = idx.to_le_bytes();
                let pixel = details.map_rgba(Some(&palette), r, g, b, a);
                let (r, g, b, a) = details.get_rgba(pixel, Some(&palette));
                acc = acc.wrapping_add(u32::from_le_bytes([r, g, b, a]));
            }
            std::hint::black_box(acc);
        })
    }
}

fn main() {
    let tests = [
        Mapping {
            format: PixelFormat::ARGB8888,
            pixels: 4096,
        },
        Mapping {
            format: PixelFormat::RGB565,
            pixels: 4096,
        },
        Mapping {
            format: PixelFormat::ARGB2101010,
            pixels: 4096,
        },
        // Nearest color search over a full palette.
        Mapping {
            format: PixelFormat::INDEX8,
            pixels: 256,
        },
    ];

    let mut benches = brunch::Benches::default();
    benches.extend(tests.map(|mapping| {
        Bench::new(format!("pixelformat::mapping::main::{}", mapping.name()))
            .run(mapping.prepare().expect("Failed to setup benchmark"))
    }));
    benches.finish();
}
