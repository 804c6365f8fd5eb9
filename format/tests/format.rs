use sdl_pixelformat::{
    ArrayOrder, ChannelOrder, PackedLayout, PackedOrder, PixelFormat, PixelFormatDetails,
    PixelType,
};

#[test]
fn descriptor_round_trip() {
    for &format in PixelFormat::ALL.iter().filter(|f| !f.is_fourcc()) {
        let rebuilt = PixelFormat::new(
            format.pixel_type(),
            format.channel_order(),
            format.layout(),
            format.bits_per_pixel(),
            format.bytes_per_pixel(),
        );
        assert_eq!(rebuilt, format, "{:?}", format);
    }
}

#[test]
fn decode_fields() {
    let format = PixelFormat::BGRA4444;
    assert_eq!(format.flag(), 1);
    assert_eq!(format.pixel_type(), PixelType::Packed16);
    assert_eq!(format.channel_order(), ChannelOrder::Packed(PackedOrder::Bgra));
    assert_eq!(format.layout(), PackedLayout::Bits4444);
    assert_eq!(format.bits_per_pixel(), 16);
    assert_eq!(format.bytes_per_pixel(), 2);

    let format = PixelFormat::BGR48_FLOAT;
    assert_eq!(format.pixel_type(), PixelType::ArrayF16);
    assert_eq!(format.channel_order(), ChannelOrder::Array(ArrayOrder::Bgr));
    assert_eq!(format.layout(), PackedLayout::None);
    assert!(format.is_float());
}

#[test]
fn classification_partition() {
    for &format in PixelFormat::ALL {
        let classes = [
            format.is_indexed(),
            format.is_packed(),
            format.is_array(),
            format.is_fourcc(),
        ];
        let count = classes.iter().filter(|&&is| is).count();
        assert_eq!(count, 1, "{:?}: {:?}", format, classes);
    }
}

#[test]
fn alpha_predicate() {
    for &format in PixelFormat::ALL {
        let alpha_order = matches!(
            format.channel_order(),
            ChannelOrder::Packed(
                PackedOrder::Argb | PackedOrder::Rgba | PackedOrder::Abgr | PackedOrder::Bgra
            )
        );
        assert_eq!(
            format.has_alpha(),
            format.is_packed() && alpha_order,
            "{:?}",
            format
        );
    }

    for format in [
        PixelFormat::XRGB8888,
        PixelFormat::XBGR8888,
        PixelFormat::RGBX8888,
        PixelFormat::BGRX8888,
        PixelFormat::XRGB2101010,
        PixelFormat::XRGB1555,
    ] {
        assert!(!format.has_alpha(), "{:?}", format);
    }

    // Array formats never count as having alpha.
    assert!(!PixelFormat::RGBA64.has_alpha());
}

#[test]
fn ten_bit_and_float() {
    let ten_bit: Vec<_> = PixelFormat::ALL
        .iter()
        .copied()
        .filter(|f| f.is_10bit())
        .collect();
    assert_eq!(
        ten_bit,
        [
            PixelFormat::XRGB2101010,
            PixelFormat::XBGR2101010,
            PixelFormat::ARGB2101010,
            PixelFormat::ABGR2101010,
        ]
    );

    assert!(PixelFormat::RGBA128_FLOAT.is_float());
    assert!(!PixelFormat::RGBA64.is_float());
    assert!(!PixelFormat::P010.is_float());
}

#[test]
fn fourcc_equality() {
    assert_eq!(PixelFormat::fourcc(b'Y', b'V', b'1', b'2'), PixelFormat::YV12);
    assert_eq!(PixelFormat::from_code(*b"NV21"), PixelFormat::NV21);
    assert!(PixelFormat::YV12.is_fourcc());
    assert!(!PixelFormat::ARGB8888.is_fourcc());

    let custom = PixelFormat::fourcc(b'A', b'B', b'C', b'D');
    assert!(custom.is_fourcc());
    assert_eq!(custom.code(), Some(*b"ABCD"));
    assert_eq!(custom.bytes_per_pixel(), 1);
    assert_eq!(custom.name(), "SDL_PIXELFORMAT_UNKNOWN");
}

#[test]
fn white_expands_to_full_range() {
    for &format in PixelFormat::ALL.iter().filter(|f| f.is_packed()) {
        let details = PixelFormatDetails::new(format).unwrap();
        let white = details.map_rgb(None, 255, 255, 255);
        assert_eq!(details.get_rgb(white, None), (255, 255, 255), "{:?}", format);
        assert_eq!(
            details.get_rgba(white, None),
            (255, 255, 255, 255),
            "{:?}",
            format
        );
    }
}

#[test]
fn black_stays_black() {
    for &format in PixelFormat::ALL.iter().filter(|f| f.is_packed()) {
        let details = format.details().unwrap();
        let black = details.map_rgba(None, 0, 0, 0, 0);
        assert_eq!(details.get_rgb(black, None), (0, 0, 0), "{:?}", format);
    }
}

#[test]
fn masks_round_trip() {
    for &format in PixelFormat::ALL.iter().filter(|f| f.is_packed()) {
        let masks = format.masks().unwrap();
        let found =
            PixelFormat::from_masks(masks.bpp, masks.red, masks.green, masks.blue, masks.alpha);
        assert_eq!(found, format, "{:?}", masks);
    }

    for format in [PixelFormat::RGB24, PixelFormat::BGR24] {
        let masks = format.masks().unwrap();
        let found =
            PixelFormat::from_masks(masks.bpp, masks.red, masks.green, masks.blue, masks.alpha);
        assert_eq!(found, format);
    }
}

#[test]
fn masks_lookup_defaults() {
    assert_eq!(PixelFormat::from_masks(1, 0, 0, 0, 0), PixelFormat::INDEX1MSB);
    assert_eq!(PixelFormat::from_masks(4, 0, 0, 0, 0), PixelFormat::INDEX4MSB);
    assert_eq!(PixelFormat::from_masks(8, 0, 0, 0, 0), PixelFormat::INDEX8);
    assert_eq!(PixelFormat::from_masks(16, 0, 0, 0, 0), PixelFormat::RGB565);
    assert_eq!(PixelFormat::from_masks(32, 0, 0, 0, 0), PixelFormat::XRGB8888);
    assert_eq!(
        PixelFormat::from_masks(16, 0x7c00, 0x03e0, 0x001f, 0),
        PixelFormat::XRGB1555
    );
    assert_eq!(
        PixelFormat::from_masks(32, 0xff, 0xff, 0xff, 0),
        PixelFormat::UNKNOWN
    );
    assert_eq!(PixelFormat::from_masks(7, 1, 2, 4, 0), PixelFormat::UNKNOWN);
}

#[test]
fn masks_lookup_across_storage_depths() {
    assert_eq!(
        PixelFormat::from_masks(16, 0x0f00, 0x00f0, 0x000f, 0),
        PixelFormat::XRGB4444
    );
    assert_eq!(
        PixelFormat::from_masks(16, 0x001f, 0x03e0, 0x7c00, 0),
        PixelFormat::XBGR1555
    );
    assert_eq!(
        PixelFormat::from_masks(15, 0xf800, 0x07e0, 0x001f, 0),
        PixelFormat::RGB565
    );
    assert_eq!(
        PixelFormat::from_masks(15, 0x0f00, 0x00f0, 0x000f, 0xf000),
        PixelFormat::ARGB4444
    );
    // No widening beyond 16 bits.
    assert_eq!(
        PixelFormat::from_masks(32, 0x0f00, 0x00f0, 0x000f, 0),
        PixelFormat::UNKNOWN
    );
}

#[test]
fn byte_order_aliases() {
    let details = PixelFormat::RGBA32.details().unwrap();
    let pixel = details.map_rgba(None, 1, 2, 3, 4);
    assert_eq!(pixel.to_ne_bytes(), [1, 2, 3, 4]);

    let details = PixelFormat::BGRX32.details().unwrap();
    let pixel = details.map_rgb(None, 1, 2, 3);
    assert_eq!(&pixel.to_ne_bytes()[..3], &[3, 2, 1]);
}
