// Distributed under The MIT License (MIT)
//
// Copyright (c) 2019, 2020 The `image-rs` developers
//! # SDL core values
//!
//! The two value types the engine passes across its boundary: pixel format descriptors with the
//! color conversions derived from them, and fixed-size event buffers.
//!
//! ## Usage
//!
//! ```
//! use sdl_core::format::{Colorspace, PixelFormat};
//! use sdl_core::event::{Event, EventQueue, EventType, Events};
//! use sdl_core::event::raw::{CommonEvent, WindowEvent};
//!
//! let details = PixelFormat::ARGB8888.details()?;
//! assert_eq!(details.map_rgb(None, 0x12, 0x34, 0x56), 0xff12_3456);
//! assert!(Colorspace::SRGB.is_full_range());
//!
//! let mut queue = EventQueue::new();
//! queue.push_payload(&WindowEvent {
//!     common: CommonEvent { ty: EventType::WINDOW_RESIZED.to_raw(), ..Default::default() },
//!     window_id: 1,
//!     data1: 800,
//!     data2: 600,
//!     ..Default::default()
//! })?;
//!
//! for event in Events::new(queue) {
//!     if let Ok(Event::Window(window)) = event {
//!         assert_eq!((window.data1, window.data2), (800, 600));
//!     }
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(not(doctest), no_std)]
#![deny(unsafe_code)]

/// Pixel format descriptors, palettes and color mapping.
pub mod format {
    pub use sdl_pixelformat::*;
}

/// Raw and decoded events.
pub mod event {
    pub use sdl_event::*;
}

pub use sdl_event::{Event, EventError, EventType, RawEvent};
pub use sdl_pixelformat::{Color, Colorspace, Palette, PixelFormat, PixelFormatDetails};
