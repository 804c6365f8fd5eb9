// Distributed under The MIT License (MIT)
//
// Copyright (c) 2019, 2020 The `image-rs` developers
//! # Events
//!
//! Every event of the native engine is a fixed buffer of 128 bytes. The first bytes always hold
//! the type tag and a timestamp, the tag alone decides how the rest of the buffer is laid out.
//!
//! This crate offers two ways to read such a buffer. A [`RawEvent`] can be viewed as one of the
//! payload layouts in [`raw`], which is checked against the tag. Or it is decoded into an owned
//! [`Event`], copying all fields and any strings the payload refers to.
//!
//! ## Usage
//!
//! ```
//! use sdl_event::raw::{CommonEvent, KeyboardEvent};
//! use sdl_event::{Event, EventQueue, EventType, Events};
//!
//! let key = KeyboardEvent {
//!     common: CommonEvent { ty: EventType::KEY_DOWN.to_raw(), ..Default::default() },
//!     scancode: 4,
//!     down: 1,
//!     ..Default::default()
//! };
//!
//! let mut queue = EventQueue::new();
//! queue.push_payload(&key)?;
//!
//! let mut events = Events::new(queue);
//! match events.poll() {
//!     Some(Ok(Event::Keyboard(key))) => assert!(key.down),
//!     other => panic!("unexpected {:?}", other),
//! }
//! assert!(events.poll().is_none());
//! # Ok::<(), sdl_event::EventError>(())
//! ```
//!
//! Views are checked against the tag:
//!
//! ```
//! # use sdl_event::raw::{KeyboardEvent, MouseMotionEvent};
//! # use sdl_event::{EventType, RawEvent};
//! let mut key = KeyboardEvent::default();
//! key.common.ty = EventType::KEY_UP.to_raw();
//!
//! let raw = RawEvent::from_payload(&key);
//! assert!(raw.payload::<KeyboardEvent>().is_ok());
//! assert!(raw.payload::<MouseMotionEvent>().is_err());
//! ```
//!
//! ## Features
//!
//! `native` links the engine library and adds [`NativeEvents`](crate::NativeEvents), a source
//! polling the queue of the engine.
// Be std for doctests, avoids a weird warning about missing allocator.
#![cfg_attr(not(doctest), no_std)]
#![deny(unsafe_code)]
extern crate alloc;

mod error;
mod event;
mod kind;
mod native;
mod queue;
pub mod raw;
mod strings;

pub use self::error::EventError;
pub use self::event::{
    AudioDevice, Axis, Button, Clipboard, Common, Device, Display, DragDrop, Event,
    GamepadSensor, GamepadTouchpad, JoyBall, JoyBattery, JoyHat, Keyboard, MouseButton,
    MouseMotion, MouseWheel, PenAxis, PenButton, PenMotion, PenTip, PowerState, Render, Sensor,
    TextEditing, TextEditingCandidates, TextInput, TouchFinger, User, WheelDirection, Window,
};
pub use self::kind::EventType;
#[cfg(feature = "native")]
pub use self::native::NativeEvents;
pub use self::native::NativeMemory;
pub use self::queue::{EventQueue, EventSource, Events};
pub use self::raw::{Payload, RawEvent, PEN_NUM_AXES};
pub use self::strings::{NativeStrings, NoStrings, StringTable};
