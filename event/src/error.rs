// Distributed under The MIT License (MIT)
//
// Copyright (c) 2019, 2020 The `image-rs` developers
use core::fmt;

/// An event could not be read as requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum EventError {
    /// The type tag is not assigned to any payload.
    UnknownEventType(u32),
    /// The type tag belongs to a different payload than the one requested.
    TypeMismatch {
        expected: &'static str,
        found: u32,
    },
    /// The pending event queue is at capacity.
    QueueFull,
}

impl fmt::Display for EventError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EventError::UnknownEventType(ty) => write!(f, "unknown event type {:#x}", ty),
            EventError::TypeMismatch { expected, found } => {
                write!(f, "event of type {:#x} does not carry a {}", found, expected)
            }
            EventError::QueueFull => f.write_str("event queue is full"),
        }
    }
}

impl core::error::Error for EventError {}
