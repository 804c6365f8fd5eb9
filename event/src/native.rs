// Distributed under The MIT License (MIT)
//
// Copyright (c) 2019, 2020 The `image-rs` developers
//! Access to memory and functions of the native engine.
#![allow(unsafe_code)]

use alloc::string::String;
use core::ffi::{c_char, CStr};

use crate::strings::NativeStrings;

/// Reads strings straight from native memory.
///
/// Strings that are not valid UTF-8 are decoded lossily.
#[derive(Debug)]
pub struct NativeMemory {
    _private: (),
}

impl NativeMemory {
    /// Create a resolver that dereferences event addresses.
    ///
    /// # Safety
    ///
    /// Every non-null address resolved through this value must point to a NUL-terminated string,
    /// or to an array of string pointers at least as long as the index read, that stays valid for
    /// the duration of the read. This holds for events fresh from the native queue until the next
    /// poll.
    ///
    /// It does not hold for events built on the Rust side. Handles of a
    /// [`StringTable`](crate::StringTable) and the bytes of events made with
    /// [`RawEvent::from_bytes`](crate::RawEvent::from_bytes) or pushed to an
    /// [`EventQueue`](crate::EventQueue) are not addresses, resolving them is undefined
    /// behavior. Prefer `NativeEvents::decoded` of the `native` feature, which pairs the resolver
    /// with the native queue only.
    pub unsafe fn new() -> Self {
        NativeMemory { _private: () }
    }
}

impl NativeStrings for NativeMemory {
    fn string(&self, addr: u64) -> Option<String> {
        let ptr = usize::try_from(addr).ok()? as *const c_char;
        if ptr.is_null() {
            return None;
        }

        // SAFETY: the address points to a NUL-terminated string, per the constructor contract.
        let text = unsafe { CStr::from_ptr(ptr) };
        Some(String::from_utf8_lossy(text.to_bytes()).into_owned())
    }

    fn pointer(&self, addr: u64, index: usize) -> Option<u64> {
        let base = usize::try_from(addr).ok()? as *const *const c_char;
        if base.is_null() {
            return None;
        }

        // SAFETY: the array holds at least `index + 1` pointers, per the constructor contract.
        let ptr = unsafe { base.add(index).read_unaligned() };
        (!ptr.is_null()).then(|| ptr as usize as u64)
    }
}

#[cfg(feature = "native")]
mod ffi {
    use crate::raw::RawEvent;

    #[link(name = "SDL3")]
    extern "C" {
        pub fn SDL_PollEvent(event: *mut RawEvent) -> bool;
    }
}

/// The event queue of the native engine.
///
/// The value is neither `Send` nor `Sync`, events must be polled on the thread that initialized
/// the video subsystem.
#[cfg(feature = "native")]
#[derive(Debug)]
pub struct NativeEvents {
    _event_thread: core::marker::PhantomData<*const ()>,
}

#[cfg(feature = "native")]
impl NativeEvents {
    /// # Safety
    ///
    /// The engine must be initialized with its event subsystem, and stay so while this value is
    /// used. The value must be used on the thread that initialized it.
    pub unsafe fn new() -> Self {
        NativeEvents {
            _event_thread: core::marker::PhantomData,
        }
    }

    /// Decode events of the native queue, copying their strings from native memory.
    pub fn decoded(self) -> crate::queue::Events<Self, NativeMemory> {
        // SAFETY: every event is decoded right after it was polled, before the engine may free
        // the strings it refers to.
        let strings = unsafe { NativeMemory::new() };
        crate::queue::Events::with_strings(self, strings)
    }
}

#[cfg(feature = "native")]
impl crate::queue::EventSource for NativeEvents {
    fn poll(&mut self, event: &mut crate::raw::RawEvent) -> bool {
        let mut next = crate::raw::RawEvent::zeroed();
        // SAFETY: `next` is a writable buffer of the size and alignment of the native union.
        let pending = unsafe { ffi::SDL_PollEvent(&mut next) };
        if pending {
            *event = next;
        }
        pending
    }
}
