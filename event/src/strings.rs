// Distributed under The MIT License (MIT)
//
// Copyright (c) 2019, 2020 The `image-rs` developers
//! Resolving the string fields of raw events.
//!
//! Raw payloads refer to strings by address. The owned [`Event`](crate::Event) copies them while
//! decoding, through one of the resolvers here.
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

/// Reads strings and string arrays referred to by raw events.
pub trait NativeStrings {
    /// The string at an address, `None` for a null or unknown address.
    fn string(&self, addr: u64) -> Option<String>;

    /// The element `index` of an array of string addresses.
    fn pointer(&self, addr: u64, index: usize) -> Option<u64>;

    /// The strings of an array of `len` string addresses.
    ///
    /// Null elements are skipped.
    fn string_list(&self, addr: u64, len: usize) -> Vec<String> {
        (0..len)
            .filter_map(|idx| self.pointer(addr, idx))
            .filter_map(|ptr| self.string(ptr))
            .collect()
    }
}

/// A resolver that knows no strings, all string fields decode as absent.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoStrings;

/// Strings held on the Rust side, under handles standing in for native addresses.
///
/// Use this to attach text to events that are constructed and queued from Rust.
#[derive(Clone, Debug, Default)]
pub struct StringTable {
    strings: BTreeMap<u64, String>,
    lists: BTreeMap<u64, Vec<u64>>,
    next: u64,
}

impl NativeStrings for NoStrings {
    fn string(&self, _: u64) -> Option<String> {
        None
    }

    fn pointer(&self, _: u64, _: usize) -> Option<u64> {
        None
    }
}

impl StringTable {
    pub fn new() -> Self {
        StringTable::default()
    }

    /// Store a string, returning its handle. Handles are never zero.
    pub fn add_string(&mut self, text: impl Into<String>) -> u64 {
        let handle = self.allocate();
        self.strings.insert(handle, text.into());
        handle
    }

    /// Store an array of string handles, returning its handle.
    pub fn add_list(&mut self, items: &[u64]) -> u64 {
        let handle = self.allocate();
        self.lists.insert(handle, items.to_vec());
        handle
    }

    fn allocate(&mut self) -> u64 {
        self.next += 1;
        self.next
    }
}

impl NativeStrings for StringTable {
    fn string(&self, addr: u64) -> Option<String> {
        self.strings.get(&addr).cloned()
    }

    fn pointer(&self, addr: u64, index: usize) -> Option<u64> {
        let ptr = *self.lists.get(&addr)?.get(index)?;
        (ptr != 0).then_some(ptr)
    }
}

impl<T: NativeStrings + ?Sized> NativeStrings for &'_ T {
    fn string(&self, addr: u64) -> Option<String> {
        (**self).string(addr)
    }

    fn pointer(&self, addr: u64, index: usize) -> Option<u64> {
        (**self).pointer(addr, index)
    }
}
