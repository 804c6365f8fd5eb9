// Distributed under The MIT License (MIT)
//
// Copyright (c) 2019, 2020 The `image-rs` developers
use alloc::collections::VecDeque;

use crate::error::EventError;
use crate::event::Event;
use crate::raw::{Payload, RawEvent};
use crate::strings::{NativeStrings, NoStrings};

/// Anything events can be polled from.
pub trait EventSource {
    /// Move the oldest pending event into `event`.
    ///
    /// Returns `false` if there is none, and leaves `event` untouched in that case. Never blocks.
    fn poll(&mut self, event: &mut RawEvent) -> bool;
}

/// A queue of pending events, in the order they were pushed.
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    pending: VecDeque<RawEvent>,
}

/// Polls a source and decodes each event.
///
/// Also an iterator, which ends when the source has no pending event.
#[derive(Debug)]
pub struct Events<S, R = NoStrings> {
    source: S,
    strings: R,
}

impl EventQueue {
    /// The most events held at once.
    pub const CAPACITY: usize = 65535;

    pub fn new() -> Self {
        EventQueue::default()
    }

    /// Append an event.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::QueueFull`] if the queue holds [`EventQueue::CAPACITY`] events, the
    /// event is then dropped.
    pub fn push(&mut self, event: RawEvent) -> Result<(), EventError> {
        if self.pending.len() >= Self::CAPACITY {
            log::debug!("dropping {:?}, queue is full", event.event_type());
            return Err(EventError::QueueFull);
        }

        self.pending.push_back(event);
        Ok(())
    }

    /// Append an event built from a payload.
    pub fn push_payload<T: Payload>(&mut self, payload: &T) -> Result<(), EventError> {
        self.push(RawEvent::from_payload(payload))
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

impl EventSource for EventQueue {
    fn poll(&mut self, event: &mut RawEvent) -> bool {
        match self.pending.pop_front() {
            Some(next) => {
                *event = next;
                true
            }
            None => false,
        }
    }
}

impl<S: EventSource + ?Sized> EventSource for &'_ mut S {
    fn poll(&mut self, event: &mut RawEvent) -> bool {
        (**self).poll(event)
    }
}

impl<S: EventSource> Events<S> {
    /// Decode events without resolving their strings.
    pub fn new(source: S) -> Self {
        Events {
            source,
            strings: NoStrings,
        }
    }
}

impl<S: EventSource, R: NativeStrings> Events<S, R> {
    pub fn with_strings(source: S, strings: R) -> Self {
        Events { source, strings }
    }

    /// Poll and decode the next event, `None` if none is pending.
    pub fn poll(&mut self) -> Option<Result<Event, EventError>> {
        let mut raw = RawEvent::zeroed();
        if !self.source.poll(&mut raw) {
            return None;
        }

        log::trace!("polled {:?}", raw);
        let event = Event::decode(&raw, &self.strings);
        if let Err(err) = &event {
            log::debug!("undecodable event: {}", err);
        }

        Some(event)
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: EventSource, R: NativeStrings> Iterator for Events<S, R> {
    type Item = Result<Event, EventError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.poll()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::EventType;
    use crate::raw::CommonEvent;

    fn common(ty: EventType, timestamp: u64) -> CommonEvent {
        CommonEvent {
            ty: ty.to_raw(),
            reserved: 0,
            timestamp,
        }
    }

    #[test]
    fn fifo_order() {
        let mut queue = EventQueue::new();
        queue.push_payload(&common(EventType::LOCALE_CHANGED, 1)).unwrap();
        queue.push_payload(&common(EventType::QUIT, 2)).unwrap();
        assert_eq!(queue.len(), 2);

        let mut raw = RawEvent::zeroed();
        assert!(queue.poll(&mut raw));
        assert_eq!(raw.event_type(), EventType::LOCALE_CHANGED);
        assert!(queue.poll(&mut raw));
        assert_eq!(raw.timestamp(), 2);
        assert!(queue.is_empty());
    }

    #[test]
    fn empty_poll_keeps_output() {
        let mut queue = EventQueue::new();
        let mut raw = RawEvent::from_payload(&common(EventType::KEYMAP_CHANGED, 42));
        let before = raw;

        assert!(!queue.poll(&mut raw));
        assert_eq!(raw, before);
    }

    #[test]
    fn capacity() {
        let mut queue = EventQueue::new();
        let event = RawEvent::from_payload(&common(EventType::QUIT, 0));
        for _ in 0..EventQueue::CAPACITY {
            queue.push(event).unwrap();
        }

        assert_eq!(queue.push(event), Err(EventError::QueueFull));
        assert_eq!(queue.len(), EventQueue::CAPACITY);
        queue.clear();
        assert!(queue.push(event).is_ok());
    }

    #[test]
    fn decoding_iterator() {
        let mut queue = EventQueue::new();
        queue.push_payload(&common(EventType::QUIT, 5)).unwrap();
        queue.push_payload(&common(EventType::from_raw(0x4000), 6)).unwrap();

        let mut events = Events::new(&mut queue);
        assert_eq!(events.next().map(|ev| ev.map(|ev| ev.timestamp())), Some(Ok(5)));
        assert_eq!(events.next(), Some(Err(EventError::UnknownEventType(0x4000))));
        assert_eq!(events.next(), None);
        assert!(queue.is_empty());
    }
}
