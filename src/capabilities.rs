//! Device capability snapshots and the device interface used during the scan.

use std::io;

use crate::{
    bits::BitSet,
    event::{EventType, InputEvent, Key},
};

/// The event types and key codes a device advertises.
///
/// Taken once per device; never updated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Capabilities {
    events: BitSet<EventType>,
    keys: BitSet<Key>,
}

impl Capabilities {
    /// Creates a snapshot from the device's event type and key bitmasks.
    ///
    /// `keys` is ignored unless `events` contains [`EventType::KEY`], matching the kernel, which
    /// reports no key codes for devices without key events.
    pub fn new(events: BitSet<EventType>, keys: BitSet<Key>) -> Self {
        let keys = if events.contains(EventType::KEY) {
            keys
        } else {
            BitSet::new()
        };
        Self { events, keys }
    }

    /// Builds a snapshot from lists of event types and keys.
    pub fn from_parts(
        events: impl IntoIterator<Item = EventType>,
        keys: impl IntoIterator<Item = Key>,
    ) -> Self {
        Self::new(events.into_iter().collect(), keys.into_iter().collect())
    }

    #[inline]
    pub fn events(&self) -> &BitSet<EventType> {
        &self.events
    }

    #[inline]
    pub fn keys(&self) -> &BitSet<Key> {
        &self.keys
    }

    /// Returns whether the device reports events of type `ty` at all.
    pub fn supports(&self, ty: EventType) -> bool {
        self.events.contains(ty)
    }

    /// Returns whether `key` is among the device's [`EventType::KEY`] codes.
    pub fn supports_key(&self, key: Key) -> bool {
        self.keys.contains(key)
    }
}

/// An open input device that the scan can inspect and inject events into.
///
/// Implemented by [`Evdev`][crate::Evdev]. Dropping the value releases the device.
pub trait Device {
    /// Queries the device's [`Capabilities`].
    fn capabilities(&self) -> io::Result<Capabilities>;

    /// Writes `events` to the device, in order.
    fn write(&self, events: &[InputEvent]) -> io::Result<()>;
}
