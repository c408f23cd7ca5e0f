//! Input event types and the event codes this crate works with.
//!
//! Events carry a **type** ([`EventType`]), a **code** identifying the key or other entity the
//! event is about (a [`Key`] for [`EventType::KEY`], a [`Syn`] for [`EventType::SYN`]), and a
//! **value** describing what happened to it (eg. [`KeyState::PRESSED`]).
//!
//! Only the codes needed to check for and type SysRq combinations are named here; any other code
//! can still be represented via `from_raw`.

use std::fmt;

use crate::raw::input::input_event;

ffi_enum! {
    /// Types of [`InputEvent`]s.
    pub enum EventType: u16 as "EV_" {
        /// Synchronization event.
        SYN = 0x00,
        /// A key press, release, or repeat.
        KEY = 0x01,
        /// A relative axis movement.
        REL = 0x02,
        /// An absolute axis change.
        ABS = 0x03,
        /// A miscellaneous event.
        MSC = 0x04,
        /// A switch changed state.
        SW  = 0x05,
        /// An LED changed state, or is requested to change state.
        LED = 0x11,
        /// A sound started/stopped playing, or is requested to.
        SND = 0x12,
        /// The autorepeat settings have changed.
        REP = 0x14,
        /// Force-feedback control.
        FF  = 0x15,
    }
}
impl EventType {
    pub const MAX: Self = Self(0x1f);
}
bitvalue!(EventType);

ffi_enum! {
    /// Synchronization event codes.
    pub enum Syn: u16 as "SYN_" {
        /// Marks the end of a group of events.
        REPORT = 0,
    }
}

ffi_enum! {
    /// Key and button codes.
    pub enum Key: u16 as "" {
        KEY_ESC = 1,
        KEY_A = 30,
        KEY_X = 45,
        KEY_LEFTALT = 56,
        /// Also labeled *Print Screen* on most keyboards.
        KEY_SYSRQ = 99,
        KEY_RIGHTALT = 100,
    }
}
impl Key {
    pub const MAX: Self = Self(0x2ff);
}
bitvalue!(Key);

/// The value of an [`EventType::KEY`] event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyState(i32);

impl KeyState {
    pub const RELEASED: Self = Self(0);
    pub const PRESSED: Self = Self(1);

    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }
}

/// An input event sent to an *evdev*.
#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct InputEvent(input_event);

impl InputEvent {
    /// Creates an [`InputEvent`] from raw values.
    ///
    /// The timestamp is left at 0; the kernel stamps events written to a device.
    #[inline]
    pub const fn new(ty: EventType, raw_code: u16, raw_value: i32) -> Self {
        Self(input_event {
            time: libc::timeval {
                tv_sec: 0,
                tv_usec: 0,
            },
            type_: ty.0,
            code: raw_code,
            value: raw_value,
        })
    }

    /// Creates an [`EventType::KEY`] event changing `key` to `state`.
    #[inline]
    pub const fn key(key: Key, state: KeyState) -> Self {
        Self::new(EventType::KEY, key.0, state.0)
    }

    /// Creates an [`EventType::SYN`] event with the given code and a value of 0.
    #[inline]
    pub const fn syn(syn: Syn) -> Self {
        Self::new(EventType::SYN, syn.0, 0)
    }

    #[inline]
    pub fn event_type(&self) -> EventType {
        EventType(self.0.type_)
    }

    #[inline]
    pub fn raw_code(&self) -> u16 {
        self.0.code
    }

    #[inline]
    pub fn raw_value(&self) -> i32 {
        self.0.value
    }
}

impl fmt::Debug for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("InputEvent");
        s.field("type", &self.event_type());
        match self.event_type() {
            EventType::KEY => s.field("code", &Key(self.raw_code())),
            EventType::SYN => s.field("code", &Syn(self.raw_code())),
            _ => s.field("code", &self.raw_code()),
        };
        s.field("value", &self.raw_value()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn str_repr() {
        assert_eq!(format!("{:?}", EventType::SYN), "EV_SYN");
        assert_eq!(format!("{:?}", EventType::KEY), "EV_KEY");
        assert_eq!(
            format!("{:?}", EventType::from_raw(0xffff)),
            "EventType(0xffff)"
        );

        assert_eq!(format!("{:?}", Syn::REPORT), "SYN_REPORT");
        assert_eq!(format!("{:?}", Key::KEY_SYSRQ), "KEY_SYSRQ");
        assert_eq!(format!("{:?}", Key::from_raw(0xffff)), "Key(0xffff)");
        assert_eq!(format!("{:?}", Key::from_raw(0x110)), "Key(0x110)");
        assert_eq!(format!("{:?}", Syn::from_raw(3)), "Syn(0x3)");
    }

    #[test]
    fn event_repr() {
        let ev = InputEvent::key(Key::KEY_LEFTALT, KeyState::PRESSED);
        assert_eq!(ev.event_type(), EventType::KEY);
        assert_eq!(ev.raw_code(), 56);
        assert_eq!(ev.raw_value(), 1);
        assert_eq!(
            format!("{ev:?}"),
            "InputEvent { type: EV_KEY, code: KEY_LEFTALT, value: 1 }"
        );

        let ev = InputEvent::syn(Syn::REPORT);
        assert_eq!(ev, InputEvent::new(EventType::SYN, 0, 0));
        assert_eq!(
            format!("{ev:?}"),
            "InputEvent { type: EV_SYN, code: SYN_REPORT, value: 0 }"
        );
    }
}
