//! `linux/input.h`

use std::ffi::{c_char, c_int, c_void};

use libc::timeval;
use uoctl::{_IOC, _IOC_READ, _IOR, Ioctl};

#[derive(Clone, Copy)]
#[repr(C)]
pub struct input_event {
    pub time: timeval,
    pub type_: u16,
    pub code: u16,
    pub value: i32,
}

impl PartialEq for input_event {
    fn eq(&self, other: &Self) -> bool {
        self.time.tv_sec == other.time.tv_sec
            && self.time.tv_usec == other.time.tv_usec
            && self.type_ == other.type_
            && self.code == other.code
            && self.value == other.value
    }
}
impl Eq for input_event {}

/// Get driver version.
pub const EVIOCGVERSION: Ioctl<*mut c_int> = _IOR(b'E', 0x01);

/// Get device name.
pub const fn EVIOCGNAME(len: usize) -> Ioctl<*mut c_char> {
    _IOC(_IOC_READ, b'E', 0x06, len)
}

/// Get the event-type bitmask (`ev == 0`) or the code bitmask of event type `ev`.
pub const fn EVIOCGBIT(ev: u8, len: usize) -> Ioctl<*mut c_void> {
    _IOC(_IOC_READ, b'E', 0x20 + ev, len)
}
