#![doc = include_str!("../README.md")]
#![warn(missing_debug_implementations)]

#[macro_use]
mod macros;


pub mod bits;
mod capabilities;
pub mod enumerate;
mod error;
mod evdev;
pub mod event;
mod inject;
mod locate;
mod raw;

pub use capabilities::{Capabilities, Device};
#[doc(inline)]
pub use enumerate::{DeviceSource, InputDir};
pub use error::Error;
pub use evdev::Evdev;
pub use inject::{Mode, SYSRQ_X, inject, run};
pub use locate::{Located, Progress, Requirement, Scan, check, locate};
