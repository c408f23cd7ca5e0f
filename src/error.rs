use std::io;

use thiserror::Error;

/// Errors that end a SysRq injection attempt.
#[derive(Debug, Error)]
pub enum Error {
    /// The input directory contains no `event*` device nodes.
    #[error("no input devices found")]
    NoInputDevices,
    /// Devices were found, but none supports `EV_KEY`, `KEY_SYSRQ` and `EV_SYN`.
    #[error("no input devices support sysrq injection ({checked} checked)")]
    NoSuitableDevice { checked: usize },
    /// Listing, opening, querying or writing to a device failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}
