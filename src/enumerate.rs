//! Device enumeration.
//!
//! A [`DeviceSource`] lists candidate device nodes and opens them on request. Listing and opening
//! are separate steps, so names that are filtered out are never opened. [`InputDir`] is the
//! [`DeviceSource`] backed by a directory like `/dev/input`.
//!
//! Enumeration is blocking.

use std::{
    ffi::{OsStr, OsString},
    fs, io,
    os::unix::fs::FileTypeExt as _,
    path::{Path, PathBuf},
};

use crate::{Evdev, capabilities::Device};

/// The directory the kernel (via udev/devtmpfs) creates input device nodes in.
pub const DEFAULT_INPUT_DIR: &str = "/dev/input";

/// Returns whether `name` is an evdev node name (`eventN`).
///
/// `/dev/input` also contains legacy devices like `mouseN`, `mice` and `jsN`, as well as the
/// `by-id`/`by-path` directories, none of which speak the evdev protocol.
pub fn is_event_node(name: &OsStr) -> bool {
    name.as_encoded_bytes().starts_with(b"event")
}

/// A place to find and open input devices.
pub trait DeviceSource {
    type Device: Device;

    /// Lists the names of candidate devices, in the order they should be examined.
    fn entries(&self) -> io::Result<Vec<OsString>>;

    /// Opens the device called `name`.
    fn open(&self, name: &OsStr) -> io::Result<Self::Device>;
}

/// A [`DeviceSource`] yielding the character devices in a directory.
///
/// Entries are listed in the order the file system returns them; no sorting is done.
#[derive(Debug, Clone)]
pub struct InputDir {
    dir: PathBuf,
}

impl Default for InputDir {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_DIR)
    }
}

impl InputDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[inline]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DeviceSource for InputDir {
    type Device = Evdev;

    fn entries(&self) -> io::Result<Vec<OsString>> {
        let mkerr = |ioerr: io::Error| -> io::Error {
            io::Error::new(
                ioerr.kind(),
                format!("failed to list '{}': {}", self.dir.display(), ioerr),
            )
        };

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(mkerr)? {
            let entry = entry.map_err(mkerr)?;
            let ty = entry.file_type().map_err(mkerr)?;
            if !ty.is_char_device() {
                log::trace!("skipping '{}': not a character device", entry.path().display());
                continue;
            }
            names.push(entry.file_name());
        }
        Ok(names)
    }

    fn open(&self, name: &OsStr) -> io::Result<Evdev> {
        Evdev::open(self.dir.join(name))
    }
}
