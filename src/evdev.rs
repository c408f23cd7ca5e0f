use std::{
    error::Error,
    ffi::{c_char, c_int, c_void},
    fmt,
    fs::File,
    io::{self, Write as _},
    os::fd::{AsFd, AsRawFd, BorrowedFd, RawFd},
    path::{Path, PathBuf},
    slice,
    time::Instant,
};

use uoctl::Ioctl;

use crate::{
    bits::{BitSet, BitValue, Word},
    capabilities::{Capabilities, Device},
    event::{EventType, InputEvent, Key},
    raw::input::{EVIOCGBIT, EVIOCGNAME, EVIOCGVERSION},
};

/// A handle to an *event device* (`/dev/input/event*`).
///
/// The device is opened for reading and writing, and closed when the [`Evdev`] is dropped.
#[derive(Debug)]
pub struct Evdev {
    file: File,
    path: PathBuf,
}

impl AsFd for Evdev {
    #[inline]
    fn as_fd(&self) -> BorrowedFd<'_> {
        self.file.as_fd()
    }
}

impl AsRawFd for Evdev {
    #[inline]
    fn as_raw_fd(&self) -> RawFd {
        self.file.as_raw_fd()
    }
}

impl Evdev {
    /// Opens the evdev node at `path` in read-write mode.
    ///
    /// Writing events requires write permission on the node, which is usually restricted to root
    /// (or the `input` group). A missing permission is reported as an error, there is no read-only
    /// fallback.
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Self::open_impl(path.as_ref().to_path_buf())
    }

    fn open_impl(path: PathBuf) -> io::Result<Self> {
        let now = Instant::now();

        let file = match File::options().read(true).write(true).open(&path) {
            Ok(file) => file,
            Err(e) => {
                return Err(io::Error::new(
                    e.kind(),
                    format!("failed to open '{}': {e}", path.display()),
                ));
            }
        };
        let this = Self { file, path };
        let version = this.driver_version()?;
        log::debug!(
            "opened '{}' in {:?}; driver version {}.{}.{}, name {:?}",
            this.path().display(),
            now.elapsed(),
            version >> 16,
            (version >> 8) & 0xff,
            version & 0xff,
            this.name().ok(),
        );
        Ok(this)
    }

    /// Returns the file system path this [`Evdev`] has been opened from.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Executes `ioctl` and adds context to the error.
    unsafe fn ioctl<T>(&self, name: &'static str, ioctl: Ioctl<T>, arg: T) -> io::Result<c_int> {
        match unsafe { ioctl.ioctl(self, arg) } {
            Ok(ok) => Ok(ok),
            Err(e) => {
                #[derive(Debug)]
                struct WrappedError {
                    cause: io::Error,
                    msg: String,
                }

                impl fmt::Display for WrappedError {
                    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                        f.write_str(&self.msg)
                    }
                }
                impl Error for WrappedError {
                    fn source(&self) -> Option<&(dyn Error + 'static)> {
                        Some(&self.cause)
                    }
                }

                let msg = format!(
                    "ioctl {name} failed for device {} ({:?})",
                    self.path().display(),
                    e.kind()
                );
                Err(io::Error::new(e.kind(), WrappedError { cause: e, msg }))
            }
        }
    }

    unsafe fn fetch_bits<V: BitValue>(&self, ev: u8) -> io::Result<BitSet<V>> {
        let mut set = BitSet::<V>::new();
        let words = set.words_mut();
        unsafe {
            self.ioctl(
                "EVIOCGBIT",
                EVIOCGBIT(ev, words.len() * size_of::<Word>()),
                words.as_mut_ptr().cast::<c_void>(),
            )?;
        }
        Ok(set)
    }

    /// Returns the raw evdev subsystem version (`EV_VERSION`).
    pub fn driver_version(&self) -> io::Result<c_int> {
        let mut version = 0;
        unsafe {
            self.ioctl("EVIOCGVERSION", EVIOCGVERSION, &mut version)?;
        }
        Ok(version)
    }

    /// Fetches the device name.
    pub fn name(&self) -> io::Result<String> {
        // The ioctl returns the number of bytes copied, including the trailing NUL. If the buffer
        // was filled completely the name may be truncated, so grow it and try again.
        let mut buf = vec![0_u8; 64];
        let len = loop {
            let len = unsafe {
                self.ioctl(
                    "EVIOCGNAME",
                    EVIOCGNAME(buf.len()),
                    buf.as_mut_ptr().cast::<c_char>(),
                )?
            };
            if len as usize == buf.len() {
                buf.resize(buf.len() * 2, 0);
            } else {
                break len;
            }
        };
        buf.truncate(len.saturating_sub(1) as usize);

        String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Returns the set of supported [`EventType`]s.
    pub fn supported_events(&self) -> io::Result<BitSet<EventType>> {
        unsafe { self.fetch_bits(0) }
    }

    /// Returns the set of supported [`Key`]s.
    pub fn supported_keys(&self) -> io::Result<BitSet<Key>> {
        unsafe { self.fetch_bits(EventType::KEY.raw() as u8) }
    }

    /// Takes a [`Capabilities`] snapshot of the device.
    ///
    /// The key bitmask is only queried if the device advertises [`EventType::KEY`].
    pub fn capabilities(&self) -> io::Result<Capabilities> {
        let events = self.supported_events()?;
        let keys = if events.contains(EventType::KEY) {
            self.supported_keys()?
        } else {
            BitSet::new()
        };
        Ok(Capabilities::new(events, keys))
    }

    /// Writes `events` to the device.
    ///
    /// Partial writes are continued until every event has been submitted.
    pub fn write(&self, events: &[InputEvent]) -> io::Result<()> {
        // Safety: `InputEvent` is a transparent wrapper around `input_event`, which has no
        // padding (tested in `raw::input`).
        let bytes = unsafe {
            slice::from_raw_parts(
                events.as_ptr().cast::<u8>(),
                events.len() * size_of::<InputEvent>(),
            )
        };
        (&self.file).write_all(bytes).map_err(|e| {
            io::Error::new(
                e.kind(),
                format!("failed to write to '{}': {e}", self.path.display()),
            )
        })
    }
}

impl Device for Evdev {
    fn capabilities(&self) -> io::Result<Capabilities> {
        Evdev::capabilities(self)
    }

    fn write(&self, events: &[InputEvent]) -> io::Result<()> {
        Evdev::write(self, events)
    }
}
