//! Selecting the device to inject into.

use std::{
    ffi::{OsStr, OsString},
    fmt, io,
};

use crate::{
    capabilities::{Capabilities, Device},
    enumerate::{DeviceSource, is_event_node},
    event::{EventType, Key},
};

/// A capability a device needs for SysRq injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// The device reports [`EventType::KEY`] events.
    KeyEvents,
    /// [`Key::KEY_SYSRQ`] is among the device's key codes.
    SysRqKey,
    /// The device reports [`EventType::SYN`] events.
    SyncEvents,
}

impl Requirement {
    /// All requirements, in the order they are checked.
    pub const ALL: [Self; 3] = [Self::KeyEvents, Self::SysRqKey, Self::SyncEvents];

    pub fn is_met(self, caps: &Capabilities) -> bool {
        match self {
            Self::KeyEvents => caps.supports(EventType::KEY),
            Self::SysRqKey => caps.supports_key(Key::KEY_SYSRQ),
            Self::SyncEvents => caps.supports(EventType::SYN),
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeyEvents => write!(f, "{:?}", EventType::KEY),
            Self::SysRqKey => write!(f, "{:?}", Key::KEY_SYSRQ),
            Self::SyncEvents => write!(f, "{:?}", EventType::SYN),
        }
    }
}

/// A step of the scan or injection, reported as it happens.
///
/// The [`Display`][fmt::Display] impl renders the one-line status message for the step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress<'a> {
    /// The named candidate is about to be opened.
    Checking(&'a OsStr),
    /// The current candidate satisfies a requirement.
    Supported(Requirement),
    /// The named candidate satisfies every requirement and was selected.
    Found(&'a OsStr),
    /// Injection was skipped on request.
    DryRun,
    /// The key sequence is about to be written.
    Sending,
    /// The key sequence has been written.
    Done,
}

impl fmt::Display for Progress<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Progress::Checking(name) => write!(f, "checking {}", name.to_string_lossy()),
            Progress::Supported(req) => write!(f, "{req} supported"),
            Progress::Found(name) => write!(f, "found device {}", name.to_string_lossy()),
            Progress::DryRun => f.write_str("dry run, not sending key sequence"),
            Progress::Sending => f.write_str("sending Alt+SysRq+X sequence"),
            Progress::Done => f.write_str("done"),
        }
    }
}

/// The device selected by [`locate`].
#[derive(Debug)]
pub struct Located<D> {
    pub name: OsString,
    pub device: D,
}

/// Result of a scan.
#[derive(Debug)]
pub struct Scan<D> {
    /// Number of `event*` candidates that were opened and examined.
    pub checked: usize,
    /// The first candidate satisfying every [`Requirement`], if any.
    pub found: Option<Located<D>>,
}

/// Checks `caps` against every [`Requirement`] in order, reporting each one that passes.
///
/// Returns the first unmet requirement, or `None` if the device qualifies.
pub fn check(caps: &Capabilities, progress: &mut dyn FnMut(Progress<'_>)) -> Option<Requirement> {
    for req in Requirement::ALL {
        if !req.is_met(caps) {
            return Some(req);
        }
        progress(Progress::Supported(req));
    }
    None
}

/// Scans `source` for the first device that can inject SysRq combinations.
///
/// Candidates are examined in the order [`DeviceSource::entries`] returns them. Names that don't
/// start with `event` are never opened. Rejected devices are dropped before the next candidate is
/// opened.
///
/// Errors opening or querying a candidate abort the scan.
pub fn locate<S: DeviceSource>(
    source: &S,
    progress: &mut dyn FnMut(Progress<'_>),
) -> io::Result<Scan<S::Device>> {
    let mut checked = 0;
    for name in source.entries()? {
        if !is_event_node(&name) {
            continue;
        }

        progress(Progress::Checking(&name));
        checked += 1;
        let device = source.open(&name)?;
        let caps = device.capabilities()?;
        match check(&caps, progress) {
            None => {
                progress(Progress::Found(&name));
                return Ok(Scan {
                    checked,
                    found: Some(Located { name, device }),
                });
            }
            Some(req) => {
                log::debug!("{} rejected: {req} not supported", name.to_string_lossy());
            }
        }
    }

    Ok(Scan {
        checked,
        found: None,
    })
}
