//! The Alt+SysRq+X key sequence and the end-to-end injection procedure.

use std::{ffi::OsString, io, slice};

use crate::{
    capabilities::Device,
    enumerate::DeviceSource,
    error::Error,
    event::{InputEvent, Key, KeyState, Syn},
    locate::{Located, Progress, locate},
};

/// Alt+SysRq+X: press Alt, SysRq and X, release them in reverse order, then commit with
/// `SYN_REPORT`.
pub const SYSRQ_X: [InputEvent; 7] = [
    InputEvent::key(Key::KEY_LEFTALT, KeyState::PRESSED),
    InputEvent::key(Key::KEY_SYSRQ, KeyState::PRESSED),
    InputEvent::key(Key::KEY_X, KeyState::PRESSED),
    InputEvent::key(Key::KEY_X, KeyState::RELEASED),
    InputEvent::key(Key::KEY_SYSRQ, KeyState::RELEASED),
    InputEvent::key(Key::KEY_LEFTALT, KeyState::RELEASED),
    InputEvent::syn(Syn::REPORT),
];

/// Whether [`run`] sends the key sequence once a device is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Inject,
    /// Locate a device, but don't write anything to it.
    DryRun,
}

/// Writes `events` to `device`, one event per write.
///
/// Stops at the first failed write.
pub fn inject<D: Device + ?Sized>(device: &D, events: &[InputEvent]) -> io::Result<()> {
    for event in events {
        log::debug!("writing {event:?}");
        device.write(slice::from_ref(event))?;
    }
    Ok(())
}

/// Finds the first device in `source` that supports SysRq and sends it [`SYSRQ_X`].
///
/// Returns the name of the selected device.
pub fn run<S: DeviceSource>(
    source: &S,
    mode: Mode,
    progress: &mut dyn FnMut(Progress<'_>),
) -> Result<OsString, Error> {
    let scan = locate(source, progress)?;
    let Some(Located { name, device }) = scan.found else {
        return Err(match scan.checked {
            0 => Error::NoInputDevices,
            checked => Error::NoSuitableDevice { checked },
        });
    };

    match mode {
        Mode::DryRun => progress(Progress::DryRun),
        Mode::Inject => {
            progress(Progress::Sending);
            inject(&device, &SYSRQ_X)?;
            progress(Progress::Done);
        }
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use crate::{
        event::EventType,
        test::{MockSource, keyboard, no_keys, no_sysrq},
    };

    use super::*;

    fn run_mock(source: &MockSource, mode: Mode) -> (Result<OsString, Error>, Vec<String>) {
        let mut lines = Vec::new();
        let res = run(source, mode, &mut |p| lines.push(p.to_string()));
        (res, lines)
    }

    #[test]
    fn sequence() {
        let raw: Vec<_> = SYSRQ_X
            .iter()
            .map(|ev| (ev.event_type(), ev.raw_code(), ev.raw_value()))
            .collect();
        assert_eq!(
            raw,
            [
                (EventType::KEY, 56, 1),
                (EventType::KEY, 99, 1),
                (EventType::KEY, 45, 1),
                (EventType::KEY, 45, 0),
                (EventType::KEY, 99, 0),
                (EventType::KEY, 56, 0),
                (EventType::SYN, 0, 0),
            ]
        );
    }

    #[test]
    fn injects_into_qualifying_device() {
        let source = MockSource::new([
            ("event0", no_keys()),
            ("event1", no_sysrq()),
            ("event2", keyboard()),
        ]);
        let (res, lines) = run_mock(&source, Mode::Inject);
        assert_eq!(res.unwrap(), "event2");
        assert_eq!(source.writes("event2"), SYSRQ_X);
        assert_eq!(source.total_writes(), SYSRQ_X.len());
        assert_eq!(
            &lines[lines.len() - 3..],
            ["found device event2", "sending Alt+SysRq+X sequence", "done"]
        );
    }

    #[test]
    fn only_first_match_is_written_to() {
        let source = MockSource::new([
            ("event0", keyboard()),
            ("event1", keyboard()),
            ("mouse0", keyboard()),
        ]);
        let (res, _) = run_mock(&source, Mode::Inject);
        assert_eq!(res.unwrap(), "event0");
        assert_eq!(source.writes("event0"), SYSRQ_X);
        assert!(source.writes("event1").is_empty());
        assert!(source.writes("mouse0").is_empty());
    }

    #[test]
    fn no_suitable_device() {
        let source = MockSource::new([
            ("event0", no_keys()),
            ("event1", no_sysrq()),
            ("mouse0", keyboard()),
        ]);
        let (res, lines) = run_mock(&source, Mode::Inject);
        assert!(matches!(res, Err(Error::NoSuitableDevice { checked: 2 })));
        assert_eq!(source.total_writes(), 0);
        assert!(!lines.iter().any(|l| l.starts_with("sending")));
    }

    #[test]
    fn empty_listing() {
        let source = MockSource::new::<&str>([]);
        let (res, lines) = run_mock(&source, Mode::Inject);
        assert!(matches!(res, Err(Error::NoInputDevices)));
        assert_eq!(source.total_writes(), 0);
        assert!(lines.is_empty());
    }

    #[test]
    fn only_non_event_nodes() {
        let source = MockSource::new([("mouse0", keyboard()), ("js0", keyboard())]);
        let (res, _) = run_mock(&source, Mode::Inject);
        assert!(matches!(res, Err(Error::NoInputDevices)));
        assert!(source.opened().is_empty());
    }

    #[test]
    fn dry_run_writes_nothing() {
        let source = MockSource::new([("event0", no_sysrq()), ("event1", keyboard())]);
        let (res, lines) = run_mock(&source, Mode::DryRun);
        assert_eq!(res.unwrap(), "event1");
        assert_eq!(source.total_writes(), 0);
        assert_eq!(
            &lines[lines.len() - 2..],
            ["found device event1", "dry run, not sending key sequence"]
        );
    }

    #[test]
    fn write_failure_stops_sequence() {
        let source = MockSource::new([("event0", keyboard())]).fail_writes_after(2);
        let (res, lines) = run_mock(&source, Mode::Inject);
        let e = match res {
            Err(Error::Io(e)) => e,
            other => panic!("expected I/O error, got {other:?}"),
        };
        assert_eq!(e.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(source.writes("event0"), &SYSRQ_X[..2]);
        assert_eq!(lines.last().map(String::as_str), Some("sending Alt+SysRq+X sequence"));
    }
}
