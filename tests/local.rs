use std::{fs, io, os::unix::fs::FileTypeExt as _};

use sysrq_inject::{DeviceSource, Evdev, InputDir, enumerate::is_event_node, event::EventType};

/// Tests that every entry listed from the local input directory is a character device, and that
/// every accessible evdev among them reports `EV_SYN` support.
#[test]
fn check_local_devices() -> io::Result<()> {
    let dir = InputDir::default();
    if !dir.dir().exists() {
        eprintln!("{} does not exist, skipping", dir.dir().display());
        return Ok(());
    }

    for name in dir.entries()? {
        let path = dir.dir().join(&name);
        let meta = fs::metadata(&path)?;
        assert!(
            meta.file_type().is_char_device(),
            "{} is not a character device",
            path.display()
        );

        if !is_event_node(&name) {
            continue;
        }
        let evdev = match Evdev::open(&path) {
            Ok(evdev) => evdev,
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                eprintln!("skipping {}: {e}", path.display());
                continue;
            }
            Err(e) => return Err(e),
        };
        let caps = evdev.capabilities()?;
        assert!(
            caps.supports(EventType::SYN),
            "{} does not report EV_SYN",
            path.display()
        );
        println!("{}: {caps:?}", path.display());
    }
    Ok(())
}
