//! Triggers the kernel's SysRq-X action by typing Alt+SysRq+X on an evdev device.

mod opts;

use std::{error::Error, process};

use sysrq_inject::InputDir;

fn main() {
    env_logger::init();
    let opts = opts::parse();
    log::debug!("options: {opts:?}");

    let source = InputDir::new(opts.input_dir);
    match sysrq_inject::run(&source, opts.mode, &mut |progress| println!("{progress}")) {
        Ok(name) => log::debug!("used {}", source.dir().join(name).display()),
        Err(e) => {
            eprintln!("error: {e}");
            let mut error: &dyn Error = &e;
            while let Some(source) = error.source() {
                eprintln!("- caused by: {source}");
                error = source;
            }
            process::exit(1);
        }
    }
}
