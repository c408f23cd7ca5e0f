use std::path::PathBuf;

use bpaf::{Parser, construct, long};

use sysrq_inject::{Mode, enumerate::DEFAULT_INPUT_DIR};

#[derive(Debug)]
pub struct Options {
    pub input_dir: PathBuf,
    pub mode: Mode,
}

fn options() -> impl Parser<Options> {
    let input_dir = long("input-dir")
        .env("SYSRQ_INPUT_DIR")
        .help("Directory to scan for evdev nodes (default: /dev/input)")
        .argument::<PathBuf>("DIR")
        .fallback(PathBuf::from(DEFAULT_INPUT_DIR));
    let mode = long("dry-run")
        .env("SYSRQ_DRY_RUN")
        .help("Find a SysRq-capable device, but don't send any key events")
        .switch()
        .map(|dry_run| if dry_run { Mode::DryRun } else { Mode::Inject });

    construct!(Options { input_dir, mode })
}

pub fn parse() -> Options {
    options()
        .to_options()
        .descr("Triggers SysRq-X by injecting Alt+SysRq+X into the first capable input device")
        .run()
}
