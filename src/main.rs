// SPDX-License-Identifier: MPL-2.0
use documents_gallery::app::{self, Flags};
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "\
Usage: documents_gallery [OPTIONS]

Options:
  --lang <id>          Interface language (e.g. en-US, fr)
  --manifest <path>    Order manifest to open
  --config-dir <path>  Directory holding settings.toml
  -h, --help           Print this help";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        manifest: args.opt_value_from_str::<_, PathBuf>("--manifest")?,
        config_dir: args.opt_value_from_str::<_, PathBuf>("--config-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("[WARN] Ignoring unexpected arguments: {rest:?}");
    }
    Ok(Some(flags))
}

fn main() -> ExitCode {
    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("[ERROR] {err}");
            ExitCode::FAILURE
        }
    }
}
