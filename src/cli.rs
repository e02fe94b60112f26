//! Command-line arguments.

use crate::error::{FlappyError, Result};
use std::path::PathBuf;

pub const USAGE: &str = "\
Flappy - terminal Flappy Bird

Usage: flappy [options]

Options:
  --config <path>  Load tuning from a JSON file
  --log <path>     Write logs here instead of the data directory
  --seed <n>       Seed the pipe generator for a repeatable run
  --mute           Disable the terminal bell
  --version, -v    Show version information
  --help, -h       Show this help message

Keys: Space/Up flap, R restart, Q/Esc quit.
Set FLAPPY_LOG (e.g. FLAPPY_LOG=debug) to change log verbosity.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub config: Option<PathBuf>,
    pub log: Option<PathBuf>,
    pub seed: Option<u64>,
    pub mute: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play(CliOptions),
    Help,
    Version,
}

/// Parse arguments, not including the program name.
pub fn parse_args<I>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut options = CliOptions::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-v" => return Ok(Command::Version),
            "--mute" => options.mute = true,
            "--config" => options.config = Some(PathBuf::from(value(&mut args, &arg)?)),
            "--log" => options.log = Some(PathBuf::from(value(&mut args, &arg)?)),
            "--seed" => {
                let raw = value(&mut args, &arg)?;
                let seed = raw
                    .parse::<u64>()
                    .map_err(|_| FlappyError::Usage(format!("Invalid seed: {}", raw)))?;
                options.seed = Some(seed);
            }
            other => {
                return Err(FlappyError::Usage(format!(
                    "Unknown argument: {}\nRun 'flappy --help' for usage.",
                    other
                )))
            }
        }
    }

    Ok(Command::Play(options))
}

fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next()
        .ok_or_else(|| FlappyError::Usage(format!("{} needs a value", flag)))
}
