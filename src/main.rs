use std::{fs, path::PathBuf, process::ExitCode};

use anyhow::Context as _;
use clap::{Parser, error::ErrorKind};
use hrl::{interpreter::console::Console, parse_program, run_source};
use log::{LevelFilter, debug};

/// hrl runs HRL behaviour scripts: `setup` once, then `main` forever.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the `.hrl` source file.
    file: PathBuf,

    /// Stop after this many iterations of the `main` block.
    #[arg(short = 'n', long)]
    iterations: Option<u64>,

    /// Only check the program for syntax errors; do not run it.
    #[arg(short, long)]
    check: bool,

    /// Log interpreter activity to standard error.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        },
    };

    let default_level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new().filter_level(default_level)
                              .parse_default_env()
                              .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        },
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let source = fs::read_to_string(&args.file).with_context(|| {
                                                   format!("Failed to read the input file '{}'. \
                                                            Perhaps this file does not exist?",
                                                           args.file.display())
                                               })?;
    debug!("read {} bytes from {}", source.len(), args.file.display());

    if args.check {
        parse_program(&source)?;
        println!("{}: OK", args.file.display());
        return Ok(());
    }

    run_source(&source, Console::stdio(), args.iterations)?;
    Ok(())
}
