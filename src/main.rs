use std::{fs, io, path::PathBuf};

use clap::{ArgAction, Parser};
use log::Level;
use qurt::run;

/// qurt runs programs written in Qurt, a small language with Kazakh keywords.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The program to run.
    file: PathBuf,

    /// Log more details to stderr; repeat for more (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::Warn,
        1 => Level::Info,
        2 => Level::Debug,
        _ => Level::Trace,
    };
    if let Err(e) = simple_logger::init_with_level(level) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let source = fs::read(&args.file).unwrap_or_else(|e| {
                                         eprintln!("Failed to read the input file '{}': {e}",
                                                   args.file.display());
                                         std::process::exit(1);
                                     });

    let source_name = args.file.display().to_string();
    log::info!("running '{source_name}'");

    if let Err(e) = run(io::stdout(), &source_name, &source) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
