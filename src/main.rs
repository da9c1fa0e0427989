//! `tokenflow` command-line entry point.

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use tokenflow::cli::args::TokenflowArgs;
use tokenflow::cli::commands::execute_command;

/// Map `-q` / `-v` counts onto a log level. `-vvvv` shows skipped tokens.
fn log_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() {
    let args = TokenflowArgs::parse();

    // Logs go to stderr so token output on stdout stays pipeable.
    Builder::new()
        .filter_level(log_level(args.verbosity()))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = execute_command(args) {
        eprintln!("tokenflow: {e}");
        process::exit(1);
    }
}
