//! Falx CLI binary.

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use falx::cli::args::*;
use falx::cli::commands::*;
use falx::error::ErrorKind;

fn main() {
    // Parse command line arguments using clap
    let args = FalxArgs::parse();

    let log_level = match args.verbosity() {
        0 => LevelFilter::Error, // Quiet mode
        1 => LevelFilter::Warn,  // Default
        2 => LevelFilter::Info,  // Verbose
        _ => LevelFilter::Debug, // Very verbose (3+)
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        let code = match e.kind() {
            ErrorKind::Resource => 2,
            ErrorKind::Configuration => 1,
        };
        process::exit(code);
    }
}
