//! Demokit - command-line front end for the demo gallery helpers

use std::process::ExitCode;

use demokit::cli;

fn main() -> ExitCode {
    cli::run()
}
