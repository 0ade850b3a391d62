//! Open command implementation

use std::process::ExitCode;

use crate::browser;
use crate::platform;

use super::{EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Execute the open command
pub fn run_open(url: &str) -> ExitCode {
    let url = url.trim();
    if url.is_empty() {
        eprintln!("Error: URL must not be empty");
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    browser::open_url(platform::current().as_ref(), url);
    ExitCode::from(EXIT_SUCCESS)
}
