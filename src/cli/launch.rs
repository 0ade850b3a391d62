//! Launch command implementation

use std::process::ExitCode;

use crate::config::DemoKitConfig;
use crate::launcher::DemoLauncher;
use crate::suggest::{format_suggestion, suggest};

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// Execute the launch command
pub fn run_launch(config: &DemoKitConfig, name: &str) -> ExitCode {
    let launcher = match &config.launcher.exe_dir {
        Some(dir) => DemoLauncher::with_exe_dir(dir),
        None => DemoLauncher::new(),
    };

    if launcher.launch_sibling_executable(name) {
        println!("Launched {}", name);
        return ExitCode::from(EXIT_SUCCESS);
    }

    match launcher.sibling_path(name) {
        Some(path) => eprintln!("Error: No demo executable at '{}'", path.display()),
        None => eprintln!("Error: Cannot determine where demo executables live"),
    }
    let available = launcher.available_demos();
    if let Some(hint) = format_suggestion(&suggest(name, &available)) {
        eprintln!("{}", hint);
    }
    ExitCode::from(EXIT_ERROR)
}
