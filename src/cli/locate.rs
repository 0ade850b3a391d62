//! Locate command implementation

use std::env;
use std::process::ExitCode;

use crate::assets::{executable_dir, AssetLocator, CandidateDirs, LocateError};
use crate::config::DemoKitConfig;

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// Execute the locate command
pub fn run_locate(config: &DemoKitConfig, json: bool) -> ExitCode {
    let cwd = match env::current_dir() {
        Ok(cwd) => cwd,
        Err(e) => {
            eprintln!("Error: {}", LocateError::CurrentDir(e));
            return ExitCode::from(EXIT_ERROR);
        }
    };
    // A configured exe_dir stands in for the binary's own directory
    let exe_dir = config.launcher.exe_dir.clone().or_else(executable_dir);
    let candidates = CandidateDirs::new(&cwd, exe_dir.as_deref());

    let mut locator = AssetLocator::with_folder(config.assets.folder.clone());
    match locator.resolve_from(&candidates) {
        Ok(resolved) => {
            if json {
                match serde_json::to_string_pretty(&resolved) {
                    Ok(text) => println!("{}", text),
                    Err(e) => {
                        eprintln!("Error: Cannot serialize result: {}", e);
                        return ExitCode::from(EXIT_ERROR);
                    }
                }
            } else {
                println!("base:   {}", resolved.base_dir.display());
                println!("assets: {}", resolved.assets_root.display());
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        // The resolver already told the user
        Err(LocateError::NotFound { .. }) => ExitCode::from(EXIT_ERROR),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
