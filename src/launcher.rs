//! Launching demos that ship as separate executables
//!
//! Demo binaries are installed next to the gallery binary. In the browser
//! build each demo is its own page instead, opened in a popup.

use std::fs;
use std::path::{Path, PathBuf};

use crate::assets::executable_dir;
use crate::platform::{self, PlatformOps};

pub struct DemoLauncher {
    exe_dir: Option<PathBuf>,
    platform: Box<dyn PlatformOps>,
}

impl DemoLauncher {
    /// Launcher for executables beside the running binary.
    pub fn new() -> Self {
        Self { exe_dir: executable_dir(), platform: platform::current() }
    }

    /// Launcher for executables in `dir` instead of the binary's directory.
    pub fn with_exe_dir(dir: impl Into<PathBuf>) -> Self {
        Self { exe_dir: Some(dir.into()), platform: platform::current() }
    }

    pub fn with_platform(mut self, platform: Box<dyn PlatformOps>) -> Self {
        self.platform = platform;
        self
    }

    pub fn exe_dir(&self) -> Option<&Path> {
        self.exe_dir.as_deref()
    }

    pub fn platform(&self) -> &dyn PlatformOps {
        self.platform.as_ref()
    }

    /// Full path of the demo executable `name`, platform suffix included.
    pub fn sibling_path(&self, name: &str) -> Option<PathBuf> {
        let dir = self.exe_dir.as_ref()?;
        Some(dir.join(format!("{}{}", name, self.platform.exe_suffix())))
    }

    /// Start the demo `name` without waiting for it.
    ///
    /// Returns false when no such executable exists. Returns true once a
    /// launch was attempted, even if the OS refused to start it.
    pub fn launch_sibling_executable(&self, name: &str) -> bool {
        if !self.platform.hosts_processes() {
            return self.platform.open_demo_window(name);
        }

        let Some(path) = self.sibling_path(name) else {
            tracing::debug!(name, "executable directory unknown");
            return false;
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "demo executable not found");
            return false;
        }

        if let Err(e) = self.platform.spawn_detached(&path) {
            tracing::debug!(path = %path.display(), error = %e, "demo failed to start");
        }
        true
    }

    /// Names of executables beside the binary, for suggestions.
    pub fn available_demos(&self) -> Vec<String> {
        let Some(dir) = self.exe_dir.as_ref() else {
            return Vec::new();
        };
        let Ok(entries) = fs::read_dir(dir) else {
            return Vec::new();
        };

        let suffix = self.platform.exe_suffix();
        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .filter(|e| e.file_type().map(|t| t.is_file()).unwrap_or(false))
            .filter_map(|e| e.file_name().to_str().map(str::to_string))
            .filter_map(|name| {
                if suffix.is_empty() {
                    Some(name)
                } else {
                    name.strip_suffix(suffix).map(str::to_string)
                }
            })
            .collect();
        names.sort();
        names
    }
}

impl Default for DemoLauncher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{PlatformKind, WebOps, WindowsOps};
    use std::io;
    use std::process::Command;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    /// Records spawn requests instead of starting processes
    struct RecordingOps {
        spawned: Arc<Mutex<Vec<PathBuf>>>,
        fail: bool,
    }

    impl PlatformOps for RecordingOps {
        fn kind(&self) -> PlatformKind {
            PlatformKind::Linux
        }

        fn spawn_detached(&self, program: &Path) -> io::Result<()> {
            self.spawned.lock().unwrap().push(program.to_path_buf());
            if self.fail {
                Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
            } else {
                Ok(())
            }
        }

        fn url_command(&self, _url: &str) -> Option<Command> {
            None
        }
    }

    fn recording_launcher(dir: &Path, fail: bool) -> (DemoLauncher, Arc<Mutex<Vec<PathBuf>>>) {
        let spawned = Arc::new(Mutex::new(Vec::new()));
        let launcher = DemoLauncher::with_exe_dir(dir)
            .with_platform(Box::new(RecordingOps { spawned: spawned.clone(), fail }));
        (launcher, spawned)
    }

    #[test]
    fn test_missing_demo_returns_false() {
        let temp = TempDir::new().unwrap();
        let (launcher, spawned) = recording_launcher(temp.path(), false);
        assert!(!launcher.launch_sibling_executable("missing"));
        assert!(spawned.lock().unwrap().is_empty());
    }

    #[test]
    fn test_existing_demo_is_spawned() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("demo_docking"), "").unwrap();
        let (launcher, spawned) = recording_launcher(temp.path(), false);

        assert!(launcher.launch_sibling_executable("demo_docking"));
        assert_eq!(*spawned.lock().unwrap(), vec![temp.path().join("demo_docking")]);
    }

    #[test]
    fn test_spawn_failure_still_counts_as_attempted() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("demo_docking"), "").unwrap();
        let (launcher, spawned) = recording_launcher(temp.path(), true);

        assert!(launcher.launch_sibling_executable("demo_docking"));
        assert_eq!(spawned.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_windows_suffix_is_appended() {
        let launcher =
            DemoLauncher::with_exe_dir("/apps").with_platform(Box::new(WindowsOps));
        assert_eq!(launcher.sibling_path("demo_docking"), Some(PathBuf::from("/apps/demo_docking.exe")));
    }

    #[test]
    fn test_windows_lists_only_exe_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("demo_a.exe"), "").unwrap();
        fs::write(temp.path().join("demo_b.exe"), "").unwrap();
        fs::write(temp.path().join("readme.txt"), "").unwrap();
        fs::create_dir(temp.path().join("demo_dir.exe")).unwrap();

        let launcher = DemoLauncher::with_exe_dir(temp.path()).with_platform(Box::new(WindowsOps));
        assert_eq!(launcher.available_demos(), vec!["demo_a", "demo_b"]);
    }

    #[test]
    fn test_web_opens_window_without_executable() {
        let temp = TempDir::new().unwrap();
        let launcher = DemoLauncher::with_exe_dir(temp.path()).with_platform(Box::new(WebOps));
        assert!(launcher.launch_sibling_executable("demo_hello"));
    }

    #[test]
    fn test_default_launcher_uses_binary_dir() {
        let launcher = DemoLauncher::new();
        assert_eq!(launcher.exe_dir().map(Path::to_path_buf), executable_dir());
        assert!(!launcher.launch_sibling_executable("definitely_missing_demo_binary"));
    }
}
