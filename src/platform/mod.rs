//! Platform dispatch for process spawning and URL opening
//!
//! Each supported target gets a [`PlatformOps`] implementation. The running
//! target's implementation is chosen once at startup with
//! [`PlatformKind::current`], and the rest of the crate only talks to the
//! trait object.

mod native;
mod web;

use std::fmt;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};
use std::str::FromStr;

pub use native::{IosOps, LinuxOps, MacOsOps, WindowsOps};
pub use web::{demo_window_script, open_url_script, WebOps};

/// Target family the harness is running on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformKind {
    Windows,
    MacOs,
    Ios,
    Linux,
    /// Browser build (wasm32), where demos live in other pages
    Web,
}

impl PlatformKind {
    /// Platform of the compile target.
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "ios") {
            Self::Ios
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Linux
        }
    }

    /// Operations for this platform.
    pub fn ops(self) -> Box<dyn PlatformOps> {
        match self {
            Self::Windows => Box::new(WindowsOps),
            Self::MacOs => Box::new(MacOsOps),
            Self::Ios => Box::new(IosOps),
            Self::Linux => Box::new(LinuxOps),
            Self::Web => Box::new(WebOps),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::MacOs => "macos",
            Self::Ios => "ios",
            Self::Linux => "linux",
            Self::Web => "web",
        }
    }
}

impl fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlatformKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "windows" | "win32" => Ok(Self::Windows),
            "macos" | "osx" => Ok(Self::MacOs),
            "ios" => Ok(Self::Ios),
            "linux" | "unix" => Ok(Self::Linux),
            "web" | "wasm" | "emscripten" => Ok(Self::Web),
            other => Err(format!("unknown platform '{}'", other)),
        }
    }
}

/// Platform-specific side effects used by the launcher and the URL opener.
///
/// Native implementations only differ in executable suffix and in the
/// command used to open URLs, so most methods have defaults.
pub trait PlatformOps {
    fn kind(&self) -> PlatformKind;

    /// Suffix appended to sibling executable names (".exe" on Windows).
    fn exe_suffix(&self) -> &'static str {
        ""
    }

    /// Whether demos are separate processes. False on the browser target,
    /// where a demo is another page opened through the script bridge.
    fn hosts_processes(&self) -> bool {
        true
    }

    /// Start `program` without waiting for it. The child gets null stdio.
    fn spawn_detached(&self, program: &Path) -> io::Result<()> {
        Command::new(program)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(drop)
    }

    /// Command that hands `url` to the OS, or `None` when the platform has no
    /// such mechanism.
    fn url_command(&self, url: &str) -> Option<Command>;

    /// Open `url` in the default browser. Failures are dropped.
    fn open_url(&self, url: &str) {
        let Some(mut command) = self.url_command(url) else {
            tracing::debug!(platform = %self.kind(), url, "no URL opener on this platform");
            return;
        };
        command.stdin(Stdio::null()).stdout(Stdio::null()).stderr(Stdio::null());
        if let Err(e) = command.spawn() {
            tracing::debug!(platform = %self.kind(), url, error = %e, "URL opener failed to start");
        }
    }

    /// Open a demo page in a new browser window. Only meaningful when
    /// [`hosts_processes`](Self::hosts_processes) is false.
    fn open_demo_window(&self, _demo_name: &str) -> bool {
        false
    }
}

/// Operations for the platform this binary was compiled for.
pub fn current() -> Box<dyn PlatformOps> {
    PlatformKind::current().ops()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_platform_matches_target() {
        let kind = PlatformKind::current();
        #[cfg(target_os = "linux")]
        assert_eq!(kind, PlatformKind::Linux);
        #[cfg(target_os = "windows")]
        assert_eq!(kind, PlatformKind::Windows);
        #[cfg(target_os = "macos")]
        assert_eq!(kind, PlatformKind::MacOs);
        assert_eq!(current().kind(), kind);
    }

    #[test]
    fn test_ops_report_their_kind() {
        for kind in [
            PlatformKind::Windows,
            PlatformKind::MacOs,
            PlatformKind::Ios,
            PlatformKind::Linux,
            PlatformKind::Web,
        ] {
            assert_eq!(kind.ops().kind(), kind);
        }
    }

    #[test]
    fn test_exe_suffix_only_on_windows() {
        assert_eq!(PlatformKind::Windows.ops().exe_suffix(), ".exe");
        assert_eq!(PlatformKind::Linux.ops().exe_suffix(), "");
        assert_eq!(PlatformKind::MacOs.ops().exe_suffix(), "");
    }

    #[test]
    fn test_only_web_skips_processes() {
        assert!(!PlatformKind::Web.ops().hosts_processes());
        assert!(PlatformKind::Linux.ops().hosts_processes());
        assert!(PlatformKind::Windows.ops().hosts_processes());
    }

    #[test]
    fn test_platform_kind_from_str() {
        assert_eq!("Linux".parse::<PlatformKind>(), Ok(PlatformKind::Linux));
        assert_eq!("osx".parse::<PlatformKind>(), Ok(PlatformKind::MacOs));
        assert_eq!("emscripten".parse::<PlatformKind>(), Ok(PlatformKind::Web));
        assert!("beos".parse::<PlatformKind>().is_err());
    }

    #[test]
    fn test_platform_kind_display_round_trips() {
        let kind = PlatformKind::Ios;
        assert_eq!(kind.to_string().parse::<PlatformKind>(), Ok(kind));
    }
}
