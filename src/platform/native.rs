//! Desktop and mobile platform implementations

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use super::{PlatformKind, PlatformOps};

/// Windows: `.exe` suffix, URLs through the shell's `start` verb.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsOps;

/// macOS: URLs through `open`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MacOsOps;

/// iOS: apps cannot hand URLs to a shell, so opening is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct IosOps;

/// Linux and other Unix desktops: URLs through `xdg-open`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinuxOps;

impl PlatformOps for WindowsOps {
    fn kind(&self) -> PlatformKind {
        PlatformKind::Windows
    }

    fn exe_suffix(&self) -> &'static str {
        ".exe"
    }

    fn spawn_detached(&self, program: &Path) -> io::Result<()> {
        let mut command = Command::new(program);
        command.stdin(Stdio::null()).stdout(Stdio::null()).stderr(Stdio::null());
        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            const CREATE_NO_WINDOW: u32 = 0x0800_0000;
            command.creation_flags(CREATE_NO_WINDOW);
        }
        command.spawn().map(drop)
    }

    fn url_command(&self, url: &str) -> Option<Command> {
        // The empty string is the window title `start` expects first.
        let mut command = Command::new("cmd");
        command.args(["/C", "start", ""]).arg(url);
        Some(command)
    }
}

impl PlatformOps for MacOsOps {
    fn kind(&self) -> PlatformKind {
        PlatformKind::MacOs
    }

    fn url_command(&self, url: &str) -> Option<Command> {
        let mut command = Command::new("open");
        command.arg(url);
        Some(command)
    }
}

impl PlatformOps for IosOps {
    fn kind(&self) -> PlatformKind {
        PlatformKind::Ios
    }

    fn url_command(&self, _url: &str) -> Option<Command> {
        None
    }
}

impl PlatformOps for LinuxOps {
    fn kind(&self) -> PlatformKind {
        PlatformKind::Linux
    }

    fn url_command(&self, url: &str) -> Option<Command> {
        let mut command = Command::new("xdg-open");
        command.arg(url);
        Some(command)
    }
}
