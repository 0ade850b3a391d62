//! Assets folder discovery
//!
//! Demo binaries are started from many places: the repository root, a build
//! directory, an IDE's `Debug/` folder. The resolver probes a fixed list of
//! candidate directories for the assets subfolder and moves the process
//! working directory next to the first one it finds, so relative asset paths
//! work no matter how the demo was launched.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

/// Assets subfolder name on native targets.
pub const NATIVE_ASSETS_FOLDER: &str = "demos_assets/";

/// Assets location on the browser target, where files are preloaded at the
/// virtual filesystem root.
pub const WEB_ASSETS_FOLDER: &str = "/";

/// Name of the assets folder for the compile target.
pub fn assets_folder_name() -> &'static str {
    if cfg!(target_arch = "wasm32") {
        WEB_ASSETS_FOLDER
    } else {
        NATIVE_ASSETS_FOLDER
    }
}

/// Error type for assets folder resolution
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LocateError {
    /// No candidate directory contains the assets folder
    #[error(
        "Could not find {folder} folder (searched: {})",
        .candidates.iter().map(|c| c.display().to_string()).collect::<Vec<_>>().join(", ")
    )]
    NotFound { folder: String, candidates: Vec<PathBuf> },
    /// The working directory could not be changed to the matching candidate
    #[error("Failed to change directory to {}: {source}", .path.display())]
    ChangeDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The current working directory is unavailable
    #[error("Failed to read current directory: {0}")]
    CurrentDir(#[from] io::Error),
}

/// Directory containing the running executable.
pub fn executable_dir() -> Option<PathBuf> {
    env::current_exe().ok()?.parent().map(Path::to_path_buf)
}

/// Ordered list of directories probed for the assets folder.
///
/// Order: working directory, its parent, executable directory, its parent.
/// Missing parents (filesystem root, or a bare relative name) are left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateDirs(Vec<PathBuf>);

impl CandidateDirs {
    pub fn new(cwd: &Path, exe_dir: Option<&Path>) -> Self {
        let mut dirs = vec![cwd.to_path_buf()];
        if let Some(parent) = cwd.parent() {
            dirs.push(parent.to_path_buf());
        }
        if let Some(exe_dir) = exe_dir {
            dirs.push(exe_dir.to_path_buf());
            // MSVC puts binaries in Debug/ and Release/ below the build dir
            if let Some(parent) = exe_dir.parent().filter(|p| !p.as_os_str().is_empty()) {
                dirs.push(parent.to_path_buf());
            }
        }
        Self(dirs)
    }

    /// Candidates for the running process.
    pub fn discover() -> Result<Self, LocateError> {
        let cwd = env::current_dir()?;
        Ok(Self::new(&cwd, executable_dir().as_deref()))
    }

    /// Wrap an explicit list, probed in the given order.
    pub fn from_dirs(dirs: Vec<PathBuf>) -> Self {
        Self(dirs)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.0.iter().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Outcome of a successful resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedAssets {
    /// Directory the process moved into
    pub base_dir: PathBuf,
    /// The assets folder inside `base_dir`
    pub assets_root: PathBuf,
}

/// Finds the assets folder and remembers it as the active assets root.
#[derive(Debug, Clone)]
pub struct AssetLocator {
    folder: String,
    active: Option<ResolvedAssets>,
}

impl AssetLocator {
    /// Locator for the target's default assets folder name.
    pub fn new() -> Self {
        Self::with_folder(assets_folder_name())
    }

    pub fn with_folder(folder: impl Into<String>) -> Self {
        Self { folder: folder.into(), active: None }
    }

    /// Name of the subfolder being searched for
    pub fn folder(&self) -> &str {
        &self.folder
    }

    /// Probe the current directory, its parent, the executable directory and
    /// its parent; on the first hit, change into that directory.
    ///
    /// When nothing matches, a message goes to stderr and the working
    /// directory is left alone.
    pub fn resolve_assets_folder(&mut self) -> Result<ResolvedAssets, LocateError> {
        let candidates = CandidateDirs::discover()?;
        self.resolve_from(&candidates)
    }

    /// Same as [`resolve_assets_folder`](Self::resolve_assets_folder) over an
    /// explicit candidate list.
    ///
    /// # Panics
    ///
    /// Panics if the folder found in a candidate cannot be reached after
    /// changing into that candidate.
    pub fn resolve_from(
        &mut self,
        candidates: &CandidateDirs,
    ) -> Result<ResolvedAssets, LocateError> {
        for candidate in candidates.iter() {
            let probe = candidate.join(&self.folder);
            tracing::debug!(candidate = %candidate.display(), "probing for assets folder");
            if !probe.is_dir() {
                continue;
            }

            // Anchor relative candidates before the working directory moves
            let base_dir = if candidate.is_absolute() {
                candidate.to_path_buf()
            } else {
                env::current_dir()?.join(candidate)
            };
            env::set_current_dir(&base_dir).map_err(|source| LocateError::ChangeDir {
                path: base_dir.clone(),
                source,
            })?;
            if !Path::new(&self.folder).is_dir() {
                panic!(
                    "changed directory to {} but {} is not reachable from it",
                    base_dir.display(),
                    self.folder
                );
            }

            let resolved = ResolvedAssets {
                assets_root: base_dir.join(&self.folder),
                base_dir,
            };
            tracing::debug!(root = %resolved.assets_root.display(), "assets folder registered");
            self.active = Some(resolved.clone());
            return Ok(resolved);
        }

        eprintln!("Could not find {} folder!", self.folder);
        Err(LocateError::NotFound {
            folder: self.folder.clone(),
            candidates: candidates.iter().map(Path::to_path_buf).collect(),
        })
    }

    /// Last successful resolution, if any
    pub fn resolved(&self) -> Option<&ResolvedAssets> {
        self.active.as_ref()
    }

    /// Active assets root, if resolution succeeded
    pub fn assets_root(&self) -> Option<&Path> {
        self.active.as_ref().map(|r| r.assets_root.as_path())
    }

    /// Path of `relative` inside the active assets root.
    pub fn asset_path(&self, relative: impl AsRef<Path>) -> Option<PathBuf> {
        self.assets_root().map(|root| root.join(relative))
    }
}

impl Default for AssetLocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_candidates_order() {
        let cwd = Path::new("/work/gallery");
        let exe = Path::new("/opt/bin/Release");
        let candidates = CandidateDirs::new(cwd, Some(exe));
        let dirs: Vec<&Path> = candidates.iter().collect();
        assert_eq!(
            dirs,
            vec![
                Path::new("/work/gallery"),
                Path::new("/work"),
                Path::new("/opt/bin/Release"),
                Path::new("/opt/bin"),
            ]
        );
    }

    #[test]
    fn test_candidates_skip_missing_parents() {
        let candidates = CandidateDirs::new(Path::new("/"), None);
        assert_eq!(candidates.len(), 1);
    }

    #[test]
    fn test_candidates_skip_empty_parent_of_relative_exe_dir() {
        let candidates = CandidateDirs::new(Path::new("/work"), Some(Path::new("bin")));
        let dirs: Vec<&Path> = candidates.iter().collect();
        assert_eq!(dirs, vec![Path::new("/work"), Path::new("/"), Path::new("bin")]);
    }

    #[test]
    fn test_native_folder_name() {
        #[cfg(not(target_arch = "wasm32"))]
        assert_eq!(assets_folder_name(), "demos_assets/");
    }

    #[test]
    fn test_unresolved_locator_has_no_root() {
        let locator = AssetLocator::new();
        assert!(locator.assets_root().is_none());
        assert!(locator.asset_path("fonts/Roboto.ttf").is_none());
    }

    #[test]
    #[serial]
    fn test_resolve_changes_directory_to_first_match() {
        let original = env::current_dir().unwrap();
        let empty = TempDir::new().unwrap();
        let with_assets = TempDir::new().unwrap();
        fs::create_dir(with_assets.path().join("demos_assets")).unwrap();
        let base = with_assets.path().canonicalize().unwrap();

        let mut locator = AssetLocator::with_folder("demos_assets/");
        let candidates =
            CandidateDirs::from_dirs(vec![empty.path().to_path_buf(), base.clone()]);
        let resolved = locator.resolve_from(&candidates);
        let cwd = env::current_dir().unwrap();
        env::set_current_dir(&original).unwrap();

        let resolved = resolved.unwrap();
        assert_eq!(resolved.base_dir, base);
        assert_eq!(cwd.canonicalize().unwrap(), base);
        assert_eq!(locator.assets_root(), Some(base.join("demos_assets/").as_path()));
        assert_eq!(
            locator.asset_path("images/logo.png"),
            Some(base.join("demos_assets/").join("images/logo.png"))
        );
    }

    #[test]
    #[serial]
    fn test_resolve_ignores_plain_file_with_folder_name() {
        let original = env::current_dir().unwrap();
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("demos_assets"), "not a dir").unwrap();

        let mut locator = AssetLocator::with_folder("demos_assets/");
        let result =
            locator.resolve_from(&CandidateDirs::from_dirs(vec![temp.path().to_path_buf()]));

        assert!(matches!(result, Err(LocateError::NotFound { .. })));
        assert_eq!(env::current_dir().unwrap(), original);
    }

    #[test]
    fn test_not_found_message_lists_candidates() {
        let err = LocateError::NotFound {
            folder: "demos_assets/".to_string(),
            candidates: vec![PathBuf::from("/a"), PathBuf::from("/b")],
        };
        assert_eq!(err.to_string(), "Could not find demos_assets/ folder (searched: /a, /b)");
    }
}
