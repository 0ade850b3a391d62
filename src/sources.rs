//! Demo source lookup
//!
//! Every demo exists twice, once in C++ under `demos_cpp/` and once in Python
//! under `demos_python/`, so the gallery can show both versions side by side.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use glob::glob;

use crate::code_cache::CodeCache;
use crate::config::DemoKitConfig;

/// Language of a demo source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum SourceLanguage {
    Cpp,
    Python,
}

impl SourceLanguage {
    pub const ALL: [SourceLanguage; 2] = [SourceLanguage::Cpp, SourceLanguage::Python];

    /// Default folder under the sources root
    pub fn default_folder(self) -> &'static str {
        match self {
            Self::Cpp => "demos_cpp",
            Self::Python => "demos_python",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Cpp => "cpp",
            Self::Python => "py",
        }
    }

    /// Heading shown above the code
    pub fn label(self) -> &'static str {
        match self {
            Self::Cpp => "C++ code",
            Self::Python => "Python code",
        }
    }
}

impl fmt::Display for SourceLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Cpp => "cpp",
            Self::Python => "python",
        })
    }
}

impl FromStr for SourceLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cpp" | "c++" => Ok(Self::Cpp),
            "python" | "py" => Ok(Self::Python),
            other => Err(format!("unknown source language '{}'", other)),
        }
    }
}

/// Default sources root: this package's directory natively, the virtual
/// root in the browser.
pub fn default_sources_root() -> PathBuf {
    if cfg!(target_arch = "wasm32") {
        PathBuf::from("/")
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
    }
}

/// C++ and Python sources of one demo
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodePair {
    pub cpp: String,
    pub python: String,
}

impl CodePair {
    /// Both versions exist, so each gets half the width.
    pub fn side_by_side(&self) -> bool {
        !self.cpp.is_empty() && !self.python.is_empty()
    }

    /// Neither version exists
    pub fn is_empty(&self) -> bool {
        self.cpp.is_empty() && self.python.is_empty()
    }

    pub fn get(&self, lang: SourceLanguage) -> &str {
        match lang {
            SourceLanguage::Cpp => &self.cpp,
            SourceLanguage::Python => &self.python,
        }
    }
}

/// Locations of the demo source trees
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoSources {
    root: PathBuf,
    cpp_dir: String,
    python_dir: String,
}

impl DemoSources {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cpp_dir: SourceLanguage::Cpp.default_folder().to_string(),
            python_dir: SourceLanguage::Python.default_folder().to_string(),
        }
    }

    pub fn from_config(config: &DemoKitConfig) -> Self {
        Self {
            root: config.sources.root.clone().unwrap_or_else(default_sources_root),
            cpp_dir: config.sources.cpp_dir.clone(),
            python_dir: config.sources.python_dir.clone(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Folder holding the sources for `lang`
    pub fn folder(&self, lang: SourceLanguage) -> PathBuf {
        match lang {
            SourceLanguage::Cpp => self.root.join(&self.cpp_dir),
            SourceLanguage::Python => self.root.join(&self.python_dir),
        }
    }

    /// `{root}/{folder}/{demo}.{ext}`
    pub fn source_path(&self, demo: &str, lang: SourceLanguage) -> PathBuf {
        self.folder(lang).join(format!("{}.{}", demo, lang.extension()))
    }

    /// Source of `demo` in `lang`, empty if it does not exist.
    pub fn read_code<'c>(
        &self,
        cache: &'c mut CodeCache,
        demo: &str,
        lang: SourceLanguage,
    ) -> &'c str {
        let path = self.source_path(demo, lang);
        cache.read_text(&path.to_string_lossy())
    }

    pub fn code_pair(&self, cache: &mut CodeCache, demo: &str) -> CodePair {
        CodePair {
            cpp: self.read_code(cache, demo, SourceLanguage::Cpp).to_string(),
            python: self.read_code(cache, demo, SourceLanguage::Python).to_string(),
        }
    }

    /// Demo names available in `lang`, as paths relative to the language
    /// folder without extension, sorted.
    pub fn list_demos(&self, lang: SourceLanguage) -> Vec<String> {
        let folder = self.folder(lang);
        let pattern = format!("{}/**/*.{}", folder.display(), lang.extension());

        let mut demos: Vec<String> = match glob(&pattern) {
            Ok(paths) => paths
                .filter_map(Result::ok)
                .filter_map(|path| demo_name(&folder, &path))
                .collect(),
            Err(e) => {
                tracing::debug!(pattern, error = %e, "invalid demo glob");
                Vec::new()
            }
        };
        demos.sort();
        demos.dedup();
        demos
    }
}

impl Default for DemoSources {
    fn default() -> Self {
        Self::new(default_sources_root())
    }
}

fn demo_name(folder: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(folder).ok()?.with_extension("");
    let parts: Vec<String> =
        relative.components().map(|c| c.as_os_str().to_string_lossy().into_owned()).collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}
