//! Demokit - resource plumbing for GUI example galleries
//!
//! This library provides functionality to:
//! - Find the demo assets folder from wherever a demo binary was started
//! - Read demo source files once and serve them from a cache
//! - Launch demos shipped as sibling executables (or browser pages on wasm)
//! - Open URLs in the platform browser

pub mod assets;
pub mod browser;
pub mod cli;
pub mod code_cache;
pub mod config;
pub mod launcher;
pub mod logging;
pub mod platform;
pub mod sources;
pub mod suggest;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use assets::{AssetLocator, CandidateDirs, LocateError, ResolvedAssets};
pub use browser::open_url;
pub use code_cache::CodeCache;
pub use launcher::DemoLauncher;
pub use platform::{PlatformKind, PlatformOps};
pub use sources::{CodePair, DemoSources, SourceLanguage};
