//! Memoized text file reader
//!
//! Demo source files are shown every frame by the gallery UI, so each file is
//! read once and kept for the lifetime of the cache. Entries are never
//! invalidated: later edits on disk are not picked up.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Path-keyed cache of file contents.
///
/// A missing or unreadable file is cached as the empty string, so it is not
/// looked up again either.
#[derive(Debug, Default, Clone)]
pub struct CodeCache {
    entries: HashMap<String, String>,
}

impl CodeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Contents of the file at `path`, read on first request only.
    pub fn read_text(&mut self, path: &str) -> &str {
        self.entries.entry(path.to_string()).or_insert_with(|| load_text(path))
    }

    /// Whether `path` has been read (or found missing) already
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn load_text(path: &str) -> String {
    tracing::trace!(path, "code cache miss");
    if !Path::new(path).exists() {
        return String::new();
    }
    match fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            tracing::warn!(path, error = %e, "cannot read file, caching empty contents");
            String::new()
        }
    }
}
