//! Browser (wasm32) platform: side effects go through JavaScript
//!
//! The gallery page hosts each demo as its own `{name}.html`. Launching a demo
//! or opening a URL builds a small `window.open(...)` snippet and hands it to
//! the page's `eval`.

use std::io;
use std::path::Path;
use std::process::Command;

use serde_json::Value;

use super::{PlatformKind, PlatformOps};

/// Window name shared by every demo popup, so a second launch reuses it.
const DEMO_WINDOW_NAME: &str = "hello";
const DEMO_WINDOW_FEATURES: &str = "width=900,height=600";

#[derive(Debug, Clone, Copy, Default)]
pub struct WebOps;

/// Quote `s` as a JavaScript string literal.
fn js_string(s: &str) -> String {
    Value::String(s.to_string()).to_string()
}

/// Script that opens the demo page `{demo_name}.html` in a popup window.
pub fn demo_window_script(demo_name: &str) -> String {
    format!(
        "window.open({}, {}, {});",
        js_string(&format!("{}.html", demo_name)),
        js_string(DEMO_WINDOW_NAME),
        js_string(DEMO_WINDOW_FEATURES)
    )
}

/// Script that opens `url` in a new tab.
pub fn open_url_script(url: &str) -> String {
    format!("window.open({});", js_string(url))
}

impl PlatformOps for WebOps {
    fn kind(&self) -> PlatformKind {
        PlatformKind::Web
    }

    fn hosts_processes(&self) -> bool {
        false
    }

    fn spawn_detached(&self, program: &Path) -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            format!("cannot spawn '{}' from a browser page", program.display()),
        ))
    }

    fn url_command(&self, _url: &str) -> Option<Command> {
        None
    }

    fn open_url(&self, url: &str) {
        bridge::run_script(&open_url_script(url));
    }

    fn open_demo_window(&self, demo_name: &str) -> bool {
        let script = demo_window_script(demo_name);
        tracing::info!(script = %script, "opening demo window");
        if !bridge::run_script(&script) {
            tracing::warn!(demo = demo_name, "demo window not opened, no script bridge");
        }
        true
    }
}

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
#[allow(unsafe_code)] // wasm-bindgen import shims
mod bridge {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(catch, js_name = eval)]
        fn js_eval(script: &str) -> Result<JsValue, JsValue>;
    }

    /// Evaluate `script` in the page. Returns false if no bridge ran it.
    pub fn run_script(script: &str) -> bool {
        if js_eval(script).is_err() {
            tracing::debug!(script, "script bridge raised an exception");
        }
        true
    }
}

#[cfg(not(all(target_arch = "wasm32", feature = "wasm")))]
mod bridge {
    /// Outside a browser there is no page to run the script in.
    pub fn run_script(script: &str) -> bool {
        if cfg!(target_arch = "wasm32") {
            tracing::warn!(script, "built without the `wasm` feature, script not run");
        } else {
            tracing::debug!(script, "no script bridge on this target, skipping");
        }
        false
    }
}
