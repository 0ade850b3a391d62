//! WASM API module for the browser gallery
//!
//! Exposes the launcher and URL opener to the page's JavaScript. In the
//! browser each demo is a separate page, so launching opens a popup.

use wasm_bindgen::prelude::*;

use crate::assets::assets_folder_name;
use crate::browser;
use crate::platform::{PlatformKind, PlatformOps, WebOps};

/// Initialize panic hook for better error messages in WASM
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Open the demo page `{name}.html` in a popup window.
///
/// Always returns true: the browser gives no feedback on whether the page
/// exists.
#[wasm_bindgen]
pub fn spawn_demo(name: &str) -> bool {
    WebOps.open_demo_window(name)
}

/// Open `url` in a new browser tab.
#[wasm_bindgen]
pub fn browse_to_url(url: &str) {
    browser::open_url(&WebOps, url);
}

/// Where the page preloads demo assets.
#[wasm_bindgen]
pub fn assets_folder() -> String {
    assets_folder_name().to_string()
}

/// Platform name as seen by the harness ("web" in the browser).
#[wasm_bindgen]
pub fn platform_name() -> String {
    PlatformKind::current().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_demo_reports_launch() {
        assert!(spawn_demo("demo_hello"));
    }

    #[test]
    fn test_browse_to_url_does_not_panic() {
        browse_to_url("https://example.com");
    }

    #[test]
    fn test_assets_folder_matches_target() {
        assert_eq!(assets_folder(), assets_folder_name());
    }
}
