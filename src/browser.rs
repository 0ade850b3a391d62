//! Opening URLs in the user's browser

use crate::platform::PlatformOps;

/// Open `url` with the platform's browser mechanism.
///
/// Fire-and-forget: nothing is reported back if the browser does not open.
pub fn open_url(platform: &dyn PlatformOps, url: &str) {
    tracing::debug!(platform = %platform.kind(), url, "opening URL");
    platform.open_url(url);
}
