//! Outbound link activation.
//!
//! Links open in a new browsing context with `noopener,noreferrer`, so the
//! destination gets no handle back to this page.

use std::borrow::Cow;

use crate::profile::ProfileLink;

#[cfg(test)]
#[path = "links_test.rs"]
mod tests;

pub const NEW_TAB_TARGET: &str = "_blank";
pub const NEW_TAB_FEATURES: &str = "noopener,noreferrer";

pub trait LinkOpener {
    fn open(&self, url: &str);
}

/// `window.open` in the browser; no-op elsewhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserOpener;

impl LinkOpener for BrowserOpener {
    fn open(&self, url: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            if window
                .open_with_url_and_target_and_features(url, NEW_TAB_TARGET, NEW_TAB_FEATURES)
                .is_err()
            {
                log::debug!("window.open rejected for {url}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
        }
    }
}

/// Keys that activate a focused link button.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

pub fn activate(link: &ProfileLink, opener: &impl LinkOpener) {
    opener.open(link.url);
}

/// Accessible name, falling back to "Open {label} in new tab".
pub fn aria_label(link: &ProfileLink) -> Cow<'static, str> {
    match link.aria_label {
        Some(label) => Cow::Borrowed(label),
        None => Cow::Owned(format!("Open {} in new tab", link.label)),
    }
}
