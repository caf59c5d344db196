//! `<html data-theme>` attribute driving the stylesheet's palette.

use crate::state::theme::{DARK_FROM_HOUR, FollowSource, LIGHT_FROM_HOUR};
use crate::util::preferences::{THEME_KEY, THEME_PINNED_KEY};
use crate::util::system_theme::DARK_SCHEME_QUERY;

#[cfg(test)]
#[path = "document_theme_test.rs"]
mod tests;

pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Attribute value for a theme flag.
pub fn theme_name(dark: bool) -> &'static str {
    if dark { "dark" } else { "light" }
}

/// Set the attribute on the document element. No-op outside the browser.
pub fn apply(dark: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        else {
            return;
        };
        if root.set_attribute(THEME_ATTRIBUTE, theme_name(dark)).is_err() {
            log::debug!("could not set {THEME_ATTRIBUTE}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = dark;
    }
}

/// Inline `<head>` script that sets the attribute from storage before first
/// paint, so a pinned dark page never flashes light while the bundle loads.
/// Mirrors `ThemeState::resolve`; the hydrated session takes over afterwards.
pub fn pre_paint_script(follow: FollowSource) -> String {
    let follow_expr = match follow {
        FollowSource::Clock => {
            format!("(function(h){{return h>={DARK_FROM_HOUR}||h<{LIGHT_FROM_HOUR};}})(new Date().getHours())")
        }
        FollowSource::System => format!("window.matchMedia('{DARK_SCHEME_QUERY}').matches"),
    };
    format!(
        "(function(){{try{{\
var s=window.localStorage,m=s.getItem('{THEME_KEY}'),p=s.getItem('{THEME_PINNED_KEY}');\
var d=(p==='true'&&(m==='dark'||m==='light'))?m==='dark':{follow_expr};\
document.documentElement.setAttribute('{THEME_ATTRIBUTE}',d?'dark':'light');\
}}catch(e){{}}}})();"
    )
}
