//! OS color-scheme signal.

use std::rc::Rc;

use super::subscription::Subscription;

pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

pub trait SystemTheme {
    /// Current value of the signal.
    fn prefers_dark(&self) -> bool;

    /// Call `on_change` with the new value until the handle is dropped.
    fn subscribe(&self, on_change: Rc<dyn Fn(bool)>) -> Subscription;
}

/// `matchMedia("(prefers-color-scheme: dark)")`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Debug)]
pub struct MediaQueryTheme {
    query: Option<web_sys::MediaQueryList>,
}

#[cfg(feature = "hydrate")]
impl MediaQueryTheme {
    pub fn new() -> Self {
        let query = web_sys::window().and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten());
        Self { query }
    }
}

#[cfg(feature = "hydrate")]
impl Default for MediaQueryTheme {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "hydrate")]
impl SystemTheme for MediaQueryTheme {
    fn prefers_dark(&self) -> bool {
        self.query.as_ref().map_or(false, web_sys::MediaQueryList::matches)
    }

    fn subscribe(&self, on_change: Rc<dyn Fn(bool)>) -> Subscription {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(query) = self.query.clone() else {
            return Subscription::noop();
        };
        let listener = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(
            move |event: web_sys::MediaQueryListEvent| on_change(event.matches()),
        );
        if query
            .add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
            .is_err()
        {
            log::debug!("color-scheme listener rejected");
            return Subscription::noop();
        }
        Subscription::new(move || {
            if query
                .remove_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
                .is_err()
            {
                log::debug!("color-scheme listener removal failed");
            }
        })
    }
}
