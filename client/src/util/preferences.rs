//! Key-value preference storage for the theme choice.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser implementation wraps `localStorage`. Writes are best-effort:
//! a failing or unavailable store leaves the page working with its
//! in-memory state.

use crate::state::theme::StoredPreference;

#[cfg(test)]
#[path = "preferences_test.rs"]
mod tests;

/// Key holding `"dark"` or `"light"`.
pub const THEME_KEY: &str = "linkpage_theme";
/// Key holding `"true"` when the theme was pinned by hand.
pub const THEME_PINNED_KEY: &str = "linkpage_theme_pinned";

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Read both theme fields; malformed or missing values come back as `None`.
pub fn load_theme<S: PreferenceStore + ?Sized>(store: &S) -> StoredPreference {
    let mode = store.get(THEME_KEY);
    let pinned = store.get(THEME_PINNED_KEY);
    StoredPreference::parse(mode.as_deref(), pinned.as_deref())
}

/// Write both theme fields, mode first.
pub fn save_theme<S: PreferenceStore + ?Sized>(store: &S, preference: StoredPreference) {
    if let Some(mode) = preference.mode_value() {
        store.set(THEME_KEY, mode);
    }
    if let Some(pinned) = preference.pinned_value() {
        store.set(THEME_PINNED_KEY, pinned);
    }
}

/// Browser `localStorage`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

#[cfg(feature = "hydrate")]
impl LocalStorageStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            log::debug!("preference write dropped: {key}");
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use super::PreferenceStore;

    /// In-memory store. Clones share entries.
    #[derive(Clone, Debug, Default)]
    pub struct MemoryStore {
        entries: Rc<RefCell<HashMap<String, String>>>,
        read_only: bool,
    }

    impl MemoryStore {
        /// A store whose writes are dropped, like a full or disabled `localStorage`.
        pub fn read_only() -> Self {
            Self { entries: Rc::default(), read_only: true }
        }

        pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
            let store = Self::default();
            store.entries.borrow_mut().extend(
                entries
                    .into_iter()
                    .map(|(key, value)| (key.to_owned(), value.to_owned())),
            );
            store
        }
    }

    impl PreferenceStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            if self.read_only {
                return;
            }
            self.entries
                .borrow_mut()
                .insert(key.to_owned(), value.to_owned());
        }
    }
}
