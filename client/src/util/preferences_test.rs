use super::test_helpers::MemoryStore;
use super::*;

#[test]
fn load_theme_from_empty_store_is_absent() {
    let store = MemoryStore::default();
    assert_eq!(load_theme(&store), StoredPreference::default());
}

#[test]
fn load_theme_parses_pinned_choice() {
    let store = MemoryStore::with_entries([(THEME_KEY, "dark"), (THEME_PINNED_KEY, "true")]);
    assert_eq!(load_theme(&store), StoredPreference { dark: Some(true), pinned: Some(true) });
}

#[test]
fn load_theme_ignores_malformed_values() {
    let store = MemoryStore::with_entries([(THEME_KEY, "midnight"), (THEME_PINNED_KEY, "1")]);
    assert_eq!(load_theme(&store), StoredPreference::default());
}

#[test]
fn save_theme_writes_both_fields() {
    let store = MemoryStore::default();
    save_theme(&store, StoredPreference { dark: Some(false), pinned: Some(true) });
    assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
    assert_eq!(store.get(THEME_PINNED_KEY).as_deref(), Some("true"));
}

#[test]
fn save_theme_skips_absent_fields() {
    let store = MemoryStore::with_entries([(THEME_KEY, "dark")]);
    save_theme(&store, StoredPreference { dark: None, pinned: Some(false) });
    assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
    assert_eq!(store.get(THEME_PINNED_KEY).as_deref(), Some("false"));
}

#[test]
fn save_then_load_round_trips() {
    let store = MemoryStore::default();
    let preference = StoredPreference { dark: Some(true), pinned: Some(false) };
    save_theme(&store, preference);
    assert_eq!(load_theme(&store), preference);
}

#[test]
fn read_only_store_drops_writes_silently() {
    let store = MemoryStore::read_only();
    save_theme(&store, StoredPreference { dark: Some(true), pinned: Some(true) });
    assert_eq!(store.get(THEME_KEY), None);
    assert_eq!(load_theme(&store), StoredPreference::default());
}

#[test]
fn clones_share_entries() {
    let store = MemoryStore::default();
    let view = store.clone();
    store.set(THEME_KEY, "dark");
    assert_eq!(view.get(THEME_KEY).as_deref(), Some("dark"));
}

#[test]
fn works_through_trait_objects() {
    let store: Box<dyn PreferenceStore> = Box::new(MemoryStore::default());
    save_theme(store.as_ref(), StoredPreference { dark: Some(true), pinned: Some(true) });
    assert_eq!(load_theme(store.as_ref()).manual_choice(), Some(true));
}
