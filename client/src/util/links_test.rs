use std::cell::RefCell;

use super::*;
use crate::profile::{LinkIcon, LinkVariant, PROFILE};

#[derive(Default)]
struct RecordingOpener {
    opened: RefCell<Vec<String>>,
}

impl LinkOpener for RecordingOpener {
    fn open(&self, url: &str) {
        self.opened.borrow_mut().push(url.to_owned());
    }
}

#[test]
fn activation_opens_exactly_the_entry_url() {
    for link in PROFILE.links {
        let opener = RecordingOpener::default();
        activate(link, &opener);
        assert_eq!(opener.opened.borrow().as_slice(), &[link.url.to_owned()]);
    }
}

#[test]
fn enter_and_space_activate() {
    assert!(is_activation_key("Enter"));
    assert!(is_activation_key(" "));
    assert!(!is_activation_key("Tab"));
    assert!(!is_activation_key("Spacebar"));
    assert!(!is_activation_key("enter"));
}

#[test]
fn aria_label_prefers_explicit_label() {
    assert_eq!(aria_label(&PROFILE.links[1]), "Visit Dmytro Tatarynov GitHub profile");
}

#[test]
fn aria_label_falls_back_to_label() {
    let link = ProfileLink {
        label: "Blog",
        url: "https://example.com",
        icon: LinkIcon::Article,
        variant: LinkVariant::Outlined,
        aria_label: None,
    };
    assert_eq!(aria_label(&link), "Open Blog in new tab");
}

#[test]
fn new_tab_denies_opener_access() {
    assert_eq!(NEW_TAB_TARGET, "_blank");
    assert!(NEW_TAB_FEATURES.contains("noopener"));
    assert!(NEW_TAB_FEATURES.contains("noreferrer"));
}

#[test]
fn browser_opener_is_noop_outside_browser() {
    BrowserOpener.open("https://example.com");
}
