//! Full-width button opening one outbound profile link.

use leptos::prelude::*;

use crate::profile::ProfileLink;
use crate::util::links::{BrowserOpener, activate, aria_label, is_activation_key};

/// Opens `link` in a new tab on click, Enter, or Space.
#[component]
pub fn LinkButton(link: &'static ProfileLink) -> impl IntoView {
    let on_click = move |_| activate(link, &BrowserOpener);
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_activation_key(&ev.key()) {
            ev.prevent_default();
            activate(link, &BrowserOpener);
        }
    };

    view! {
        <button
            type="button"
            class=link.variant.css_class()
            aria-label=aria_label(link).into_owned()
            on:click=on_click
            on:keydown=on_keydown
        >
            <span class=link.icon.css_class() aria-hidden="true">
                {link.icon.glyph()}
            </span>
            <span class="link-button__label">{link.label}</span>
        </button>
    }
}
