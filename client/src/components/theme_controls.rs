//! Fixed top-right theme controls: auto switch, manual toggle, clock.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads and drives the shared `ThemeContext`. The manual toggle is disabled
//! while following so the two modes never compete.

use leptos::prelude::*;

use crate::state::theme::{FollowSource, ThemeState};
use crate::state::theme_context::use_theme;

#[cfg(test)]
#[path = "theme_controls_test.rs"]
mod tests;

/// Toggle button glyph: auto indicator, or the mode a click switches to.
pub fn toggle_icon(state: &ThemeState) -> &'static str {
    if state.is_following() {
        "◐"
    } else if state.is_dark() {
        "☀"
    } else {
        "☾"
    }
}

pub fn toggle_aria_label(state: &ThemeState) -> &'static str {
    if state.is_following() {
        "Auto theme mode is enabled"
    } else if state.is_dark() {
        "Switch to light mode"
    } else {
        "Switch to dark mode"
    }
}

/// Footer line explaining what auto mode follows.
pub fn auto_caption(source: FollowSource) -> &'static str {
    match source {
        FollowSource::Clock => "Theme changes automatically: Dark (7 PM - 6 AM) • Light (6 AM - 7 PM)",
        FollowSource::System => "Theme follows your system color scheme",
    }
}

#[component]
pub fn ThemeControls() -> impl IntoView {
    let theme = use_theme();
    let time_label = RwSignal::new(String::new());

    // Client-only so the server markup matches the first hydrated render.
    #[cfg(feature = "hydrate")]
    {
        use crate::util::clock::{BrowserClock, watch_time};
        use crate::util::subscription::Subscription;

        let ticker = StoredValue::new_local(None::<Subscription>);
        Effect::new(move || {
            if ticker.with_value(Option::is_some) {
                return;
            }
            let handle = watch_time(&BrowserClock, move |label| time_label.set(label));
            ticker.set_value(Some(handle));
        });
        on_cleanup(move || ticker.update_value(|slot| drop(slot.take())));
    }

    view! {
        <div class="theme-controls">
            <label class="theme-controls__auto">
                <input
                    type="checkbox"
                    role="switch"
                    class="theme-controls__switch"
                    prop:checked=move || theme.is_auto()
                    on:change=move |ev| theme.set_auto(event_target_checked(&ev))
                />
                <span class="theme-controls__auto-label">"Auto"</span>
            </label>

            <button
                type="button"
                class="theme-controls__toggle"
                disabled=move || theme.is_auto()
                aria-label=move || toggle_aria_label(&theme.state())
                on:click=move |_| theme.toggle()
            >
                {move || toggle_icon(&theme.state())}
            </button>

            <Show when=move || theme.is_auto()>
                <span class="theme-controls__time">{move || time_label.get()}</span>
            </Show>
        </div>
    }
}
