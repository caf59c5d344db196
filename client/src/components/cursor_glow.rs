//! Decorative radial glow that follows the pointer.

use leptos::prelude::*;

use crate::state::theme_context::use_theme;

#[cfg(test)]
#[path = "cursor_glow_test.rs"]
mod tests;

/// Glow radius in CSS pixels.
pub const GLOW_RADIUS_PX: u32 = 600;

/// CSS `background` for a glow centered at (`x`, `y`).
pub fn glow_background(x: i32, y: i32, dark: bool) -> String {
    let (center, edge) = if dark {
        ("rgba(255, 255, 255, 0.08)", "rgba(255, 255, 255, 0.05)")
    } else {
        ("rgba(0, 0, 0, 0.12)", "rgba(0, 0, 0, 0.08)")
    };
    format!("radial-gradient({GLOW_RADIUS_PX}px circle at {x}px {y}px, {center} 0%, {edge} 40%, transparent 70%)")
}

/// Full-viewport overlay; hidden until the pointer moves and after it leaves
/// the window.
#[component]
pub fn CursorGlow() -> impl IntoView {
    let theme = use_theme();
    let pointer = RwSignal::new((0_i32, 0_i32));
    let visible = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let on_move = window_event_listener(leptos::ev::mousemove, move |ev| {
            pointer.set((ev.client_x(), ev.client_y()));
            visible.set(true);
        });
        let on_out = window_event_listener(leptos::ev::mouseout, move |ev| {
            if ev.related_target().is_none() {
                visible.set(false);
            }
        });
        on_cleanup(move || {
            on_move.remove();
            on_out.remove();
        });
    }

    view! {
        <div
            class="cursor-glow"
            aria-hidden="true"
            style:opacity=move || if visible.get() { "1" } else { "0" }
            style:background=move || {
                let (x, y) = pointer.get();
                glow_background(x, y, theme.is_dark())
            }
        ></div>
    }
}
