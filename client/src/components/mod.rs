//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the profile and the theme chrome, reading the theme from
//! the Leptos context installed by `app::App`.

pub mod cursor_glow;
pub mod link_button;
pub mod profile_card;
pub mod theme_controls;
