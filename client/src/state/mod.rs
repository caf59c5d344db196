//! Client state: the theme machine, its live session, and the Leptos context.
//!
//! DESIGN
//! ======
//! `theme` is pure data and rules, `theme_session` binds it to the browser
//! seams, and `theme_context` exposes it to components.

pub mod theme;
pub mod theme_context;
pub mod theme_session;
