//! Browser seams and small helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each browser API sits behind a trait or a cfg-gated function so state and
//! components compile and test natively without the `hydrate` feature.

pub mod clock;
pub mod document_theme;
pub mod links;
pub mod preferences;
pub mod subscription;
pub mod system_theme;
