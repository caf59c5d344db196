use super::*;

#[test]
fn glow_background_centers_on_pointer() {
    let css = glow_background(120, 48, true);
    assert!(css.starts_with("radial-gradient(600px circle at 120px 48px,"));
    assert!(css.ends_with("transparent 70%)"));
}

#[test]
fn glow_colors_follow_theme() {
    assert!(glow_background(0, 0, true).contains("rgba(255, 255, 255, 0.08)"));
    assert!(glow_background(0, 0, false).contains("rgba(0, 0, 0, 0.12)"));
}
