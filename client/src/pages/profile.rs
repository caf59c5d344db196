//! The single profile page: card, link list, footer, and theme chrome.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::components::cursor_glow::CursorGlow;
use crate::components::link_button::LinkButton;
use crate::components::profile_card::ProfileCard;
use crate::components::theme_controls::{ThemeControls, auto_caption};
use crate::profile::PROFILE;
use crate::state::theme_context::use_theme;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let theme = use_theme();
    let profile = &PROFILE;

    // Flips after hydration so the card fades in.
    let mounted = RwSignal::new(false);
    Effect::new(move || mounted.set(true));

    let content_class = move || {
        if mounted.get() {
            "profile-page__content profile-page__content--visible"
        } else {
            "profile-page__content"
        }
    };

    view! {
        <Title text=profile.name/>
        <Meta name="description" content=profile.bio/>

        <CursorGlow/>
        <ThemeControls/>

        <main class="profile-page">
            <section class=content_class>
                <ProfileCard profile=profile/>

                <nav class="link-list" aria-label="Profile links">
                    {profile
                        .links
                        .iter()
                        .map(|link| view! { <LinkButton link=link/> })
                        .collect_view()}
                </nav>

                <footer class="profile-page__footer">
                    <span class="profile-page__credit">"Built with Rust & Leptos"</span>
                    <Show when=move || theme.is_auto()>
                        <span class="profile-page__schedule">
                            {move || auto_caption(theme.state().follow_source())}
                        </span>
                    </Show>
                </footer>
            </section>
        </main>
    }
}
