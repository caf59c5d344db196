//! Avatar, name, and bio at the top of the page.

use leptos::prelude::*;

use crate::profile::Profile;

/// Profile header. Falls back to initials when the avatar fails to load.
#[component]
pub fn ProfileCard(profile: &'static Profile) -> impl IntoView {
    let avatar_failed = RwSignal::new(false);

    view! {
        <header class="profile-card">
            <div class="profile-card__avatar">
                <Show
                    when=move || !avatar_failed.get()
                    fallback=move || {
                        view! { <span class="profile-card__initials">{profile.initials()}</span> }
                    }
                >
                    <img
                        src=profile.avatar
                        alt=profile.avatar_alt()
                        on:error=move |_| avatar_failed.set(true)
                    />
                </Show>
            </div>
            <h1 class="profile-card__name">{profile.name}</h1>
            <p class="profile-card__bio">{profile.bio}</p>
        </header>
    }
}
