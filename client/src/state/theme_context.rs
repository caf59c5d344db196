//! Leptos context exposing the theme to components.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders with `ThemeState::initial`. After hydration an effect
//! starts the browser-backed `ThemeSession`, whose change callback feeds the
//! reactive signal and the `<html data-theme>` attribute. The session lives in
//! a local `StoredValue` and is dropped on cleanup, which releases its
//! listener or poller. SSR builds carry no session; actions are no-ops there.

use leptos::prelude::*;

use super::theme::{FollowSource, ThemeState};
use super::theme_session::ThemeSession;

/// Source the site follows whenever the theme is not pinned.
pub const SITE_FOLLOW: FollowSource = FollowSource::Clock;

#[derive(Clone, Copy)]
pub struct ThemeContext {
    state: RwSignal<ThemeState>,
    #[cfg(feature = "hydrate")]
    session: StoredValue<Option<ThemeSession>, LocalStorage>,
}

impl ThemeContext {
    /// Create the context, provide it, and start the session once hydrated.
    pub fn install() -> Self {
        let ctx = Self {
            state: RwSignal::new(ThemeState::initial(SITE_FOLLOW)),
            #[cfg(feature = "hydrate")]
            session: StoredValue::new_local(None),
        };
        provide_context(ctx);

        #[cfg(feature = "hydrate")]
        {
            let state = ctx.state;
            let session = ctx.session;
            Effect::new(move || {
                if session.with_value(Option::is_some) {
                    return;
                }
                let started = ThemeSession::start(
                    super::theme_session::ThemeDeps::browser(),
                    SITE_FOLLOW,
                    move |next: &ThemeState| {
                        log::debug!("theme {:?} dark={}", next.mode(), next.is_dark());
                        crate::util::document_theme::apply(next.is_dark());
                        state.set(next.clone());
                    },
                );
                session.set_value(Some(started));
            });
            on_cleanup(move || session.update_value(|slot| drop(slot.take())));
        }

        ctx
    }

    pub fn state(&self) -> ThemeState {
        self.state.get()
    }

    pub fn is_dark(&self) -> bool {
        self.state.with(ThemeState::is_dark)
    }

    pub fn is_auto(&self) -> bool {
        self.state.with(ThemeState::is_following)
    }

    pub fn toggle(&self) {
        self.with_session(ThemeSession::toggle);
    }

    pub fn set_auto(&self, enabled: bool) {
        self.with_session(|session| session.set_auto(enabled));
    }

    fn with_session(&self, run: impl FnOnce(&mut ThemeSession)) {
        #[cfg(feature = "hydrate")]
        {
            self.session.update_value(|slot| {
                if let Some(session) = slot.as_mut() {
                    run(session);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self, run);
        }
    }
}

/// Fetch the installed theme context.
pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}
