//! Live theme session: state plus its collaborators and follow subscription.
//!
//! ARCHITECTURE
//! ============
//! `ThemeSession` owns the `ThemeState`, the preference store, the system
//! signal, the clock, and at most one active `Subscription`. The subscription
//! matches the mode: a color-scheme listener while following the system, a
//! minute poller while following the clock, nothing while pinned. Every mode
//! change re-arms it. Dropping the session drops the subscription, and
//! listeners hold only a weak reference, so nothing updates after teardown.
//!
//! Every change to the persisted fields is written through before listeners
//! are notified: user actions always, follow updates when the value flips.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use super::theme::{FollowSource, ThemeMode, ThemeState};
use crate::util::clock::{Clock, POLL_INTERVAL};
use crate::util::preferences::{PreferenceStore, load_theme, save_theme};
use crate::util::subscription::Subscription;
use crate::util::system_theme::SystemTheme;

#[cfg(test)]
#[path = "theme_session_test.rs"]
mod tests;

/// External collaborators of a session.
pub struct ThemeDeps {
    pub store: Box<dyn PreferenceStore>,
    pub system: Box<dyn SystemTheme>,
    pub clock: Box<dyn Clock>,
}

#[cfg(feature = "hydrate")]
impl ThemeDeps {
    /// `localStorage`, `matchMedia`, and the browser clock.
    pub fn browser() -> Self {
        Self {
            store: Box::new(crate::util::preferences::LocalStorageStore),
            system: Box::new(crate::util::system_theme::MediaQueryTheme::new()),
            clock: Box::new(crate::util::clock::BrowserClock),
        }
    }
}

struct Shared {
    state: RefCell<ThemeState>,
    deps: ThemeDeps,
    on_change: Box<dyn Fn(&ThemeState)>,
}

impl Shared {
    /// Run a follow update; persist and notify only when it reports a change.
    fn apply(&self, update: impl FnOnce(&mut ThemeState) -> bool) {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            if !update(&mut state) {
                return;
            }
            state.clone()
        };
        save_theme(self.deps.store.as_ref(), snapshot.stored());
        (self.on_change)(&snapshot);
    }

    /// Run a user action: notify and persist unconditionally.
    fn commit(&self, action: impl FnOnce(&mut ThemeState, &ThemeDeps)) {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            action(&mut state, &self.deps);
            state.clone()
        };
        save_theme(self.deps.store.as_ref(), snapshot.stored());
        (self.on_change)(&snapshot);
    }
}

pub struct ThemeSession {
    shared: Rc<Shared>,
    watch: Option<Subscription>,
}

impl ThemeSession {
    /// Resolve the startup state, report it once, and arm the follow
    /// subscription if the state is not pinned.
    pub fn start(deps: ThemeDeps, follow: FollowSource, on_change: impl Fn(&ThemeState) + 'static) -> Self {
        let stored = load_theme(deps.store.as_ref());
        let state = ThemeState::resolve(stored, follow, deps.clock.hour(), deps.system.prefers_dark());
        on_change(&state);

        let mut session = Self {
            shared: Rc::new(Shared { state: RefCell::new(state), deps, on_change: Box::new(on_change) }),
            watch: None,
        };
        session.rearm();
        session
    }

    /// Flip and pin the theme.
    pub fn toggle(&mut self) {
        self.shared.commit(|state, _| state.toggle());
        self.rearm();
    }

    /// Turn following on (release the pin) or off (pin the current value).
    pub fn set_auto(&mut self, enabled: bool) {
        self.shared.commit(|state, deps| {
            if enabled {
                state.enable_follow(deps.clock.hour(), deps.system.prefers_dark());
            } else {
                state.pin_current();
            }
        });
        self.rearm();
    }

    pub fn state(&self) -> ThemeState {
        self.shared.state.borrow().clone()
    }

    fn rearm(&mut self) {
        self.watch = None;
        let mode = self.shared.state.borrow().mode();
        let weak = Rc::downgrade(&self.shared);
        self.watch = match mode {
            ThemeMode::FollowSystem => Some(self.shared.deps.system.subscribe(Rc::new(move |dark: bool| {
                with_shared(&weak, |shared| shared.apply(|state| state.on_system_change(dark)));
            }))),
            ThemeMode::FollowTime => Some(self.shared.deps.clock.every(
                POLL_INTERVAL,
                Rc::new(move || {
                    with_shared(&weak, |shared| {
                        let hour = shared.deps.clock.hour();
                        shared.apply(|state| state.on_clock_tick(hour));
                    });
                }),
            )),
            ThemeMode::ManualDark | ThemeMode::ManualLight => None,
        };
    }
}

fn with_shared(weak: &Weak<Shared>, run: impl FnOnce(&Shared)) {
    if let Some(shared) = weak.upgrade() {
        run(&shared);
    }
}

impl fmt::Debug for ThemeSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeSession")
            .field("state", &*self.shared.state.borrow())
            .field("watch", &self.watch)
            .finish()
    }
}
