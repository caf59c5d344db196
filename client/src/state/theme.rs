//! Theme mode resolution and transitions.
//!
//! DESIGN
//! ======
//! A manual pin always wins. Without one, the theme follows exactly one
//! configured source: the OS color-scheme signal or the time-of-day rule.
//! The state here is plain data so the transition rules stay testable without
//! a browser; `theme_session` wires it to storage, the signal, and the clock.
//!
//! The two persisted fields are written independently, so any pair that does
//! not describe a pinned choice is treated as absent at startup.

#[cfg(test)]
#[path = "theme_test.rs"]
mod tests;

/// First hour (inclusive) of the dark window.
pub const DARK_FROM_HOUR: u8 = 19;
/// First hour (inclusive) of the light window.
pub const LIGHT_FROM_HOUR: u8 = 6;

/// Time-of-day rule: dark from 19:00 up to, but not including, 06:00.
pub fn is_dark_hour(hour: u8) -> bool {
    hour >= DARK_FROM_HOUR || hour < LIGHT_FROM_HOUR
}

/// External source an unpinned theme follows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FollowSource {
    /// `prefers-color-scheme` media query.
    System,
    /// Wall-clock hour, polled.
    #[default]
    Clock,
}

/// Active theme mode. Exactly one of pinned, system-follow, or time-follow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    ManualDark,
    ManualLight,
    FollowSystem,
    FollowTime,
}

impl ThemeMode {
    fn manual(dark: bool) -> Self {
        if dark { Self::ManualDark } else { Self::ManualLight }
    }

    fn following(source: FollowSource) -> Self {
        match source {
            FollowSource::System => Self::FollowSystem,
            FollowSource::Clock => Self::FollowTime,
        }
    }

    pub fn is_pinned(self) -> bool {
        matches!(self, Self::ManualDark | Self::ManualLight)
    }
}

/// Parsed view of the persisted theme fields. `None` means absent or malformed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StoredPreference {
    pub dark: Option<bool>,
    pub pinned: Option<bool>,
}

impl StoredPreference {
    /// Parse raw store values. Only `"dark"`/`"light"` and `"true"`/`"false"`
    /// are recognized; anything else reads as absent.
    pub fn parse(mode: Option<&str>, pinned: Option<&str>) -> Self {
        let dark = match mode {
            Some("dark") => Some(true),
            Some("light") => Some(false),
            _ => None,
        };
        let pinned = match pinned {
            Some("true") => Some(true),
            Some("false") => Some(false),
            _ => None,
        };
        Self { dark, pinned }
    }

    /// The pinned choice, if the pair describes one.
    pub fn manual_choice(self) -> Option<bool> {
        match (self.dark, self.pinned) {
            (Some(dark), Some(true)) => Some(dark),
            _ => None,
        }
    }

    pub fn mode_value(self) -> Option<&'static str> {
        self.dark.map(|dark| if dark { "dark" } else { "light" })
    }

    pub fn pinned_value(self) -> Option<&'static str> {
        self.pinned.map(|pinned| if pinned { "true" } else { "false" })
    }
}

/// Resolved theme: the mode, the boolean the page renders with, and the
/// follow source used whenever the pin is released.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeState {
    mode: ThemeMode,
    dark: bool,
    follow: FollowSource,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::initial(FollowSource::default())
    }
}

impl ThemeState {
    /// Deterministic pre-hydration state: light, following `follow`.
    pub fn initial(follow: FollowSource) -> Self {
        Self { mode: ThemeMode::following(follow), dark: false, follow }
    }

    /// Startup resolution from persisted fields and the live inputs.
    pub fn resolve(stored: StoredPreference, follow: FollowSource, hour: u8, system_dark: bool) -> Self {
        match stored.manual_choice() {
            Some(dark) => Self { mode: ThemeMode::manual(dark), dark, follow },
            None => Self {
                mode: ThemeMode::following(follow),
                dark: source_value(follow, hour, system_dark),
                follow,
            },
        }
    }

    /// Flip the theme and pin it, leaving any follow mode.
    pub fn toggle(&mut self) {
        self.dark = !self.dark;
        self.mode = ThemeMode::manual(self.dark);
    }

    /// Release the pin and adopt the follow source's current value.
    pub fn enable_follow(&mut self, hour: u8, system_dark: bool) {
        self.mode = ThemeMode::following(self.follow);
        self.dark = source_value(self.follow, hour, system_dark);
    }

    /// Pin whatever is currently displayed.
    pub fn pin_current(&mut self) {
        self.mode = ThemeMode::manual(self.dark);
    }

    /// Apply a system signal change. Returns whether `dark` changed.
    pub fn on_system_change(&mut self, system_dark: bool) -> bool {
        if self.mode != ThemeMode::FollowSystem {
            return false;
        }
        self.set_dark(system_dark)
    }

    /// Re-evaluate the time rule. Returns whether `dark` changed.
    pub fn on_clock_tick(&mut self, hour: u8) -> bool {
        if self.mode != ThemeMode::FollowTime {
            return false;
        }
        self.set_dark(is_dark_hour(hour))
    }

    fn set_dark(&mut self, dark: bool) -> bool {
        let changed = self.dark != dark;
        self.dark = dark;
        changed
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn is_pinned(&self) -> bool {
        self.mode.is_pinned()
    }

    pub fn is_following(&self) -> bool {
        !self.is_pinned()
    }

    pub fn follow_source(&self) -> FollowSource {
        self.follow
    }

    /// Fields to persist for this state.
    pub fn stored(&self) -> StoredPreference {
        StoredPreference { dark: Some(self.dark), pinned: Some(self.is_pinned()) }
    }
}

fn source_value(follow: FollowSource, hour: u8, system_dark: bool) -> bool {
    match follow {
        FollowSource::System => system_dark,
        FollowSource::Clock => is_dark_hour(hour),
    }
}
