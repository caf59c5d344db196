//! Wall-clock reads and periodic ticks.
//!
//! There is no browser notification for the hour changing, so time-following
//! consumers poll through `Clock::every`.

use std::rc::Rc;
use std::time::Duration;

use super::subscription::Subscription;

#[cfg(test)]
#[path = "clock_test.rs"]
mod tests;

/// How often the time-of-day rule is re-evaluated.
pub const POLL_INTERVAL: Duration = Duration::from_secs(60);

pub trait Clock {
    /// Local hour, 0-23.
    fn hour(&self) -> u8;

    /// Local minute, 0-59.
    fn minute(&self) -> u8;

    /// Call `tick` every `period` until the handle is dropped.
    fn every(&self, period: Duration, tick: Rc<dyn Fn()>) -> Subscription;
}

/// `HH:MM`, zero padded.
pub fn format_clock(hour: u8, minute: u8) -> String {
    format!("{hour:02}:{minute:02}")
}

/// Report the current `HH:MM` now, then again on every poll until the handle
/// is dropped.
pub fn watch_time<C: Clock + Clone + 'static>(clock: &C, on_time: impl Fn(String) + 'static) -> Subscription {
    on_time(format_clock(clock.hour(), clock.minute()));
    let reader = clock.clone();
    clock.every(
        POLL_INTERVAL,
        Rc::new(move || on_time(format_clock(reader.hour(), reader.minute()))),
    )
}

/// Browser local time via `Date`, ticks via `setInterval`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

#[cfg(feature = "hydrate")]
impl Clock for BrowserClock {
    fn hour(&self) -> u8 {
        u8::try_from(js_sys::Date::new_0().get_hours()).unwrap_or(0)
    }

    fn minute(&self) -> u8 {
        u8::try_from(js_sys::Date::new_0().get_minutes()).unwrap_or(0)
    }

    fn every(&self, period: Duration, tick: Rc<dyn Fn()>) -> Subscription {
        let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
        let interval = gloo_timers::callback::Interval::new(millis, move || tick());
        Subscription::new(move || drop(interval))
    }
}
