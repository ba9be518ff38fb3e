// SPDX-License-Identifier: MPL-2.0
//! Thin wiring around the animation and intersection ports.
//!
//! Everything here is stateless event-to-effect plumbing or a tiny piece of
//! bookkeeping with one rule each: resize recomputation is debounced so only
//! the latest request after a quiet period fires, viewport reveals happen at
//! most once per element, and a theme change raises one transient
//! notification tween.

use crate::application::port::{Animator, EffectHandle, Keyframe, Timing, ViewportObserver};
use crate::domain::Theme;
use std::collections::HashSet;
use std::time::{Duration, Instant};

/// Quiet period for resize-driven scroll-trigger refresh.
pub const RESIZE_QUIET_PERIOD: Duration = Duration::from_millis(250);

/// Trailing-edge debouncer.
///
/// Each [`signal`](Debouncer::signal) pushes the deadline out by the quiet
/// period; [`poll`](Debouncer::poll) reports `true` exactly once, when a
/// deadline has passed with no further signals. Time is passed in so hosts
/// and tests control the clock.
#[derive(Debug)]
pub struct Debouncer {
    quiet: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    #[must_use]
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            deadline: None,
        }
    }

    /// Debouncer tuned for page-resize scroll-trigger refresh.
    #[must_use]
    pub fn for_resize() -> Self {
        Self::new(RESIZE_QUIET_PERIOD)
    }

    /// Records a signal at `now`, superseding any pending deadline.
    pub fn signal(&mut self, now: Instant) {
        self.deadline = Some(now + self.quiet);
    }

    /// Returns `true` when the quiet period has elapsed since the last
    /// signal, consuming the pending deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}

/// Once-only viewport reveal bookkeeping.
///
/// Elements are tracked through the [`ViewportObserver`] port; the first
/// intersection reveals the element and stops observing it, so scrolling
/// back and forth never replays the entrance effect.
#[derive(Debug, Default)]
pub struct RevealRegistry {
    revealed: HashSet<String>,
}

impl RevealRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts observing `element_id` for its one-time reveal.
    pub fn track(&self, observer: &mut dyn ViewportObserver, element_id: &str) {
        observer.observe(element_id);
    }

    /// Handles an intersection notification. Returns `true` when the
    /// element should be revealed now (first intersection only).
    pub fn on_intersect(&mut self, observer: &mut dyn ViewportObserver, element_id: &str) -> bool {
        if self.revealed.contains(element_id) {
            return false;
        }
        self.revealed.insert(element_id.to_string());
        observer.unobserve(element_id);
        true
    }

    #[must_use]
    pub fn is_revealed(&self, element_id: &str) -> bool {
        self.revealed.contains(element_id)
    }
}

/// Host-side target for the theme notification element.
pub const THEME_NOTIFICATION_TARGET: &str = "theme-notification";

/// Entrance duration for the theme notification.
pub const THEME_NOTIFICATION_MS: u32 = 300;

/// Text for the transient notification naming a freshly applied theme.
#[must_use]
pub fn theme_notification_label(theme: Theme) -> String {
    format!("{} Theme", theme.display_name())
}

/// Slides the theme notification in from above while fading it up.
pub fn announce_theme(animator: &mut dyn Animator, _theme: Theme) -> EffectHandle {
    animator.animate(
        THEME_NOTIFICATION_TARGET,
        Keyframe {
            opacity: Some(0.0),
            y: Some(-20.0),
            ..Keyframe::default()
        },
        Keyframe {
            opacity: Some(1.0),
            y: Some(0.0),
            ..Keyframe::default()
        },
        Timing::from_millis(THEME_NOTIFICATION_MS),
    )
}
