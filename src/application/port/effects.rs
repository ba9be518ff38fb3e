// SPDX-License-Identifier: MPL-2.0
//! Animation and viewport-intersection ports.
//!
//! The tweening engine is opaque to this crate: `animate(target, from, to,
//! timing)` returns a handle and the visual result is entirely the host's
//! concern. Easing curves and pixel offsets are cosmetic parameters, not
//! behavior, so [`Keyframe`] carries only the handful of properties the
//! wiring layer actually drives.

/// A sparse set of animatable properties. `None` means "leave unchanged".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Keyframe {
    pub opacity: Option<f32>,
    pub scale: Option<f32>,
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub rotation: Option<f32>,
}

/// Timing for a single tween.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl Timing {
    #[must_use]
    pub fn from_millis(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            delay_ms: 0,
        }
    }
}

/// Opaque handle to a running effect, for cancellation by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectHandle(pub u64);

/// Port for the external tweening engine.
pub trait Animator {
    /// Tweens `target` (a host-side element identifier) from one keyframe
    /// to another.
    fn animate(&mut self, target: &str, from: Keyframe, to: Keyframe, timing: Timing)
        -> EffectHandle;
}

/// Port for the viewport-intersection notifier.
///
/// The host invokes the reveal logic when an observed element first crosses
/// the visibility threshold; this trait only manages the observation set.
pub trait ViewportObserver {
    fn observe(&mut self, element_id: &str);
    fn unobserve(&mut self, element_id: &str);
}
