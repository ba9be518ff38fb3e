// SPDX-License-Identifier: MPL-2.0
//! Media element port definition.
//!
//! This module defines the [`MediaElement`] trait for the single shared
//! playback element reused across every trigger source, and the
//! [`MediaEvent`] notifications it emits back to the lightbox.
//!
//! # Design Notes
//!
//! - The element is **stateful**; the lightbox mirrors it, it does not own it
//! - `request_play` is fire-and-forget: platform autoplay policy may refuse
//!   audible playback, so the outcome arrives later as `PlaybackStarted` or
//!   `PlaybackRejected`
//! - Events are delivered to the lightbox tagged with the session token that
//!   was current when the element produced them (see
//!   [`crate::lightbox::SessionToken`]); the lightbox discards stale ones

/// Port for the single shared media element.
///
/// # Lifecycle
///
/// 1. `attach()` assigns a source and forces a fresh load, discarding any
///    decoded state from a previous source
/// 2. `request_play()` asks for playback; the outcome is evented
/// 3. `pause()`, `seek()`, `set_muted()`, `set_fullscreen()` act immediately
/// 4. `detach()` removes the source entirely, not merely pausing it, so a
///    later `attach()` never races against stale buffered media
pub trait MediaElement {
    /// Assigns `url` as the element's source and forces a fresh load.
    fn attach(&mut self, url: &str);

    /// Detaches the current source from the element entirely.
    fn detach(&mut self);

    /// Requests playback. The outcome is delivered as a
    /// [`MediaEvent::PlaybackStarted`] or [`MediaEvent::PlaybackRejected`].
    fn request_play(&mut self);

    /// Pauses playback. Pausing cannot fail.
    fn pause(&mut self);

    /// Sets the element's mute flag.
    fn set_muted(&mut self, muted: bool);

    /// Moves the playback position, in seconds.
    fn seek(&mut self, position_secs: f64);

    /// Requests or exits fullscreen presentation for the media surface.
    fn set_fullscreen(&mut self, enabled: bool);
}

/// Lifecycle notifications from the media element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaEvent {
    /// A playback request was accepted and playback is running.
    PlaybackStarted,

    /// A playback request was refused (autoplay policy or resource error).
    PlaybackRejected,

    /// Stream metadata became available.
    MetadataLoaded { duration_secs: f64 },

    /// The playback position advanced or was moved.
    PositionChanged { position_secs: f64 },

    /// Playback reached the natural end of the stream.
    Ended,
}
