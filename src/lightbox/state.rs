// SPDX-License-Identifier: MPL-2.0
//! Playback state machine for the video lightbox.
//!
//! Manages the lifecycle of modal playback with clear state transitions:
//! - Closed: no source attached, overlay hidden
//! - Loading: source attached, autoplay requested, outcome pending
//! - Playing: the element confirmed playback is running
//! - Paused: playback stopped at the current position
//!
//! `Playing` is only ever entered on a `PlaybackStarted` event from the
//! element, so the state mirrors reality rather than intent. A refused
//! autoplay is retried once with the element forcibly muted; a second
//! refusal settles in `Paused` with no error raised.

use super::session::SessionToken;
use super::time_format::format_time;
use crate::application::port::{MediaElement, MediaEvent, ModalSurface};

/// Lightbox state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxState {
    /// No source attached, overlay hidden. Initial state.
    Closed,

    /// A source was just attached and autoplay was requested.
    Loading,

    /// The element confirmed playback is running.
    Playing,

    /// Playback is stopped at the current position.
    Paused,
}

/// Modal playback controller bound to the single media element and the
/// single overlay surface for the whole page.
pub struct VideoLightbox<M: MediaElement, S: ModalSurface> {
    media: M,
    surface: S,
    state: LightboxState,
    session: SessionToken,
    source_url: Option<String>,
    muted: bool,
    fullscreen: bool,
    position_secs: f64,
    duration_secs: Option<f64>,
    autoplay_retried: bool,
}

impl<M: MediaElement, S: ModalSurface> VideoLightbox<M, S> {
    /// Creates a closed lightbox owning its element and overlay surface.
    pub fn new(media: M, surface: S) -> Self {
        Self {
            media,
            surface,
            state: LightboxState::Closed,
            session: SessionToken::initial(),
            source_url: None,
            muted: false,
            fullscreen: false,
            position_secs: 0.0,
            duration_secs: None,
            autoplay_retried: false,
        }
    }

    pub fn state(&self) -> LightboxState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != LightboxState::Closed
    }

    pub fn source_url(&self) -> Option<&str> {
        self.source_url.as_deref()
    }

    pub fn is_playing(&self) -> bool {
        self.state == LightboxState::Playing
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn position_secs(&self) -> f64 {
        self.position_secs
    }

    /// `None` until the element reports metadata for the current source.
    pub fn duration_secs(&self) -> Option<f64> {
        self.duration_secs
    }

    /// Token identifying the current open session. Hosts tag every media
    /// event they forward with the token that was current when the element
    /// produced it.
    pub fn session(&self) -> SessionToken {
        self.session
    }

    /// Opens `url` in the modal.
    ///
    /// Always fully resets prior playback state first: a fresh session
    /// token is minted, the element is detached and re-attached with a
    /// forced load, and the position returns to zero. Opening over an
    /// already-open lightbox swaps the source without re-presenting the
    /// overlay.
    pub fn open(&mut self, url: &str) {
        self.session = self.session.next();

        let was_open = self.is_open();
        if was_open {
            self.media.pause();
        }
        self.media.detach();
        self.media.attach(url);
        self.media.seek(0.0);

        self.source_url = Some(url.to_string());
        self.position_secs = 0.0;
        self.duration_secs = None;
        self.autoplay_retried = false;
        self.state = LightboxState::Loading;

        if !was_open {
            self.surface.present();
        }
        self.refresh_display();

        self.media.request_play();
    }

    /// Closes the modal from any open state.
    ///
    /// In order: pause, reset position to zero, detach the source entirely,
    /// clear the progress display and time readouts, then restore scroll
    /// and hide the overlay. Detaching (not merely pausing) means a later
    /// `open()` never races against stale buffered media.
    pub fn close(&mut self) {
        if !self.is_open() {
            return;
        }

        self.media.pause();
        self.media.seek(0.0);
        self.media.detach();

        if self.fullscreen {
            self.media.set_fullscreen(false);
            self.fullscreen = false;
        }

        self.source_url = None;
        self.position_secs = 0.0;
        self.duration_secs = None;
        self.autoplay_retried = false;

        self.surface.set_progress(0.0);
        self.surface.set_time_labels("0:00", "0:00");
        self.surface.dismiss();

        self.state = LightboxState::Closed;
        // In-flight events from the closed source must not touch a future
        // session.
        self.session = self.session.next();
    }

    /// Toggles between playing and paused.
    ///
    /// Pausing takes effect immediately. Resuming only requests playback;
    /// the transition to `Playing` waits for the element's confirmation.
    /// While still `Loading`, a toggle cancels the pending autoplay.
    pub fn toggle_play_pause(&mut self) {
        match self.state {
            LightboxState::Closed => {}
            LightboxState::Playing | LightboxState::Loading => {
                self.media.pause();
                self.state = LightboxState::Paused;
            }
            LightboxState::Paused => {
                self.media.request_play();
            }
        }
    }

    /// Flips the mute flag and reflects it on the element immediately.
    pub fn toggle_mute(&mut self) {
        if !self.is_open() {
            return;
        }
        self.muted = !self.muted;
        self.media.set_muted(self.muted);
    }

    /// Requests or exits fullscreen presentation for the media surface.
    pub fn toggle_fullscreen(&mut self) {
        if !self.is_open() {
            return;
        }
        self.fullscreen = !self.fullscreen;
        self.media.set_fullscreen(self.fullscreen);
    }

    /// Moves the position by `delta_secs`, clamped into `[0, duration]`.
    ///
    /// Before metadata arrives the duration is unknown, so forward seeks
    /// are held at the current position and only rewinds take effect.
    pub fn seek_relative(&mut self, delta_secs: f64) {
        if !self.is_open() {
            return;
        }
        let upper = self.duration_secs.unwrap_or(self.position_secs);
        let target = (self.position_secs + delta_secs).clamp(0.0, upper);
        self.apply_seek(target);
    }

    /// Seeks to `fraction` of the total duration, `fraction` clamped into
    /// `[0, 1]`. A no-op until metadata is known.
    pub fn seek_to_fraction(&mut self, fraction: f64) {
        if !self.is_open() {
            return;
        }
        let Some(duration) = self.duration_secs else {
            return;
        };
        let fraction = if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.apply_seek(fraction * duration);
    }

    /// Delivers a media element event produced under `session`.
    ///
    /// Events whose token does not match the current session are stale
    /// (they belong to a source that has since been replaced or closed)
    /// and are discarded without effect.
    pub fn handle_media_event(&mut self, session: SessionToken, event: MediaEvent) {
        if session != self.session || !self.is_open() {
            return;
        }

        match event {
            MediaEvent::PlaybackStarted => {
                self.state = LightboxState::Playing;
            }
            MediaEvent::PlaybackRejected => {
                if self.state == LightboxState::Loading && !self.autoplay_retried {
                    // Autoplay policy blocks audible playback; retry once
                    // muted before giving up.
                    self.autoplay_retried = true;
                    self.muted = true;
                    self.media.set_muted(true);
                    self.media.request_play();
                } else {
                    self.state = LightboxState::Paused;
                }
            }
            MediaEvent::MetadataLoaded { duration_secs } => {
                self.duration_secs = Some(duration_secs.max(0.0));
                self.refresh_display();
            }
            MediaEvent::PositionChanged { position_secs } => {
                if !position_secs.is_finite() {
                    return;
                }
                let upper = self.duration_secs.unwrap_or(f64::MAX);
                self.position_secs = position_secs.clamp(0.0, upper);
                self.refresh_display();
            }
            MediaEvent::Ended => {
                self.state = LightboxState::Paused;
                if let Some(duration) = self.duration_secs {
                    self.position_secs = duration;
                }
                self.refresh_display();
            }
        }
    }

    fn apply_seek(&mut self, target_secs: f64) {
        self.media.seek(target_secs);
        self.position_secs = target_secs;
        self.refresh_display();
    }

    fn refresh_display(&mut self) {
        let duration = self.duration_secs.unwrap_or(0.0);
        let fraction = if duration > 0.0 {
            (self.position_secs / duration).clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.surface.set_progress(fraction);
        self.surface.set_time_labels(
            &format_time(self.position_secs),
            &format_time(duration),
        );
    }
}
