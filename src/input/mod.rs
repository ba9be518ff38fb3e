// SPDX-License-Identifier: MPL-2.0
//! Keyboard and pointer routing for the lightbox.
//!
//! The whole surface is active only while the modal is open; outside of
//! that, every signal falls through to the page (the host keeps default
//! scrolling and navigation behavior). Handled keys report `true` so the
//! host can suppress the default action.

use crate::application::port::{MediaElement, ModalSurface};
use crate::lightbox::VideoLightbox;

/// Arrow-key seek step, in seconds.
pub const KEYBOARD_SEEK_STEP_SECS: f64 = 5.0;

/// The keys the lightbox responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    KeyM,
    KeyF,
    ArrowLeft,
    ArrowRight,
    Escape,
}

/// Where inside the modal a pointer click landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed area outside the modal content.
    Backdrop,

    /// The video surface itself.
    VideoSurface,

    /// Modal content other than the video (controls, chrome).
    Content,
}

/// Routes a key press to the lightbox.
///
/// Returns `true` when the key was consumed, which only happens while the
/// modal is open.
pub fn handle_key<M: MediaElement, S: ModalSurface>(
    lightbox: &mut VideoLightbox<M, S>,
    key: Key,
) -> bool {
    if !lightbox.is_open() {
        return false;
    }
    match key {
        Key::Space => lightbox.toggle_play_pause(),
        Key::KeyM => lightbox.toggle_mute(),
        Key::KeyF => lightbox.toggle_fullscreen(),
        Key::ArrowLeft => lightbox.seek_relative(-KEYBOARD_SEEK_STEP_SECS),
        Key::ArrowRight => lightbox.seek_relative(KEYBOARD_SEEK_STEP_SECS),
        Key::Escape => lightbox.close(),
    }
    true
}

/// Routes a click inside the presented modal.
///
/// The backdrop closes, the video surface toggles playback, and other
/// content is left for its own controls.
pub fn handle_modal_click<M: MediaElement, S: ModalSurface>(
    lightbox: &mut VideoLightbox<M, S>,
    target: ClickTarget,
) {
    if !lightbox.is_open() {
        return;
    }
    match target {
        ClickTarget::Backdrop => lightbox.close(),
        ClickTarget::VideoSurface => lightbox.toggle_play_pause(),
        ClickTarget::Content => {}
    }
}

/// Seeks proportionally to a click along the progress track.
///
/// `click_x` is the pointer offset from the track's left edge and
/// `track_width` its rendered width; a degenerate width is ignored.
pub fn handle_progress_click<M: MediaElement, S: ModalSurface>(
    lightbox: &mut VideoLightbox<M, S>,
    click_x: f64,
    track_width: f64,
) {
    if track_width <= 0.0 {
        return;
    }
    lightbox.seek_to_fraction(click_x / track_width);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::{MediaEvent, ModalSurface};
    use crate::lightbox::LightboxState;

    #[derive(Default)]
    struct NullElement {
        muted: bool,
    }

    impl MediaElement for NullElement {
        fn attach(&mut self, _url: &str) {}
        fn detach(&mut self) {}
        fn request_play(&mut self) {}
        fn pause(&mut self) {}
        fn set_muted(&mut self, muted: bool) {
            self.muted = muted;
        }
        fn seek(&mut self, _position_secs: f64) {}
        fn set_fullscreen(&mut self, _enabled: bool) {}
    }

    #[derive(Default)]
    struct NullSurface;

    impl ModalSurface for NullSurface {
        fn present(&mut self) {}
        fn dismiss(&mut self) {}
        fn set_progress(&mut self, _fraction: f64) {}
        fn set_time_labels(&mut self, _elapsed: &str, _total: &str) {}
    }

    fn open_lightbox(duration_secs: f64) -> VideoLightbox<NullElement, NullSurface> {
        let mut lb = VideoLightbox::new(NullElement::default(), NullSurface);
        lb.open("reel.mp4");
        let session = lb.session();
        lb.handle_media_event(session, MediaEvent::MetadataLoaded { duration_secs });
        lb.handle_media_event(session, MediaEvent::PlaybackStarted);
        lb
    }

    #[test]
    fn keys_fall_through_while_closed() {
        let mut lb = VideoLightbox::new(NullElement::default(), NullSurface);
        for key in [
            Key::Space,
            Key::KeyM,
            Key::KeyF,
            Key::ArrowLeft,
            Key::ArrowRight,
            Key::Escape,
        ] {
            assert!(!handle_key(&mut lb, key));
        }
        assert_eq!(lb.state(), LightboxState::Closed);
    }

    #[test]
    fn space_toggles_playback() {
        let mut lb = open_lightbox(30.0);
        assert!(handle_key(&mut lb, Key::Space));
        assert_eq!(lb.state(), LightboxState::Paused);
    }

    #[test]
    fn m_toggles_mute() {
        let mut lb = open_lightbox(30.0);
        assert!(handle_key(&mut lb, Key::KeyM));
        assert!(lb.is_muted());
    }

    #[test]
    fn f_toggles_fullscreen() {
        let mut lb = open_lightbox(30.0);
        assert!(handle_key(&mut lb, Key::KeyF));
        assert!(lb.is_fullscreen());
    }

    #[test]
    fn arrows_seek_five_seconds_each_way() {
        let mut lb = open_lightbox(30.0);
        let session = lb.session();
        lb.handle_media_event(session, MediaEvent::PositionChanged { position_secs: 10.0 });

        assert!(handle_key(&mut lb, Key::ArrowRight));
        assert_eq!(lb.position_secs(), 15.0);

        assert!(handle_key(&mut lb, Key::ArrowLeft));
        assert!(handle_key(&mut lb, Key::ArrowLeft));
        assert_eq!(lb.position_secs(), 5.0);
    }

    #[test]
    fn arrow_seek_clamps_at_the_start() {
        let mut lb = open_lightbox(30.0);
        assert!(handle_key(&mut lb, Key::ArrowLeft));
        assert_eq!(lb.position_secs(), 0.0);
    }

    #[test]
    fn escape_closes() {
        let mut lb = open_lightbox(30.0);
        assert!(handle_key(&mut lb, Key::Escape));
        assert_eq!(lb.state(), LightboxState::Closed);
    }

    #[test]
    fn backdrop_click_closes_content_click_does_not() {
        let mut lb = open_lightbox(30.0);

        handle_modal_click(&mut lb, ClickTarget::Content);
        assert_eq!(lb.state(), LightboxState::Playing);

        handle_modal_click(&mut lb, ClickTarget::Backdrop);
        assert_eq!(lb.state(), LightboxState::Closed);
    }

    #[test]
    fn video_surface_click_toggles_playback() {
        let mut lb = open_lightbox(30.0);
        handle_modal_click(&mut lb, ClickTarget::VideoSurface);
        assert_eq!(lb.state(), LightboxState::Paused);
    }

    #[test]
    fn progress_click_seeks_proportionally() {
        let mut lb = open_lightbox(200.0);
        handle_progress_click(&mut lb, 150.0, 600.0);
        assert_eq!(lb.position_secs(), 50.0);
    }

    #[test]
    fn progress_click_outside_the_track_clamps() {
        let mut lb = open_lightbox(200.0);
        handle_progress_click(&mut lb, 900.0, 600.0);
        assert_eq!(lb.position_secs(), 200.0);
    }

    #[test]
    fn degenerate_track_width_is_ignored() {
        let mut lb = open_lightbox(200.0);
        let session = lb.session();
        lb.handle_media_event(session, MediaEvent::PositionChanged { position_secs: 20.0 });

        handle_progress_click(&mut lb, 150.0, 0.0);
        assert_eq!(lb.position_secs(), 20.0);
    }
}
