// SPDX-License-Identifier: MPL-2.0
//! Headless demo shell.
//!
//! Drives the controllers against console adapters: a scripted session that
//! cycles the theme, opens a reel, walks through the blocked-autoplay retry,
//! seeks, and closes. Useful for eyeballing the event flow without a host
//! page.

use showreel::application::port::{
    Animator, EffectHandle, Keyframe, MediaElement, MediaEvent, ModalSurface, ThemeSurface, Timing,
};
use showreel::effects::{announce_theme, theme_notification_label};
use showreel::infrastructure::SettingsStore;
use showreel::input::{self, Key};
use showreel::lightbox::VideoLightbox;
use showreel::theme::ThemePreference;

struct ConsoleThemeSurface;

impl ThemeSurface for ConsoleThemeSurface {
    fn set_theme_attribute(&mut self, value: &str) {
        println!("[root] data-theme=\"{}\"", value);
    }

    fn clear_theme_attribute(&mut self) {
        println!("[root] data-theme cleared");
    }
}

struct ConsoleMedia;

impl MediaElement for ConsoleMedia {
    fn attach(&mut self, url: &str) {
        println!("[media] attach {}", url);
    }

    fn detach(&mut self) {
        println!("[media] detach");
    }

    fn request_play(&mut self) {
        println!("[media] play requested");
    }

    fn pause(&mut self) {
        println!("[media] pause");
    }

    fn set_muted(&mut self, muted: bool) {
        println!("[media] muted = {}", muted);
    }

    fn seek(&mut self, position_secs: f64) {
        println!("[media] seek {:.1}s", position_secs);
    }

    fn set_fullscreen(&mut self, enabled: bool) {
        println!("[media] fullscreen = {}", enabled);
    }
}

struct ConsoleModal;

impl ModalSurface for ConsoleModal {
    fn present(&mut self) {
        println!("[modal] presented, background scroll suspended");
    }

    fn dismiss(&mut self) {
        println!("[modal] dismissed, background scroll restored");
    }

    fn set_progress(&mut self, fraction: f64) {
        println!("[modal] progress {:.0}%", fraction * 100.0);
    }

    fn set_time_labels(&mut self, elapsed: &str, total: &str) {
        println!("[modal] {} / {}", elapsed, total);
    }
}

struct ConsoleAnimator;

impl Animator for ConsoleAnimator {
    fn animate(
        &mut self,
        target: &str,
        _from: Keyframe,
        _to: Keyframe,
        timing: Timing,
    ) -> EffectHandle {
        println!("[fx] tween {} over {}ms", target, timing.duration_ms);
        EffectHandle(0)
    }
}

fn main() {
    let mut args = pico_args::Arguments::from_env();
    let source: String = args
        .opt_value_from_str("--source")
        .ok()
        .flatten()
        .unwrap_or_else(|| "showreel-2024.mp4".to_string());

    let mut store = SettingsStore::new();
    let mut theme_surface = ConsoleThemeSurface;
    let mut animator = ConsoleAnimator;

    let mut prefs = ThemePreference::initialize(&store, &mut theme_surface);
    println!("active theme: {}", prefs.current().name());

    let next = prefs.cycle(&mut store, &mut theme_surface);
    println!("notification: {}", theme_notification_label(next));
    announce_theme(&mut animator, next);

    let mut lightbox = VideoLightbox::new(ConsoleMedia, ConsoleModal);

    lightbox.open(&source);
    let session = lightbox.session();

    // Platform blocks audible autoplay; the lightbox retries muted.
    lightbox.handle_media_event(session, MediaEvent::PlaybackRejected);
    lightbox.handle_media_event(session, MediaEvent::PlaybackStarted);
    lightbox.handle_media_event(session, MediaEvent::MetadataLoaded { duration_secs: 30.0 });
    lightbox.handle_media_event(session, MediaEvent::PositionChanged { position_secs: 12.0 });

    input::handle_key(&mut lightbox, Key::ArrowRight);
    input::handle_key(&mut lightbox, Key::Space);

    lightbox.handle_media_event(session, MediaEvent::Ended);
    input::handle_key(&mut lightbox, Key::Escape);

    println!("final state: {:?}", lightbox.state());
}
