// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! The interaction layer never owns its collaborators; it drives them
//! through these traits. Host adapters (a browser bridge, a desktop shell,
//! or the in-memory mocks used by the test suite) implement them.
//!
//! # Available Ports
//!
//! - [`media`]: the single shared media element and its lifecycle events
//! - [`surface`]: the modal overlay and the document-root theme attribute
//! - [`storage`]: durable key-value preference storage
//! - [`effects`]: the tweening engine and the viewport-intersection notifier
//!
//! # Design Notes
//!
//! - All traits use plain domain values (seconds as `f64`, names as `&str`)
//! - Asynchronous outcomes are never awaited; they come back as events
//! - Methods do not return `Result`: collaborator absence or refusal is
//!   normal here and is either ignored or delivered as an event

pub mod effects;
pub mod media;
pub mod storage;
pub mod surface;

pub use effects::{Animator, EffectHandle, Keyframe, Timing, ViewportObserver};
pub use media::{MediaElement, MediaEvent};
pub use storage::PreferenceStore;
pub use surface::{ModalSurface, ThemeSurface};
