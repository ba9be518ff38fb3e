// SPDX-License-Identifier: MPL-2.0
//! `showreel` is the interaction core of a single-page video portfolio.
//!
//! The crate owns the two stateful pieces of the page: the persisted theme
//! preference and the video lightbox playback state machine. Around them sit
//! the keyboard/pointer routing and a thin effect wiring layer. External
//! collaborators (the media element, the modal overlay, durable preference
//! storage, the tweening engine, the viewport-intersection notifier) are
//! consumed through port traits and handed in at construction rather than
//! re-queried ad hoc.

pub mod application;
pub mod config;
pub mod domain;
pub mod effects;
pub mod error;
pub mod infrastructure;
pub mod input;
pub mod lightbox;
pub mod theme;
