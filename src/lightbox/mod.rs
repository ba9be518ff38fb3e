// SPDX-License-Identifier: MPL-2.0
//! Video lightbox: the modal playback controller.
//!
//! One shared media element, one modal surface, one source at a time. The
//! controller is a small state machine (`Closed`, `Loading`, `Playing`,
//! `Paused`) that mirrors the element's actual behavior rather than the
//! caller's intent, because playback requests can be refused silently by
//! platform autoplay policy.

mod session;
mod state;
pub mod time_format;

pub use session::SessionToken;
pub use state::{LightboxState, VideoLightbox};
pub use time_format::format_time;
