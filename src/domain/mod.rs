// SPDX-License-Identifier: MPL-2.0
//! Domain types shared across the crate.

pub mod theme;

pub use theme::Theme;
