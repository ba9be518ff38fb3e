// SPDX-License-Identifier: MPL-2.0
//! Presentation surface ports.
//!
//! Two small traits cover everything the controllers need from the page
//! itself: the modal overlay with its progress readouts, and the document
//! root that carries the theme attribute. Markup and styling stay on the
//! host side.

/// Port for the single modal overlay surface.
pub trait ModalSurface {
    /// Makes the overlay visible and suspends background scrolling.
    fn present(&mut self);

    /// Hides the overlay and restores background scrolling.
    fn dismiss(&mut self);

    /// Updates the progress track fill, `fraction` in `[0, 1]`.
    fn set_progress(&mut self, fraction: f64);

    /// Updates the elapsed/total time readouts, both already formatted.
    fn set_time_labels(&mut self, elapsed: &str, total: &str);
}

/// Port for the document-root theme attribute.
///
/// Non-default themes set the attribute to the theme name; the default
/// theme is signaled by clearing it.
pub trait ThemeSurface {
    fn set_theme_attribute(&mut self, value: &str);
    fn clear_theme_attribute(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_modal_object_safe(_: &dyn ModalSurface) {}
    fn _assert_theme_object_safe(_: &dyn ThemeSurface) {}
}
