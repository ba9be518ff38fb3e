// SPDX-License-Identifier: MPL-2.0
//! Theme preference controller.
//!
//! Owns the active [`Theme`], applies it to the [`ThemeSurface`] (root
//! attribute set for non-default themes, cleared for the default), and
//! persists every change through the [`PreferenceStore`]. The stored value
//! is validated against the enumerated set on startup; anything else is
//! treated as no saved preference.

use crate::application::port::{PreferenceStore, ThemeSurface};
use crate::domain::Theme;

/// Storage key for the saved theme name.
pub const THEME_STORAGE_KEY: &str = "portfolio-theme";

/// Controller for the persisted theme preference.
#[derive(Debug)]
pub struct ThemePreference {
    current: Theme,
}

impl ThemePreference {
    /// Reads the stored preference and applies it to the surface.
    ///
    /// A valid stored name becomes the active theme; a missing or
    /// unrecognized value falls back to [`Theme::Default`]. The value is
    /// not re-persisted here, it is already stored.
    pub fn initialize(store: &dyn PreferenceStore, surface: &mut dyn ThemeSurface) -> Self {
        let current = store
            .get(THEME_STORAGE_KEY)
            .and_then(|name| Theme::from_name(&name))
            .unwrap_or_default();
        apply(surface, current);
        Self { current }
    }

    /// The active theme.
    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Advances to the next theme in cycling order, applies it, persists
    /// it, and returns the new theme so the caller can raise a transient
    /// notification naming it.
    pub fn cycle(
        &mut self,
        store: &mut dyn PreferenceStore,
        surface: &mut dyn ThemeSurface,
    ) -> Theme {
        self.current = self.current.next();
        apply(surface, self.current);
        store.set(THEME_STORAGE_KEY, self.current.name());
        self.current
    }
}

fn apply(surface: &mut dyn ThemeSurface, theme: Theme) {
    match theme.attribute_value() {
        Some(value) => surface.set_theme_attribute(value),
        None => surface.clear_theme_attribute(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::storage::MemoryStore;

    #[derive(Debug, Default)]
    struct RecordingSurface {
        attribute: Option<String>,
    }

    impl ThemeSurface for RecordingSurface {
        fn set_theme_attribute(&mut self, value: &str) {
            self.attribute = Some(value.to_string());
        }

        fn clear_theme_attribute(&mut self) {
            self.attribute = None;
        }
    }

    #[test]
    fn initialize_without_saved_preference_uses_default() {
        let store = MemoryStore::new();
        let mut surface = RecordingSurface::default();

        let prefs = ThemePreference::initialize(&store, &mut surface);

        assert_eq!(prefs.current(), Theme::Default);
        assert_eq!(surface.attribute, None);
    }

    #[test]
    fn initialize_applies_valid_saved_theme_without_repersisting() {
        let mut store = MemoryStore::new();
        store.set(THEME_STORAGE_KEY, "white");
        let mut surface = RecordingSurface::default();

        let prefs = ThemePreference::initialize(&store, &mut surface);

        assert_eq!(prefs.current(), Theme::White);
        assert_eq!(surface.attribute.as_deref(), Some("white"));
    }

    #[test]
    fn initialize_ignores_unrecognized_saved_value() {
        let mut store = MemoryStore::new();
        store.set(THEME_STORAGE_KEY, "sepia");
        let mut surface = RecordingSurface::default();

        let prefs = ThemePreference::initialize(&store, &mut surface);

        assert_eq!(prefs.current(), Theme::Default);
        assert_eq!(surface.attribute, None);
    }

    #[test]
    fn cycle_advances_applies_and_persists() {
        let mut store = MemoryStore::new();
        let mut surface = RecordingSurface::default();
        let mut prefs = ThemePreference::initialize(&store, &mut surface);

        let next = prefs.cycle(&mut store, &mut surface);

        assert_eq!(next, Theme::Blue);
        assert_eq!(surface.attribute.as_deref(), Some("blue"));
        assert_eq!(store.get(THEME_STORAGE_KEY), Some("blue".to_string()));
    }

    #[test]
    fn cycling_back_to_default_clears_the_attribute() {
        let mut store = MemoryStore::new();
        store.set(THEME_STORAGE_KEY, "pink");
        let mut surface = RecordingSurface::default();
        let mut prefs = ThemePreference::initialize(&store, &mut surface);

        let next = prefs.cycle(&mut store, &mut surface);

        assert_eq!(next, Theme::Default);
        assert_eq!(surface.attribute, None);
        assert_eq!(store.get(THEME_STORAGE_KEY), Some("default".to_string()));
    }

    #[test]
    fn four_cycles_return_to_the_starting_theme() {
        let mut store = MemoryStore::new();
        let mut surface = RecordingSurface::default();
        let mut prefs = ThemePreference::initialize(&store, &mut surface);

        for _ in 0..4 {
            prefs.cycle(&mut store, &mut surface);
        }

        assert_eq!(prefs.current(), Theme::Default);
    }
}
