// SPDX-License-Identifier: MPL-2.0
//! The fixed, ordered set of page themes.
//!
//! The default theme is signaled by the absence of the root theme attribute;
//! every other theme sets the attribute to its name. Cycling walks the set
//! in declaration order and wraps after the last entry.

/// A page theme. The declaration order is the cycling order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Default,
    Blue,
    White,
    Pink,
}

impl Theme {
    /// All themes in cycling order.
    pub const ALL: [Theme; 4] = [Theme::Default, Theme::Blue, Theme::White, Theme::Pink];

    /// Returns the next theme in cycling order, wrapping after the last.
    #[must_use]
    pub fn next(self) -> Theme {
        let index = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// The canonical lowercase name, as persisted to storage.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Theme::Default => "default",
            Theme::Blue => "blue",
            Theme::White => "white",
            Theme::Pink => "pink",
        }
    }

    /// Parses a persisted name. Unrecognized names yield `None` so callers
    /// can fall back to the default theme.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Theme> {
        Self::ALL.iter().copied().find(|t| t.name() == name)
    }

    /// The value for the root theme attribute, or `None` for the default
    /// theme (attribute absent).
    #[must_use]
    pub fn attribute_value(self) -> Option<&'static str> {
        match self {
            Theme::Default => None,
            other => Some(other.name()),
        }
    }

    /// Capitalized name for the transient on-screen notification.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Theme::Default => "Default",
            Theme::Blue => "Blue",
            Theme::White => "White",
            Theme::Pink => "Pink",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_is_total_and_wraps() {
        assert_eq!(Theme::Default.next(), Theme::Blue);
        assert_eq!(Theme::Blue.next(), Theme::White);
        assert_eq!(Theme::White.next(), Theme::Pink);
        assert_eq!(Theme::Pink.next(), Theme::Default);
    }

    #[test]
    fn every_theme_is_reachable_by_cycling() {
        let mut seen = vec![Theme::Default];
        let mut current = Theme::Default;
        for _ in 0..Theme::ALL.len() - 1 {
            current = current.next();
            seen.push(current);
        }
        for theme in Theme::ALL {
            assert!(seen.contains(&theme));
        }
    }

    #[test]
    fn name_round_trips_through_from_name() {
        for theme in Theme::ALL {
            assert_eq!(Theme::from_name(theme.name()), Some(theme));
        }
    }

    #[test]
    fn from_name_rejects_unknown_values() {
        assert_eq!(Theme::from_name("sepia"), None);
        assert_eq!(Theme::from_name(""), None);
        assert_eq!(Theme::from_name("Blue"), None);
    }

    #[test]
    fn only_default_clears_the_attribute() {
        assert_eq!(Theme::Default.attribute_value(), None);
        assert_eq!(Theme::Blue.attribute_value(), Some("blue"));
        assert_eq!(Theme::White.attribute_value(), Some("white"));
        assert_eq!(Theme::Pink.attribute_value(), Some("pink"));
    }

    #[test]
    fn display_name_is_capitalized() {
        assert_eq!(Theme::Blue.display_name(), "Blue");
        assert_eq!(Theme::Default.display_name(), "Default");
    }
}
