use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tracker::{NavError, SectionId, SectionTracker, Viewport};

/// Local storage key holding the reader's theme choice.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Class toggled on the document element for tailwind's class-based dark mode.
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Page background and text colours.
    pub fn page_class(self) -> &'static str {
        match self {
            Theme::Dark => "bg-gray-900 text-white",
            Theme::Light => "bg-white text-gray-900",
        }
    }

    /// Navigation bar background once the page has scrolled.
    pub fn scrolled_nav_class(self) -> &'static str {
        match self {
            Theme::Dark => "bg-gray-900/80",
            Theme::Light => "bg-white/60 shadow-md",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Dark => f.write_str("dark"),
            Theme::Light => f.write_str("light"),
        }
    }
}

/// Open/closed state of the slide-in menu shown on small screens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Value for `document.body.style.overflow`; the page must not scroll under the menu.
    pub fn body_overflow(self) -> &'static str {
        if self.open {
            "hidden"
        } else {
            "unset"
        }
    }

    /// Jumps to a section from the menu. The menu closes even when the jump fails.
    pub fn navigate<V>(
        &mut self,
        tracker: &mut SectionTracker,
        section: SectionId,
        viewport: &V,
    ) -> Result<(), NavError>
    where
        V: Viewport + ?Sized,
    {
        let res = tracker.navigate_to(section, viewport);
        self.close();
        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct OnlyHome;

    impl Viewport for OnlyHome {
        fn scroll_to_section(&self, section: SectionId) -> Result<(), NavError> {
            if section == SectionId::Home {
                Ok(())
            } else {
                Err(NavError::MissingTarget(section))
            }
        }
    }

    struct Everything;

    impl Viewport for Everything {
        fn scroll_to_section(&self, _section: SectionId) -> Result<(), NavError> {
            Ok(())
        }
    }

    #[test]
    fn test_theme_toggle() {
        let theme = Theme::default();
        assert!(theme.is_dark());
        assert_eq!(theme.toggled(), Theme::Light);
        assert_eq!(theme.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_theme_storage_value() {
        for theme in [Theme::Dark, Theme::Light] {
            let stored = serde_json::to_string(&theme).expect("theme should serialize");
            assert_eq!(stored, format!("\"{theme}\""));
            assert_eq!(serde_json::from_str::<Theme>(&stored).ok(), Some(theme));
        }
        assert!(serde_json::from_str::<Theme>("\"solarized\"").is_err());
        assert!(serde_json::from_str::<Theme>("\"Dark\"").is_err());
    }

    #[test]
    fn test_menu_navigate_closes_and_activates() {
        let mut menu = MenuState::default();
        let mut tracker = SectionTracker::new();
        menu.open();
        assert_eq!(menu.body_overflow(), "hidden");

        menu.navigate(&mut tracker, SectionId::Projects, &Everything)
            .expect("projects should be reachable");
        assert!(!menu.is_open());
        assert_eq!(menu.body_overflow(), "unset");
        assert_eq!(tracker.active(), SectionId::Projects);
    }

    #[test]
    fn test_menu_closes_on_missing_section() {
        let mut menu = MenuState::default();
        let mut tracker = SectionTracker::new();
        menu.open();
        let res = menu.navigate(&mut tracker, SectionId::Contact, &OnlyHome);
        assert!(res.is_err());
        assert!(!menu.is_open());
        assert_eq!(tracker.active(), SectionId::Home);
    }
}
